use ndarray::Array1;
use std::ops::Range;

use crate::error::SolverError;

/// Uniform cell-centered 1-D grid with `ng` ghost cells on each side.
///
/// `x` holds the `nx + 2*ng` cell-center coordinates, `xe` the
/// `nx + 2*ng + 1` face coordinates; each center is the midpoint of its two
/// faces. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Grid1d {
    pub dx: f64,
    pub x: Array1<f64>,
    pub xe: Array1<f64>,
    pub nx: usize,
    pub ng: usize,
}

impl Grid1d {
    /// Build a grid over `[a, b]` with `nx` interior cells and `ng` ghost
    /// cells per side. Faces span `[a - ng*dx, b + ng*dx]`.
    pub fn new(a: f64, b: f64, nx: usize, ng: usize) -> Result<Grid1d, SolverError> {
        if nx == 0 {
            return Err(SolverError::InvalidDomain(format!(
                "need at least one interior cell, got nx = {nx}"
            )));
        }
        if !(a < b) {
            return Err(SolverError::InvalidDomain(format!(
                "bounds must satisfy a < b, got a = {a}, b = {b}"
            )));
        }
        let dx = (b - a) / nx as f64;
        let n_faces = nx + 2 * ng + 1;
        let x_lo = a - ng as f64 * dx;
        let xe = Array1::from_iter((0..n_faces).map(|i| x_lo + i as f64 * dx));
        let x = Array1::from_iter((0..n_faces - 1).map(|i| 0.5 * (xe[i] + xe[i + 1])));
        Ok(Grid1d { dx, x, xe, nx, ng })
    }

    /// Total cell count including ghost cells.
    pub fn n_cells(&self) -> usize {
        self.nx + 2 * self.ng
    }

    /// Index range of the interior (physical) cells.
    pub fn interior(&self) -> Range<usize> {
        self.ng..self.ng + self.nx
    }

    /// Validate that a state array matches this grid's ghost + interior layout.
    pub fn check_state(&self, u: &Array1<f64>) -> Result<(), SolverError> {
        if u.len() != self.n_cells() {
            return Err(SolverError::StateSize {
                required: self.n_cells(),
                actual: u.len(),
            });
        }
        Ok(())
    }
}
