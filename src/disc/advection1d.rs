use log::trace;
use ndarray::Array1;

use super::boundary::BoundaryCondition;
use super::grid::Grid1d;
use super::stencil::SpatialScheme;
use crate::error::SolverError;

/// Explicit forward-Euler discretization of 1-D linear advection.
///
/// Holds the grid, the advection velocity, the spatial scheme and the two
/// boundary operators for a run, plus a reusable derivative buffer so the
/// interior update never reads partially updated state. The state array `u`
/// itself stays owned by the caller and is mutated in place.
pub struct Disc1dAdvection<'a, S: SpatialScheme> {
    pub current_time: f64,
    pub current_step: usize,
    grid: &'a Grid1d,
    scheme: S,
    velocity: f64,
    bc_left: BoundaryCondition,
    bc_right: BoundaryCondition,
    dudt: Array1<f64>,
}

impl<'a, S: SpatialScheme> Disc1dAdvection<'a, S> {
    pub fn new(
        grid: &'a Grid1d,
        scheme: S,
        velocity: f64,
        bc_left: BoundaryCondition,
        bc_right: BoundaryCondition,
    ) -> Disc1dAdvection<'a, S> {
        let dudt = Array1::zeros(grid.nx);
        Disc1dAdvection {
            current_time: 0.0,
            current_step: 0,
            grid,
            scheme,
            velocity,
            bc_left,
            bc_right,
            dudt,
        }
    }

    /// One forward-Euler step of size `dt`.
    ///
    /// Derivatives for all interior cells are evaluated from the old state
    /// into the scratch buffer before any cell is written, then the interior
    /// is updated, then the left and right ghost zones are refreshed. Ghost
    /// entries of `u` must be current on entry; the stencil needs at least
    /// one ghost layer.
    pub fn step(&mut self, u: &mut Array1<f64>, dt: f64) {
        let nx = self.grid.nx;
        let ng = self.grid.ng;
        let dx = self.grid.dx;
        debug_assert!(ng >= 1);
        debug_assert_eq!(u.len(), self.grid.n_cells());

        for i in 0..nx {
            let ic = ng + i;
            self.dudt[i] = self
                .scheme
                .dudt(u[ic - 1], u[ic], u[ic + 1], self.velocity, dx);
        }
        for i in 0..nx {
            u[ng + i] += dt * self.dudt[i];
        }
        self.bc_left.apply_left(u, nx, ng);
        self.bc_right.apply_right(u, nx, ng);
    }

    /// March `u` from `current_time` to exactly `t_final` in steps of `dt`,
    /// shrinking the final step to land on `t_final` with no overshoot.
    pub fn evolve(&mut self, u: &mut Array1<f64>, dt: f64, t_final: f64) -> Result<(), SolverError> {
        if dt <= 0.0 {
            return Err(SolverError::InvalidTimestep { dt });
        }
        self.grid.check_state(u)?;
        if self.grid.ng == 0 {
            return Err(SolverError::InvalidDomain(
                "time stepping requires at least one ghost layer".to_string(),
            ));
        }
        while self.current_time < t_final {
            let remaining = t_final - self.current_time;
            if dt >= remaining {
                self.step(u, remaining);
                self.current_time = t_final;
            } else {
                self.step(u, dt);
                self.current_time += dt;
            }
            self.current_step += 1;
            trace!(
                "step {}: t = {:.6e}, u[mid] = {:.6e}",
                self.current_step,
                self.current_time,
                u[self.grid.ng + self.grid.nx / 2]
            );
        }
        Ok(())
    }
}
