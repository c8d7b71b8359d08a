use ndarray::{Array1, ArrayView1};
use std::f64::consts::FRAC_PI_2;

use crate::disc::grid::Grid1d;

/// Smooth bump: `amp * cos^2(pi/2 * (x - x0)/width)` where `|x - x0| < width`,
/// zero elsewhere. Sampled at the given cell centers.
pub fn initialize_cosine_bump(x: ArrayView1<f64>, x0: f64, width: f64, amp: f64) -> Array1<f64> {
    x.mapv(|xi| {
        let r = (xi - x0) / width;
        if r.abs() < 1.0 {
            let c = (FRAC_PI_2 * r).cos();
            amp * c * c
        } else {
            0.0
        }
    })
}

/// Discontinuous pulse: `amp` where `|x - x0| < width`, zero elsewhere.
pub fn initialize_square_pulse(x: ArrayView1<f64>, x0: f64, width: f64, amp: f64) -> Array1<f64> {
    x.mapv(|xi| if (xi - x0).abs() < width { amp } else { 0.0 })
}

/// Discrete mass of the interior cells, `dx * sum(u_interior)`. Invariant
/// under periodic boundaries for any flux-difference scheme.
pub fn total_mass(u: &Array1<f64>, grid: &Grid1d) -> f64 {
    let mut sum = 0.0;
    for i in grid.interior() {
        sum += u[i];
    }
    grid.dx * sum
}

/// Max-norm over the interior cells.
pub fn linf_norm(u: &Array1<f64>, grid: &Grid1d) -> f64 {
    let mut max = 0.0_f64;
    for i in grid.interior() {
        max = max.max(u[i].abs());
    }
    max
}
