// tests/advection1d.rs
//
// End-to-end validation of the advection solver: transport accuracy over a
// full period, discrete conservation, monotonicity, and outflow behavior.

use advection1d::{
    BoundaryCondition, Disc1dAdvection, Grid1d, Upwind, initialize_cosine_bump,
    initialize_square_pulse, linf_norm, total_mass,
};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::Array1;

fn periodic_setup(nx: usize) -> (Grid1d, Array1<f64>) {
    let grid = Grid1d::new(0.0, 1.0, nx, 1).unwrap();
    let mut u = initialize_square_pulse(grid.x.view(), 0.3, 0.1, 1.0);
    BoundaryCondition::Periodic.apply_left(&mut u, grid.nx, grid.ng);
    BoundaryCondition::Periodic.apply_right(&mut u, grid.nx, grid.ng);
    (grid, u)
}

#[test]
fn upwind_translates_exactly_at_unit_cfl() {
    // At CFL = a dt / dx = 1 the upwind update reduces to u[i] <- u[i-1],
    // so one full period on a periodic domain reproduces the initial state
    // to machine precision.
    let (grid, mut u) = periodic_setup(100);
    let u0 = u.clone();
    let mut disc = Disc1dAdvection::new(
        &grid,
        Upwind,
        1.0,
        BoundaryCondition::Periodic,
        BoundaryCondition::Periodic,
    );
    disc.evolve(&mut u, grid.dx, 1.0).unwrap();
    assert_eq!(disc.current_time, 1.0);
    for i in grid.interior() {
        assert_abs_diff_eq!(u[i], u0[i], epsilon = 1e-12);
    }
}

#[test]
fn full_period_error_is_bounded_by_numerical_diffusion() {
    // CFL = 0.5: upwind smears the pulse edges with effective diffusivity
    // a dx (1 - CFL) / 2 = 2.5e-3, which puts the one-period L1 error near
    // 0.11 for this pulse. Bound it at 0.2.
    let (grid, mut u) = periodic_setup(100);
    let u0 = u.clone();
    let mut disc = Disc1dAdvection::new(
        &grid,
        Upwind,
        1.0,
        BoundaryCondition::Periodic,
        BoundaryCondition::Periodic,
    );
    disc.evolve(&mut u, 0.005, 1.0).unwrap();
    let mut l1 = 0.0;
    for i in grid.interior() {
        l1 += (u[i] - u0[i]).abs();
    }
    l1 *= grid.dx;
    assert!(l1 < 0.2, "one-period L1 error too large: {l1}");
}

#[test]
fn periodic_run_conserves_mass() {
    let grid = Grid1d::new(0.0, 1.0, 128, 1).unwrap();
    let mut u = initialize_cosine_bump(grid.x.view(), 0.5, 0.2, 1.0);
    BoundaryCondition::Periodic.apply_left(&mut u, grid.nx, grid.ng);
    BoundaryCondition::Periodic.apply_right(&mut u, grid.nx, grid.ng);
    let mass_0 = total_mass(&u, &grid);

    let mut disc = Disc1dAdvection::new(
        &grid,
        Upwind,
        0.7,
        BoundaryCondition::Periodic,
        BoundaryCondition::Periodic,
    );
    for _ in 0..137 {
        disc.step(&mut u, 0.004);
    }
    assert_relative_eq!(total_mass(&u, &grid), mass_0, max_relative = 1e-12);
}

#[test]
fn upwind_creates_no_new_extrema() {
    let (grid, mut u) = periodic_setup(100);
    let mut disc = Disc1dAdvection::new(
        &grid,
        Upwind,
        1.0,
        BoundaryCondition::Periodic,
        BoundaryCondition::Periodic,
    );
    for _ in 0..50 {
        disc.step(&mut u, 0.009); // CFL = 0.9
    }
    for i in grid.interior() {
        assert!(u[i] >= -1e-12 && u[i] <= 1.0 + 1e-12, "u[{i}] = {}", u[i]);
    }
}

#[test]
fn pulse_leaves_through_outflow_boundary() {
    let grid = Grid1d::new(0.0, 1.0, 100, 1).unwrap();
    let mut u = initialize_square_pulse(grid.x.view(), 0.8, 0.1, 1.0);
    BoundaryCondition::Outflow.apply_left(&mut u, grid.nx, grid.ng);
    BoundaryCondition::Outflow.apply_right(&mut u, grid.nx, grid.ng);

    let mut disc = Disc1dAdvection::new(
        &grid,
        Upwind,
        1.0,
        BoundaryCondition::Outflow,
        BoundaryCondition::Outflow,
    );
    disc.evolve(&mut u, 0.005, 0.8).unwrap();
    // The pulse support has advected well past x = 1; only a diffusive tail
    // can remain, and it is far below the initial amplitude.
    assert!(linf_norm(&u, &grid) < 1e-3);
}

#[test]
fn driver_lands_exactly_on_final_time() {
    let (grid, mut u) = periodic_setup(50);
    let mut disc = Disc1dAdvection::new(
        &grid,
        Upwind,
        1.0,
        BoundaryCondition::Periodic,
        BoundaryCondition::Periodic,
    );
    // dt does not divide t_final; the last step must be clamped.
    disc.evolve(&mut u, 0.3, 1.0).unwrap();
    assert_eq!(disc.current_time, 1.0);
    assert_eq!(disc.current_step, 4);
}
