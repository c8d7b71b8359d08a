use log::info;

use advection1d::{
    BoundaryCondition, Centered, Disc1dAdvection, Grid1d, InitialProfile, SchemeKind,
    SolverError, SolverParam, SpatialScheme, Upwind, initialize_cosine_bump,
    initialize_square_pulse, linf_norm, total_mass, write_to_csv,
};

fn run<S: SpatialScheme>(
    param: &SolverParam,
    grid: &Grid1d,
    scheme: S,
) -> Result<(), SolverError> {
    let mut u = match param.profile {
        InitialProfile::CosineBump => initialize_cosine_bump(
            grid.x.view(),
            param.profile_center,
            param.profile_width,
            param.profile_amplitude,
        ),
        InitialProfile::SquarePulse => initialize_square_pulse(
            grid.x.view(),
            param.profile_center,
            param.profile_width,
            param.profile_amplitude,
        ),
    };
    let bc_left: BoundaryCondition = param.bc_left;
    let bc_right: BoundaryCondition = param.bc_right;
    bc_left.apply_left(&mut u, grid.nx, grid.ng);
    bc_right.apply_right(&mut u, grid.nx, grid.ng);

    let mass_0 = total_mass(&u, grid);
    info!("initial mass = {mass_0:.6e}, max |u| = {:.6e}", linf_norm(&u, grid));

    let mut disc = Disc1dAdvection::new(grid, scheme, param.velocity, bc_left, bc_right);
    disc.evolve(&mut u, param.dt, param.final_time)?;

    let mass_1 = total_mass(&u, grid);
    info!(
        "finished {} steps at t = {}: mass = {mass_1:.6e} (drift {:.3e}), max |u| = {:.6e}",
        disc.current_step,
        disc.current_time,
        mass_1 - mass_0,
        linf_norm(&u, grid)
    );

    if let Some(path) = &param.output_path {
        write_to_csv(u.view(), grid, path)?;
        info!("wrote solution to {path}");
    }
    Ok(())
}

fn main() -> Result<(), SolverError> {
    env_logger::init();
    let param_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "inputs/solverparam.json".to_string());
    let param = SolverParam::parse(&param_path)?;

    let grid = Grid1d::new(param.domain_left, param.domain_right, param.nx, param.ng)?;
    info!(
        "grid: [{}, {}], nx = {}, ng = {}, dx = {:.6e}, CFL = {:.3}",
        param.domain_left,
        param.domain_right,
        param.nx,
        param.ng,
        grid.dx,
        param.velocity.abs() * param.dt / grid.dx
    );

    match param.scheme {
        SchemeKind::Upwind => run(&param, &grid, Upwind),
        SchemeKind::Centered => run(&param, &grid, Centered),
    }
}
