//! # advection1d
//!
//! An explicit finite-difference solver for the 1-D linear advection
//! equation du/dt + a du/dx = 0 on a bounded interval.
//!
//! Building blocks:
//! - Cell-centered grid with ghost zones ([`Grid1d`])
//! - Ghost-zone boundary operators ([`BoundaryCondition`])
//! - Three-point spatial schemes ([`SpatialScheme`]: [`Upwind`], [`Centered`])
//! - Forward-Euler stepping and time marching ([`Disc1dAdvection`])
//! - Initial-condition generators and CSV snapshots

pub mod disc;
pub mod error;
pub mod initialization;
pub mod io;

pub use disc::advection1d::Disc1dAdvection;
pub use disc::boundary::BoundaryCondition;
pub use disc::grid::Grid1d;
pub use disc::stencil::{Centered, SchemeKind, SpatialScheme, Upwind};
pub use error::SolverError;
pub use initialization::{
    initialize_cosine_bump, initialize_square_pulse, linf_norm, total_mass,
};
pub use io::param_parser::{InitialProfile, SolverParam};
pub use io::write_to_csv::write_to_csv;
