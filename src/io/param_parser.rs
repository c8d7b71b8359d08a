use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::disc::boundary::BoundaryCondition;
use crate::disc::stencil::SchemeKind;
use crate::error::SolverError;

/// Initial-condition selection in the parameter file.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InitialProfile {
    CosineBump,
    SquarePulse,
}

/// Run configuration, deserialized from a JSON parameter file.
#[derive(Deserialize, Debug)]
pub struct SolverParam {
    pub domain_left: f64,
    pub domain_right: f64,
    pub nx: usize,
    pub ng: usize,
    pub velocity: f64,
    pub dt: f64,
    pub final_time: f64,
    pub bc_left: BoundaryCondition,
    pub bc_right: BoundaryCondition,
    pub scheme: SchemeKind,
    pub profile: InitialProfile,
    pub profile_center: f64,
    pub profile_width: f64,
    pub profile_amplitude: f64,
    pub output_path: Option<String>,
}

impl SolverParam {
    pub fn parse<P: AsRef<Path>>(file_path: P) -> Result<SolverParam, SolverError> {
        let file_content = fs::read_to_string(file_path)?;
        let param: SolverParam = serde_json::from_str(&file_content)?;
        Ok(param)
    }
}
