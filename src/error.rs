use thiserror::Error;

/// Errors produced by grid construction and the time-marching driver.
#[derive(Error, Debug)]
pub enum SolverError {
    /// Degenerate domain description: inverted bounds or no interior cells.
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// Non-positive step size; the driver would loop forever or run backward.
    #[error("invalid timestep: dt = {dt}, must be positive")]
    InvalidTimestep { dt: f64 },

    /// State array does not match the grid's ghost + interior layout.
    #[error("state array has {actual} entries, grid requires {required}")]
    StateSize { required: usize, actual: usize },

    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse parameter file: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Csv(#[from] csv::Error),
}
