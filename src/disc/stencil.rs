use serde::Deserialize;

/// Local spatial discretization of `-a * du/dx` from a three-point
/// neighborhood. This is the extension point where the choice of
/// finite-difference form lives; implementations must be consistent
/// (zero on a uniform field, exact on a linear field).
///
/// Schemes are selected at configuration time and monomorphized into the
/// update loop, so there is no per-cell dispatch.
pub trait SpatialScheme {
    fn dudt(&self, u_left: f64, u_center: f64, u_right: f64, a: f64, dx: f64) -> f64;
}

/// First-order upwind differencing: the one-sided difference on the side
/// the wind blows from. Monotone and stable under forward Euler for
/// CFL = |a| dt / dx <= 1. The default scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Upwind;

impl SpatialScheme for Upwind {
    fn dudt(&self, u_left: f64, u_center: f64, u_right: f64, a: f64, dx: f64) -> f64 {
        if a >= 0.0 {
            -a * (u_center - u_left) / dx
        } else {
            -a * (u_right - u_center) / dx
        }
    }
}

/// Second-order centered differencing. Included for experiments; note that
/// centered space + forward Euler is unconditionally unstable for advection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Centered;

impl SpatialScheme for Centered {
    fn dudt(&self, u_left: f64, _u_center: f64, u_right: f64, a: f64, dx: f64) -> f64 {
        -a * (u_right - u_left) / (2.0 * dx)
    }
}

/// Config-file name for the spatial scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    Upwind,
    Centered,
}
