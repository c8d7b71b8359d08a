use ndarray::Array1;
use serde::Deserialize;

/// Ghost-zone boundary operator, one instance per side of the domain.
///
/// Each operator rewrites only the ghost entries on its side and never
/// touches interior cells. With more than one ghost layer the single-layer
/// rule is applied layer by layer, innermost first.
///
/// | Variant    | Ghost value                                        |
/// |------------|----------------------------------------------------|
/// | `NoOp`     | left untouched (edge managed externally)           |
/// | `Periodic` | value of the cell one domain-length away           |
/// | `Outflow`  | nearest interior value (zero-gradient / copy)      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCondition {
    NoOp,
    Periodic,
    Outflow,
}

impl BoundaryCondition {
    /// Refresh the `ng` left ghost cells of `u` from the just-updated
    /// interior. `u` must have length `nx + 2*ng`.
    pub fn apply_left(&self, u: &mut Array1<f64>, nx: usize, ng: usize) {
        match self {
            BoundaryCondition::NoOp => {}
            BoundaryCondition::Periodic => {
                // Cell g and cell g + nx are the same physical location.
                for g in 0..ng {
                    u[g] = u[g + nx];
                }
            }
            BoundaryCondition::Outflow => {
                // Innermost layer first, so outer layers copy refreshed values.
                for g in (0..ng).rev() {
                    u[g] = u[g + 1];
                }
            }
        }
    }

    /// Refresh the `ng` right ghost cells of `u`. Mirror of [`apply_left`].
    ///
    /// [`apply_left`]: BoundaryCondition::apply_left
    pub fn apply_right(&self, u: &mut Array1<f64>, nx: usize, ng: usize) {
        match self {
            BoundaryCondition::NoOp => {}
            BoundaryCondition::Periodic => {
                for g in 0..ng {
                    u[ng + nx + g] = u[ng + g];
                }
            }
            BoundaryCondition::Outflow => {
                for g in 0..ng {
                    u[ng + nx + g] = u[ng + nx + g - 1];
                }
            }
        }
    }
}
