//! Error types for grid reorientation.

use std::fmt;

/// Errors arising from a reorientation request.
///
/// Value-level outcomes (a tile with no rotated counterpart) are not
/// errors; they surface as cleared validity-mask entries in the
/// returned grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RotateError {
    /// The rotation step is outside the valid range for the lattice family.
    InvalidRotationStep {
        /// The offending rotation step.
        step: u32,
        /// The largest valid step (3 for square lattices, 5 for hex).
        max: u32,
    },
}

impl fmt::Display for RotateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRotationStep { step, max } => {
                write!(f, "rotation step {step} out of range: lattice supports 0..={max}")
            }
        }
    }
}

impl std::error::Error for RotateError {}
