//! Error taxonomy for the decomposition engine.

use crate::geometry::Axis;
use crate::common::Rat;

/// Everything that can go wrong building or querying a vertical decomposition.
///
/// Variants split along the same fault lines the algorithm itself cares about:
/// geometry that violates the general-position assumption is unrecoverable,
/// while a handful of predicates (see [`crate::predicates::height`]) report
/// "undefined" in-band via `Option` rather than through this type.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum VdError {
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("plane has a zero coefficient on axis {0:?}, cannot resolve it")]
    ZeroCoefficient(Axis),

    #[error("value {value} is out of range on axis {axis:?}")]
    OutOfRange { axis: Axis, value: Rat },

    #[error("projection is undefined for this element along axis {0:?}")]
    ProjectionUndefined(Axis),

    #[error("axis {0:?} is not supported for this operation")]
    UnsupportedAxis(Axis),
}
