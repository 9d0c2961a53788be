//! Error types for the reaction simulation

use thiserror::Error;

/// Everything that can go wrong while configuring or driving the overlay.
///
/// Unit expiry, an empty collection or a closed activity gate are normal
/// states and never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Random range with `min > max`
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },

    /// Radius that is zero, negative or not finite
    #[error("invalid radius {0}: must be positive and finite")]
    InvalidRadius(f32),

    /// Canvas too narrow to place a unit fully inside it
    #[error("radius {radius} does not fit a canvas {width} wide (needs at least {})", .radius * 2.0)]
    RadiusTooLarge { radius: f32, width: f32 },

    /// Host clock value that is NaN or infinite
    #[error("invalid timestamp {0}: must be finite")]
    InvalidTimestamp(f64),

    /// Canvas wider than integer spawn positions can address
    #[error("canvas width {0} exceeds the largest supported width ({max})", max = crate::sim::unit::MAX_CANVAS_WIDTH)]
    CanvasTooLarge(f32),

    /// Content descriptor missing from the catalogue
    #[error("unknown reaction content: {0:?}")]
    UnknownContent(String),

    /// Settings failed validation or could not be parsed
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A collaborator was never provided or has not been initialised yet
    #[error("{0} is not initialized")]
    MissingDependency(&'static str),
}

impl SimError {
    /// True for the invalid-configuration family (bad input parameters).
    pub fn is_configuration(&self) -> bool {
        !matches!(self, SimError::MissingDependency(_))
    }
}
