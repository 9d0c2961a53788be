//! Reaction Overlay - emoji reactions that fall, spin and fade over a canvas
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (units, spawning, expiry)
//! - `renderer`: Sink interface the host paints through
//! - `platform`: Browser/native clock and logging
//! - `content`: Emoji catalogue
//! - `settings`: Data-driven tuning

pub mod content;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::{ExpiryPolicy, Settings};

/// Simulation constants
pub mod consts {
    /// Vertical start position, above the visible area
    pub const SPAWN_Y: f32 = -100.0;
    /// Velocity components are drawn from [-MAX_SPEED, MAX_SPEED]
    pub const MAX_SPEED: i32 = 2;
    /// Full turn in degrees
    pub const FULL_TURN_DEG: f32 = 360.0;

    /// Default unit radius in canvas pixels
    pub const UNIT_RADIUS: f32 = 24.0;
    /// Time for a unit to fade from opaque to invisible
    pub const LIFETIME_MS: f64 = 4000.0;
    /// Rotation rate in degrees per second
    pub const ROTATION_SPEED: f32 = 90.0;

    /// Reference frame duration; velocities are expressed per reference frame
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Longest interval integrated in a single tick (background tabs, debugger pauses)
    pub const MAX_FRAME_MS: f64 = 100.0;
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(consts::FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= consts::FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(370.0) - 10.0).abs() < 1e-4);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-4);
        assert!(normalize_degrees(-1e-7) < 360.0);
    }
}
