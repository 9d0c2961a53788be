//! Overlay settings and tuning
//!
//! Loaded from JSON so hosts can tune the feel without rebuilding.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// When a live unit is retired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExpiryPolicy {
    /// Only once fully faded (age >= lifetime)
    Faded,
    /// Fully faded, or dropped below the bottom edge, whichever comes first
    #[default]
    FadedOrExited,
}

impl ExpiryPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryPolicy::Faded => "Faded",
            ExpiryPolicy::FadedOrExited => "FadedOrExited",
        }
    }

    /// Whether leaving the canvas through the bottom edge retires a unit
    pub fn retires_on_exit(&self) -> bool {
        matches!(self, ExpiryPolicy::FadedOrExited)
    }
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Radius used when a spawn request does not name one
    pub unit_radius: f32,
    /// Linear fade duration (ms)
    pub lifetime_ms: f64,
    /// Vertical spawn position (negative = above the canvas)
    pub spawn_y: f32,
    /// Velocity components are drawn from [-max_speed, max_speed]
    pub max_speed: i32,
    /// Degrees per second
    pub rotation_speed: f32,
    /// Reference frame duration (ms)
    pub frame_ms: f64,
    /// Cap on the interval integrated by one tick (ms)
    pub max_frame_ms: f64,
    pub expiry: ExpiryPolicy,

    // === Accessibility ===
    /// Reduced motion (units do not spin)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit_radius: UNIT_RADIUS,
            lifetime_ms: LIFETIME_MS,
            spawn_y: SPAWN_Y,
            max_speed: MAX_SPEED,
            rotation_speed: ROTATION_SPEED,
            frame_ms: FRAME_MS,
            max_frame_ms: MAX_FRAME_MS,
            expiry: ExpiryPolicy::default(),
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| SimError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        log::info!(
            "Loaded settings (lifetime {}ms, expiry {})",
            settings.lifetime_ms,
            settings.expiry.as_str()
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string(self).map_err(|e| SimError::InvalidSettings(e.to_string()))
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        if !is_positive(self.unit_radius as f64) {
            return Err(SimError::InvalidRadius(self.unit_radius));
        }
        if !is_positive(self.lifetime_ms) {
            return Err(SimError::InvalidSettings(format!(
                "lifetime_ms must be positive, got {}",
                self.lifetime_ms
            )));
        }
        if !self.spawn_y.is_finite() {
            return Err(SimError::InvalidSettings("spawn_y must be finite".into()));
        }
        if self.max_speed < 0 {
            return Err(SimError::InvalidSettings(format!(
                "max_speed must not be negative, got {}",
                self.max_speed
            )));
        }
        if !self.rotation_speed.is_finite() || self.rotation_speed < 0.0 {
            return Err(SimError::InvalidSettings(format!(
                "rotation_speed must not be negative, got {}",
                self.rotation_speed
            )));
        }
        if !is_positive(self.frame_ms) {
            return Err(SimError::InvalidSettings(format!(
                "frame_ms must be positive, got {}",
                self.frame_ms
            )));
        }
        if self.max_frame_ms.is_nan() || self.max_frame_ms < self.frame_ms {
            return Err(SimError::InvalidSettings(format!(
                "max_frame_ms ({}) must be at least frame_ms ({})",
                self.max_frame_ms, self.frame_ms
            )));
        }
        Ok(())
    }

    /// Effective rotation rate (respects reduced_motion)
    pub fn effective_rotation_speed(&self) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            self.rotation_speed
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
