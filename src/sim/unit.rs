//! A single in-flight reaction
//!
//! Units spawn above the canvas at a random x, drift by a constant velocity,
//! spin, and fade linearly over their lifetime.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::random::random_int;
use crate::error::SimError;
use crate::normalize_degrees;
use crate::settings::{ExpiryPolicy, Settings};

/// Widest canvas accepted by [`ReactionUnit::spawn`]; spawn x is drawn as an `i32`
pub const MAX_CANVAS_WIDTH: f32 = i32::MAX as f32;

/// A reaction ball.
///
/// `radius`, `content` and `created_at` are fixed at spawn and only exposed
/// through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionUnit<T> {
    pos: Vec2,
    /// Displacement per reference frame
    vel: Vec2,
    /// Degrees in [0, 360)
    rotation: f32,
    /// 1.0 = opaque, 0.0 = fully faded
    opacity: f32,
    radius: f32,
    content: T,
    /// Host clock (ms)
    created_at: f64,
}

impl<T> ReactionUnit<T> {
    /// Build a unit just above the canvas with random x, velocity and rotation.
    ///
    /// Fails when the radius is not positive, the canvas is narrower than
    /// the unit's diameter or wider than [`MAX_CANVAS_WIDTH`], or `created_at`
    /// is not finite.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        radius: f32,
        bounds: Bounds,
        content: T,
        created_at: f64,
        settings: &Settings,
    ) -> Result<Self, SimError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        if !created_at.is_finite() {
            return Err(SimError::InvalidTimestamp(created_at));
        }
        if bounds.width > MAX_CANVAS_WIDTH {
            return Err(SimError::CanvasTooLarge(bounds.width));
        }
        if !bounds.width.is_finite() || bounds.width < radius * 2.0 {
            return Err(SimError::RadiusTooLarge {
                radius,
                width: bounds.width,
            });
        }

        // Integer x like the rest of the spawn state; a fractional radius can
        // leave no integer inside the band, in which case centre the unit.
        let lo = radius.ceil() as i32;
        let hi = (bounds.width - radius).floor() as i32;
        let x = if lo <= hi {
            random_int(rng, lo, hi)? as f32
        } else {
            bounds.width / 2.0
        };

        let speed = settings.max_speed;
        let dx = random_int(rng, -speed, speed)?;
        let dy = random_int(rng, -speed, speed)?;
        let rotation = random_int(rng, 0, 359)?;

        Ok(Self {
            pos: Vec2::new(x, settings.spawn_y),
            vel: Vec2::new(dx as f32, dy as f32),
            rotation: rotation as f32,
            opacity: 1.0,
            radius,
            content,
            created_at,
        })
    }

    /// Integrate one tick of `dt_ms` ending at host time `now_ms`.
    ///
    /// Displacement scales with `dt_ms / frame_ms`, so a tick of exactly one
    /// reference frame moves the unit by its velocity. Opacity only ever goes down.
    pub fn advance(&mut self, dt_ms: f64, now_ms: f64, settings: &Settings) {
        let dt_ms = dt_ms.max(0.0);
        if dt_ms > 0.0 {
            let frames = (dt_ms / settings.frame_ms) as f32;
            self.pos += self.vel * frames;

            let spin = settings.effective_rotation_speed() * (dt_ms / 1000.0) as f32;
            self.rotation = normalize_degrees(self.rotation + spin);
        }
        self.refresh_opacity(now_ms, settings);
    }

    /// Apply the age-based fade without moving the unit
    pub fn refresh_opacity(&mut self, now_ms: f64, settings: &Settings) {
        let target = fade_at(self.created_at, now_ms, settings.lifetime_ms);
        self.opacity = self.opacity.min(target);
    }

    /// Host time at which the unit is fully faded
    pub fn expires_at(&self, settings: &Settings) -> f64 {
        self.created_at + settings.lifetime_ms
    }

    pub fn is_faded(&self) -> bool {
        self.opacity <= 0.0
    }

    /// Entirely below the bottom edge
    pub fn has_exited(&self, bounds: Bounds) -> bool {
        self.pos.y - self.radius > bounds.height
    }

    pub fn is_expired(&self, bounds: Bounds, policy: ExpiryPolicy) -> bool {
        self.is_faded() || (policy.retires_on_exit() && self.has_exited(bounds))
    }

    pub fn age_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.created_at).max(0.0)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn content(&self) -> &T {
        &self.content
    }

    #[inline]
    pub fn created_at(&self) -> f64 {
        self.created_at
    }
}

/// Linear fade from 1 at `created_at` to 0 at `created_at + lifetime_ms`
pub fn fade_at(created_at: f64, now_ms: f64, lifetime_ms: f64) -> f32 {
    // Compare against the absolute expiry so `now == created_at + lifetime` is always 0
    if now_ms >= created_at + lifetime_ms {
        return 0.0;
    }
    let age = (now_ms - created_at).max(0.0);
    (1.0 - age / lifetime_ms).clamp(0.0, 1.0) as f32
}
