//! Canvas bounds and the provider the simulation samples each tick

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Drawable canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Source of the latest canvas size.
///
/// `None` means the host has not measured the canvas yet.
pub trait BoundsProvider {
    fn bounds(&self) -> Option<Bounds>;
}

impl<F> BoundsProvider for F
where
    F: Fn() -> Option<Bounds>,
{
    fn bounds(&self) -> Option<Bounds> {
        self()
    }
}

/// Shared handle the host updates from its resize handler.
///
/// Clones observe the same value.
#[derive(Debug, Clone, Default)]
pub struct SharedBounds(Rc<Cell<Option<Bounds>>>);

impl SharedBounds {
    /// Uninitialized until the first [`resize`](Self::resize)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: f32, height: f32) -> Self {
        let shared = Self::new();
        shared.resize(width, height);
        shared
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.0.set(Some(Bounds::new(width, height)));
    }

    pub fn get(&self) -> Option<Bounds> {
        self.0.get()
    }
}

impl BoundsProvider for SharedBounds {
    fn bounds(&self) -> Option<Bounds> {
        self.get()
    }
}
