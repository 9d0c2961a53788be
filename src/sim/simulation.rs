//! Frame-driven spawner and update loop
//!
//! One [`Simulation::tick`] per rendered frame, in a fixed order:
//! 1. Refresh bounds from the provider
//! 2. Advance every live unit
//! 3. Drop expired units (stable)
//! 4. Append units queued by spawn requests
//! 5. Hand the live units to the render sink

use std::marker::PhantomData;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bounds::{Bounds, BoundsProvider};
use super::gate::ActivityGate;
use super::unit::ReactionUnit;
use crate::content;
use crate::error::SimError;
use crate::renderer::RenderSink;
use crate::settings::Settings;

/// Whether spawn requests currently produce units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnerMode {
    /// Gate closed: requests are suppressed, live units keep moving
    Idle,
    /// Gate open: each request queues exactly one unit
    Spawning,
}

/// Result of an accepted spawn request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// A unit was built and joins the live set on the next tick
    Queued,
    /// Gate closed (or simulation torn down); nothing was built
    Suppressed,
}

/// Per-tick bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub advanced: usize,
    pub expired: usize,
    pub spawned: usize,
    pub live: usize,
}

/// Collects the collaborators a [`Simulation`] needs.
///
/// Carries the content type so `build` needs no annotation.
pub struct SimulationBuilder<T> {
    settings: Settings,
    bounds: Option<Box<dyn BoundsProvider>>,
    gate: Option<Box<dyn ActivityGate>>,
    seed: Option<u64>,
    _content: PhantomData<fn() -> T>,
}

impl<T> Default for SimulationBuilder<T> {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            bounds: None,
            gate: None,
            seed: None,
            _content: PhantomData,
        }
    }
}

impl<T> SimulationBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn bounds(mut self, provider: impl BoundsProvider + 'static) -> Self {
        self.bounds = Some(Box::new(provider));
        self
    }

    pub fn gate(mut self, gate: impl ActivityGate + 'static) -> Self {
        self.gate = Some(Box::new(gate));
        self
    }

    /// Fix the RNG seed for reproducible spawns
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Simulation<T>, SimError> {
        self.settings.validate()?;
        let bounds = self
            .bounds
            .ok_or(SimError::MissingDependency("bounds provider"))?;
        let gate = self.gate.ok_or(SimError::MissingDependency("activity gate"))?;
        let seed = self.seed.unwrap_or_else(rand::random);

        log::info!("Reaction simulation initialized with seed: {}", seed);

        Ok(Simulation {
            settings: self.settings,
            bounds_provider: bounds,
            gate,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            bounds: None,
            units: Vec::new(),
            pending: Vec::new(),
            last_tick_ms: None,
            time_ticks: 0,
            running: true,
        })
    }
}

/// Owns the live reaction units and drives them frame by frame
pub struct Simulation<T> {
    settings: Settings,
    bounds_provider: Box<dyn BoundsProvider>,
    gate: Box<dyn ActivityGate>,
    rng: Pcg32,
    seed: u64,
    /// Last size reported by the provider
    bounds: Option<Bounds>,
    /// Live units in creation order
    units: Vec<ReactionUnit<T>>,
    /// Built by spawn requests, appended on the next tick
    pending: Vec<ReactionUnit<T>>,
    last_tick_ms: Option<f64>,
    time_ticks: u64,
    running: bool,
}

impl<T> Simulation<T> {
    pub fn builder() -> SimulationBuilder<T> {
        SimulationBuilder::new()
    }

    /// Current mode, read from the activity gate
    pub fn mode(&self) -> SpawnerMode {
        if self.running && self.gate.is_active() {
            SpawnerMode::Spawning
        } else {
            SpawnerMode::Idle
        }
    }

    /// Spawn `content` with the default radius
    pub fn request_spawn(&mut self, content: T, now_ms: f64) -> Result<SpawnOutcome, SimError> {
        let radius = self.settings.unit_radius;
        self.request_spawn_with_radius(content, radius, now_ms)
    }

    /// Validate and build a unit now; it joins the live set on the next tick.
    ///
    /// Bad input fails even while the gate is closed.
    pub fn request_spawn_with_radius(
        &mut self,
        content: T,
        radius: f32,
        now_ms: f64,
    ) -> Result<SpawnOutcome, SimError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        if !now_ms.is_finite() {
            return Err(SimError::InvalidTimestamp(now_ms));
        }
        if self.mode() == SpawnerMode::Idle {
            log::debug!("Spawn suppressed (gate closed)");
            return Ok(SpawnOutcome::Suppressed);
        }

        let bounds = self.refresh_bounds()?;
        let unit = ReactionUnit::spawn(
            &mut self.rng,
            radius,
            bounds,
            content,
            now_ms,
            &self.settings,
        )?;
        log::debug!(
            "Queued reaction at x={} vel=({}, {}) rot={}",
            unit.x(),
            unit.vel().x,
            unit.vel().y,
            unit.rotation()
        );
        self.pending.push(unit);
        Ok(SpawnOutcome::Queued)
    }

    /// Look up an emoji by descriptor and spawn it
    pub fn react(&mut self, descriptor: &str, now_ms: f64) -> Result<SpawnOutcome, SimError>
    where
        T: From<&'static str>,
    {
        let glyph = content::lookup(descriptor)?;
        self.request_spawn(T::from(glyph), now_ms)
    }

    /// Advance to host time `now_ms` and render.
    ///
    /// The first tick integrates nothing; later ticks integrate the time since
    /// the previous one, capped at `max_frame_ms`. Does nothing after
    /// [`teardown`](Self::teardown). A non-finite clock is rejected without
    /// touching any state.
    pub fn tick<S>(&mut self, now_ms: f64, sink: &mut S) -> Result<TickReport, SimError>
    where
        S: RenderSink<T> + ?Sized,
    {
        if !self.running {
            return Ok(TickReport::default());
        }
        if !now_ms.is_finite() {
            return Err(SimError::InvalidTimestamp(now_ms));
        }

        let bounds = self.refresh_bounds()?;
        let dt_ms = self.elapsed_since_last_tick(now_ms);

        for unit in &mut self.units {
            unit.advance(dt_ms, now_ms, &self.settings);
        }
        let advanced = self.units.len();

        let policy = self.settings.expiry;
        self.units.retain(|u| !u.is_expired(bounds, policy));
        let mut expired = advanced - self.units.len();

        // Requests that outlived their lifetime before their first frame never show
        let mut spawned = 0;
        for mut unit in self.pending.drain(..) {
            unit.refresh_opacity(now_ms, &self.settings);
            if unit.is_faded() {
                expired += 1;
            } else {
                self.units.push(unit);
                spawned += 1;
            }
        }

        self.time_ticks += 1;
        let report = TickReport {
            advanced,
            expired,
            spawned,
            live: self.units.len(),
        };
        log::trace!("Tick {} at {}ms: {:?}", self.time_ticks, now_ms, report);

        sink.render(&self.units);
        Ok(report)
    }

    /// Release every unit and stop responding to ticks
    pub fn teardown(&mut self) {
        if !self.running {
            return;
        }
        log::info!(
            "Reaction simulation torn down after {} ticks ({} live, {} pending released)",
            self.time_ticks,
            self.units.len(),
            self.pending.len()
        );
        self.units = Vec::new();
        self.pending = Vec::new();
        self.last_tick_ms = None;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Live units in creation order
    pub fn units(&self) -> &[ReactionUnit<T>] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Size seen at the last tick or spawn, if any
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    fn refresh_bounds(&mut self) -> Result<Bounds, SimError> {
        let latest = self
            .bounds_provider
            .bounds()
            .ok_or(SimError::MissingDependency("bounds provider"))?;
        if self.bounds != Some(latest) {
            log::debug!("Bounds now {}x{}", latest.width, latest.height);
            self.bounds = Some(latest);
        }
        Ok(latest)
    }

    fn elapsed_since_last_tick(&mut self, now_ms: f64) -> f64 {
        let Some(last) = self.last_tick_ms else {
            self.last_tick_ms = Some(now_ms);
            return 0.0;
        };
        if now_ms < last {
            log::warn!("Clock went backwards ({}ms -> {}ms); skipping motion", last, now_ms);
            return 0.0;
        }
        self.last_tick_ms = Some(now_ms);
        (now_ms - last).min(self.settings.max_frame_ms)
    }
}
