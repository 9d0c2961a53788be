//! Reaction Overlay headless driver
//!
//! Runs the simulation against a simulated 60 Hz clock and logs what a
//! renderer would draw. The browser build embeds the library instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    reaction_overlay::platform::init_logging();
    log::info!("Reaction Overlay (native) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive the library directly
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), reaction_overlay::SimError> {
    use reaction_overlay::consts::FRAME_MS;
    use reaction_overlay::content::EMOJIS;
    use reaction_overlay::renderer::draw_list;
    use reaction_overlay::sim::{Bounds, HoverState, ReactionUnit, SharedBounds, Simulation};
    use reaction_overlay::{SimError, Settings, platform};

    // Optional settings file as the only argument
    let settings = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| SimError::InvalidSettings(format!("{path}: {e}")))?;
            Settings::from_json(&json)?
        }
        None => Settings::default(),
    };

    let hover = HoverState::new();
    let window = SharedBounds::with_size(800.0, 600.0);
    let mut sim: Simulation<&'static str> = Simulation::builder()
        .settings(settings)
        .bounds(window.clone())
        .gate(hover.clone())
        .build()?;

    let start = platform::now_ms();
    let mut peak_visible = 0;
    let mut frame = 0u64;

    hover.set_hovering(true);
    loop {
        let now = start + frame as f64 * FRAME_MS;

        // One reaction every 10 frames while hovering, cycling the catalogue
        if frame % 10 == 0 && (frame / 10) < EMOJIS.len() as u64 {
            let emoji = &EMOJIS[(frame / 10) as usize];
            sim.react(emoji.descriptor, now)?;
        } else if (frame / 10) == EMOJIS.len() as u64 {
            hover.set_hovering(false);
        }

        // Halfway through, the window shrinks
        if frame == 60 {
            window.resize(400.0, 600.0);
        }

        let bounds = window.get().unwrap_or(Bounds::new(0.0, 0.0));
        let report = sim.tick(now, &mut |units: &[ReactionUnit<&'static str>]| {
            let visible = draw_list(units, bounds).len();
            peak_visible = peak_visible.max(visible);
        })?;

        if report.spawned > 0 || report.expired > 0 {
            log::info!(
                "frame {:>4}: +{} -{} live={}",
                frame,
                report.spawned,
                report.expired,
                report.live
            );
        }

        frame += 1;
        if !hover.is_hovering() && sim.is_empty() && sim.pending_len() == 0 {
            break;
        }
    }

    log::info!(
        "All reactions retired after {} frames (peak {} visible)",
        frame,
        peak_visible
    );
    sim.teardown();
    Ok(())
}
