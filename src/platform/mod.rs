//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (host clock in milliseconds)
//! - Logger installation

/// Milliseconds on the host clock.
///
/// Wall-clock based on both targets so spawn timestamps and tick times share
/// one timeline.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    millis_since_epoch(std::time::SystemTime::now())
}

/// Pre-epoch times come back negative rather than being folded to zero
#[cfg(not(target_arch = "wasm32"))]
fn millis_since_epoch(time: std::time::SystemTime) -> f64 {
    use std::time::UNIX_EPOCH;

    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_micros() as f64 / 1000.0,
        Err(e) => {
            let before = e.duration().as_micros() as f64 / 1000.0;
            log::warn!("System clock is {}ms before the Unix epoch", before);
            -before
        }
    }
}

/// Install the log backend (browser console or env_logger)
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("Logger already initialized");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    if env_logger::try_init().is_err() {
        log::warn!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_wall_time() {
        assert!(now_ms() > 0.0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_pre_epoch_clock_stays_ordered() {
        use std::time::{Duration, UNIX_EPOCH};

        let earlier = millis_since_epoch(UNIX_EPOCH - Duration::from_secs(2));
        let later = millis_since_epoch(UNIX_EPOCH - Duration::from_secs(1));
        assert_eq!(earlier, -2000.0);
        assert_eq!(later, -1000.0);
        assert_eq!(millis_since_epoch(UNIX_EPOCH + Duration::from_millis(5)), 5.0);
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
