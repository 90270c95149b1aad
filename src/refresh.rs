//! Periodic page refresh keyed to tab visibility.

use gloo_timers::callback::Interval;

/// Reload the page every `interval_ms`, skipping cycles while the tab is
/// hidden. The schedule survives skipped cycles and runs until the page
/// itself is torn down.
pub fn start_auto_refresh(interval_ms: u32) {
    Interval::new(interval_ms, || {
        if gloo_utils::document().hidden() {
            return;
        }
        if let Err(err) = gloo_utils::window().location().reload() {
            log::warn!("Page reload failed: {:?}", err);
        }
    })
    .forget();
}
