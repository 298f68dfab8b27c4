//! Panic hook that gives the terminal back before the report is printed.

use super::setup::emergency_restore;
use std::panic;

/// Wrap the current panic hook (color-eyre's, once installed) so the
/// terminal is restored first. Call after `color_eyre::install()`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
