//! Console logging: `log` macros go to the browser console, panics too.

use log::Level;

/// Verbose in debug builds, `Info` and above in release.
pub fn level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(level()) {
        web_sys::console::warn_1(&format!("[LOG] logger already set: {}", e).into());
    }
}
