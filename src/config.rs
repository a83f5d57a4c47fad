use log::Level;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "50px";

/// How long a newsletter confirmation stays on screen.
pub const FEEDBACK_CLEAR_MS: u32 = 3_000;

/// Scroll offset after which the header switches to its solid style.
pub const SCROLLED_NAV_OFFSET: f64 = 20.0;

pub const REFRESH_SPIN_MS: u32 = 1_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn submit_latency_ms() -> u32 {
    300 // Keep local iteration snappy
}

#[cfg(not(debug_assertions))]
pub fn submit_latency_ms() -> u32 {
    1_000
}
