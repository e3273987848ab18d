use log::Level;

/// Class that marks an element for a one-time entrance transition.
pub const REVEAL_CLASS: &str = "scroll-reveal";
/// Class applied once a marked element has been seen.
pub const VISIBLE_CLASS: &str = "visible";
/// Fraction of the element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const CHAT_PANEL_WIDTH_PX: u32 = 384;
pub const CHAT_PANEL_HEIGHT_PX: u32 = 500;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn reveal_selector() -> String {
    format!(".{}", REVEAL_CLASS)
}
