/// The top nav switches from transparent overlay to solid background once
/// the page has scrolled strictly past this many pixels.
pub const HEADER_SCROLL_THRESHOLD: u32 = 50;

/// The decorative hero text drifts at half scroll speed.
pub const HERO_PARALLAX_SPEED: f64 = 0.5;

/// The hero backdrop moves slowly against the scroll direction.
pub const BACKDROP_PARALLAX_SPEED: f64 = -0.15;

/// localStorage key holding the dark mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";
