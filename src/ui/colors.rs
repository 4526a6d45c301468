//! Named fills for the color cycler button.

use eframe::egui::Color32;
use once_cell::sync::Lazy;

/// CSS-named colors understood by the cycler button.
pub static NAMED_FILLS: Lazy<Vec<(&'static str, Color32)>> = Lazy::new(|| {
    vec![
        ("red", Color32::from_rgb(255, 0, 0)),
        ("green", Color32::from_rgb(0, 128, 0)),
        ("yellow", Color32::from_rgb(255, 255, 0)),
        ("blue", Color32::from_rgb(0, 0, 255)),
        ("orange", Color32::from_rgb(255, 165, 0)),
        ("purple", Color32::from_rgb(128, 0, 128)),
    ]
});

/// Fill used for names missing from [`NAMED_FILLS`].
pub const FALLBACK_FILL: Color32 = Color32::GRAY;

pub const ERROR_TEXT: Color32 = Color32::from_rgb(239, 68, 68);

pub fn fill_for(name: &str) -> Color32 {
    NAMED_FILLS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
        .unwrap_or(FALLBACK_FILL)
}
