//! Shared formatting utilities for confidence display and console output

use console::{Emoji, Style};

/// Tape measure emoji for detection operations
pub const TAPE: Emoji = Emoji("📏", ">");

/// Checkmark emoji for high-confidence results
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Warning emoji for medium-confidence results
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Crossmark emoji for low-confidence results
pub const CROSSMARK: Emoji = Emoji("❌", "[!!]");

/// Sparkles emoji for the headline recommendation
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Chart emoji for chart listings
pub const CHART: Emoji = Emoji("📊", "~");

/// Magnifier emoji for detection details
pub const MAGNIFIER: Emoji = Emoji("🔍", ">>");

/// Badge glyph for a confidence value, mirroring the green/yellow/red
/// badge tiers: above 80 a check, 60 and up a tilde, below that a bang.
///
/// # Examples
///
/// ```
/// use sizewise::fmt::badge_glyph;
///
/// assert_eq!(badge_glyph(92), "\u{2713}");
/// assert_eq!(badge_glyph(70), "~");
/// assert_eq!(badge_glyph(30), "!");
/// ```
pub fn badge_glyph(confidence: u8) -> &'static str {
    if confidence > 80 {
        "\u{2713}"
    } else if confidence >= 60 {
        "~"
    } else {
        "!"
    }
}

/// Console style matching the badge tier colors.
pub fn badge_style(confidence: u8) -> Style {
    if confidence > 80 {
        Style::new().green().bold()
    } else if confidence >= 60 {
        Style::new().yellow().bold()
    } else {
        Style::new().red().bold()
    }
}

/// Format a confidence as a percentage string
///
/// # Examples
///
/// ```
/// use sizewise::fmt::format_confidence;
///
/// assert_eq!(format_confidence(92), "92%");
/// assert_eq!(format_confidence(0), "0%");
/// ```
pub fn format_confidence(confidence: u8) -> String {
    format!("{}%", confidence)
}
