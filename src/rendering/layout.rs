//! Layout arithmetic for the story card.

use std::fmt;

/// Left edge of the severity badge.
pub const BADGE_X: i64 = 900;

/// Width of the progress bar track.
pub const BAR_TRACK_WIDTH: i64 = 500;

/// x position of the `/100` label that follows the score numeral.
pub fn score_suffix_x(score: i64) -> i64 {
    80 + score.to_string().chars().count() as i64 * 56
}

/// Width of the severity badge rectangle.
///
/// Length is measured in UTF-16 code units, so astral characters count twice.
pub fn badge_width(level: &str) -> i64 {
    level.encode_utf16().count() as i64 * 20 + 36
}

/// Horizontal center of the severity badge, where its text is anchored.
pub fn badge_center_x(level: &str) -> i64 {
    BADGE_X + badge_width(level) / 2
}

/// Progress bar fill width, `min(score, 100) * 4.6`.
///
/// Held in tenths of a unit so the value prints exactly (`460`, `358.8`)
/// instead of carrying binary floating point noise into the SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BarWidth {
    tenths: i64,
}

impl BarWidth {
    pub fn for_score(score: i64) -> Self {
        Self {
            tenths: score.min(100).saturating_mul(46),
        }
    }

    pub fn tenths(self) -> i64 {
        self.tenths
    }
}

impl fmt::Display for BarWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.tenths < 0 { "-" } else { "" };
        let abs = self.tenths.unsigned_abs();
        let (whole, frac) = (abs / 10, abs % 10);
        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else {
            write!(f, "{sign}{whole}.{frac}")
        }
    }
}
