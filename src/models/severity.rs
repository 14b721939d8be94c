/// Key used when the `l` parameter is absent or empty.
pub const DEFAULT_LEVEL: &str = "elevated";

/// Accent color for levels outside the table (amber).
pub const FALLBACK_LEVEL_COLOR: &str = "#eab308";

/// Severity bucket of a story, each bound to a fixed accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Elevated,
    Normal,
    Low,
}

impl Severity {
    /// Parse a level key. Keys are lower-case and matched exactly.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "elevated" => Some(Self::Elevated),
            "normal" => Some(Self::Normal),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Critical => "#ef4444",
            Self::High => "#f97316",
            Self::Elevated => "#eab308",
            Self::Normal => "#22c55e",
            Self::Low => "#3b82f6",
        }
    }
}

/// Resolve the accent color for a raw level string.
pub fn level_color(level: &str) -> &'static str {
    Severity::from_key(level)
        .map(Severity::color)
        .unwrap_or(FALLBACK_LEVEL_COLOR)
}
