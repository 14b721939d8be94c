/// Key used when the `t` parameter is absent or empty.
pub const DEFAULT_CONTENT_TYPE: &str = "ciianalysis";

/// Label for content types outside the table.
pub const FALLBACK_TYPE_LABEL: &str = "Intelligence Brief";

/// Kind of intelligence artifact being previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    CiiAnalysis,
    CrisisAlert,
    DailyBrief,
    MarketFocus,
}

impl ContentType {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ciianalysis" => Some(Self::CiiAnalysis),
            "crisisalert" => Some(Self::CrisisAlert),
            "dailybrief" => Some(Self::DailyBrief),
            "marketfocus" => Some(Self::MarketFocus),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CiiAnalysis => "Intelligence Brief",
            Self::CrisisAlert => "Crisis Alert",
            Self::DailyBrief => "Daily Brief",
            Self::MarketFocus => "Market Focus",
        }
    }
}

/// Resolve the header label for a raw content type key.
pub fn type_label(key: &str) -> &'static str {
    ContentType::from_key(key)
        .map(ContentType::label)
        .unwrap_or(FALLBACK_TYPE_LABEL)
}
