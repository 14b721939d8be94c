/// Display name for a two-letter country code.
///
/// Codes are matched exactly; callers upper-case user input first.
pub fn country_name(code: &str) -> Option<&'static str> {
    match code {
        "UA" => Some("Ukraine"),
        "RU" => Some("Russia"),
        "CN" => Some("China"),
        "US" => Some("United States"),
        "IR" => Some("Iran"),
        "IL" => Some("Israel"),
        "TW" => Some("Taiwan"),
        "KP" => Some("North Korea"),
        "SA" => Some("Saudi Arabia"),
        "TR" => Some("Turkey"),
        "PL" => Some("Poland"),
        "DE" => Some("Germany"),
        "FR" => Some("France"),
        "GB" => Some("United Kingdom"),
        "IN" => Some("India"),
        "PK" => Some("Pakistan"),
        "SY" => Some("Syria"),
        "YE" => Some("Yemen"),
        "MM" => Some("Myanmar"),
        "VE" => Some("Venezuela"),
        _ => None,
    }
}
