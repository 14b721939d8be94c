use super::escape::escape_xml;
use super::layout::{
    badge_center_x, badge_width, score_suffix_x, BarWidth, BADGE_X, BAR_TRACK_WIDTH,
};
use crate::models::Story;

/// Card width in SVG user units.
pub const CARD_WIDTH: u32 = 1200;

/// Card height in SVG user units.
pub const CARD_HEIGHT: u32 = 630;

/// Footer date layout, e.g. `Oct 19, 2026`.
const FOOTER_DATE_FORMAT: &str = "%b %-d, %Y";

/// Render a resolved story as a 1200x630 SVG document.
///
/// Every user-derived text value goes through [`escape_xml`]. Together with
/// the character cleanup in [`Story::resolve`] the output is well-formed XML
/// for any input.
pub fn render_story_svg(story: &Story) -> String {
    let color = story.level_color;
    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" viewBox="0 0 {CARD_WIDTH} {CARD_HEIGHT}">
  <rect width="{CARD_WIDTH}" height="{CARD_HEIGHT}" fill="#0c0c14"/>

  <!-- Top accent line -->
  <rect x="0" y="0" width="{CARD_WIDTH}" height="5" fill="{color}"/>

  <!-- WORLDMONITOR header -->
  <text x="80" y="68" font-family="system-ui, -apple-system, sans-serif" font-size="22" font-weight="700" fill="#777" letter-spacing="6"
    >WORLDMONITOR</text>
  <text x="1120" y="68" font-family="system-ui, sans-serif" font-size="20" fill="#666" text-anchor="end"
    >{type_label}</text>

  <!-- Separator -->
  <line x1="80" y1="92" x2="1120" y2="92" stroke="#333" stroke-width="1"/>

  <!-- Country name -->
  <text x="80" y="190" font-family="system-ui, -apple-system, sans-serif" font-size="78" font-weight="800" fill="#ffffff"
    >{country_name}</text>

  <!-- Country code badge -->
  <rect x="1030" y="155" width="90" height="44" rx="8" fill="rgba(255,255,255,0.1)"/>
  <text x="1075" y="185" font-family="system-ui, sans-serif" font-size="26" font-weight="700" fill="#aaa" text-anchor="middle"
    >{country_code}</text>

  "##,
        type_label = escape_xml(&story.type_label.to_uppercase()),
        country_name = escape_xml(&story.country_name.to_uppercase()),
        country_code = escape_xml(&story.country_code),
    ));

    match story.score {
        Some(score) => svg.push_str(&score_block(score, &story.level, color)),
        None => svg.push_str(DESCRIPTIVE_BLOCK),
    }

    svg.push_str(&format!(
        r##"

  <!-- Bottom separator -->
  <line x1="80" y1="530" x2="1120" y2="530" stroke="#333" stroke-width="1"/>

  <!-- Footer -->
  <text x="80" y="572" font-family="system-ui, -apple-system, sans-serif" font-size="22" font-weight="600" fill="#555" letter-spacing="2"
    >WORLDMONITOR.APP</text>
  <text x="1120" y="572" font-family="system-ui, sans-serif" font-size="20" fill="#666" text-anchor="end"
    >Real-time global intelligence monitoring</text>
  <text x="1120" y="602" font-family="system-ui, sans-serif" font-size="18" fill="#555" text-anchor="end"
    >{date} · Free &amp; open source</text>
</svg>"##,
        date = escape_xml(&story.date.format(FOOTER_DATE_FORMAT).to_string()),
    ));

    svg
}

fn score_block(score: i64, level: &str, color: &str) -> String {
    let badge_w = badge_width(level);

    format!(
        r##"
  <!-- CII Score -->
  <text x="80" y="310" font-family="system-ui, -apple-system, sans-serif" font-size="96" font-weight="800" fill="{color}"
    >{score}</text>
  <text x="{suffix_x}" y="310" font-family="system-ui, sans-serif" font-size="44" fill="#888"
    >/100</text>

  <!-- Level badge -->
  <rect x="{BADGE_X}" y="270" width="{badge_w}" height="44" rx="8" fill="{color}"/>
  <text x="{badge_cx}" y="300" font-family="system-ui, sans-serif" font-size="24" font-weight="700" fill="#fff" text-anchor="middle"
    >{level_text}</text>

  <!-- Score bar -->
  <rect x="80" y="340" width="{BAR_TRACK_WIDTH}" height="16" rx="8" fill="#1a1a2e"/>
  <rect x="80" y="340" width="{bar}" height="16" rx="8" fill="{color}"/>

  <!-- Labels -->
  <text x="80" y="400" font-family="system-ui, sans-serif" font-size="22" fill="#777" font-weight="600" letter-spacing="4"
    >COUNTRY INSTABILITY INDEX</text>
  "##,
        suffix_x = score_suffix_x(score),
        badge_cx = badge_center_x(level),
        level_text = escape_xml(&level.to_uppercase()),
        bar = BarWidth::for_score(score),
    )
}

const DESCRIPTIVE_BLOCK: &str = r##"
  <!-- No score, show descriptive text -->
  <text x="80" y="290" font-family="system-ui, sans-serif" font-size="36" fill="#aaa" font-weight="600"
    >Real-time intelligence analysis</text>
  <text x="80" y="340" font-family="system-ui, sans-serif" font-size="24" fill="#777"
    >Country Instability Index · Military Posture · Prediction Markets</text>
  <text x="80" y="380" font-family="system-ui, sans-serif" font-size="24" fill="#777"
    >Signal Convergence · Threat Classification · Active Signals</text>
  "##;
