//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Marker text only present in the score branch
pub const SCORE_MARKER: &str = "COUNTRY INSTABILITY INDEX";

/// Marker text only present in the descriptive-copy branch
pub const COPY_MARKER: &str = "Real-time intelligence analysis";

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a cacheable, well-formed 1200x630 SVG card
pub fn assert_svg_card(response: &TestResponse) {
    assert_ok(response);

    assert_eq!(
        response.header("content-type"),
        Some("image/svg+xml"),
        "Expected Content-Type: image/svg+xml"
    );
    assert_eq!(
        response.header("cache-control"),
        Some("public, max-age=3600, s-maxage=3600"),
        "Expected public one-hour Cache-Control"
    );

    let text = response.text();
    let doc = roxmltree::Document::parse(&text)
        .unwrap_or_else(|e| panic!("SVG is not well-formed XML: {e}\n{text}"));
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("width"), Some("1200"));
    assert_eq!(root.attribute("height"), Some("630"));
}

/// Assert exactly one of the score and descriptive branches was rendered
pub fn assert_single_branch(response: &TestResponse, expect_score: bool) {
    let text = response.text();
    assert_eq!(text.contains(SCORE_MARKER), expect_score, "score block presence");
    assert_eq!(text.contains(COPY_MARKER), !expect_score, "descriptive block presence");
}

/// Assert the top accent bar uses `color`
pub fn assert_accent_color(response: &TestResponse, color: &str) {
    let accent = format!(r#"<rect x="0" y="0" width="1200" height="5" fill="{color}"/>"#);
    assert!(
        response.text().contains(&accent),
        "Expected accent bar colored {color}"
    );
}

/// Assert a text node with exactly `content` exists
pub fn assert_text_node(response: &TestResponse, content: &str) {
    let text = response.text();
    let doc = roxmltree::Document::parse(&text).expect("well-formed SVG");
    let found = doc
        .descendants()
        .filter(|n| n.has_tag_name("text"))
        .any(|n| n.text() == Some(content));
    assert!(found, "Expected a <text> node containing {content:?}");
}
