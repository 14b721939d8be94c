pub mod escape;
pub mod layout;
pub mod story_svg;

pub use escape::escape_xml;
pub use story_svg::{render_story_svg, CARD_HEIGHT, CARD_WIDTH};
