pub mod config;
pub mod content_type;
pub mod country;
pub mod score;
pub mod severity;
pub mod story;

pub use config::AppConfig;
pub use content_type::{type_label, ContentType};
pub use country::country_name;
pub use score::parse_score;
pub use severity::{level_color, Severity};
pub use story::{Story, StoryParams};
