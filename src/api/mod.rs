pub mod openapi;
pub mod story;

pub use openapi::{handle_openapi, ApiDoc};
pub use story::{handle_og_story, story_params_from_uri, story_response, __path_handle_og_story};
