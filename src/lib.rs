//! og-story
//!
//! Renders Open Graph story cards as SVG for social link previews.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
