//! HTML rendering of note sources.

mod html;

pub use html::render;
