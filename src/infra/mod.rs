//! File I/O, front matter parsing, counter state

pub mod frontmatter;
pub mod fs;
pub mod state;

pub use frontmatter::FrontmatterError;
pub use fs::FsError;
pub use state::{State, StateError};
