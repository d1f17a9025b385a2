//! Core types: NoteId, Tag, NoteMeta

mod note_id;
mod note_meta;
mod tag;

pub use note_id::{NoteId, ParseNoteIdError};
pub use note_meta::NoteMeta;
pub use tag::{ParseTagError, Tag, extract_tags};
