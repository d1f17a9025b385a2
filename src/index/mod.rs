//! Key to set-of-ID mappings kept consistent with the note files.

mod library;
mod persist;
mod regenerate;
mod store;

pub use library::{Library, LibraryError};
pub use persist::{IndexKind, PersistError, load_index, store_index};
pub use regenerate::{RebuiltIndexes, RegenerateError, regenerate};
pub use store::{CorruptIndexError, Index};
