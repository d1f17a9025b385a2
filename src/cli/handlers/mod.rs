//! Command handlers for the CLI.

mod list;
mod new;
mod regenerate;
mod remove;
mod resolve;
mod search;
mod show_edit;

pub use list::{handle_groups, handle_list, handle_tags};
pub use new::handle_new;
pub use regenerate::{handle_path, handle_regenerate};
pub use remove::handle_rm;
pub use resolve::{resolve_id, resolve_selection};
pub use search::handle_search;
pub use show_edit::{handle_cat, handle_edit, handle_show};

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
