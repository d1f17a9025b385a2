//! Markdown to standalone HTML pages.
//!
//! Pages are self-contained (embedded stylesheet) except for images, which
//! resolve against `<base href="../assets/">` so `![x](pic.png)` in a note
//! finds `<root>/assets/pic.png` from `<root>/html/<id>.html`.

use crate::domain::NoteMeta;
use crate::infra::frontmatter;
use pulldown_cmark::{Options, Parser, html};

const STYLE: &str = include_str!("style.css");

/// Renders a note source to a complete HTML page.
///
/// The front matter is stripped; the page title comes from the parsed
/// metadata.
pub fn render(meta: &NoteMeta, content: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(frontmatter::body(content), options);
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <base href=\"../assets/\">\n\
         <style>\n{STYLE}</style>\n\
         </head>\n\
         <body>\n{rendered}</body>\n\
         </html>\n",
        title = escape_text(&meta.title),
    )
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
