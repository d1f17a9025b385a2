//! Builder for note sources used in tests.

#![allow(dead_code)]

/// A note source under construction: front matter plus body.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    group: String,
    doi: Option<String>,
    body: String,
}

impl TestNote {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            group: "none".to_string(),
            doi: None,
            body: String::new(),
        }
    }

    pub fn group(mut self, group: &str) -> Self {
        self.group = group.to_string();
        self
    }

    pub fn doi(mut self, doi: &str) -> Self {
        self.doi = Some(doi.to_string());
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Renders the note as it would sit on disk.
    pub fn to_markdown(&self) -> String {
        let doi_line = self
            .doi
            .as_deref()
            .map(|d| format!("doi: {d}\n"))
            .unwrap_or_default();
        format!(
            "---\ntitle: {}\ngroup: {}\n{}---\n{}\n",
            self.title, self.group, doi_line, self.body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_minimal_front_matter() {
        let note = TestNote::new("A Note");
        assert_eq!(note.to_markdown(), "---\ntitle: A Note\ngroup: none\n---\n\n");
    }

    #[test]
    fn renders_doi_and_body() {
        let note = TestNote::new("Paper")
            .group("refs")
            .doi("10.1000/182")
            .body("content with @tag");
        let markdown = note.to_markdown();
        assert!(markdown.contains("doi: 10.1000/182\n"));
        assert!(markdown.ends_with("content with @tag\n"));
    }
}
