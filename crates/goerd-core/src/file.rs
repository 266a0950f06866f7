//! Source file handling.
use std::fs::File as StdFile;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tree_sitter::Node;

/// A Go source file held in memory for parsing and text slicing.
#[derive(Debug, Clone, Default)]
pub struct SourceFile {
    pub path: Option<String>,
    content: Arc<[u8]>,
}

impl SourceFile {
    pub fn new_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let mut file = StdFile::open(path)?;
        let capacity = file.metadata().map(|meta| meta.len() as usize).unwrap_or(0);
        let mut content = Vec::with_capacity(capacity);
        file.read_to_end(&mut content)?;

        Ok(SourceFile {
            path: Some(path.to_string_lossy().into_owned()),
            content: Arc::from(content),
        })
    }

    pub fn new_content(content: impl Into<Vec<u8>>) -> Self {
        SourceFile {
            path: None,
            content: Arc::from(content.into()),
        }
    }

    /// Display name for diagnostics.
    pub fn display_path(&self) -> &str {
        self.path.as_deref().unwrap_or("<memory>")
    }

    pub fn content(&self) -> &[u8] {
        self.content.as_ref()
    }

    pub fn get_text(&self, start_byte: usize, end_byte: usize) -> Option<String> {
        let content_bytes = self.content();

        if start_byte > end_byte || end_byte > content_bytes.len() {
            return None;
        }

        let slice = &content_bytes[start_byte..end_byte];
        Some(String::from_utf8_lossy(slice).into_owned())
    }

    /// Source text spanned by `node`.
    pub fn text(&self, node: Node<'_>) -> String {
        self.get_text(node.start_byte(), node.end_byte())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_text_rejects_out_of_range() {
        let file = SourceFile::new_content("package demo");
        assert_eq!(file.get_text(8, 12).as_deref(), Some("demo"));
        assert_eq!(file.get_text(8, 99), None);
        assert_eq!(file.get_text(5, 2), None);
        assert_eq!(file.display_path(), "<memory>");
    }
}
