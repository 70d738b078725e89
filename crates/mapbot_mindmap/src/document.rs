//! The output artifact of a mindmap request.

use crate::generator::OutputFormat;

/// Maximum length, in characters, of a generated filename stem.
const MAX_FILENAME_STEM: usize = 64;

/// A generated mindmap file: content plus a suggested filename.
#[derive(Debug, Clone)]
pub struct MindmapDocument {
    /// Generated document text.
    pub content: String,
    /// Filesystem-safe filename, extension included.
    pub filename: String,
    /// Format the content was generated in.
    pub format: OutputFormat,
}

impl MindmapDocument {
    /// Consume the document, returning the file bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.content.into_bytes()
    }
}

/// Derive a filesystem-safe filename from a mindmap title.
///
/// Lowercases, collapses every non-alphanumeric run to a single `-`,
/// caps the stem length and appends the format's extension. Never
/// produces path separators or an empty stem.
pub fn filename_for(title: &str, format: OutputFormat) -> String {
    let stem = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    let stem: String = stem.chars().take(MAX_FILENAME_STEM).collect();
    let stem = stem.trim_end_matches('-');
    let stem = if stem.is_empty() { "mindmap" } else { stem };

    format!("{}.{}", stem, format.extension())
}
