//! Markdown outline generator.
//!
//! Renders the tree as a Markdown outline importable by mindmap tools
//! (EdrawMind, XMind, Obsidian): headings for the shallow levels, then
//! indented bullet items past the heading cutoff, because most Markdown
//! consumers only recognise a bounded number of heading levels.

use crate::error::MindmapResult;
use crate::generator::{check_output_depth, MindmapGenerator};
use crate::node::Node;

/// Default depth at which headings switch over to bullet items.
pub const DEFAULT_HEADING_CUTOFF: usize = 4;

/// Markdown outline generator.
///
/// Depth `d` below the cutoff renders as a heading of level `d + 1`;
/// depth at or past the cutoff renders as a `-` bullet indented by two
/// spaces per level past the cutoff.
#[derive(Debug, Clone)]
pub struct MarkdownGenerator {
    heading_cutoff: usize,
}

impl MarkdownGenerator {
    /// Create a generator with a custom heading cutoff (minimum 1).
    pub fn new(heading_cutoff: usize) -> Self {
        Self {
            heading_cutoff: heading_cutoff.max(1),
        }
    }
}

impl Default for MarkdownGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_HEADING_CUTOFF)
    }
}

impl MindmapGenerator for MarkdownGenerator {
    fn generate(&self, root: &Node) -> MindmapResult<String> {
        check_output_depth(root)?;

        let mut out = String::new();
        for (node, depth) in root.walk() {
            let title = escape_markdown(node.title());
            if depth < self.heading_cutoff {
                for _ in 0..=depth {
                    out.push('#');
                }
                out.push(' ');
            } else {
                for _ in 0..(depth - self.heading_cutoff) {
                    out.push_str("  ");
                }
                out.push_str("- ");
            }
            out.push_str(&title);
            out.push('\n');
        }
        Ok(out)
    }
}

/// Escape Markdown-significant characters so titles render verbatim.
///
/// `*`, `_` and backtick are escaped anywhere; `#` only when it would
/// start the line and be read as a heading marker.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '*' | '_' | '`' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    if escaped.starts_with('#') {
        escaped.insert(0, '\\');
    }
    escaped
}
