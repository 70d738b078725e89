//! JSON export generator.
//!
//! Serializes the tree into nested `{"title", "children"}` objects for
//! web-based mindmap viewers. Parsing its own output reconstructs an
//! equal tree.

use crate::error::MindmapResult;
use crate::generator::{check_output_depth, MindmapGenerator};
use crate::node::Node;

/// JSON mindmap generator.
#[derive(Debug, Clone, Default)]
pub struct JsonGenerator;

impl JsonGenerator {
    /// Parse previously generated JSON back into a validated tree.
    pub fn parse(&self, text: &str) -> MindmapResult<Node> {
        Node::from_json_str(text)
    }
}

impl MindmapGenerator for JsonGenerator {
    fn generate(&self, root: &Node) -> MindmapResult<String> {
        check_output_depth(root)?;

        let mut out = serde_json::to_string_pretty(root)?;
        out.push('\n');
        Ok(out)
    }
}
