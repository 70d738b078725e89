//! The document generator contract.
//!
//! Generators render a validated [`Node`] tree into one output format.
//! The variant set is closed: Markdown (primary) and JSON.

use serde::{Deserialize, Serialize};

use crate::error::{MindmapError, MindmapResult};
use crate::json::JsonGenerator;
use crate::markdown::MarkdownGenerator;
use crate::node::Node;

/// Hard ceiling on the depth any generator will render.
///
/// Distinct from the decode-time nesting limit: this bounds output size
/// for trees that were accepted but are too deep to produce a usable
/// document.
pub const MAX_OUTPUT_DEPTH: usize = 10;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    /// File extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    /// Short lowercase name of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }
}

/// A renderer from tree to document text.
///
/// Generation is a pure function of the tree: the same tree always
/// yields byte-identical output.
pub trait MindmapGenerator {
    /// Render the tree rooted at `root` into document text.
    fn generate(&self, root: &Node) -> MindmapResult<String>;
}

/// Build the generator for an output format.
pub fn generator_for(format: OutputFormat) -> Box<dyn MindmapGenerator> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownGenerator::default()),
        OutputFormat::Json => Box::new(JsonGenerator),
    }
}

/// Reject trees deeper than the output ceiling.
pub(crate) fn check_output_depth(root: &Node) -> MindmapResult<()> {
    let depth = root.depth();
    if depth >= MAX_OUTPUT_DEPTH {
        return Err(MindmapError::UnsupportedDepth {
            depth,
            max: MAX_OUTPUT_DEPTH,
        });
    }
    Ok(())
}
