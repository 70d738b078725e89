//! Integration tests for the tree model and document generators.

use serde_json::json;

use mapbot_mindmap::{
    filename_for, generator_for, JsonGenerator, MarkdownGenerator, MindmapError,
    MindmapGenerator, Node, OutputFormat,
};

/// Decode-to-render flow for both formats from the same raw structure.
#[test]
fn test_structure_to_documents() {
    let raw = json!({
        "title": "Rust",
        "children": [
            {"title": "Ownership", "children": [
                {"title": "Borrowing"},
                {"title": "Lifetimes"}
            ]},
            {"title": "Tooling", "children": [{"title": "Cargo"}]}
        ]
    });
    let tree = Node::from_value(&raw).unwrap();

    let markdown = generator_for(OutputFormat::Markdown)
        .generate(&tree)
        .unwrap();
    assert_eq!(
        markdown,
        "# Rust\n## Ownership\n### Borrowing\n### Lifetimes\n## Tooling\n### Cargo\n"
    );

    let exported = generator_for(OutputFormat::Json).generate(&tree).unwrap();
    let reparsed = JsonGenerator.parse(&exported).unwrap();
    assert_eq!(reparsed, tree);

    assert_eq!(filename_for(tree.title(), OutputFormat::Markdown), "rust.md");
}

/// Child order must survive decode, traversal and rendering unchanged.
#[test]
fn test_child_order_preserved_end_to_end() {
    let raw = json!({
        "title": "Root",
        "children": [
            {"title": "Zebra"},
            {"title": "Apple"},
            {"title": "Mango"}
        ]
    });
    let tree = Node::from_value(&raw).unwrap();

    let markdown = MarkdownGenerator::default().generate(&tree).unwrap();
    assert_eq!(markdown, "# Root\n## Zebra\n## Apple\n## Mango\n");

    let exported = JsonGenerator.generate(&tree).unwrap();
    let reparsed = JsonGenerator.parse(&exported).unwrap();
    let titles: Vec<&str> = reparsed.children().iter().map(Node::title).collect();
    assert_eq!(titles, vec!["Zebra", "Apple", "Mango"]);
}

/// A tree that decodes but exceeds the render ceiling fails in every
/// generator with the depth error, not a malformed-structure error.
#[test]
fn test_render_ceiling_is_format_independent() {
    let mut value = json!({"title": "leaf"});
    for i in 0..10 {
        value = json!({"title": format!("level-{}", i), "children": [value]});
    }
    let tree = Node::from_value(&value).unwrap();

    for format in [OutputFormat::Markdown, OutputFormat::Json] {
        let result = generator_for(format).generate(&tree);
        assert!(
            matches!(result, Err(MindmapError::UnsupportedDepth { .. })),
            "expected depth error for {:?}",
            format
        );
    }
}
