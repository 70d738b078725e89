//! The structuring prompt sent to the AI provider.

/// Fixed instructions asking the model to decompose a topic into a
/// nested title/children hierarchy and answer with bare JSON.
const STRUCTURING_INSTRUCTIONS: &str = r#"You are a mindmap assistant. Decompose the topic below into a clear hierarchical mindmap.

Rules:
- Respond with ONLY a JSON object, no prose, no code fences.
- Shape: {"title": "...", "children": [{"title": "...", "children": [...]}, ...]}
- The root title names the topic; every node needs a short, non-empty title.
- Use 2 to 4 levels of nesting. Leaf nodes may omit "children" or use an empty array.
- Order children from most to least fundamental.
"#;

/// Build the full prompt for one topic.
pub fn structuring_prompt(topic: &str) -> String {
    format!("{}\nTopic: {}", STRUCTURING_INSTRUCTIONS, topic)
}
