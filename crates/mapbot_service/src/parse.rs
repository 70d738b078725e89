//! Decoding of raw model output into a validated tree.
//!
//! Models are instructed to answer with bare JSON, but in practice the
//! object sometimes arrives wrapped in prose or a code fence. The JSON
//! object is located by slicing from the first `{` to the last `}`
//! before the strict decode runs.

use mapbot_mindmap::{MindmapError, MindmapResult, Node};

/// Parse raw model output into a validated mindmap tree.
pub fn parse_outline(raw: &str) -> MindmapResult<Node> {
    let json = extract_json_object(raw).ok_or_else(|| {
        MindmapError::malformed("response contains no JSON object".to_string())
    })?;
    Node::from_json_str(json)
}

/// Extract the JSON object substring from raw model output.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_json() {
        let tree = parse_outline(r#"{"title": "Root", "children": []}"#).unwrap();
        assert_eq!(tree.title(), "Root");
    }

    #[test]
    fn test_fenced_json() {
        let raw = "```json\n{\"title\": \"Root\", \"children\": [{\"title\": \"A\"}]}\n```";
        let tree = parse_outline(raw).unwrap();
        assert_eq!(tree.children()[0].title(), "A");
    }

    #[test]
    fn test_json_with_surrounding_prose() {
        let raw = "Here is your mindmap:\n{\"title\": \"Root\"}\nHope that helps!";
        let tree = parse_outline(raw).unwrap();
        assert_eq!(tree.title(), "Root");
    }

    #[test]
    fn test_no_object_rejected() {
        let result = parse_outline("I cannot help with that.");
        assert!(matches!(result, Err(MindmapError::MalformedStructure(_))));
    }

    #[test]
    fn test_truncated_json_rejected() {
        let result = parse_outline(r#"{"title": "Root", "children": [{"title""#);
        assert!(matches!(result, Err(MindmapError::MalformedStructure(_))));
    }
}
