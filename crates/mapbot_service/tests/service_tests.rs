//! Integration tests for the mindmap orchestrator, with a mocked
//! AI provider.

use async_trait::async_trait;
use mockall::mock;

use mapbot_ai::{AiError, AiProvider, AiResult};
use mapbot_mindmap::{MindmapError, OutputFormat};
use mapbot_service::{MindmapRequest, MindmapService, ServiceError};

mock! {
    Provider {}

    #[async_trait]
    impl AiProvider for Provider {
        async fn generate_outline(&self, prompt: &str) -> AiResult<String>;
    }
}

fn service_with(provider: MockProvider) -> MindmapService {
    MindmapService::new(Box::new(provider))
}

const OUTLINE: &str = r#"{
    "title": "Vietnamese history",
    "children": [
        {"title": "Ancient era", "children": []},
        {"title": "French colonization", "children": [
            {"title": "1858 invasion", "children": []}
        ]}
    ]
}"#;

#[tokio::test]
async fn test_happy_path_markdown() {
    let mut provider = MockProvider::new();
    provider
        .expect_generate_outline()
        .times(1)
        .returning(|_| Ok(OUTLINE.to_string()));

    let document = service_with(provider)
        .generate(&MindmapRequest::new("Vietnamese history"))
        .await
        .unwrap();

    assert_eq!(
        document.content,
        "# Vietnamese history\n## Ancient era\n## French colonization\n### 1858 invasion\n"
    );
    assert_eq!(document.filename, "vietnamese-history.md");
    assert_eq!(document.format, OutputFormat::Markdown);
}

#[tokio::test]
async fn test_json_format_round_trips() {
    let mut provider = MockProvider::new();
    provider
        .expect_generate_outline()
        .returning(|_| Ok(OUTLINE.to_string()));

    let document = service_with(provider)
        .generate(&MindmapRequest::new("Vietnamese history").with_format(OutputFormat::Json))
        .await
        .unwrap();

    assert_eq!(document.filename, "vietnamese-history.json");
    let value: serde_json::Value = serde_json::from_str(&document.content).unwrap();
    assert_eq!(value["title"], "Vietnamese history");
    assert_eq!(value["children"][1]["children"][0]["title"], "1858 invasion");
}

#[tokio::test]
async fn test_empty_topic_fails_before_provider_call() {
    let mut provider = MockProvider::new();
    provider.expect_generate_outline().times(0);

    let result = service_with(provider)
        .generate(&MindmapRequest::new("   \n\t"))
        .await;

    assert!(matches!(result, Err(ServiceError::InvalidTopic)));
}

#[tokio::test]
async fn test_prompt_embeds_trimmed_topic() {
    let mut provider = MockProvider::new();
    provider
        .expect_generate_outline()
        .withf(|prompt| prompt.contains("Topic: Rust ownership"))
        .returning(|_| Ok(r#"{"title": "Rust ownership"}"#.to_string()));

    let document = service_with(provider)
        .generate(&MindmapRequest::new("  Rust ownership  "))
        .await
        .unwrap();

    assert_eq!(document.filename, "rust-ownership.md");
}

#[tokio::test]
async fn test_provider_failure_propagates() {
    let mut provider = MockProvider::new();
    provider
        .expect_generate_outline()
        .times(1)
        .returning(|_| Err(AiError::Timeout));

    let result = service_with(provider)
        .generate(&MindmapRequest::new("anything"))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Provider(AiError::Timeout))
    ));
}

#[tokio::test]
async fn test_malformed_response_rejected() {
    let mut provider = MockProvider::new();
    provider
        .expect_generate_outline()
        .returning(|_| Ok("Sorry, I cannot structure that topic.".to_string()));

    let result = service_with(provider)
        .generate(&MindmapRequest::new("anything"))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Mindmap(MindmapError::MalformedStructure(_)))
    ));
}

#[tokio::test]
async fn test_fenced_response_accepted() {
    let mut provider = MockProvider::new();
    provider.expect_generate_outline().returning(|_| {
        Ok("```json\n{\"title\": \"Topic\", \"children\": [{\"title\": \"A\"}]}\n```".to_string())
    });

    let document = service_with(provider)
        .generate(&MindmapRequest::new("Topic"))
        .await
        .unwrap();

    assert_eq!(document.content, "# Topic\n## A\n");
}

#[tokio::test]
async fn test_cyclic_response_rejected() {
    let mut provider = MockProvider::new();
    provider.expect_generate_outline().returning(|_| {
        Ok(r#"{"title": "A", "children": [{"title": "B", "children": [{"title": "A"}]}]}"#
            .to_string())
    });

    let result = service_with(provider)
        .generate(&MindmapRequest::new("anything"))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Mindmap(MindmapError::MalformedStructure(_)))
    ));
}
