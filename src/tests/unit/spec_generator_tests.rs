//! Spec Generator Unit Tests
//!
//! Drives the generator with a mock provider to check:
//! - The request sent to the provider
//! - Acceptance of valid (and fenced) LLM output
//! - Heuristic fallback on every recoverable failure kind
//! - The heuristic-only path never touching the provider

use std::io;
use std::sync::{Arc, Mutex};

use crate::config::LlmConfig;
use crate::core::game_spec::heuristic;
use crate::core::game_spec::{GameType, SpecGenerator, SpecSource};
use crate::core::llm::structured::JSON_ONLY_SYSTEM_PROMPT;
use crate::core::llm::{MessageRole, OpenAIProvider};
use crate::tests::common::{config_without_key, llm_spec_json, MockFailure, MockProvider};

const IDEA: &str = "A 3D mech shooter";

fn generator_with(mock: &Arc<MockProvider>) -> SpecGenerator {
    SpecGenerator::new(LlmConfig::default()).with_provider(mock.clone())
}

// =============================================================================
// LLM Path
// =============================================================================

#[tokio::test]
async fn test_valid_llm_output_is_used() {
    let mock = Arc::new(MockProvider::replying(llm_spec_json().to_string()));
    let (spec, source) = generator_with(&mock).generate_with_source(IDEA, true).await;

    assert_eq!(source, SpecSource::Llm);
    assert_eq!(spec.title, "Mech Arena");
    assert_eq!(spec.game_type, GameType::ThreeD);
    assert_eq!(spec.engine, "unreal");
    assert_eq!(spec.key_features.len(), 2);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_request_shape() {
    let mock = Arc::new(MockProvider::replying(llm_spec_json().to_string()));
    generator_with(&mock).generate(IDEA, true).await;

    let request = mock.last_request().expect("provider was called");
    assert_eq!(request.system_prompt.as_deref(), Some(JSON_ONLY_SYSTEM_PROMPT));
    assert_eq!(request.temperature, Some(0.2));
    assert_eq!(request.max_tokens, Some(800));
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, MessageRole::User);
    assert!(request.messages[0].content.contains("Game idea:\nA 3D mech shooter"));
}

#[tokio::test]
async fn test_fenced_llm_output_is_used() {
    let fenced = format!("```json\n{}\n```", llm_spec_json());
    let mock = Arc::new(MockProvider::replying(fenced));
    let (spec, source) = generator_with(&mock).generate_with_source(IDEA, true).await;

    assert_eq!(source, SpecSource::Llm);
    assert_eq!(spec.genre, "shooter");
}

#[tokio::test]
async fn test_prose_wrapped_llm_output_is_salvaged() {
    let chatty = format!("Here is your spec:\n{}\nHave fun!", llm_spec_json());
    let mock = Arc::new(MockProvider::replying(chatty));
    let (_, source) = generator_with(&mock).generate_with_source(IDEA, true).await;
    assert_eq!(source, SpecSource::Llm);
}

#[tokio::test]
async fn test_unknown_engine_accepted_unless_strict() {
    let mut body = llm_spec_json();
    body["engine"] = "bevy".into();

    let mock = Arc::new(MockProvider::replying(body.to_string()));
    let spec = generator_with(&mock).generate(IDEA, true).await;
    assert_eq!(spec.engine, "bevy");

    let strict = LlmConfig {
        strict_enums: true,
        ..LlmConfig::default()
    };
    let mock = Arc::new(MockProvider::replying(body.to_string()));
    let (spec, source) = SpecGenerator::new(strict)
        .with_provider(mock)
        .generate_with_source(IDEA, true)
        .await;
    assert_eq!(source, SpecSource::Heuristic);
    assert_eq!(spec, heuristic::parse(IDEA));
}

// =============================================================================
// Fallback
// =============================================================================

async fn assert_falls_back(mock: MockProvider) {
    let mock = Arc::new(mock);
    let (spec, source) = generator_with(&mock).generate_with_source(IDEA, true).await;
    assert_eq!(source, SpecSource::Heuristic);
    assert_eq!(spec, heuristic::parse(IDEA));
    assert_eq!(mock.call_count(), 1, "exactly one attempt, no retries");
}

#[tokio::test]
async fn test_fallback_on_api_error() {
    assert_falls_back(MockProvider::failing(MockFailure::Api {
        status: 500,
        message: "internal error".to_string(),
    }))
    .await;
}

#[tokio::test]
async fn test_fallback_on_unknown_envelope() {
    assert_falls_back(MockProvider::failing(MockFailure::InvalidResponse(
        "{\"weird\": true}".to_string(),
    )))
    .await;
}

#[tokio::test]
async fn test_fallback_on_provider_configuration_error() {
    assert_falls_back(MockProvider::failing(MockFailure::MissingKey)).await;
}

#[tokio::test]
async fn test_fallback_on_malformed_json() {
    assert_falls_back(MockProvider::replying("{\"title\": \"Mech\", ")).await;
}

#[tokio::test]
async fn test_fallback_on_non_object_json() {
    assert_falls_back(MockProvider::replying("[\"Mech Arena\", \"3D\"]")).await;
}

#[tokio::test]
async fn test_fallback_on_schema_mismatch() {
    let mut body = llm_spec_json();
    body.as_object_mut().unwrap().remove("genre");
    assert_falls_back(MockProvider::replying(body.to_string())).await;
}

#[tokio::test]
async fn test_fallback_on_bad_game_type() {
    let mut body = llm_spec_json();
    body["game_type"] = "VR".into();
    assert_falls_back(MockProvider::replying(body.to_string())).await;
}

#[tokio::test]
async fn test_fallback_on_missing_api_key() {
    let generator = SpecGenerator::new(config_without_key());
    let (spec, source) = generator.generate_with_source(IDEA, true).await;

    assert_eq!(source, SpecSource::Heuristic);
    assert_eq!(spec, heuristic::parse(IDEA));
}

#[tokio::test]
async fn test_fallback_on_connection_refused() {
    let provider = OpenAIProvider::new(
        "sk-test".to_string(),
        "gpt-4o-mini".to_string(),
        800,
        Some("http://127.0.0.1:9/v1".to_string()),
        None,
    )
    .unwrap();
    let generator = SpecGenerator::new(LlmConfig::default()).with_provider(Arc::new(provider));

    let (spec, source) = generator.generate_with_source(IDEA, true).await;
    assert_eq!(source, SpecSource::Heuristic);
    assert_eq!(spec, heuristic::parse(IDEA));
}

/// Shared buffer the test subscriber writes formatted events into.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_fallback_emits_warning_with_kind() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mock = Arc::new(MockProvider::failing(MockFailure::Api {
        status: 503,
        message: "unavailable".to_string(),
    }));
    let (_, source) = generator_with(&mock).generate_with_source(IDEA, true).await;
    assert_eq!(source, SpecSource::Heuristic);

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("WARN"), "captured: {output}");
    assert!(output.contains("falling back to heuristics"));
    assert!(output.contains("kind=\"transport\""));
}

#[tokio::test]
async fn test_llm_path_reports_error_kind() {
    let mock = Arc::new(MockProvider::replying("not json"));
    let err = generator_with(&mock).generate_with_llm(IDEA).await.unwrap_err();
    assert_eq!(err.kind(), "generation");

    let generator = SpecGenerator::new(config_without_key());
    let err = generator.generate_with_llm(IDEA).await.unwrap_err();
    assert_eq!(err.kind(), "configuration");
}

// =============================================================================
// Heuristic-only Path
// =============================================================================

#[tokio::test]
async fn test_llm_disabled_never_calls_provider() {
    let mock = Arc::new(MockProvider::replying(llm_spec_json().to_string()));
    let (spec, source) = generator_with(&mock).generate_with_source(IDEA, false).await;

    assert_eq!(source, SpecSource::Heuristic);
    assert_eq!(spec, heuristic::parse(IDEA));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_llm_disabled_needs_no_credentials() {
    let generator = SpecGenerator::new(config_without_key());
    let spec = generator.generate("an unreal rpg", false).await;
    assert_eq!(spec.engine, "unreal");
    assert_eq!(spec.genre, "rpg");
}
