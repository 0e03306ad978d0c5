//! Icebreaker generation — orchestrates the pipeline.
//!
//! Flow: validate → build_prompt → dispatch (one attempt) → strict parse →
//!       return result.
//!
//! A result only exists if the whole flow succeeds. Every failure is logged
//! before it is returned. Analytics helpers live here too, but the handler
//! calls them: a submission's terminal event depends on whether its outcome
//! was published.

use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::analytics::{self, AnalyticsSink};
use crate::icebreaker::models::{IcebreakerResult, ProfileInput};
use crate::icebreaker::prompts::build_prompt;
use crate::icebreaker::schema::{parse_result, response_schema};
use crate::icebreaker::validation::{validate_profile, FieldError};
use crate::llm_client::{GenerationBackend, LlmError, SamplingParams};

pub const COMMUNICATION_MESSAGE: &str =
    "Failed to communicate with the Gemini API. Please check your API key and network connection.";
pub const FORMAT_MESSAGE: &str =
    "The model's response did not match the expected format. Please try again.";
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{} required field(s) missing", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Generation service call failed: {0}")]
    Communication(#[from] LlmError),

    #[error("Model output did not match the response contract: {source}")]
    Format {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure category, used as the analytics reason tag and error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    Validation,
    Communication,
    Format,
    Superseded,
}

impl FailureReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureReason::Validation => "validation",
            FailureReason::Communication => "communication",
            FailureReason::Format => "format",
            FailureReason::Superseded => "superseded",
        }
    }
}

impl GenerationError {
    pub fn reason(&self) -> FailureReason {
        match self {
            GenerationError::Validation(_) => FailureReason::Validation,
            GenerationError::Communication(_) => FailureReason::Communication,
            GenerationError::Format { .. } => FailureReason::Format,
        }
    }

    /// Message safe to show an end user. Never includes raw model output.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::Validation(_) => VALIDATION_MESSAGE,
            GenerationError::Communication(_) => COMMUNICATION_MESSAGE,
            GenerationError::Format { .. } => FORMAT_MESSAGE,
        }
    }
}

/// Runs the full pipeline for one submission.
///
/// Invalid input never reaches the backend. The backend is called exactly once
/// otherwise, with no retry on any failure. Emits no analytics: the caller
/// decides which terminal event a submission gets once it knows whether the
/// outcome was published.
pub async fn generate_icebreakers(
    backend: &dyn GenerationBackend,
    sampling: SamplingParams,
    profile: &ProfileInput,
) -> Result<IcebreakerResult, GenerationError> {
    if let Err(fields) = validate_profile(profile) {
        warn!(
            "Rejected submission: missing {:?}",
            fields.iter().map(|f| f.field).collect::<Vec<_>>()
        );
        return Err(GenerationError::Validation(fields));
    }

    let prompt = build_prompt(profile);
    info!(
        "Generating icebreakers for {} at {} (model: {})",
        profile.prospect_name,
        profile.prospect_company,
        backend.model()
    );

    match backend.generate(&prompt, &response_schema(), sampling).await {
        Ok(raw) => match parse_result(&raw) {
            Ok(result) => {
                info!("Icebreakers generated for {}", profile.prospect_company);
                Ok(result)
            }
            Err(source) => {
                warn!("Model output failed to parse ({source}); raw response: {raw:?}");
                Err(GenerationError::Format { raw, source })
            }
        },
        Err(e) => {
            error!("Error generating icebreakers: {e}");
            Err(GenerationError::Communication(e))
        }
    }
}

/// Records that a valid form was submitted for generation.
pub fn track_submission(analytics: &dyn AnalyticsSink, profile: &ProfileInput) {
    analytics::track(
        analytics,
        analytics::FORM_SUBMISSION,
        json!({ "hasOptionalFields": profile.has_optional_fields() }),
    );
}

/// Records the single terminal event for a submission whose outcome was
/// published.
pub fn track_outcome(
    analytics: &dyn AnalyticsSink,
    profile: &ProfileInput,
    outcome: Result<&IcebreakerResult, &GenerationError>,
) {
    match outcome {
        Ok(_) => analytics::track(
            analytics,
            analytics::GENERATION_SUCCESS,
            json!({ "prospectCompany": profile.prospect_company }),
        ),
        Err(err) => track_failure(analytics, err.reason(), profile),
    }
}

/// Records the terminal event for a submission a newer one replaced.
pub fn track_superseded(analytics: &dyn AnalyticsSink, profile: &ProfileInput) {
    track_failure(analytics, FailureReason::Superseded, profile);
}

fn track_failure(analytics: &dyn AnalyticsSink, reason: FailureReason, profile: &ProfileInput) {
    analytics::track(
        analytics,
        analytics::GENERATION_FAILURE,
        json!({
            "reason": reason.as_str(),
            "prospectCompany": profile.prospect_company,
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::RecordingSink;
    use crate::llm_client::testing::{Script, ScriptedBackend};

    const VALID: &str = r#"{
        "primaryIcebreaker": "Hi Sarah, what's been the hardest part of scaling outreach at TechFlow?",
        "variations": {"variationA": "A", "variationB": "B", "variationC": "C"},
        "personalizationInsights": "Role-specific pain point."
    }"#;

    fn sarah() -> ProfileInput {
        ProfileInput {
            prospect_name: "Sarah Chen".to_string(),
            prospect_title: "Head of Growth".to_string(),
            prospect_company: "TechFlow".to_string(),
            what_you_sell: "Outreach automation".to_string(),
            who_you_are: "Marketing Specialist".to_string(),
            ..Default::default()
        }
    }

    async fn run(
        backend: &ScriptedBackend,
        profile: &ProfileInput,
    ) -> Result<IcebreakerResult, GenerationError> {
        generate_icebreakers(backend, SamplingParams::default(), profile).await
    }

    #[tokio::test]
    async fn test_valid_response_yields_equal_result() {
        let backend = ScriptedBackend::text(VALID);

        let result = run(&backend, &sarah()).await.unwrap();

        assert_eq!(result, parse_result(VALID).unwrap());
        assert_eq!(result.variations.variation_a, "A");
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_backend_receives_built_prompt() {
        let backend = ScriptedBackend::text(VALID);
        let profile = sarah();

        run(&backend, &profile).await.unwrap();

        assert_eq!(backend.last_prompt().unwrap(), build_prompt(&profile));
    }

    #[tokio::test]
    async fn test_invalid_profile_never_dispatches() {
        let backend = ScriptedBackend::text(VALID);
        let profile = ProfileInput {
            who_you_are: "   ".to_string(),
            ..sarah()
        };

        let err = run(&backend, &profile).await.unwrap_err();

        match &err {
            GenerationError::Validation(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "whoYouAre");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(err.reason(), FailureReason::Validation);
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_prose_wrapped_response_is_format_error() {
        let backend = ScriptedBackend::text(format!("Here you go:\n{VALID}"));

        let err = run(&backend, &sarah()).await.unwrap_err();

        match &err {
            GenerationError::Format { raw, .. } => assert!(raw.starts_with("Here you go:")),
            other => panic!("expected format error, got {other:?}"),
        }
        assert_eq!(err.reason(), FailureReason::Format);
        assert_eq!(err.user_message(), FORMAT_MESSAGE);
        assert!(!err.user_message().contains("Here you go"));
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_truncated_response_is_format_error() {
        let backend = ScriptedBackend::text(&VALID[..40]);

        let err = run(&backend, &sarah()).await.unwrap_err();

        assert!(matches!(err, GenerationError::Format { .. }));
    }

    #[tokio::test]
    async fn test_missing_nested_field_is_format_error() {
        let backend = ScriptedBackend::text(
            r#"{"primaryIcebreaker":"p","variations":{"variationA":"a","variationC":"c"},"personalizationInsights":"i"}"#,
        );

        let err = run(&backend, &sarah()).await.unwrap_err();

        assert!(matches!(err, GenerationError::Format { .. }));
    }

    #[tokio::test]
    async fn test_empty_response_is_format_error() {
        let backend = ScriptedBackend::text("");

        let err = run(&backend, &sarah()).await.unwrap_err();

        assert!(matches!(err, GenerationError::Format { .. }));
    }

    #[tokio::test]
    async fn test_transport_failure_is_communication_error_without_retry() {
        let backend = ScriptedBackend::new(Script::ApiError {
            status: 401,
            message: "API key not valid".to_string(),
        });

        let err = run(&backend, &sarah()).await.unwrap_err();

        assert!(matches!(err, GenerationError::Communication(LlmError::Api { status: 401, .. })));
        assert_eq!(err.user_message(), COMMUNICATION_MESSAGE);
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_timeout_is_communication_error() {
        let backend = ScriptedBackend::new(Script::Timeout);

        let err = run(&backend, &sarah()).await.unwrap_err();

        assert_eq!(err.reason(), FailureReason::Communication);
    }

    #[test]
    fn test_track_outcome_emits_one_event_per_outcome() {
        let sink = RecordingSink::default();
        let profile = sarah();

        track_outcome(&sink, &profile, Ok(&parse_result(VALID).unwrap()));
        track_outcome(
            &sink,
            &profile,
            Err(&GenerationError::Communication(LlmError::Timeout(60))),
        );

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_name, "generation_success");
        assert_eq!(events[0].event_data["prospectCompany"], "TechFlow");
        assert_eq!(events[1].event_name, "generation_failure");
        assert_eq!(events[1].event_data["reason"], "communication");
    }

    #[test]
    fn test_submission_and_superseded_events() {
        let sink = RecordingSink::default();
        let profile = ProfileInput::example();

        track_submission(&sink, &profile);
        track_superseded(&sink, &profile);

        assert_eq!(sink.names(), vec!["form_submission", "generation_failure"]);
        assert_eq!(
            sink.find(analytics::FORM_SUBMISSION).unwrap().event_data["hasOptionalFields"],
            true
        );
        assert_eq!(
            sink.find(analytics::GENERATION_FAILURE).unwrap().event_data["reason"],
            "superseded"
        );
    }
}
