//! Axum route handlers for the Icebreaker API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::analytics::{self, AnalyticsEvent};
use crate::errors::AppError;
use crate::icebreaker::generator::{
    generate_icebreakers, track_outcome, track_submission, track_superseded, GenerationError,
};
use crate::icebreaker::models::{CardKind, IcebreakerResult, ProfileInput};
use crate::icebreaker::session::Outcome;
use crate::icebreaker::validation::validate_profile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientEventRequest {
    pub event_name: String,
    #[serde(default)]
    pub event_data: Value,
}

/// A copy of one card's text, possibly edited by the user.
#[derive(Debug, Deserialize)]
pub struct CopyRequest {
    pub card: CardKind,
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyReceipt {
    pub card_title: &'static str,
    pub is_primary: bool,
    pub was_edited: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/icebreakers
///
/// Runs the generation pipeline for one profile and publishes the outcome as
/// the visible one. An invalid profile is rejected before a submission starts,
/// so it never replaces a request that is still in flight. If a newer
/// submission started meanwhile, this one is answered with 409 and its outcome
/// is dropped. Each submission emits exactly one terminal analytics event.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(profile): Json<ProfileInput>,
) -> Result<Json<IcebreakerResult>, AppError> {
    if let Err(fields) = validate_profile(&profile) {
        warn!("Rejected submission for {}: {} field(s) missing", profile.prospect_company, fields.len());
        let err = GenerationError::Validation(fields);
        track_outcome(state.analytics.as_ref(), &profile, Err(&err));
        return Err(err.into());
    }
    track_submission(state.analytics.as_ref(), &profile);

    let submission = state.results.begin().await;
    let outcome = generate_icebreakers(state.backend.as_ref(), state.sampling, &profile).await;

    if !state.results.publish(submission, &outcome).await {
        track_superseded(state.analytics.as_ref(), &profile);
        return Err(AppError::Conflict(
            "A newer submission replaced this one".to_string(),
        ));
    }
    track_outcome(state.analytics.as_ref(), &profile, outcome.as_ref());

    Ok(Json(outcome?))
}

/// GET /api/v1/icebreakers/latest
pub async fn handle_latest(State(state): State<AppState>) -> Json<Outcome> {
    Json(state.results.snapshot().await)
}

/// GET /api/v1/profile/example
pub async fn handle_example_profile(State(state): State<AppState>) -> Json<ProfileInput> {
    analytics::track(state.analytics.as_ref(), analytics::LOAD_EXAMPLE_DATA, Value::Null);
    Json(ProfileInput::example())
}

/// POST /api/v1/icebreakers/copy
///
/// Records a copy of one card. The submitted text is compared with the
/// original to flag edits; the visible result itself is never changed.
pub async fn handle_copy(
    State(state): State<AppState>,
    Json(request): Json<CopyRequest>,
) -> Result<Json<CopyReceipt>, AppError> {
    let result = state
        .results
        .current_result()
        .await
        .ok_or_else(|| AppError::NotFound("No icebreakers have been generated yet".to_string()))?;

    let original = result.card_text(request.card).ok_or_else(|| {
        AppError::NotFound(format!(
            "'{}' is not part of the current result",
            request.card.title()
        ))
    })?;

    let receipt = CopyReceipt {
        card_title: request.card.title(),
        is_primary: request.card.is_primary(),
        was_edited: request.text != original,
    };

    analytics::track(
        state.analytics.as_ref(),
        analytics::COPY_ICEBREAKER,
        json!({
            "cardTitle": receipt.card_title,
            "isPrimary": receipt.is_primary,
            "wasEdited": receipt.was_edited,
        }),
    );

    Ok(Json(receipt))
}

/// POST /api/v1/events
///
/// Client-side analytics passthrough (theme switches, edits, form clears).
pub async fn handle_client_event(
    State(state): State<AppState>,
    Json(request): Json<ClientEventRequest>,
) -> Result<StatusCode, AppError> {
    if request.event_name.trim().is_empty() {
        return Err(AppError::validation("eventName cannot be empty"));
    }

    state
        .analytics
        .track(AnalyticsEvent::new(request.event_name, request.event_data));

    Ok(StatusCode::ACCEPTED)
}
