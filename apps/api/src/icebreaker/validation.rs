use serde::Serialize;

use crate::icebreaker::models::ProfileInput;

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// A single per-field problem, keyed by the wire (camelCase) field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Checks that every required field carries non-whitespace text.
///
/// Returns all failing fields at once, in form order.
pub fn validate_profile(profile: &ProfileInput) -> Result<(), Vec<FieldError>> {
    let required: [(&'static str, &str); 5] = [
        ("prospectName", &profile.prospect_name),
        ("prospectTitle", &profile.prospect_title),
        ("prospectCompany", &profile.prospect_company),
        ("whatYouSell", &profile.what_you_sell),
        ("whoYouAre", &profile.who_you_are),
    ];

    let errors: Vec<FieldError> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| FieldError {
            field: *field,
            message: REQUIRED_MESSAGE.to_string(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
