// Shared prompt fragments.
// Each feature that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the pieces that are not feature-specific.

/// Placeholder interpolated for any optional input the user left blank.
/// Blank inputs are always rendered with this text, never dropped.
pub const NOT_PROVIDED: &str = "Not provided";

/// Closing directive that pins the model to raw JSON output.
pub const JSON_ONLY_RULE: &str = "- **JSON ONLY:** The final output must be nothing but the raw JSON object. No markdown, no commentary.";

/// Renders an optional field, substituting `NOT_PROVIDED` when blank.
pub fn or_not_provided(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_PROVIDED,
    }
}
