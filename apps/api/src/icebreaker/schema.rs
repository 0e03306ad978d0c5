//! Response contract — the schema handed to the generation service, and the
//! strict parse that turns its text into an `IcebreakerResult`.

use serde_json::{json, Value};

use crate::icebreaker::models::IcebreakerResult;

/// Declared output shape, in the generation service's OpenAPI-subset dialect.
///
/// `followUpQuestions` is declared but optional; everything else is required.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "primaryIcebreaker": {
                "type": "STRING",
                "description": "The main, highly personalized icebreaker message (150-250 characters)."
            },
            "variations": {
                "type": "OBJECT",
                "properties": {
                    "variationA": {
                        "type": "STRING",
                        "description": "Alternative icebreaker focusing on their role/responsibilities."
                    },
                    "variationB": {
                        "type": "STRING",
                        "description": "Alternative icebreaker focusing on their company/industry trends."
                    },
                    "variationC": {
                        "type": "STRING",
                        "description": "Alternative icebreaker focusing on a mutual connection or shared interest."
                    }
                },
                "required": ["variationA", "variationB", "variationC"]
            },
            "personalizationInsights": {
                "type": "STRING",
                "description": "A brief explanation (2-3 sentences) of why this icebreaker approach works for this specific prospect."
            },
            "followUpQuestions": {
                "type": "OBJECT",
                "properties": {
                    "question1": {
                        "type": "STRING",
                        "description": "Follow-up probing an industry or pain point, for after the prospect replies."
                    },
                    "question2": {
                        "type": "STRING",
                        "description": "Follow-up tied to a specific detail of the prospect's profile."
                    }
                },
                "required": ["question1", "question2"]
            }
        },
        "required": ["primaryIcebreaker", "variations", "personalizationInsights"]
    })
}

/// Trims and parses model output in one strict pass.
///
/// No fence stripping and no repair: prose, markdown, truncation, missing keys,
/// unknown keys and wrong types are all errors.
pub fn parse_result(raw: &str) -> Result<IcebreakerResult, serde_json::Error> {
    serde_json::from_str(raw.trim())
}
