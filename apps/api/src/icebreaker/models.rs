use serde::{Deserialize, Serialize};

/// One form submission: the prospect being contacted plus who is reaching out.
///
/// Required fields default to empty so a missing key is reported per field by
/// validation instead of failing JSON extraction as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[serde(default)]
    pub prospect_name: String,
    #[serde(default)]
    pub prospect_title: String,
    #[serde(default)]
    pub prospect_company: String,
    #[serde(default)]
    pub what_you_sell: String,
    #[serde(default)]
    pub who_you_are: String,
    pub activity: Option<String>,
    pub connections: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
}

impl ProfileInput {
    /// True when at least one optional field carries non-blank text.
    pub fn has_optional_fields(&self) -> bool {
        [
            &self.activity,
            &self.connections,
            &self.industry,
            &self.location,
            &self.skills,
        ]
        .iter()
        .any(|f| f.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }

    /// The canned profile behind the form's "load example" button.
    pub fn example() -> Self {
        Self {
            prospect_name: "Sarah Chen".to_string(),
            prospect_title: "Head of Growth".to_string(),
            prospect_company: "TechFlow".to_string(),
            what_you_sell:
                "A LinkedIn automation tool that helps growth teams scale their outreach effectively."
                    .to_string(),
            who_you_are: "Marketing Specialist at Bearconnect".to_string(),
            activity: Some(
                "Recently posted an article on LinkedIn about the challenges of scaling B2B outreach in 2024."
                    .to_string(),
            ),
            connections: Some("We are both connected with John Doe from SaaS Inc.".to_string()),
            industry: Some("B2B SaaS".to_string()),
            location: Some("San Francisco, CA".to_string()),
            skills: Some("Growth Hacking, Demand Generation, SEO".to_string()),
        }
    }
}

/// Three alternative angles on the primary message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Variations {
    pub variation_a: String,
    pub variation_b: String,
    pub variation_c: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FollowUpQuestions {
    pub question1: String,
    pub question2: String,
}

/// Structured model output. Only ever built by a strict parse of the model's
/// response; unknown keys and missing required keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IcebreakerResult {
    pub primary_icebreaker: String,
    pub variations: Variations,
    pub personalization_insights: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_questions: Option<FollowUpQuestions>,
}

/// A copyable text card in the result display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardKind {
    Primary,
    VariationA,
    VariationB,
    VariationC,
    FollowUp1,
    FollowUp2,
}

impl CardKind {
    pub fn title(self) -> &'static str {
        match self {
            CardKind::Primary => "Primary Icebreaker",
            CardKind::VariationA => "Variation A: Role-focused",
            CardKind::VariationB => "Variation B: Company-focused",
            CardKind::VariationC => "Variation C: Connection-focused",
            CardKind::FollowUp1 => "Follow-Up: Industry/Pain Point",
            CardKind::FollowUp2 => "Follow-Up: Profile-Specific",
        }
    }

    pub fn is_primary(self) -> bool {
        self == CardKind::Primary
    }
}

impl IcebreakerResult {
    /// Original text of a card. `None` for follow-up cards when the model
    /// returned no follow-up questions.
    pub fn card_text(&self, card: CardKind) -> Option<&str> {
        match card {
            CardKind::Primary => Some(&self.primary_icebreaker),
            CardKind::VariationA => Some(&self.variations.variation_a),
            CardKind::VariationB => Some(&self.variations.variation_b),
            CardKind::VariationC => Some(&self.variations.variation_c),
            CardKind::FollowUp1 => self.follow_up_questions.as_ref().map(|q| q.question1.as_str()),
            CardKind::FollowUp2 => self.follow_up_questions.as_ref().map(|q| q.question2.as_str()),
        }
    }
}
