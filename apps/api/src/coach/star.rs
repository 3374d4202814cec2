//! STAR Generator — structured Situation/Task/Action/Result interview answers.
//!
//! Unlike the other features this one has a policy branch: a question without
//! any supporting notes gets a prompt-for-more-detail response instead of an
//! LLM call. That response is HTTP 200, not an error — callers must be able to
//! tell it apart from a validation failure.

use serde_json::{json, Value};

use crate::coach::prompts::{STAR_PROMPT_TEMPLATE, STAR_SYSTEM};
use crate::coach::roundtrip::{self, FeatureProfile};
use crate::errors::AppError;
use crate::llm_client::ChatCompleter;

/// Fixed message returned when the user gave a question but no notes.
pub const NEEDS_CONTEXT_MESSAGE: &str = "Please provide some context about the situation, \
    task, action, or result to generate a personalized STAR answer.";

pub const STAR: FeatureProfile = FeatureProfile {
    name: "star-generator",
    system: STAR_SYSTEM,
    error_context: "Failed to generate STAR answer",
    fallback: star_fallback,
};

/// Static fallback substituted when the model's reply cannot be parsed.
fn star_fallback() -> Value {
    json!({
        "situation": "Based on your notes, describe the situation.",
        "task": "Based on your notes, describe the task.",
        "action": "Based on your notes, describe the actions taken.",
        "result": "Based on your notes, describe the results achieved.",
        "fullAnswer": "Please provide more specific context to generate a better answer."
    })
}

/// Outcome of a STAR request. The two arms are mutually exclusive: either the
/// generated answer payload or the needs-context policy response.
#[derive(Debug)]
pub enum StarAnswer {
    NeedsContext { message: String },
    Generated(Value),
}

impl StarAnswer {
    /// The HTTP response body for this outcome.
    pub fn into_value(self) -> Value {
        match self {
            StarAnswer::NeedsContext { message } => json!({
                "needsContext": true,
                "message": message
            }),
            StarAnswer::Generated(value) => value,
        }
    }
}

/// Generates a STAR answer, or asks for more context when notes are absent.
/// The job role, when present, adds a single tailoring sentence to the prompt;
/// it never affects the needs-context branch.
pub async fn generate_star_answer(
    llm: &dyn ChatCompleter,
    question: &str,
    user_notes: Option<&str>,
    job_role: Option<&str>,
) -> Result<StarAnswer, AppError> {
    let notes = user_notes.unwrap_or("").trim();
    if notes.is_empty() {
        return Ok(StarAnswer::NeedsContext {
            message: NEEDS_CONTEXT_MESSAGE.to_string(),
        });
    }

    let role_context = match job_role {
        Some(role) if !role.trim().is_empty() => {
            format!("The candidate is applying for a {} role.", role.trim())
        }
        _ => String::new(),
    };

    let prompt = STAR_PROMPT_TEMPLATE
        .replace("{question}", question)
        .replace("{user_notes}", notes)
        .replace("{role_context}", &role_context);

    let answer = roundtrip::run(llm, &STAR, &prompt).await?;
    Ok(StarAnswer::Generated(answer))
}
