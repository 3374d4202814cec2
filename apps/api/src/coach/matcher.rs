//! JD Matcher — scores a resume against a job description and proposes
//! keyword-aligned improvements.

use serde_json::{json, Value};

use crate::coach::prompts::{MATCHER_SYSTEM, MATCH_PROMPT_TEMPLATE};
use crate::coach::roundtrip::{self, FeatureProfile};
use crate::errors::AppError;
use crate::llm_client::ChatCompleter;

pub const MATCHER: FeatureProfile = FeatureProfile {
    name: "jd-matcher",
    system: MATCHER_SYSTEM,
    error_context: "Failed to match resume with job description",
    fallback: match_fallback,
};

/// Static fallback substituted when the model's reply cannot be parsed.
fn match_fallback() -> Value {
    json!({
        "matchScore": 65,
        "keywordMatches": {
            "matched": ["JavaScript", "React"],
            "missing": ["TypeScript", "Node.js", "AWS"]
        },
        "optimizedSummary": "Experienced developer with strong technical skills.",
        "improvedBullets": [
            "Add relevant experience matching the job requirements",
            "Include specific technologies mentioned in the JD"
        ]
    })
}

/// Runs the match round-trip. Both texts go into the prompt verbatim.
pub async fn match_resume_to_jd(
    llm: &dyn ChatCompleter,
    resume: &str,
    job_description: &str,
) -> Result<Value, AppError> {
    let prompt = MATCH_PROMPT_TEMPLATE
        .replace("{resume}", resume)
        .replace("{job_description}", job_description);
    roundtrip::run(llm, &MATCHER, &prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_documented_shape() {
        let fallback = match_fallback();
        assert_eq!(fallback["matchScore"], 65);
        assert_eq!(
            fallback["keywordMatches"]["matched"],
            json!(["JavaScript", "React"])
        );
        assert_eq!(
            fallback["keywordMatches"]["missing"],
            json!(["TypeScript", "Node.js", "AWS"])
        );
        assert_eq!(
            fallback["optimizedSummary"],
            "Experienced developer with strong technical skills."
        );
        assert_eq!(fallback["improvedBullets"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_prompt_embeds_both_texts() {
        let prompt = MATCH_PROMPT_TEMPLATE
            .replace("{resume}", "my resume text")
            .replace("{job_description}", "the job description text");
        assert!(prompt.contains("my resume text"));
        assert!(prompt.contains("the job description text"));
        assert!(!prompt.contains("{resume}"));
        assert!(!prompt.contains("{job_description}"));
    }
}
