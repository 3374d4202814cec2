//! Resume Analyzer — ATS-style score plus weak sections, suggestions, and
//! missing information for a pasted resume.

use serde_json::{json, Value};

use crate::coach::prompts::{ANALYZER_SYSTEM, ANALYZE_PROMPT_TEMPLATE};
use crate::coach::roundtrip::{self, FeatureProfile};
use crate::errors::AppError;
use crate::llm_client::ChatCompleter;

pub const ANALYZER: FeatureProfile = FeatureProfile {
    name: "resume-analyzer",
    system: ANALYZER_SYSTEM,
    error_context: "Failed to analyze resume",
    fallback: analysis_fallback,
};

/// Static fallback substituted when the model's reply cannot be parsed.
/// Illustrative filler, not derived from the user's input — the caller always
/// receives a renderable payload.
fn analysis_fallback() -> Value {
    json!({
        "atsScore": 75,
        "weakSections": ["Experience", "Skills"],
        "suggestions": [
            "Add quantifiable metrics to your achievements",
            "Use more action verbs (e.g., 'Led', 'Implemented', 'Increased')"
        ],
        "missingInfo": ["Contact information", "Relevant certifications"]
    })
}

/// Runs the analysis round-trip for a resume. The resume text goes into the
/// prompt verbatim.
pub async fn analyze_resume(llm: &dyn ChatCompleter, resume: &str) -> Result<Value, AppError> {
    let prompt = ANALYZE_PROMPT_TEMPLATE.replace("{resume}", resume);
    roundtrip::run(llm, &ANALYZER, &prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_documented_shape() {
        let fallback = analysis_fallback();
        assert_eq!(fallback["atsScore"], 75);
        assert_eq!(fallback["weakSections"], json!(["Experience", "Skills"]));
        assert_eq!(fallback["suggestions"].as_array().unwrap().len(), 2);
        assert_eq!(
            fallback["missingInfo"],
            json!(["Contact information", "Relevant certifications"])
        );
    }

    #[test]
    fn test_prompt_embeds_resume_verbatim() {
        let prompt =
            ANALYZE_PROMPT_TEMPLATE.replace("{resume}", "Software Engineer with 5 years...");
        assert!(prompt.contains("Software Engineer with 5 years..."));
        assert!(!prompt.contains("{resume}"));
        assert!(prompt.ends_with("Return ONLY valid JSON, no additional text."));
    }
}
