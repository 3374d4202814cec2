#![allow(dead_code)]

//! Render-side view models for handler responses.
//!
//! The browser UI itself lives elsewhere; what ships here is the rendering
//! contract it depends on. A handler response is a raw `serde_json::Value` —
//! the model's JSON or a feature fallback — and these view models turn it into
//! fields a renderer can display directly: normalized string lists, coerced
//! STAR paragraphs, and scores with a display-clamped bar width.

pub mod normalize;

use serde_json::Value;

use crate::coach::star::NEEDS_CONTEXT_MESSAGE;
use crate::view::normalize::{
    normalize_items, normalize_labeled_items, star_field_text, ScoreDisplay,
};

/// Renderable form of a resume analysis response.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub ats_score: Option<ScoreDisplay>,
    pub weak_sections: Vec<String>,
    pub suggestions: Vec<String>,
    pub missing_info: Vec<String>,
}

impl AnalysisView {
    pub fn from_response(response: &Value) -> Self {
        Self {
            ats_score: ScoreDisplay::from_field(response.get("atsScore")),
            weak_sections: normalize_items(response.get("weakSections")),
            suggestions: normalize_labeled_items(response.get("suggestions")),
            missing_info: normalize_items(response.get("missingInfo")),
        }
    }
}

/// Renderable form of a JD match response.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchView {
    pub match_score: Option<ScoreDisplay>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub optimized_summary: Option<String>,
    pub improved_bullets: Vec<String>,
}

impl MatchView {
    pub fn from_response(response: &Value) -> Self {
        let keyword_matches = response.get("keywordMatches");
        Self {
            match_score: ScoreDisplay::from_field(response.get("matchScore")),
            matched_keywords: normalize_items(keyword_matches.and_then(|m| m.get("matched"))),
            missing_keywords: normalize_items(keyword_matches.and_then(|m| m.get("missing"))),
            optimized_summary: response
                .get("optimizedSummary")
                .and_then(Value::as_str)
                .map(str::to_string),
            improved_bullets: normalize_labeled_items(response.get("improvedBullets")),
        }
    }
}

/// Renderable form of a STAR response. The two arms are mutually exclusive,
/// mirroring the wire contract: a needs-context notice or a full answer.
#[derive(Debug, Clone, PartialEq)]
pub enum StarView {
    NeedsContext {
        message: String,
    },
    Answer {
        situation: String,
        task: String,
        action: String,
        result: String,
        full_answer: String,
    },
}

impl StarView {
    pub fn from_response(response: &Value) -> Self {
        if response
            .get("needsContext")
            .and_then(Value::as_bool)
            .unwrap_or(false)
        {
            let message = response
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(NEEDS_CONTEXT_MESSAGE)
                .to_string();
            return StarView::NeedsContext { message };
        }

        StarView::Answer {
            situation: star_field_text(response.get("situation")),
            task: star_field_text(response.get("task")),
            action: star_field_text(response.get("action")),
            result: star_field_text(response.get("result")),
            full_answer: star_field_text(response.get("fullAnswer")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analysis_view_from_well_formed_response() {
        let response = json!({
            "atsScore": 82,
            "weakSections": ["Summary", {"section": "Skills"}],
            "suggestions": [{"section": "Experience", "bulletPoint": "Quantify outcomes"}],
            "missingInfo": ["Certifications"]
        });
        let view = AnalysisView::from_response(&response);
        assert_eq!(view.ats_score.unwrap().raw, 82.0);
        assert_eq!(view.weak_sections, vec!["Summary", "Skills"]);
        assert_eq!(view.suggestions, vec!["Experience: Quantify outcomes"]);
        assert_eq!(view.missing_info, vec!["Certifications"]);
    }

    #[test]
    fn test_analysis_view_out_of_range_score_keeps_raw() {
        let view = AnalysisView::from_response(&json!({"atsScore": 150}));
        let score = view.ats_score.unwrap();
        assert_eq!(score.raw, 150.0);
        assert_eq!(score.bar_percent, 100.0);
    }

    #[test]
    fn test_analysis_view_missing_score_renders_no_bar() {
        let view = AnalysisView::from_response(&json!({"atsScore": "high"}));
        assert!(view.ats_score.is_none());
    }

    #[test]
    fn test_match_view_reads_nested_keyword_lists() {
        let response = json!({
            "matchScore": -10,
            "keywordMatches": {
                "matched": ["Rust", {"bulletPoint": "Tokio"}],
                "missing": ["Kubernetes"]
            },
            "optimizedSummary": "Systems engineer.",
            "improvedBullets": ["Did a thing"]
        });
        let view = MatchView::from_response(&response);
        assert_eq!(view.matched_keywords, vec!["Rust", "Tokio"]);
        assert_eq!(view.missing_keywords, vec!["Kubernetes"]);
        assert_eq!(view.optimized_summary.as_deref(), Some("Systems engineer."));
        let score = view.match_score.unwrap();
        assert_eq!(score.raw, -10.0);
        assert_eq!(score.bar_percent, 0.0);
    }

    #[test]
    fn test_match_view_tolerates_missing_keyword_matches() {
        let view = MatchView::from_response(&json!({"matchScore": 50}));
        assert!(view.matched_keywords.is_empty());
        assert!(view.missing_keywords.is_empty());
        assert!(view.optimized_summary.is_none());
    }

    #[test]
    fn test_star_view_needs_context() {
        let view = StarView::from_response(&json!({
            "needsContext": true,
            "message": "Please add notes."
        }));
        assert_eq!(
            view,
            StarView::NeedsContext {
                message: "Please add notes.".to_string()
            }
        );
    }

    #[test]
    fn test_star_view_needs_context_defaults_empty_message() {
        let view = StarView::from_response(&json!({"needsContext": true}));
        match view {
            StarView::NeedsContext { message } => assert!(!message.is_empty()),
            other => panic!("expected needs-context view, got {other:?}"),
        }
    }

    #[test]
    fn test_star_view_answer_coerces_object_fields() {
        let view = StarView::from_response(&json!({
            "situation": "Plain text",
            "task": {"text": "From text key"},
            "action": {"content": "From content key"},
            "result": 12,
            "fullAnswer": "The whole story"
        }));
        match view {
            StarView::Answer {
                situation,
                task,
                action,
                result,
                full_answer,
            } => {
                assert_eq!(situation, "Plain text");
                assert_eq!(task, "From text key");
                assert_eq!(action, "From content key");
                assert_eq!(result, "12");
                assert_eq!(full_answer, "The whole story");
            }
            other => panic!("expected answer view, got {other:?}"),
        }
    }
}
