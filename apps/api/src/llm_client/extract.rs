//! Best-effort JSON extraction from raw LLM replies.
//!
//! Models are instructed to return only JSON, but replies routinely arrive
//! wrapped in prose or markdown fences. The scan here takes the substring from
//! the first `{` through the last `}` and tries to parse it — a greedy scan,
//! not a balanced one. Known failure mode: prose containing an unrelated `{`
//! or `}` outside the intended object makes the slice unparseable. Callers
//! must treat `None` as "use the fallback", never as a hard error.

use serde_json::Value;

/// Returns the parsed JSON object embedded in `text`, or `None` when no
/// `{...}` substring exists or the substring is not valid JSON.
pub fn extract_json_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_bare_object() {
        let parsed = extract_json_object(r#"{"atsScore": 82}"#).unwrap();
        assert_eq!(parsed, json!({"atsScore": 82}));
    }

    #[test]
    fn test_extracts_object_surrounded_by_prose() {
        let reply = r#"Here is your analysis: {"atsScore": 82, "weakSections": []} Hope it helps!"#;
        let parsed = extract_json_object(reply).unwrap();
        assert_eq!(parsed["atsScore"], 82);
    }

    #[test]
    fn test_extracts_object_inside_markdown_fences() {
        let reply = "```json\n{\"matchScore\": 71}\n```";
        let parsed = extract_json_object(reply).unwrap();
        assert_eq!(parsed["matchScore"], 71);
    }

    #[test]
    fn test_none_when_no_braces() {
        assert!(extract_json_object("I cannot produce JSON for that.").is_none());
    }

    #[test]
    fn test_none_on_empty_reply() {
        assert!(extract_json_object("").is_none());
    }

    #[test]
    fn test_none_on_malformed_object() {
        assert!(extract_json_object(r#"{"atsScore": }"#).is_none());
    }

    #[test]
    fn test_none_on_reversed_braces() {
        assert!(extract_json_object("} nothing here {").is_none());
    }

    /// Greedy-scan limitation: a brace in prose before the real object widens
    /// the slice until it no longer parses. The result is the fallback path,
    /// not a wrong object.
    #[test]
    fn test_unrelated_brace_in_prose_falls_through_to_none() {
        let reply = r#"Use {placeholders} carefully. {"atsScore": 90}"#;
        assert!(extract_json_object(reply).is_none());
    }

    #[test]
    fn test_nested_objects_parse_whole() {
        let reply = r#"{"keywordMatches": {"matched": ["Rust"], "missing": []}}"#;
        let parsed = extract_json_object(reply).unwrap();
        assert_eq!(parsed["keywordMatches"]["matched"][0], "Rust");
    }
}
