#![allow(dead_code)]

//! Normalization of variably-shaped LLM output into renderable text.
//!
//! Even with schema instructions in the prompt, list elements arrive as plain
//! strings, as `{section, bulletPoint}` records, or as something else entirely.
//! Every element is classified into the `TextOrRecord` union and rendered
//! through a total display function, so the rendering layer never branches on
//! raw property presence.

use serde_json::{Map, Value};

/// A single list element as the model may return it: plain text, or a small
/// record with optional `section` / `bulletPoint` fields plus anything else.
#[derive(Debug, Clone, PartialEq)]
pub enum TextOrRecord {
    Text(String),
    Record {
        section: Option<String>,
        bullet_point: Option<String>,
        extra: Map<String, Value>,
    },
}

impl TextOrRecord {
    /// Classifies an arbitrary JSON value. Total: every `Value` variant maps
    /// to one of the two arms. Non-string scalars coerce to text; an array
    /// classifies as its first element.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => TextOrRecord::Text(s.clone()),
            Value::Object(map) => {
                let mut extra = map.clone();
                let section = take_text(&mut extra, "section");
                let bullet_point = take_text(&mut extra, "bulletPoint");
                TextOrRecord::Record {
                    section,
                    bullet_point,
                    extra,
                }
            }
            Value::Null => TextOrRecord::Text(String::new()),
            Value::Bool(b) => TextOrRecord::Text(b.to_string()),
            Value::Number(n) => TextOrRecord::Text(n.to_string()),
            Value::Array(items) => items
                .first()
                .map(TextOrRecord::from_value)
                .unwrap_or_else(|| TextOrRecord::Text(String::new())),
        }
    }

    /// Renderable text for this element: text stays as-is; records prefer
    /// `bulletPoint`, then `section`, then the first remaining property's
    /// value, else empty.
    pub fn text(&self) -> String {
        match self {
            TextOrRecord::Text(s) => s.clone(),
            TextOrRecord::Record {
                section,
                bullet_point,
                extra,
            } => {
                if let Some(bp) = bullet_point {
                    return bp.clone();
                }
                if let Some(s) = section {
                    return s.clone();
                }
                extra.values().next().map(scalar_text).unwrap_or_default()
            }
        }
    }

    /// Like `text()`, but a record carrying BOTH `section` and `bulletPoint`
    /// renders as "section: bulletPoint". Used for suggestion and bullet
    /// lists, where the section name is a label rather than the content.
    pub fn labeled_text(&self) -> String {
        if let TextOrRecord::Record {
            section: Some(s),
            bullet_point: Some(bp),
            ..
        } = self
        {
            return format!("{s}: {bp}");
        }
        self.text()
    }
}

/// Removes `key` from the map and coerces it to text. An empty or null value
/// counts as absent so the display preference falls through.
fn take_text(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    let text = scalar_text(map.get(key)?);
    map.remove(key);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Converts a list-valued response field into renderable strings, dropping
/// elements that normalize to empty. Anything that is not an array (missing
/// field, scalar, object) normalizes to an empty list.
pub fn normalize_items(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return vec![];
    };
    items
        .iter()
        .map(|item| TextOrRecord::from_value(item).text())
        .filter(|s| !s.is_empty())
        .collect()
}

/// As `normalize_items`, but `{section, bulletPoint}` records render combined.
pub fn normalize_labeled_items(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return vec![];
    };
    items
        .iter()
        .map(|item| TextOrRecord::from_value(item).labeled_text())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Coercion for the five STAR answer fields: strings stay as-is, objects
/// prefer a `text` then a `content` property, anything else renders as its
/// JSON serialization.
pub fn star_field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(map)) => map
            .get("text")
            .or_else(|| map.get("content"))
            .map(scalar_text)
            .unwrap_or_else(|| Value::Object(map.clone()).to_string()),
        Some(other) => scalar_text(other),
    }
}

/// A score kept for display: the raw number exactly as the model returned it,
/// alongside a progress-bar width clamped into 0–100. The clamp is
/// display-only — out-of-range scores are still shown as raw numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreDisplay {
    pub raw: f64,
    pub bar_percent: f64,
}

impl ScoreDisplay {
    pub fn new(raw: f64) -> Self {
        Self {
            raw,
            bar_percent: raw.clamp(0.0, 100.0),
        }
    }

    /// Reads a numeric score field. Non-numeric values render as no score at
    /// all rather than a broken bar.
    pub fn from_field(value: Option<&Value>) -> Option<Self> {
        value.and_then(Value::as_f64).map(Self::new)
    }
}
