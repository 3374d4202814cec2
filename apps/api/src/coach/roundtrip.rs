//! The shared prompt round-trip.
//!
//! All three features follow one control flow: call the LLM with a persona and
//! a prompt, extract the first JSON object from the reply, and substitute the
//! feature's static fallback when extraction fails. The flow is written once
//! here and parameterized by a `FeatureProfile`.

use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::extract::extract_json_object;
use crate::llm_client::ChatCompleter;

/// Per-feature configuration for the shared round-trip.
pub struct FeatureProfile {
    /// Short feature name used in logs.
    pub name: &'static str,
    /// System persona sent with every call.
    pub system: &'static str,
    /// Short message carried by the 500 envelope when the provider call fails.
    pub error_context: &'static str,
    /// Builds the feature's static fallback object.
    pub fallback: fn() -> Value,
}

/// Calls the LLM and returns the extracted JSON object, or the feature's
/// fallback when the reply is not parseable JSON. A provider failure is the
/// only error path; JSON non-compliance never is.
pub async fn run(
    llm: &dyn ChatCompleter,
    profile: &FeatureProfile,
    prompt: &str,
) -> Result<Value, AppError> {
    let reply = llm
        .complete(profile.system, prompt)
        .await
        .map_err(|e| AppError::Llm {
            context: profile.error_context.to_string(),
            details: e.to_string(),
        })?;

    match extract_json_object(&reply) {
        Some(value) => Ok(value),
        None => {
            warn!(
                "{}: reply did not contain parseable JSON, substituting fallback",
                profile.name
            );
            Ok((profile.fallback)())
        }
    }
}
