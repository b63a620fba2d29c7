//! Inbound outline request, matching the JSON body the content tool sends.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::analysis::TermWeightAnalysis;

/// Request body for outline generation.
///
/// `event_id`, `title` and `main_keyword` are required; they default to empty
/// strings on deserialization so that a missing field surfaces as a
/// validation error (with the field named) rather than a JSON parse error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRequest {
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub main_keyword: String,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    #[serde(default)]
    pub company_info: Option<String>,
    #[serde(default)]
    pub internal_links: Option<String>,
    #[serde(default)]
    pub additional_content: Option<String>,
    #[serde(default)]
    pub term_weight_analysis: Option<TermWeightAnalysis>,
}

impl OutlineRequest {
    /// Checks the required fields, naming every one that is missing or blank.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if self.event_id.trim().is_empty() {
            missing.push("eventId");
        }
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.main_keyword.trim().is_empty() {
            missing.push("mainKeyword");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}
