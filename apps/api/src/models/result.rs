//! Outbound outline result, matching the JSON the content tool consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::analysis::TermWeightSummary;

/// Completed outline result returned to the caller (and optionally written
/// to the results directory as `<eventId>.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineResult {
    pub event_id: String,
    pub status: String,
    pub outline: String,
    pub seo_analysis: String,
    pub metadata: OutlineMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineMetadata {
    /// Main keyword, then secondary, then WDF*IDF-enhanced terms.
    /// Order preserved, duplicates preserved.
    pub processed_keywords: Vec<String>,
    pub ai_confidence: f64,
    /// Up to three suggestion lines lifted from the SEO analysis.
    pub suggestions: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_weight_summary: Option<TermWeightSummary>,
}
