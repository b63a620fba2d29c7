//! Response Shaper — assembles the final `OutlineResult` from the pipeline
//! pieces. Pure given a clock value; the handler passes `Utc::now()`.

use chrono::{DateTime, Utc};

use crate::models::analysis::TermWeightSummary;
use crate::models::result::{OutlineMetadata, OutlineResult};
use crate::outline::splitter::SplitOutline;

/// Confidence reported for every generated outline.
pub const AI_CONFIDENCE: f64 = 0.85;
/// Result schema version.
pub const RESULT_VERSION: &str = "1.0";
/// Max suggestion lines lifted from the SEO analysis.
pub const MAX_SUGGESTIONS: usize = 3;

/// Builds a fresh `OutlineResult`. Inputs are not mutated; two calls with
/// identical arguments (including `now`) produce identical results.
pub fn shape_response(
    event_id: &str,
    split: &SplitOutline,
    processed_keywords: Vec<String>,
    term_weight_summary: Option<TermWeightSummary>,
    now: DateTime<Utc>,
) -> OutlineResult {
    OutlineResult {
        event_id: event_id.to_string(),
        status: "completed".to_string(),
        outline: split.outline.clone(),
        seo_analysis: split.seo_analysis.clone(),
        metadata: OutlineMetadata {
            processed_keywords,
            ai_confidence: AI_CONFIDENCE,
            suggestions: extract_suggestions(&split.seo_analysis),
            timestamp: now,
            version: RESULT_VERSION.to_string(),
            term_weight_summary,
        },
    }
}

/// First three dash-prefixed lines of the SEO analysis, in document order,
/// with the dash marker stripped.
fn extract_suggestions(seo_analysis: &str) -> Vec<String> {
    seo_analysis
        .lines()
        .filter_map(|line| line.trim().strip_prefix('-'))
        .map(|rest| rest.trim().to_string())
        .filter(|s| !s.is_empty())
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn make_split() -> SplitOutline {
        SplitOutline {
            outline: "# Title\n\nBody".to_string(),
            seo_analysis: "# SEO Analysis\n\n\
                ## Keyword Distribution\n\
                - Main keyword is well distributed\n\
                - Secondary keywords appear in sections\n\
                \n\
                ## Suggestions\n\
                - Add a FAQ section\n\
                - Include industry examples\n"
                .to_string(),
        }
    }

    #[test]
    fn test_suggestions_are_first_three_dash_lines_in_order() {
        let result = shape_response("evt-1", &make_split(), vec![], None, fixed_clock());
        assert_eq!(
            result.metadata.suggestions,
            vec![
                "Main keyword is well distributed",
                "Secondary keywords appear in sections",
                "Add a FAQ section",
            ]
        );
    }

    #[test]
    fn test_empty_seo_analysis_yields_no_suggestions() {
        let split = SplitOutline {
            outline: "# Title".to_string(),
            seo_analysis: String::new(),
        };
        let result = shape_response("evt-1", &split, vec![], None, fixed_clock());
        assert!(result.metadata.suggestions.is_empty());
    }

    #[test]
    fn test_constants_and_status() {
        let result = shape_response("evt-1", &make_split(), vec![], None, fixed_clock());
        assert_eq!(result.status, "completed");
        assert_eq!(result.metadata.ai_confidence, AI_CONFIDENCE);
        assert_eq!(result.metadata.version, "1.0");
        assert_eq!(result.event_id, "evt-1");
    }

    #[test]
    fn test_keyword_order_and_duplicates_preserved() {
        let keywords = vec![
            "main".to_string(),
            "secondary".to_string(),
            "main".to_string(),
        ];
        let result = shape_response("evt-1", &make_split(), keywords.clone(), None, fixed_clock());
        assert_eq!(result.metadata.processed_keywords, keywords);
    }

    #[test]
    fn test_identical_inputs_and_clock_produce_identical_results() {
        let split = make_split();
        let first = shape_response("evt-1", &split, vec!["kw".to_string()], None, fixed_clock());
        let second = shape_response("evt-1", &split, vec!["kw".to_string()], None, fixed_clock());
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = shape_response("evt-1", &make_split(), vec![], None, fixed_clock());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["eventId"], "evt-1");
        assert!(value["seoAnalysis"].is_string());
        assert_eq!(value["metadata"]["aiConfidence"], 0.85);
        // absent summary is omitted from the JSON, not serialized as null
        assert!(value["metadata"].get("termWeightSummary").is_none());
    }
}
