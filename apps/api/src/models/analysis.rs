//! WDF*IDF term-weight analysis — the optional enrichment payload a request
//! may carry. All wire names are camelCase to match the upstream content tool.

use serde::{Deserialize, Serialize};

/// A single weighted term from the WDF*IDF analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermWeight {
    pub term: String,
    pub tfidf: f64,
}

/// Coverage bucket counts for the tracked terms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverageStats {
    #[serde(default)]
    pub good: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub poor: u32,
}

/// The analysis detail: candidate terms plus usage classification.
/// Every field is optional on the wire — missing lists degrade to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDetail {
    #[serde(default)]
    pub top_terms: Vec<String>,
    #[serde(default)]
    pub underused_terms: Vec<String>,
    #[serde(default)]
    pub overused_terms: Vec<String>,
    #[serde(default)]
    pub coverage_stats: CoverageStats,
}

/// Full term-weight analysis as sent by the content tool.
///
/// `analysis` may be absent even when `terms` is populated; callers must
/// treat that as "no analysis available", never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermWeightAnalysis {
    #[serde(default)]
    pub terms: Vec<TermWeight>,
    #[serde(default)]
    pub analysis: Option<AnalysisDetail>,
}

impl TermWeightAnalysis {
    /// Looks up a term's weight in the weight mapping. Unknown terms weigh 0.
    pub fn weight_of(&self, term: &str) -> f64 {
        self.terms
            .iter()
            .find(|t| t.term == term)
            .map(|t| t.tfidf)
            .unwrap_or(0.0)
    }
}

/// Derived summary of the analysis, echoed back in the result metadata so the
/// content tool can display what the ranking was based on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermWeightSummary {
    /// The ranked top terms actually used for enhancement (≤ 5).
    pub top_terms: Vec<String>,
    pub underused_terms: Vec<String>,
    pub overused_terms: Vec<String>,
    pub coverage_stats: CoverageSummary,
}

/// Serializable mirror of [`CoverageStats`] for the outbound summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub good: u32,
    pub medium: u32,
    pub poor: u32,
}

impl From<&CoverageStats> for CoverageSummary {
    fn from(stats: &CoverageStats) -> Self {
        CoverageSummary {
            good: stats.good,
            medium: stats.medium,
            poor: stats.poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_of_unknown_term_is_zero() {
        let analysis = TermWeightAnalysis {
            terms: vec![TermWeight {
                term: "rust".to_string(),
                tfidf: 0.4,
            }],
            analysis: None,
        };
        assert_eq!(analysis.weight_of("rust"), 0.4);
        assert_eq!(analysis.weight_of("golang"), 0.0);
    }

    #[test]
    fn test_deserializes_camel_case_wire_shape() {
        let json = serde_json::json!({
            "terms": [{"term": "a", "tfidf": 0.2}],
            "analysis": {
                "topTerms": ["a"],
                "underusedTerms": ["c"],
                "overusedTerms": [],
                "coverageStats": {"good": 1, "medium": 2, "poor": 0}
            }
        });
        let parsed: TermWeightAnalysis = serde_json::from_value(json).unwrap();
        let detail = parsed.analysis.unwrap();
        assert_eq!(detail.top_terms, vec!["a"]);
        assert_eq!(detail.underused_terms, vec!["c"]);
        assert_eq!(detail.coverage_stats.medium, 2);
    }

    #[test]
    fn test_missing_analysis_sub_object_is_none() {
        let json = serde_json::json!({
            "terms": [{"term": "a", "tfidf": 0.2}]
        });
        let parsed: TermWeightAnalysis = serde_json::from_value(json).unwrap();
        assert!(parsed.analysis.is_none());
    }

    #[test]
    fn test_missing_lists_degrade_to_empty() {
        let json = serde_json::json!({
            "terms": [],
            "analysis": {"topTerms": ["x"]}
        });
        let parsed: TermWeightAnalysis = serde_json::from_value(json).unwrap();
        let detail = parsed.analysis.unwrap();
        assert!(detail.underused_terms.is_empty());
        assert!(detail.overused_terms.is_empty());
        assert_eq!(detail.coverage_stats.good, 0);
    }
}
