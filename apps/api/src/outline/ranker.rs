//! Keyword Ranker — re-ranks WDF*IDF candidate terms by weight and builds
//! the prompt context block describing the analysis to the LLM.

use crate::models::analysis::TermWeightAnalysis;

/// Max terms promoted into the keyword list.
pub const MAX_ENHANCED_KEYWORDS: usize = 5;

/// A candidate term paired with its looked-up weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedKeyword {
    pub term: String,
    pub weight: f64,
}

/// Output of the ranker: the context block for the prompt plus the ranked
/// terms to append to the keyword list.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordEnhancement {
    pub prompt_context: String,
    pub enhanced_keywords: Vec<String>,
}

/// Ranks the analysis' top terms by weight and renders the prompt context.
///
/// Returns `None` when no analysis was supplied, or when the payload carries
/// no `analysis` detail — callers treat both as "no enhancement", never as an
/// error. Terms absent from the weight mapping rank with weight 0. The sort
/// is stable: equal weights keep their `topTerms` order.
pub fn rank_keywords(analysis: Option<&TermWeightAnalysis>) -> Option<KeywordEnhancement> {
    let payload = analysis?;
    let detail = payload.analysis.as_ref()?;

    let mut ranked: Vec<RankedKeyword> = detail
        .top_terms
        .iter()
        .map(|term| RankedKeyword {
            term: term.clone(),
            weight: payload.weight_of(term),
        })
        .collect();

    // Vec::sort_by is stable; comparing weights only preserves input order on ties.
    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ranked.truncate(MAX_ENHANCED_KEYWORDS);

    let enhanced_keywords: Vec<String> = ranked.into_iter().map(|r| r.term).collect();

    let prompt_context = format!(
        "WDF*IDF term analysis for this article:\n\
         Top weighted terms: {}\n\
         Underused terms (work these in): {}\n\
         Overused terms (scale these back): {}",
        enhanced_keywords.join(", "),
        detail.underused_terms.join(", "),
        detail.overused_terms.join(", "),
    );

    Some(KeywordEnhancement {
        prompt_context,
        enhanced_keywords,
    })
}
