//! Outline generation pipeline.
//!
//! Flow: rank keywords → assemble prompt → generate text → split outline →
//! shape response. One outbound call (the generator); everything else is
//! pure and request-scoped.

use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::generators::OutlineGenerator;
use crate::models::analysis::TermWeightSummary;
use crate::models::request::OutlineRequest;
use crate::models::result::OutlineResult;
use crate::outline::prompts::assemble_prompt;
use crate::outline::ranker::{rank_keywords, KeywordEnhancement};
use crate::outline::shaper::shape_response;
use crate::outline::splitter::split_outline;

/// Runs the full pipeline for one validated request.
pub async fn generate_outline(
    generator: &dyn OutlineGenerator,
    request: &OutlineRequest,
) -> Result<OutlineResult, AppError> {
    let enhancement = rank_keywords(request.term_weight_analysis.as_ref());
    if let Some(e) = &enhancement {
        info!(
            "WDF*IDF enhancement active for {}: {} ranked terms",
            request.event_id,
            e.enhanced_keywords.len()
        );
    }

    let keywords = combined_keywords(request, enhancement.as_ref());
    let prompt_context = enhancement.as_ref().map(|e| e.prompt_context.as_str());
    let prompt = assemble_prompt(request, &keywords, prompt_context);

    let raw_text = generator.generate(&prompt, request).await?;
    let split = split_outline(&raw_text);
    info!(
        "Generated outline for {}: {} chars outline, {} chars SEO analysis",
        request.event_id,
        split.outline.len(),
        split.seo_analysis.len()
    );

    let summary = term_weight_summary(request, enhancement.as_ref());

    Ok(shape_response(
        &request.event_id,
        &split,
        keywords,
        summary,
        Utc::now(),
    ))
}

/// Main keyword, then secondary keywords, then WDF*IDF-enhanced terms.
/// Order preserved, duplicates preserved.
fn combined_keywords(
    request: &OutlineRequest,
    enhancement: Option<&KeywordEnhancement>,
) -> Vec<String> {
    let mut keywords = Vec::with_capacity(1 + request.secondary_keywords.len());
    keywords.push(request.main_keyword.clone());
    keywords.extend(request.secondary_keywords.iter().cloned());
    if let Some(e) = enhancement {
        keywords.extend(e.enhanced_keywords.iter().cloned());
    }
    keywords
}

/// Summary echoed back in the result metadata whenever the request carried a
/// usable analysis.
fn term_weight_summary(
    request: &OutlineRequest,
    enhancement: Option<&KeywordEnhancement>,
) -> Option<TermWeightSummary> {
    let detail = request.term_weight_analysis.as_ref()?.analysis.as_ref()?;
    let enhancement = enhancement?;
    Some(TermWeightSummary {
        top_terms: enhancement.enhanced_keywords.clone(),
        underused_terms: detail.underused_terms.clone(),
        overused_terms: detail.overused_terms.clone(),
        coverage_stats: (&detail.coverage_stats).into(),
    })
}
