//! Prompt constants and deterministic prompt assembly for outline generation.

use crate::models::request::OutlineRequest;

/// System prompt for outline generation — plain Markdown output, no JSON.
pub const OUTLINE_SYSTEM: &str = "You are an expert SEO content strategist. \
    You produce detailed blog article outlines in Markdown. \
    Use a single H1 title, numbered H2 sections with H3 subsections, and \
    dash-prefixed bullet points. \
    Do NOT include any commentary outside the outline itself.";

/// Fixed instruction block appended to every outline prompt.
const OUTLINE_INSTRUCTIONS: &str = "\
Requirements:
- Markdown only: one H1 title, numbered H2 sections, H3 subsections, dash-prefixed bullets.
- Cover the main keyword thoroughly; weave the remaining keywords in naturally.
- Close with a section titled \"# SEO Analysis\" reviewing keyword distribution and
  content structure, ending with optimization suggestions as dash-prefixed lines.";

/// Builds the deterministic generation prompt.
///
/// Section order is fixed: keywords, company context, WDF*IDF context,
/// internal links, additional context, instructions. Optional sections are
/// omitted entirely when absent or blank — no empty labels are emitted.
/// The keyword list is used as given: order preserved, duplicates preserved.
pub fn assemble_prompt(
    request: &OutlineRequest,
    keywords: &[String],
    prompt_context: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Create a detailed, SEO-optimized outline for an article titled \"{}\".\n\
         The main keyword is \"{}\".\n\n\
         Keywords (in priority order): {}",
        request.title,
        request.main_keyword,
        keywords.join(", "),
    );

    if let Some(info) = present(&request.company_info) {
        prompt.push_str("\n\nCompany context:\n");
        prompt.push_str(info);
    }

    if let Some(context) = prompt_context.filter(|c| !c.trim().is_empty()) {
        prompt.push_str("\n\n");
        prompt.push_str(context);
    }

    if let Some(links) = present(&request.internal_links) {
        prompt.push_str("\n\nInternal links to incorporate:\n");
        prompt.push_str(links);
    }

    if let Some(extra) = present(&request.additional_content) {
        prompt.push_str("\n\nAdditional context:\n");
        prompt.push_str(extra);
    }

    prompt.push_str("\n\n");
    prompt.push_str(OUTLINE_INSTRUCTIONS);
    prompt
}

/// Optional text field, treating blank strings as absent.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
