//! Outline Splitter — partitions generated text into the outline proper and
//! the trailing SEO-analysis section.

use regex::Regex;

/// The normalized heading the SEO-analysis portion is re-emitted under,
/// regardless of the heading level the generator produced.
const SEO_HEADING: &str = "# SEO Analysis";

/// Result of splitting generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutline {
    pub outline: String,
    pub seo_analysis: String,
}

/// Splits raw generated text at the first "SEO Analysis" heading (one to
/// three heading marks, case-insensitive). Total: any input yields a defined
/// result. Only the first marker splits — later occurrences stay verbatim in
/// the SEO-analysis remainder.
pub fn split_outline(raw: &str) -> SplitOutline {
    let marker = Regex::new(r"(?i)#{1,3}\s*SEO Analysis").unwrap();

    match marker.find(raw) {
        None => SplitOutline {
            outline: raw.trim().to_string(),
            seo_analysis: String::new(),
        },
        Some(m) => SplitOutline {
            outline: raw[..m.start()].trim().to_string(),
            seo_analysis: format!("{SEO_HEADING}\n\n{}", raw[m.end()..].trim()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_at_seo_analysis_heading() {
        let raw = "# Title\n\nBody\n\n## SEO Analysis\nLine1\n- Line2";
        let split = split_outline(raw);
        assert_eq!(split.outline, "# Title\n\nBody");
        assert_eq!(split.seo_analysis, "# SEO Analysis\n\nLine1\n- Line2");
    }

    #[test]
    fn test_no_marker_returns_whole_text_as_outline() {
        let split = split_outline("# Title\n\nJust an outline, nothing else.\n");
        assert_eq!(split.outline, "# Title\n\nJust an outline, nothing else.");
        assert_eq!(split.seo_analysis, "");
    }

    #[test]
    fn test_empty_input() {
        let split = split_outline("");
        assert_eq!(split.outline, "");
        assert_eq!(split.seo_analysis, "");
    }

    #[test]
    fn test_marker_match_is_case_insensitive() {
        let split = split_outline("Outline body\n\n### seo analysis\ndetails");
        assert_eq!(split.outline, "Outline body");
        assert_eq!(split.seo_analysis, "# SEO Analysis\n\ndetails");
    }

    #[test]
    fn test_only_first_marker_splits() {
        let raw = "Intro\n\n# SEO Analysis\nfirst part\n## SEO Analysis\nsecond part";
        let split = split_outline(raw);
        assert_eq!(split.outline, "Intro");
        assert_eq!(
            split.seo_analysis,
            "# SEO Analysis\n\nfirst part\n## SEO Analysis\nsecond part"
        );
    }

    #[test]
    fn test_outline_portion_is_idempotent() {
        let raw = "# Title\n\nBody\n\n## SEO Analysis\nLine1";
        let first = split_outline(raw);
        let second = split_outline(&first.outline);
        assert_eq!(second.outline, first.outline);
        assert_eq!(second.seo_analysis, "");
    }

    #[test]
    fn test_non_markdown_garbage_is_handled() {
        let split = split_outline("\u{0}\u{1}\u{2} not markdown at all \t\n");
        assert_eq!(split.outline, "\u{0}\u{1}\u{2} not markdown at all");
        assert_eq!(split.seo_analysis, "");
    }

    #[test]
    fn test_marker_with_no_space_after_hashes() {
        let split = split_outline("Body\n\n##SEO Analysis\nnotes");
        assert_eq!(split.outline, "Body");
        assert_eq!(split.seo_analysis, "# SEO Analysis\n\nnotes");
    }
}
