//! Template generation backend — the fixed sample outline served when no
//! API key is configured. Deterministic, so it doubles as the test backend.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::generators::OutlineGenerator;
use crate::models::request::OutlineRequest;

pub struct TemplateOutlineGenerator;

#[async_trait]
impl OutlineGenerator for TemplateOutlineGenerator {
    async fn generate(&self, _prompt: &str, request: &OutlineRequest) -> Result<String, AppError> {
        Ok(sample_outline(&request.title, &request.main_keyword))
    }
}

/// Renders the sample outline, templated on title and main keyword.
/// Ends in an "# SEO Analysis" section so the splitter exercises the same
/// path as real generated text.
pub fn sample_outline(title: &str, main_keyword: &str) -> String {
    format!(
        "# {title}

## 1. Introduction
- Overview of {main_keyword}
- Importance in modern context
- Brief history and evolution

## 2. Key Components of {main_keyword}
### 2.1 Component One
- Detailed explanation
- Best practices
- Implementation strategies

### 2.2 Component Two
- Technical aspects
- Integration with existing systems
- Case studies

## 3. Benefits and Advantages
- Improved efficiency
- Cost savings
- Enhanced security

## 4. Implementation Strategies
### 4.1 Planning Phase
- Assessment of needs
- Resource allocation
- Timeline development

### 4.2 Execution Phase
- Step-by-step guide
- Common challenges and solutions
- Quality assurance

## 5. Future Trends
- Emerging technologies
- Industry predictions
- Preparation strategies

## 6. Conclusion
- Summary of key points
- Final recommendations
- Call to action

# SEO Analysis

## Keyword Distribution
- Main keyword \"{main_keyword}\" is well-distributed throughout the outline
- Secondary keywords appear in appropriate sections
- Natural keyword integration maintained

## Content Structure
- H1, H2, and H3 headings follow proper hierarchy
- Sections are logically organized
- Content flow supports user engagement

## Optimization Suggestions
- Consider adding a FAQ section to target long-tail keywords
- Include more specific industry examples
- Add statistics and data points to enhance credibility
- Incorporate internal links naturally within content sections"
    )
}
