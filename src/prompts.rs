//! Instruction prompts sent to the completion API

use crate::models::Category;

const MSME_CONTEXT: &str = r#"You are a highly knowledgeable MSME (Micro, Small, and Medium Enterprise) Service Expert for India. You have comprehensive expertise in:

1. MSME Registration & Udyam Registration processes
2. Government Schemes & Subsidies (current and applicable)
3. Loan Programs (MUDRA, Stand-Up India, SIDBI, etc.)
4. Compliance Requirements and regulatory frameworks
5. GST for MSMEs and tax optimization
6. Export/Import procedures and documentation
7. Technology upgradation schemes and benefits
8. Market development assistance programs
9. Skill development and capacity building programs
10. Financial assistance and credit guarantee schemes

Communication Style:
- Provide clear, knowledgeable guidance based on current MSME policies
- Give practical answers with specific numbers, percentages, and limits where applicable
- Reference official government portals and authoritative sources
- Be helpful and actionable in your recommendations
- Structure information clearly with bullet points and sections
- When discussing processes, provide step-by-step guidance
- For current rates, fees, or deadlines that may change, advise users to verify with official sources
- Focus on the Indian MSME ecosystem and current regulations
- Be professional and supportive while maintaining accuracy

Deliver well-structured, practical responses that help users take concrete next steps."#;

const MAHARASHTRA_CONTEXT: &str = r#"You are a specialized Maharashtra Business Intelligence Expert with comprehensive knowledge of the state's MSME ecosystem. You provide authoritative guidance on:

- Maharashtra's industrial landscape and business opportunities
- State-specific MSME policies and incentives
- MIDC industrial areas and infrastructure
- Local business clusters and manufacturing hubs
- Regional market dynamics and supply chains
- State government schemes and financial assistance
- District-wise industrial development programs
- Export opportunities from Maharashtra ports
- Technology parks and IT corridors
- Traditional industries and modernization initiatives"#;

/// Category-specific focus appended to the base role text.
pub fn instruction_suffix(category: Category) -> Option<&'static str> {
    match category {
        Category::Registration => Some("Focus specifically on business registration, Udyam registration, company incorporation, licenses, and setup procedures."),
        Category::Loans => Some("Focus specifically on loans, financing, MUDRA schemes, bank processes, credit facilities, and funding options."),
        Category::Compliance => Some("Focus specifically on compliance requirements, GST, tax obligations, labor laws, and regulatory matters."),
        Category::Schemes => Some("Focus specifically on government schemes, subsidies, incentives, grants, and benefit programs."),
        Category::Maharashtra => Some(MAHARASHTRA_CONTEXT),
        Category::Auto => None,
    }
}

/// Full instruction block for a category.
pub fn system_context(category: Category) -> String {
    match instruction_suffix(category) {
        Some(suffix) => format!("{}\n\n{}", MSME_CONTEXT, suffix),
        None => MSME_CONTEXT.to_string(),
    }
}

/// Single prompt string: role text, category focus, then the question.
pub fn compose_prompt(category: Category, question: &str) -> String {
    format!(
        "{}\n\nUser Question: {}\n\nPlease provide a helpful response:",
        system_context(category),
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_has_no_suffix() {
        assert!(instruction_suffix(Category::Auto).is_none());
        assert_eq!(system_context(Category::Auto), MSME_CONTEXT);
    }

    #[test]
    fn test_prompt_carries_question_and_focus() {
        let prompt = compose_prompt(Category::Loans, "What is CGTMSE?");
        assert!(prompt.starts_with("You are a highly knowledgeable MSME"));
        assert!(prompt.contains("MUDRA schemes, bank processes"));
        assert!(prompt.contains("User Question: What is CGTMSE?"));
        assert!(prompt.ends_with("Please provide a helpful response:"));
    }
}
