//! Fallback knowledge base
//!
//! Canned answers served when the completion API fails. The lookup here is
//! deliberately coarser than the classifier: it only knows the table keys.

use crate::models::Category;

/// Marker attached to replies that were served from this table.
pub const DEGRADED_MARKER: &str = "AI service temporarily unavailable";

/// Shown when no Gemini credential is configured.
pub const NOT_CONFIGURED_TEXT: &str = "I apologize, but the AI service is not properly configured. Please check with the administrator to set up the Gemini API key.";

const REGISTRATION: &str = "**Registration & Setup Help** 🏢\n\n• **Udyam Registration**: Visit udyamregistration.gov.in with your Aadhaar number and basic business details. The registration is free and typically takes 10-15 minutes online.\n\n• **Key Benefits**: Access to collateral-free loans up to ₹2 crores, government tenders, and various subsidy schemes.";

const LOANS: &str = "**Loans & Finance Help** 💰\n\n• **MUDRA Loans**: Financing up to ₹10 lakhs without collateral\n• **Stand-Up India**: ₹10 lakhs to ₹1 crore for SC/ST/Women entrepreneurs\n• **CGTMSE**: Credit guarantee up to ₹2 crores\n\n**Next Step**: Visit your nearest bank with Udyam certificate to explore options.";

const COMPLIANCE: &str = "**Compliance & Tax Help** 📋\n\n• **GST Exemption**: Businesses under ₹40 lakhs turnover are exempt\n• **Composition Scheme**: 1-6% tax rate for turnover up to ₹1.5 crores\n• **MSME Benefits**: Reduced compliance requirements under various labor and environmental laws.";

const SCHEMES: &str = "**Schemes & Subsidies Help** 🎯\n\n• **Technology Upgradation**: Up to 15% subsidy (max ₹15 lakhs) on machinery\n• **Export Promotion**: Market development assistance and trade fair support\n• **Cluster Development**: SFURTI scheme funding available\n\n**Next Step**: Check respective ministry portals for current application procedures.";

const MAHARASHTRA: &str = "**Maharashtra Business Help** 🏙️\n\n• **MIDC**: Industrial plots and infrastructure through Maharashtra Industrial Development Corporation\n• **District Industries Centre**: Every district has a DIC for registration support and state incentives\n• **Udyam Registration**: Free at udyamregistration.gov.in, required for state and central schemes\n\n**Next Step**: Contact your District Industries Centre for local guidance.";

const GENERAL: &str = "**MSME Service Assistant** 🤖\n\nI can help with MSME registration, financing, compliance, and government schemes. Select a specific category above for focused assistance, or ask me about any MSME-related topic.";

/// Keyed entries scanned, in order, when no category is known.
const KEYED: &[Category] = &[
    Category::Registration,
    Category::Loans,
    Category::Compliance,
    Category::Schemes,
    Category::Maharashtra,
];

/// Fallback table lookup. `Auto` maps to the general entry.
pub fn fallback_text(category: Category) -> &'static str {
    match category {
        Category::Registration => REGISTRATION,
        Category::Loans => LOANS,
        Category::Compliance => COMPLIANCE,
        Category::Schemes => SCHEMES,
        Category::Maharashtra => MAHARASHTRA,
        Category::Auto => GENERAL,
    }
}

/// The designated general entry.
pub fn general_text() -> &'static str {
    GENERAL
}

/// Select a fallback answer for a failed request.
///
/// A concrete category answers directly. Otherwise the first table key
/// found inside the lower-cased text wins, then the general entry.
pub fn select_fallback(category: Option<Category>, text: &str) -> &'static str {
    match category {
        Some(category) if !category.is_auto() => fallback_text(category),
        _ => {
            let text = text.to_lowercase();
            KEYED
                .iter()
                .find(|key| text.contains(key.as_str()))
                .map(|key| fallback_text(*key))
                .unwrap_or(GENERAL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_text() {
        for category in Category::ALL {
            assert!(!fallback_text(category).is_empty());
        }
        assert_eq!(fallback_text(Category::Auto), general_text());
    }

    #[test]
    fn test_direct_entry_wins() {
        assert_eq!(
            select_fallback(Some(Category::Loans), "tell me about schemes"),
            fallback_text(Category::Loans)
        );
    }

    #[test]
    fn test_keyword_scan_for_unknown_category() {
        assert_eq!(
            select_fallback(None, "Need LOANS help"),
            fallback_text(Category::Loans)
        );
        assert_eq!(
            select_fallback(Some(Category::Auto), "which schemes apply"),
            fallback_text(Category::Schemes)
        );
        // Scan is by table key only, so "loan" alone does not match "loans".
        assert_eq!(select_fallback(None, "mudra loan"), general_text());
    }

    #[test]
    fn test_scan_order() {
        assert_eq!(
            select_fallback(None, "schemes after registration"),
            fallback_text(Category::Registration)
        );
    }

    #[test]
    fn test_general_when_nothing_matches() {
        assert_eq!(select_fallback(None, ""), general_text());
    }
}
