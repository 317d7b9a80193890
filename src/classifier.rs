//! Category Classifier
//!
//! Maps free text to one topic `Category` using ordered keyword sets.
//! Sets are checked in priority order and the first hit wins:
//! Maharashtra, registration, loans, compliance, schemes.

use crate::models::Category;

/// Static keyword lists — zero allocation
const MAHARASHTRA_KEYWORDS: &[&str] = &[
    "maharashtra", "mumbai", "pune", "nashik", "nagpur", "akola",
    "aurangabad", "midc", "vidarbha", "borde gruha udyog",
];

const REGISTRATION_KEYWORDS: &[&str] = &[
    "registration", "udyam", "register", "setup", "start business",
    "incorporation", "license", "proprietorship", "partnership",
];

const LOAN_KEYWORDS: &[&str] = &[
    "loan", "mudra", "finance", "funding", "credit", "bank",
    "stand-up india", "cgtmse", "collateral",
];

const COMPLIANCE_KEYWORDS: &[&str] = &[
    "gst", "tax", "compliance", "regulation", "labor law", "environmental",
    "composition scheme", "return",
];

const SCHEME_KEYWORDS: &[&str] = &[
    "subsidy", "scheme", "grant", "incentive", "benefit", "pmegp",
    "technology upgrade", "export promotion",
];

const PRIORITY: &[(Category, &[&str])] = &[
    (Category::Maharashtra, MAHARASHTRA_KEYWORDS),
    (Category::Registration, REGISTRATION_KEYWORDS),
    (Category::Loans, LOAN_KEYWORDS),
    (Category::Compliance, COMPLIANCE_KEYWORDS),
    (Category::Schemes, SCHEME_KEYWORDS),
];

/// Keyword category classifier
pub struct CategoryClassifier;

impl CategoryClassifier {
    /// Classify user text. Returns `Category::Auto` when nothing matches.
    pub fn classify(text: &str) -> Category {
        let text = text.to_lowercase();

        PRIORITY
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Auto)
    }

    /// Effective category for a request: explicit selections win, `Auto`
    /// is resolved by classification.
    pub fn resolve(mode: Category, text: &str) -> Category {
        if mode.is_auto() {
            Self::classify(text)
        } else {
            mode
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category() {
        let cases = vec![
            ("How do I get Udyam registration?", Category::Registration),
            ("What MUDRA loan can I get?", Category::Loans),
            ("Explain GST filing", Category::Compliance),
            ("Any subsidy for machinery?", Category::Schemes),
            ("MIDC plots near Nashik", Category::Maharashtra),
        ];

        for (text, expected) in cases {
            assert_eq!(CategoryClassifier::classify(text), expected, "{}", text);
        }
    }

    #[test]
    fn test_maharashtra_has_priority() {
        let cases = vec![
            "udyam registration in Pune",
            "bank loan for a Mumbai bakery",
            "GST return for my Nagpur shop",
            "subsidy schemes in Vidarbha",
            "BORDE GRUHA UDYOG loan and gst",
        ];

        for c in cases {
            assert_eq!(CategoryClassifier::classify(c), Category::Maharashtra);
        }
    }

    #[test]
    fn test_fixed_priority_order() {
        // Registration beats loans, loans beat compliance, compliance beats schemes.
        assert_eq!(
            CategoryClassifier::classify("register before applying for a loan"),
            Category::Registration
        );
        assert_eq!(
            CategoryClassifier::classify("credit for paying tax"),
            Category::Loans
        );
        assert_eq!(
            CategoryClassifier::classify("composition scheme"),
            Category::Compliance
        );
    }

    #[test]
    fn test_unmatched_is_auto() {
        assert_eq!(CategoryClassifier::classify(""), Category::Auto);
        assert_eq!(CategoryClassifier::classify("hello there"), Category::Auto);
        assert_eq!(CategoryClassifier::classify("what is an msme?"), Category::Auto);
    }

    #[test]
    fn test_resolve_respects_explicit_mode() {
        assert_eq!(
            CategoryClassifier::resolve(Category::Schemes, "mudra loan"),
            Category::Schemes
        );
        assert_eq!(
            CategoryClassifier::resolve(Category::Auto, "mudra loan"),
            Category::Loans
        );
    }
}
