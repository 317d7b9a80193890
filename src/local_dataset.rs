//! Maharashtra dataset responder
//!
//! A local knowledge base for the `maharashtra` category. Answers come from
//! fixed templates picked by keyword, after a simulated processing delay.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::LocalDelay;
use crate::error::AssistantError;
use crate::Result;

/// Marker attached when the local dataset itself failed.
pub const LOCAL_DEGRADED_MARKER: &str = "Local model temporarily unavailable";

const REGISTRATION: &str = r#"# MSME Registration Guide 🏢

**Udyam Registration** is mandatory for all MSMEs in India:

## Steps to Register:
1. Visit **udyamregistration.gov.in**
2. Use your **Aadhaar number** for authentication
3. Fill basic business details:
   - Business name & address
   - Bank account details
   - Activities (NIC codes)
   - Investment in plant & machinery

## Required Documents:
- Aadhaar card of proprietor/partners
- Bank statement/cancelled cheque
- Business address proof

## Benefits:
✅ Access to government schemes
✅ Collateral-free loans up to ₹2 crores
✅ Protection against delayed payments
✅ Tax benefits and subsidies

**Registration is FREE** - beware of paid services!"#;

const LOAN: &str = r#"# MSME Loan Options 💰

## Popular Loan Schemes:

### 1. MUDRA Loans
- **Shishu**: Up to ₹50,000
- **Kishore**: ₹50,000 to ₹5 lakhs
- **Tarun**: ₹5 to ₹10 lakhs
- No collateral required

### 2. Stand-Up India
- ₹10 lakhs to ₹1 crore
- For SC/ST/Women entrepreneurs
- 75% loan guarantee by government

### 3. CGTMSE Scheme
- Collateral-free loans up to ₹2 crores
- Credit guarantee from government
- Available through all banks

## Application Process:
1. Choose your bank/NBFC
2. Submit Udyam certificate
3. Provide business plan & financials
4. Bank processing & approval

**Tip**: Compare interest rates across banks!"#;

const GST: &str = r#"# GST for MSMEs 📊

## Registration Thresholds:
- **₹20 lakhs**: For goods (₹10 lakhs for special states)
- **₹20 lakhs**: For services
- **Voluntary**: Can register below threshold

## MSME Benefits:

### Composition Scheme:
- Turnover up to ₹1.5 crores
- Pay 1-6% tax on turnover
- No input tax credit
- Quarterly returns

### Regular Scheme:
- Input tax credit available
- Monthly returns (GSTR-1, GSTR-3B)
- Better for B2B businesses

## Key Forms:
- **GSTR-1**: Outward supplies
- **GSTR-3B**: Monthly summary
- **GSTR-9**: Annual return

**Late Fee Waiver**: Often available for small taxpayers"#;

const SUBSIDY: &str = r#"# Government Subsidies for MSMEs 🎯

## Technology Upgradation Schemes:

### 1. Credit Linked Capital Subsidy (CLCS)
- 15% subsidy on machinery cost
- Up to ₹15 lakhs maximum
- For technology upgradation

### 2. Scheme of Fund for Regeneration of Traditional Industries (SFURTI)
- Cluster development approach
- Up to ₹8 crores per cluster
- Focus on traditional crafts

## Export Promotion:
### MSME Export Promotion Scheme
- Market development assistance
- Participation in trade fairs
- Product certification support

## State-Specific Schemes:
Each state offers additional subsidies:
- Land purchase assistance
- Power subsidy
- Tax holidays
- Employment generation incentives

**Apply Early**: Most schemes have limited budgets!"#;

const COMPLIANCE: &str = r#"# MSME Compliance Benefits 📋

## Labor Law Exemptions:

### Factories Act:
- MSMEs with <40 workers (with power) exempt from licensing
- <20 workers (without power) exempt

### Contract Labor Act:
- Establishments with <20 contract workers exempt

### Shops & Establishment Act:
- Simplified compliance for small enterprises

## Environmental Clearances:
- **White Category**: Industries with minimal pollution
- Simplified procedures for MSMEs
- Self-certification for many activities

## Other Benefits:
✅ **Delayed Payment Protection**: MSMED Act 2006
✅ **Priority Sector Lending**: Banks must lend 40% to MSMEs
✅ **Government Procurement**: 25% reservation in tenders
✅ **Udyam Assist Platform**: For informal enterprises

## Annual Compliance:
- Income Tax Return
- GST Returns (if registered)
- Labor law compliance (if applicable)
- Environmental compliance certificates"#;

const AKOLA: &str = r#"# Akola Business Ecosystem 🏙️

**Akola** is a prominent business hub in Maharashtra's Vidarbha region:

## Major Industries:
- **Cotton & Textiles**: Major cotton trading center
- **Agriculture**: Pulses, oilseeds, cotton production
- **Food Processing**: Dal mills, oil mills
- **Automotive Parts**: Growing manufacturing sector
- **Handicrafts**: Traditional crafts and handloom

## Business Opportunities:
✅ **Agro-processing**: Cotton ginning, oil extraction
✅ **Export Business**: Cotton, pulses to international markets
✅ **Logistics Hub**: Strategic location for transportation
✅ **Food Products**: Spices, dal processing units
✅ **Textile Manufacturing**: Spinning, weaving units

## Government Support:
- **District Industries Centre (DIC)** - Akola
- **MSME Development Institute** - Nagpur (covers Akola)
- **Maharashtra Industrial Development Corporation (MIDC)**

## Key Infrastructure:
- Well-connected by road and rail
- Proximity to Nagpur (major commercial center)
- Agricultural market yards (APMCs)

**Contact**: DIC Akola - 0724-2422588"#;

const BORDE_GRUHA_UDYOG: &str = r#"# BORDE GRUHA UDYOG - MSME Enterprise Analysis 🏭

**BORDE GRUHA UDYOG** is a home-based enterprise (Gruha Udyog = Home Industry):

## Typical Gruha Udyog Characteristics:
- **Scale**: Micro/Small enterprise
- **Location**: Home-based or small premises
- **Employment**: Family members + few workers
- **Investment**: Limited capital requirement

## Common Gruha Udyog Activities:
✅ **Food Processing**: Pickles, snacks, sweets
✅ **Textiles**: Handloom, embroidery, tailoring
✅ **Handicrafts**: Traditional crafts, decorative items
✅ **Agro-products**: Spice grinding, flour mills
✅ **Services**: Catering, beauty services

## MSME Benefits Available:
- **Udyam Registration**: Free online registration
- **MUDRA Loans**: Up to ₹10 lakhs without collateral
- **Skill Development**: Training programs available
- **Market Linkage**: Government procurement opportunities

## Growth Strategies:
1. **Digital Presence**: Online marketing, e-commerce
2. **Quality Certification**: ISI, AGMARK marks
3. **Cluster Development**: Join local business groups
4. **Technology Upgrade**: Modern equipment with subsidy

*Ask me specific questions about Maharashtra's business landscape, and I'll provide detailed, actionable guidance.*

---
*🤖 Response from Maharashtra Dataset (Local Model)*"#;

const BUSINESS_LOCATIONS: &str = r#"# Best Business Locations for MSMEs in India 📍

## Factors to Consider:
1. **Raw Material Availability**
2. **Market Access & Connectivity**
3. **Skilled Labor Availability**
4. **Infrastructure Support**
5. **Government Incentives**

## Top MSME-Friendly States:

### Maharashtra:
- **Pune**: IT, automotive, engineering
- **Nashik**: Food processing, engineering
- **Aurangabad**: Automotive, pharmaceuticals

### Gujarat:
- **Ahmedabad**: Textiles, chemicals, engineering
- **Surat**: Diamond cutting, textiles
- **Vadodara**: Chemicals, engineering

### Tamil Nadu:
- **Chennai**: Automotive, IT, leather
- **Coimbatore**: Textiles, engineering
- **Tirupur**: Garments, textiles

### Karnataka:
- **Bangalore**: IT, biotechnology
- **Mysore**: IT, traditional industries
- **Hubli**: Engineering, textiles

## Industrial Corridors:
- **Delhi-Mumbai**: Manufacturing hub
- **Chennai-Bangalore**: IT corridor
- **Pune-Mumbai**: Automotive belt

**Looking for specific industry location?** Tell me your business type!"#;

const THANKS: &str = r#"# You're Welcome! 🙏

Happy to help with your MSME queries!

## Need more assistance?
- **Switch to other categories** for general queries
- **Explore Resources** section for downloads & videos
- **Use Calculators** for financial planning

**Remember**: Always verify latest information from official sources like:
- msme.gov.in
- udyamregistration.gov.in
- Your local District Industries Centre

*Keep growing your business!* 🚀"#;

/// Topic hints listed by the general template: (any-of keywords, hint line).
const TOPIC_HINTS: &[(&[&str], &str)] = &[
    (&["business"], "- **Business Setup**: Registration, licenses, location selection"),
    (&["money", "finance"], "- **Financing**: MUDRA loans, venture capital, government schemes"),
    (&["tax"], "- **Taxation**: GST registration, composition scheme, tax benefits"),
    (&["export", "international"], "- **Export Business**: Documentation, incentives, market access"),
    (&["technology", "digital"], "- **Technology**: Digitization, Industry 4.0, automation subsidies"),
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

fn welcome(message: &str) -> String {
    format!(
        r#"# Welcome to Maharashtra Dataset Assistant 👋

I am your Maharashtra Business Intelligence Expert with comprehensive insights into the state's industrial ecosystem.

## 🎯 I specialize in:
- **Business Registration** (Udyam, Company incorporation)
- **Financial Assistance** (Loans, schemes, subsidies)
- **Tax & Compliance** (GST, labor laws, licenses)
- **Location Intelligence** (Industrial areas, clusters)
- **Growth Strategies** (Technology, markets, skills)

## 🔥 Try asking me:
- "How to register MSME in Maharashtra?"
- "MUDRA loan eligibility criteria"
- "GST benefits for small businesses"
- "Best locations for textile business"
- "Government subsidies for technology upgrade"

**Your question**: "{}"

*Ready to help with your MSME journey!*"#,
        message
    )
}

fn general(message: &str, lower: &str) -> String {
    let hints: Vec<&str> = TOPIC_HINTS
        .iter()
        .filter(|(keywords, _)| contains_any(lower, keywords))
        .map(|(_, hint)| *hint)
        .collect();

    format!(
        r#"# MSME Assistant (Local Model) 🤖

I'm analyzing your query: **"{}"**

## 🧠 Based on your question, you might be interested in:

{}

## 💡 **Quick Actions:**
1. **Ask specifically** about registration, loans, GST, subsidies, or compliance
2. **Mention your location** for targeted advice (e.g., "Mumbai textile business")
3. **Try other categories** (dropdown above) for general assistance

## 🎯 **Popular Queries:**
- "How to start MSME in [your city]?"
- "MUDRA loan process step by step"
- "GST registration for small business"
- "Technology upgrade subsidies 2025"

*I'm here to help make your MSME journey smoother!*"#,
        message,
        hints.join("\n")
    )
}

/// Template answer for a question. Checks run in a fixed order; place names
/// come before topics.
pub fn answer(message: &str) -> String {
    let lower = message.to_lowercase();

    if lower.contains("akola") {
        AKOLA.to_string()
    } else if lower.contains("borde gruha udyog") {
        BORDE_GRUHA_UDYOG.to_string()
    } else if contains_any(&lower, &["registration", "udyam"]) {
        REGISTRATION.to_string()
    } else if contains_any(&lower, &["loan", "mudra", "finance"]) {
        LOAN.to_string()
    } else if contains_any(&lower, &["gst", "tax"]) {
        GST.to_string()
    } else if contains_any(&lower, &["subsidy", "scheme", "grant"]) {
        SUBSIDY.to_string()
    } else if contains_any(&lower, &["compliance", "regulation", "law"]) {
        COMPLIANCE.to_string()
    } else if lower.contains("business") && contains_any(&lower, &["location", "where", "area"]) {
        BUSINESS_LOCATIONS.to_string()
    } else if contains_any(&lower, &["hello", "hi", "help"]) {
        welcome(message)
    } else if lower.contains("thank") {
        THANKS.to_string()
    } else {
        general(message, &lower)
    }
}

/// Fixed message used when the dataset cannot answer.
pub fn degraded_text(message: &str) -> String {
    format!(
        r#"# Maharashtra Dataset Service 🔧

I'm the **Maharashtra Dataset Assistant**, but I'm experiencing some technical difficulties right now.

## Quick MSME Help:
- **Registration**: Visit udyamregistration.gov.in
- **Loans**: Check MUDRA, Stand-Up India schemes
- **GST**: Composition scheme for small businesses
- **Subsidies**: CLCS for technology upgradation

**Your question was**: "{}"

For immediate assistance, please:
1. Try other **categories** (switch in dropdown)
2. Visit official MSME Ministry website
3. Contact your nearest District Industries Centre

*Maharashtra dataset service will be back online soon!*"#,
        message
    )
}

/// Anything that can answer a question for the `maharashtra` category.
#[async_trait]
pub trait LocalResponder: Send + Sync {
    async fn respond(&self, message: &str) -> Result<String>;
}

/// The local dataset with its simulated processing delay.
#[derive(Debug, Clone)]
pub struct LocalDataset {
    delay: LocalDelay,
}

impl LocalDataset {
    pub fn new(delay: LocalDelay) -> Self {
        Self { delay }
    }

    fn next_delay(&self) -> std::time::Duration {
        let jitter_ms = self.delay.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.delay.base;
        }
        self.delay.base + std::time::Duration::from_millis(rand::random_range(0..jitter_ms))
    }
}

#[async_trait]
impl LocalResponder for LocalDataset {
    /// Answer a question after the configured delay.
    async fn respond(&self, message: &str) -> Result<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AssistantError::MissingMessage);
        }

        let wait = self.next_delay();
        if !wait.is_zero() {
            debug!(delay_ms = wait.as_millis() as u64, "Simulating local model processing");
            tokio::time::sleep(wait).await;
        }

        let response = answer(message);
        info!(chars = response.len(), "Local model response generated");
        Ok(response)
    }
}

impl Default for LocalDataset {
    fn default() -> Self {
        Self::new(LocalDelay::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_place_names_come_first() {
        assert!(answer("loan options in Akola").starts_with("# Akola Business Ecosystem"));
        assert!(answer("Borde Gruha Udyog GST").starts_with("# BORDE GRUHA UDYOG"));
    }

    #[test]
    fn test_topic_templates() {
        assert!(answer("udyam steps").starts_with("# MSME Registration Guide"));
        assert!(answer("mudra eligibility").starts_with("# MSME Loan Options"));
        assert!(answer("gst filing").starts_with("# GST for MSMEs"));
        assert!(answer("any grant available").starts_with("# Government Subsidies"));
        assert!(answer("labour law rules").starts_with("# MSME Compliance Benefits"));
        assert!(answer("which business area is good").starts_with("# Best Business Locations"));
    }

    #[test]
    fn test_conversational_templates() {
        let hello = answer("hello");
        assert!(hello.starts_with("# Welcome to Maharashtra Dataset Assistant"));
        assert!(hello.contains("**Your question**: \"hello\""));

        assert!(answer("Thanks a lot").starts_with("# You're Welcome!"));
    }

    #[test]
    fn test_general_template_hints() {
        let reply = answer("export of digital goods");
        assert!(reply.contains("**Export Business**"));
        assert!(reply.contains("**Technology**"));
        assert!(!reply.contains("**Financing**"));
        assert!(reply.contains("\"export of digital goods\""));
    }

    #[test]
    fn test_degraded_text_quotes_question() {
        assert!(degraded_text("Nagpur plots").contains("**Your question was**: \"Nagpur plots\""));
    }

    #[test]
    fn test_delay_without_jitter_is_base() {
        let dataset = LocalDataset::new(LocalDelay {
            base: Duration::from_millis(5),
            jitter: Duration::ZERO,
        });
        assert_eq!(dataset.next_delay(), Duration::from_millis(5));

        let jittery = LocalDataset::new(LocalDelay {
            base: Duration::from_millis(5),
            jitter: Duration::from_millis(10),
        });
        let d = jittery.next_delay();
        assert!(d >= Duration::from_millis(5) && d < Duration::from_millis(15));
    }

    #[tokio::test]
    async fn test_respond_without_delay() {
        let dataset = LocalDataset::new(LocalDelay::NONE);
        let reply = dataset.respond("Akola cotton").await.unwrap();
        assert!(reply.contains("DIC Akola"));

        let err = dataset.respond("   ").await.unwrap_err();
        assert!(matches!(err, AssistantError::MissingMessage));
    }
}
