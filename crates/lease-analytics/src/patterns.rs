//! Phrase tables and keyword helpers for lease text analysis
//!
//! All phrases are lowercase and matched against lowercased text.

/// Aggressive landlord language and the risk points each phrase carries
pub const AGGRESSIVE_LANGUAGE: &[(&str, f64)] = &[
    ("strictly enforced", 5.0),
    ("no exceptions", 5.0),
    ("immediate eviction", 10.0),
    ("forfeit all rights", 12.0),
    ("waive all claims", 12.0),
    ("hold harmless", 8.0),
    ("indemnify landlord", 10.0),
    ("at landlord's sole discretion", 7.0),
];

/// Clauses that shift risk onto the tenant, with their risk points
pub const UNFAVORABLE_CLAUSES: &[(&str, f64)] = &[
    ("landlord not responsible", 8.0),
    ("tenant assumes all risk", 10.0),
    ("no warranty", 6.0),
    ("as-is condition", 7.0),
    ("tenant liable for all damages", 9.0),
    ("no repairs by landlord", 12.0),
    ("waiver of habitability", 15.0),
];

/// Phrase -> description of a term favouring the tenant
pub const TENANT_FAVORABLE_TERMS: &[(&str, &str)] = &[
    ("landlord responsible for repairs", "Landlord handles maintenance"),
    ("rent includes utilities", "Utilities included in rent"),
    ("no pet deposit", "No pet deposit required"),
    ("month-to-month", "Flexible lease terms"),
];

/// Phrase -> description of a term favouring the landlord
pub const LANDLORD_FAVORABLE_TERMS: &[(&str, &str)] = &[
    ("tenant responsible for all repairs", "Tenant handles all maintenance"),
    ("no warranty", "Property sold as-is"),
    ("liquidated damages", "Early termination penalties"),
    ("automatic renewal", "Auto-renewal clause"),
];

/// Fair-housing red-flag phrases checked by the compliance report
pub const DISCRIMINATORY_LANGUAGE: &[&str] = &[
    "no children",
    "adults only",
    "mature individuals preferred",
    "quiet tenants only",
    "professional tenants",
];

pub const NON_REFUNDABLE_DEPOSIT: &str = "non-refundable deposit";

/// Disclosures a residential lease is expected to carry
pub const REQUIRED_DISCLOSURES: &[&str] = &["lead paint", "mold", "asbestos", "crime statistics"];

/// Terms whose presence suggests the text really is a lease
pub const LEASE_KEY_TERMS: &[&str] = &["rent", "deposit", "tenant", "landlord", "term"];

pub const LEASE_AGREEMENT_PHRASE: &str = "lease agreement";

pub const TENANT_PAYS_UTILITIES: &str = "tenant pays utilities";

/// Phrases from a weighted table present in `text_lower`, in table order
pub fn weighted_phrases_present<'a>(
    text_lower: &str,
    table: &'a [(&'a str, f64)],
) -> Vec<(&'a str, f64)> {
    table
        .iter()
        .filter(|(phrase, _)| text_lower.contains(phrase))
        .copied()
        .collect()
}

/// Descriptions for every phrase of a description table present in `text_lower`
pub fn described_terms_present(text_lower: &str, table: &[(&str, &str)]) -> Vec<String> {
    table
        .iter()
        .filter(|(phrase, _)| text_lower.contains(phrase))
        .map(|(_, description)| description.to_string())
        .collect()
}

/// Number of keywords from `keywords` that appear in `text_lower`
pub fn count_present(text_lower: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| text_lower.contains(*keyword))
        .count()
}

/// Keywords from `keywords` that do not appear in `text_lower`, in list order
pub fn missing_keywords<'a>(text_lower: &str, keywords: &[&'a str]) -> Vec<&'a str> {
    keywords
        .iter()
        .filter(|keyword| !text_lower.contains(*keyword))
        .copied()
        .collect()
}
