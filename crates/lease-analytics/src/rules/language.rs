// Lease language risk rules: aggressive phrasing and tenant-unfavorable clauses
use crate::patterns::{weighted_phrases_present, AGGRESSIVE_LANGUAGE, UNFAVORABLE_CLAUSES};
use crate::rules::{RiskContext, RiskContribution, RiskRule};

/// Adds the weight of every table phrase found in the text
pub struct PhraseTableRule {
    name: &'static str,
    factor: &'static str,
    table: &'static [(&'static str, f64)],
    flag_prefix: &'static str,
}

impl RiskRule for PhraseTableRule {
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate(&self, ctx: &RiskContext<'_>) -> Option<RiskContribution> {
        let found = weighted_phrases_present(ctx.text_lower, self.table);
        if found.is_empty() {
            return None;
        }

        let weight = found.iter().map(|(_, w)| w).sum();
        let mut contribution = RiskContribution::new(self.factor, weight);
        contribution.red_flags = found
            .iter()
            .map(|(phrase, _)| format!("{}: '{}'", self.flag_prefix, phrase))
            .collect();
        Some(contribution)
    }
}

/// Get all lease language rules
pub fn get_all_rules() -> Vec<Box<dyn RiskRule>> {
    vec![
        Box::new(PhraseTableRule {
            name: "Aggressive language",
            factor: "aggressive_language",
            table: AGGRESSIVE_LANGUAGE,
            flag_prefix: "Aggressive lease language",
        }),
        Box::new(PhraseTableRule {
            name: "Unfavorable clauses",
            factor: "unfavorable_terms",
            table: UNFAVORABLE_CLAUSES,
            flag_prefix: "Tenant-unfavorable clause",
        }),
    ]
}
