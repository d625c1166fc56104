// Action playbooks derived from finished assessments and reports
use crate::config::MarketBenchmarks;
use crate::intelligence::market_intelligence;
use crate::retention::retention_plan;
use shared_types::{
    ActionPlan, ComplianceReport, DocumentAnalysis, MitigationStep, Priority, PriorityAction,
    RevenueOpportunity, RiskAssessment, RiskBand, RiskLevel, RoadmapPhase, TimelineBucket,
};
use std::collections::BTreeMap;

/// Exposure above which an insurance review is worthwhile
const INSURANCE_REVIEW_EXPOSURE: f64 = 10_000.0;
/// Violation count above which ongoing monitoring is recommended
const MONITORING_VIOLATION_COUNT: usize = 3;

fn step(action: &str, priority: Priority, timeline: &str, cost_estimate: f64) -> MitigationStep {
    MitigationStep {
        action: action.to_string(),
        priority,
        timeline: timeline.to_string(),
        cost_estimate,
    }
}

/// Concrete next steps for a risk assessment, most urgent first
pub fn mitigation_steps(risk: &RiskAssessment) -> Vec<MitigationStep> {
    let mut steps = Vec::new();
    if risk.risk_level.is_elevated() {
        steps.push(step(
            "Legal Review Required",
            Priority::Immediate,
            "1-3 days",
            500.0,
        ));
    }
    if !risk.compliance_issues.is_empty() {
        steps.push(step("Compliance Audit", Priority::High, "1-2 weeks", 1500.0));
    }
    if risk.financial_exposure > INSURANCE_REVIEW_EXPOSURE {
        steps.push(step("Insurance Review", Priority::Medium, "2-3 weeks", 300.0));
    }
    steps
}

/// Opportunities as numbered phases, largest impact first (ties keep input order)
pub fn implementation_roadmap(opportunities: &[RevenueOpportunity]) -> Vec<RoadmapPhase> {
    let mut sorted: Vec<&RevenueOpportunity> = opportunities.iter().collect();
    sorted.sort_by(|a, b| b.annual_impact.total_cmp(&a.annual_impact));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, opportunity)| RoadmapPhase {
            phase: i + 1,
            opportunity: opportunity.description.clone(),
            timeline: opportunity.timeline.clone(),
            impact: opportunity.annual_impact,
            effort: opportunity.implementation_effort,
        })
        .collect()
}

/// Opportunity count and summed impact per timeline band
pub fn roi_timeline(opportunities: &[RevenueOpportunity]) -> BTreeMap<String, TimelineBucket> {
    let mut timeline: BTreeMap<String, TimelineBucket> = BTreeMap::new();
    for opportunity in opportunities {
        let bucket = timeline.entry(opportunity.timeline.clone()).or_default();
        bucket.opportunities += 1;
        bucket.total_impact += opportunity.annual_impact;
    }
    timeline
}

/// One guidance line per violation that maps to a known regulation area
pub fn regulatory_guidance(report: &ComplianceReport) -> Vec<String> {
    report
        .violations
        .iter()
        .filter_map(|violation| {
            let lower = violation.to_lowercase();
            if lower.contains("discriminatory") {
                Some("Review Fair Housing Act requirements")
            } else if lower.contains("deposit") {
                Some("Check local security deposit regulations")
            } else if lower.contains("disclosure") {
                Some("Verify mandatory disclosure requirements")
            } else {
                None
            }
        })
        .map(str::to_string)
        .collect()
}

/// Fixes for discriminatory language and deposit terms, in violation order
pub fn prioritize_compliance_actions(report: &ComplianceReport) -> Vec<PriorityAction> {
    report
        .violations
        .iter()
        .filter_map(|violation| {
            let lower = violation.to_lowercase();
            if lower.contains("discriminatory") {
                Some(("Remove discriminatory language", Priority::Critical, RiskBand::High))
            } else if lower.contains("deposit") {
                Some(("Review deposit terms", Priority::High, RiskBand::Medium))
            } else {
                None
            }
        })
        .map(|(action, priority, legal_risk)| PriorityAction {
            action: action.to_string(),
            priority,
            legal_risk,
        })
        .collect()
}

pub fn compliance_actions(report: &ComplianceReport) -> Vec<String> {
    let mut actions = Vec::new();
    if report.compliance_score < 70.0 {
        actions.push("Conduct immediate legal review".to_string());
        actions.push("Update lease template".to_string());
    }
    if report.violations.len() > MONITORING_VIOLATION_COUNT {
        actions.push("Implement compliance monitoring system".to_string());
    }
    actions
}

/// Four-level legal risk from a compliance score
pub fn legal_risk(report: &ComplianceReport) -> RiskLevel {
    let score = report.compliance_score;
    if score < 50.0 {
        RiskLevel::Critical
    } else if score < 70.0 {
        RiskLevel::High
    } else if score < 85.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Every playbook for one analysed document
pub fn action_plan(analysis: &DocumentAnalysis, benchmarks: &MarketBenchmarks) -> ActionPlan {
    let opportunities = &analysis.revenue_opportunities;
    let report = &analysis.compliance_report;

    ActionPlan {
        mitigation_steps: mitigation_steps(&analysis.risk_assessment),
        total_annual_potential: opportunities.iter().map(|o| o.annual_impact).sum(),
        roi_timeline: roi_timeline(opportunities),
        implementation_roadmap: implementation_roadmap(opportunities),
        regulatory_guidance: regulatory_guidance(report),
        priority_actions: prioritize_compliance_actions(report),
        legal_risk: legal_risk(report),
        compliance_actions: compliance_actions(report),
        market: market_intelligence(
            &analysis.business_metrics,
            &analysis.market_analysis,
            benchmarks,
        ),
        retention: retention_plan(&analysis.portfolio_insights, &analysis.risk_assessment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::check_compliance;
    use crate::risk::RiskScorer;
    use pretty_assertions::assert_eq;
    use shared_types::{BusinessMetrics, Effort, OpportunityKind};

    fn opportunity(description: &str, impact: f64, timeline: &str) -> RevenueOpportunity {
        RevenueOpportunity {
            kind: OpportunityKind::UtilityRecovery,
            description: description.to_string(),
            annual_impact: impact,
            implementation_effort: Effort::Medium,
            timeline: timeline.to_string(),
        }
    }

    #[test]
    fn test_mitigation_steps_for_risky_lease() {
        let metrics = BusinessMetrics {
            monthly_rent: 4000.0,
            security_deposit: 9000.0,
            early_termination_penalty: 9000.0,
            notice_period_days: 90,
            ..Default::default()
        };
        let risk = RiskScorer::default().assess("Adults only.", &metrics);
        assert_eq!(risk.risk_level, RiskLevel::High);

        let actions: Vec<_> = mitigation_steps(&risk)
            .into_iter()
            .map(|s| (s.action, s.priority, s.cost_estimate))
            .collect();
        assert_eq!(
            actions,
            vec![
                ("Legal Review Required".to_string(), Priority::Immediate, 500.0),
                ("Compliance Audit".to_string(), Priority::High, 1500.0),
                ("Insurance Review".to_string(), Priority::Medium, 300.0),
            ]
        );
    }

    #[test]
    fn test_no_steps_for_clean_lease() {
        let risk = RiskScorer::default().assess("", &BusinessMetrics::default());
        assert!(mitigation_steps(&risk).is_empty());
    }

    #[test]
    fn test_roadmap_orders_by_impact() {
        let roadmap = implementation_roadmap(&[
            opportunity("utilities", 1200.0, "90-120 days"),
            opportunity("rent", 7200.0, "30-60 days"),
            opportunity("parking", 1200.0, "60-90 days"),
        ]);
        let phases: Vec<_> = roadmap
            .iter()
            .map(|p| (p.phase, p.opportunity.as_str()))
            .collect();
        assert_eq!(phases, vec![(1, "rent"), (2, "utilities"), (3, "parking")]);
    }

    #[test]
    fn test_roi_timeline_groups_by_band() {
        let timeline = roi_timeline(&[
            opportunity("a", 600.0, "60-90 days"),
            opportunity("b", 1200.0, "90-120 days"),
            opportunity("c", 400.0, "60-90 days"),
        ]);
        assert_eq!(timeline.len(), 2);
        assert_eq!(
            timeline["60-90 days"],
            TimelineBucket {
                opportunities: 2,
                total_impact: 1000.0,
            }
        );
    }

    #[test]
    fn test_guidance_and_actions() {
        let report = check_compliance("No children. Professional tenants. Non-refundable deposit.");
        assert_eq!(
            regulatory_guidance(&report),
            vec![
                "Review Fair Housing Act requirements",
                "Review Fair Housing Act requirements",
                "Check local security deposit regulations",
                "Verify mandatory disclosure requirements",
            ]
        );
        assert_eq!(
            compliance_actions(&report),
            vec![
                "Conduct immediate legal review",
                "Update lease template",
                "Implement compliance monitoring system",
            ]
        );
        assert_eq!(legal_risk(&report), RiskLevel::Critical);
    }

    #[test]
    fn test_priority_actions_follow_violations() {
        let report = check_compliance("No children. Non-refundable deposit.");
        assert_eq!(
            prioritize_compliance_actions(&report),
            vec![
                PriorityAction {
                    action: "Remove discriminatory language".to_string(),
                    priority: Priority::Critical,
                    legal_risk: RiskBand::High,
                },
                PriorityAction {
                    action: "Review deposit terms".to_string(),
                    priority: Priority::High,
                    legal_risk: RiskBand::Medium,
                },
            ]
        );
        // missing disclosures carry no priority action
        assert_eq!(report.violations.len(), 3);
    }

    #[test]
    fn test_action_plan_bundles_every_playbook() {
        let engine = crate::LeaseAnalysisEngine::default();
        let analysis = engine.analyze_document("");
        let plan = action_plan(&analysis, &MarketBenchmarks::default());

        assert!(plan.mitigation_steps.is_empty());
        // rent optimization 31,200 + utility recovery 1,200
        assert_eq!(plan.total_annual_potential, 32_400.0);
        assert_eq!(plan.implementation_roadmap.len(), 2);
        assert_eq!(plan.implementation_roadmap[0].impact, 31_200.0);
        assert_eq!(plan.roi_timeline.len(), 2);
        assert_eq!(
            plan.regulatory_guidance,
            vec!["Verify mandatory disclosure requirements"]
        );
        assert!(plan.priority_actions.is_empty());
        assert_eq!(plan.legal_risk, RiskLevel::Medium);
        assert!(plan.compliance_actions.is_empty());
        assert_eq!(
            plan.market.competitive_position,
            shared_types::CompetitivePosition::Value
        );
        assert!(plan.retention.recommended_actions.is_empty());
    }

    #[test]
    fn test_legal_risk_levels() {
        let mut report = check_compliance("");
        assert_eq!(legal_risk(&report), RiskLevel::Medium);
        report.compliance_score = 69.0;
        assert_eq!(legal_risk(&report), RiskLevel::High);
        report.compliance_score = 85.0;
        assert_eq!(legal_risk(&report), RiskLevel::Low);
    }
}
