//! Path Analysis Builder: one full analysis record per decision path
//!
//! Each builder is pure given (response, sub-scores, matched templates).
//! The lookup tables here are intentionally partial - a concern or outcome
//! with no entry simply contributes nothing, which is why they return
//! `Option` instead of failing.

use crate::templates::{personalized_action_plan, RecommendationTemplate};
use crate::types::{
    BudgetEstimate, ConcernKey, CurrentCapacity, ImpactScale, MitigationStrategy, OutcomeTag,
    PathAnalysis, PathId, ProblemUrgency, QuestionnaireResponse, RequiredResources,
    StakeholderReadiness, SubScores, TradeOffSummary,
};

const FULL_IMPACT_BASE: f64 = 85.0;
const PHASED_IMPACT_BASE: f64 = 65.0;
const STATUS_QUO_IMPACT_BASE: f64 = 20.0;
const CRITICAL_URGENCY_BONUS: f64 = 10.0;

/// Path 1: full AI implementation.
pub fn build_full_path(
    response: &QuestionnaireResponse,
    scores: &SubScores,
    templates: &[RecommendationTemplate],
) -> PathAnalysis {
    let plan = personalized_action_plan(templates);

    PathAnalysis {
        path: PathId::FullImplementation,
        title: "Path 1: Pull the Lever (Full AI Implementation)".to_string(),
        benefits: full_benefits(response),
        risks: full_risks(response),
        recommendations: contextual_recommendations(Approach::Aggressive, templates),
        opportunity_costs: None,
        mitigation_strategies: None,
        mitigation_playbook: None,
        action_plan_30_days: plan.immediate,
        action_plan_60_days: plan.short_term,
        action_plan_90_days: plan.long_term,
        budget_estimates: scaled_budget(response, 50_000, 100_000, 20_000, 40_000, 150_000, 300_000),
        required_resources: Some(full_resources()),
        success_metrics: success_metrics(response),
        red_flags: red_flags(response),
        impact_score: impact_score(FULL_IMPACT_BASE, response, scores),
        trade_off_summary: TradeOffSummary {
            gains: strings(&[
                "Maximum efficiency gains",
                "Competitive advantage",
                "Scale potential",
                "Data-driven insights",
            ]),
            losses: strings(&[
                "Higher upfront costs",
                "Greater risk exposure",
                "Potential stakeholder resistance",
                "Complex change management",
            ]),
        },
    }
}

/// Path 2: maintain the status quo. Benefits, risks, budget, and
/// trade-offs are path-identity constants; only the opportunity costs
/// read the response.
pub fn build_status_quo_path(
    response: &QuestionnaireResponse,
    scores: &SubScores,
) -> PathAnalysis {
    PathAnalysis {
        path: PathId::StatusQuo,
        title: "Path 2: Don't Pull (Maintain Status Quo)".to_string(),
        benefits: strings(&[
            "No disruption to current operations",
            "Avoids AI-related risks entirely",
            "No additional investment required",
            "Maintains current stakeholder comfort",
            "Preserves organizational culture",
        ]),
        risks: strings(&[
            "Continued operational inefficiencies",
            "Growing competitive disadvantage",
            "Staff burnout from manual processes",
            "Inability to scale services",
            "Missed funding opportunities",
        ]),
        recommendations: strings(&[
            "Optimize current manual processes",
            "Invest in staff training and development",
            "Explore non-AI technology improvements",
            "Focus on incremental improvements",
        ]),
        opportunity_costs: Some(opportunity_costs(response)),
        mitigation_strategies: None,
        mitigation_playbook: None,
        action_plan_30_days: strings(&[
            "Document current process inefficiencies",
            "Survey staff on pain points",
            "Research non-AI alternatives",
        ]),
        action_plan_60_days: strings(&[
            "Implement process improvements",
            "Increase staffing in critical areas",
            "Develop manual scaling strategies",
        ]),
        action_plan_90_days: strings(&[
            "Evaluate effectiveness of improvements",
            "Consider revisiting AI decision",
            "Plan for sustainable growth",
        ]),
        budget_estimates: BudgetEstimate {
            initial: "$0 for AI, potential staff costs".to_string(),
            ongoing: "Current operational costs + inflation".to_string(),
            three_year_total: "Status quo maintenance costs".to_string(),
        },
        required_resources: None,
        success_metrics: success_metrics(response),
        red_flags: red_flags(response),
        // No urgency bonus here: standing still does not get more
        // valuable because the problem is urgent.
        impact_score: (STATUS_QUO_IMPACT_BASE * scores.readiness.value)
            .min(100.0)
            .round() as u8,
        trade_off_summary: TradeOffSummary {
            gains: strings(&[
                "Stability and predictability",
                "No transition risks",
                "Cost avoidance",
                "Cultural preservation",
            ]),
            losses: strings(&[
                "Efficiency gains",
                "Competitive position",
                "Innovation opportunities",
                "Scale potential",
            ]),
        },
    }
}

/// Path 3: phased implementation with safeguards.
pub fn build_phased_path(
    response: &QuestionnaireResponse,
    scores: &SubScores,
    templates: &[RecommendationTemplate],
) -> PathAnalysis {
    let plan = personalized_action_plan(templates);
    let playbook = mitigation_playbook(response);

    let mut plan_30 = strings(&[
        "Form AI ethics committee",
        "Develop implementation framework",
        "Identify pilot use case",
    ]);
    plan_30.extend(plan.immediate.iter().take(2).cloned());

    let mut plan_60 = strings(&[
        "Launch limited pilot",
        "Establish monitoring systems",
        "Begin staff training",
    ]);
    plan_60.extend(plan.short_term.iter().take(2).cloned());

    let mut plan_90 = strings(&[
        "Evaluate pilot results",
        "Refine approach based on learnings",
        "Plan next phase expansion",
    ]);
    plan_90.extend(plan.long_term.iter().take(2).cloned());

    let mut metrics = success_metrics(response);
    metrics.push("Stakeholder satisfaction scores".to_string());
    metrics.push("Ethics compliance rate".to_string());

    let mut flags = red_flags(response);
    flags.push("Safeguard complexity overwhelming team".to_string());
    flags.push("Progress too slow to address urgent needs".to_string());

    PathAnalysis {
        path: PathId::PhasedSafeguards,
        title: "Path 3: Pull with Care (Phased Implementation with Safeguards)".to_string(),
        benefits: strings(&[
            "Balanced risk and reward approach",
            "Time to build stakeholder confidence",
            "Opportunity to learn and adjust",
            "Maintains human oversight",
            "Gradual culture shift",
        ]),
        risks: strings(&[
            "Slower realization of benefits",
            "Higher long-term costs",
            "Potential for implementation fatigue",
            "Complexity of hybrid systems",
        ]),
        recommendations: contextual_recommendations(Approach::Cautious, templates),
        opportunity_costs: None,
        mitigation_strategies: Some(playbook.iter().map(|m| m.strategy.clone()).collect()),
        mitigation_playbook: Some(playbook),
        action_plan_30_days: plan_30,
        action_plan_60_days: plan_60,
        action_plan_90_days: plan_90,
        budget_estimates: scaled_budget(response, 20_000, 40_000, 15_000, 30_000, 80_000, 160_000),
        required_resources: Some(phased_resources()),
        success_metrics: metrics,
        red_flags: flags,
        impact_score: impact_score(PHASED_IMPACT_BASE, response, scores),
        trade_off_summary: TradeOffSummary {
            gains: strings(&[
                "Risk mitigation",
                "Stakeholder buy-in",
                "Learning opportunity",
                "Ethical alignment",
            ]),
            losses: strings(&[
                "Speed of implementation",
                "Some efficiency gains",
                "First-mover advantage",
                "Simplicity",
            ]),
        },
    }
}

// ============================================================================
// Derivations shared across paths
// ============================================================================

enum Approach {
    Aggressive,
    Cautious,
}

fn contextual_recommendations(
    approach: Approach,
    templates: &[RecommendationTemplate],
) -> Vec<String> {
    let mut recommendations = match approach {
        Approach::Aggressive => strings(&[
            "Move quickly to capture first-mover advantages",
            "Invest heavily in change management upfront",
            "Accept calculated risks for greater rewards",
        ]),
        Approach::Cautious => strings(&[
            "Prioritize stakeholder buy-in over speed",
            "Build robust safeguards before scaling",
            "Maintain parallel manual processes initially",
        ]),
    };

    for template in templates.iter().take(3) {
        recommendations.extend(template.recommendations.iter().take(2).cloned());
    }

    recommendations
}

fn full_benefits(response: &QuestionnaireResponse) -> Vec<String> {
    let mut benefits = Vec::new();

    if response.current_capacity == CurrentCapacity::Overwhelmed {
        benefits.push("Immediate relief for overwhelmed staff".to_string());
        benefits.push("Ability to handle current backlog efficiently".to_string());
    }

    if response.expected_outcomes.contains(&OutcomeTag::ServeMore) {
        let range = if response.impact_scale == ImpactScale::OrganizationWide {
            "50-75%"
        } else {
            "25-40%"
        };
        benefits.push(format!("Serve {range} more beneficiaries"));
    }

    if response.expected_outcomes.contains(&OutcomeTag::ReduceTime) {
        benefits.push("Reduce processing time by 60-80%".to_string());
    }

    if response.expected_outcomes.contains(&OutcomeTag::IncreaseRevenue) {
        benefits.push("Increase fundraising efficiency and donor retention".to_string());
        benefits.push("Identify new revenue opportunities through data insights".to_string());
    }

    if response.impact_scale == ImpactScale::OrganizationWide {
        benefits.push("Transform organizational capabilities".to_string());
        benefits.push("Create competitive advantage in sector".to_string());
    }

    benefits
}

fn full_risks(response: &QuestionnaireResponse) -> Vec<String> {
    let mut risks = Vec::new();

    for (concern, rating) in response.concerns.iter() {
        if rating >= 4 {
            if let Some(risk) = concern_risk(concern) {
                risks.push(risk.to_string());
            }
        }
    }

    if response.stakeholder_readiness == StakeholderReadiness::Resistant {
        risks.push("Severe implementation challenges due to stakeholder resistance".to_string());
    }

    if response.technical_readiness <= 2 {
        risks.push("Technical infrastructure gaps may cause failures".to_string());
    }

    risks
}

/// Risk sentence for a concern rated 4+. Covers all seven concerns.
fn concern_risk(concern: ConcernKey) -> Option<&'static str> {
    match concern {
        ConcernKey::EthicalBias => {
            Some("High risk of algorithmic bias affecting vulnerable populations")
        }
        ConcernKey::DataPrivacy => Some("Significant data privacy and security challenges"),
        ConcernKey::JobDisplacement => Some("Likely displacement of multiple staff roles"),
        ConcernKey::HumanDignity => Some("Risk of dehumanizing service delivery"),
        ConcernKey::AccuracyErrors => Some("Potential for harmful errors in critical decisions"),
        ConcernKey::EnvironmentalImpact => {
            Some("Substantial carbon footprint from AI operations")
        }
        ConcernKey::TechDependency => Some("Dangerous over-reliance on technology"),
    }
}

fn opportunity_costs(response: &QuestionnaireResponse) -> Vec<String> {
    let mut costs = Vec::new();

    if response.current_capacity == CurrentCapacity::Overwhelmed {
        costs.push("Continued inability to meet growing demand".to_string());
        costs.push("Risk of staff burnout and turnover".to_string());
    }

    if response.expected_outcomes.contains(&OutcomeTag::ServeMore) {
        costs.push("Missed opportunity to expand service reach".to_string());
    }

    if response.expected_outcomes.contains(&OutcomeTag::GenerateInsights) {
        costs.push("Missing valuable insights from data".to_string());
    }

    costs.push("Falling behind sector innovation curve".to_string());
    costs.push("Reduced competitiveness for funding".to_string());

    costs
}

/// Mitigation playbook for the phased path: the top-3 concerns mapped
/// through the strategy table. Concerns without a table entry are
/// silently omitted, so the playbook can legitimately be empty.
fn mitigation_playbook(response: &QuestionnaireResponse) -> Vec<MitigationStrategy> {
    response
        .top_concerns()
        .into_iter()
        .filter_map(concern_mitigation)
        .collect()
}

fn concern_mitigation(concern: ConcernKey) -> Option<MitigationStrategy> {
    match concern {
        ConcernKey::EthicalBias => Some(MitigationStrategy {
            concern: "Algorithmic Bias".to_string(),
            strategy: "Implement bias testing at each milestone, diverse review team".to_string(),
            timeframe: "Ongoing, quarterly audits".to_string(),
            resources: strings(&[
                "Bias testing tools",
                "Diverse review committee",
                "External auditor",
            ]),
        }),
        ConcernKey::DataPrivacy => Some(MitigationStrategy {
            concern: "Data Privacy".to_string(),
            strategy: "Privacy-by-design approach, encryption, access controls".to_string(),
            timeframe: "Before launch, continuous monitoring".to_string(),
            resources: strings(&["Privacy consultant", "Security tools", "Compliance budget"]),
        }),
        ConcernKey::JobDisplacement => Some(MitigationStrategy {
            concern: "Job Displacement".to_string(),
            strategy: "No-layoff pledge, comprehensive retraining program".to_string(),
            timeframe: "6 months before implementation".to_string(),
            resources: strings(&[
                "Training budget",
                "Career counseling",
                "Role redesign consultant",
            ]),
        }),
        ConcernKey::HumanDignity => Some(MitigationStrategy {
            concern: "Human Dignity".to_string(),
            strategy: "Human-in-the-loop for all beneficiary decisions".to_string(),
            timeframe: "Built into design phase".to_string(),
            resources: strings(&[
                "Service design expert",
                "Beneficiary feedback system",
                "Appeal process",
            ]),
        }),
        ConcernKey::EnvironmentalImpact
        | ConcernKey::AccuracyErrors
        | ConcernKey::TechDependency => None,
    }
}

fn scaled_budget(
    response: &QuestionnaireResponse,
    initial_lo: u32,
    initial_hi: u32,
    ongoing_lo: u32,
    ongoing_hi: u32,
    total_lo: u32,
    total_hi: u32,
) -> BudgetEstimate {
    let m = response.organization_type.budget_multiplier();
    BudgetEstimate {
        initial: format!("${}-${}", initial_lo * m, initial_hi * m),
        ongoing: format!("${}-${}/year", ongoing_lo * m, ongoing_hi * m),
        three_year_total: format!("${}-${} over 3 years", total_lo * m, total_hi * m),
    }
}

fn full_resources() -> RequiredResources {
    RequiredResources {
        skills: strings(&[
            "AI/ML expertise",
            "Data science capabilities",
            "Change management",
            "Project management",
            "Ethics and governance",
        ]),
        tools: strings(&[
            "Enterprise AI platform",
            "Data management system",
            "Monitoring tools",
            "Training platform",
        ]),
        partnerships: strings(&[
            "AI vendor",
            "Technical consultant",
            "Ethics advisor",
            "Training provider",
        ]),
    }
}

fn phased_resources() -> RequiredResources {
    RequiredResources {
        skills: strings(&[
            "Basic AI literacy",
            "Project management",
            "Change facilitation",
            "Risk assessment",
        ]),
        tools: strings(&[
            "Pilot AI tools",
            "Basic analytics",
            "Feedback systems",
            "Documentation platform",
        ]),
        partnerships: strings(&[
            "Technical advisor",
            "Pilot vendor",
            "Peer organizations",
            "Academic partner",
        ]),
    }
}

fn success_metrics(response: &QuestionnaireResponse) -> Vec<String> {
    let mut metrics = Vec::new();

    if response.expected_outcomes.contains(&OutcomeTag::ServeMore) {
        metrics.push("Number of beneficiaries served (target: +40%)".to_string());
    }
    if response.expected_outcomes.contains(&OutcomeTag::ReduceTime) {
        metrics.push("Average processing time (target: -60%)".to_string());
    }
    if response.expected_outcomes.contains(&OutcomeTag::ImproveQuality) {
        metrics.push("Decision accuracy rate (target: >95%)".to_string());
    }
    if response.expected_outcomes.contains(&OutcomeTag::IncreaseRevenue) {
        metrics.push("Revenue growth rate (target: +15-25%)".to_string());
        metrics.push("Donor retention rate (target: +10%)".to_string());
    }

    metrics.push("Staff satisfaction score".to_string());
    metrics.push("Beneficiary satisfaction rate".to_string());
    metrics.push("Cost per service delivered".to_string());
    metrics.push("Error/incident rate".to_string());

    metrics
}

fn red_flags(response: &QuestionnaireResponse) -> Vec<String> {
    let mut flags = Vec::new();

    if response.stakeholder_readiness == StakeholderReadiness::Resistant {
        flags.push("Active sabotage or workarounds by staff".to_string());
    }

    flags.push("Consistent system errors or downtime".to_string());
    flags.push("Data quality issues affecting outputs".to_string());

    if response.concerns.ethical_bias >= 4 {
        flags.push("Evidence of discriminatory outcomes".to_string());
    }

    flags.push("Beneficiary complaints increasing".to_string());
    flags.push("Costs exceeding budget by >20%".to_string());

    flags
}

fn impact_score(base: f64, response: &QuestionnaireResponse, scores: &SubScores) -> u8 {
    let bonus = if response.problem_urgency == ProblemUrgency::Critical {
        CRITICAL_URGENCY_BONUS
    } else {
        0.0
    };
    (base * scores.readiness.value + bonus).min(100.0).round() as u8
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
