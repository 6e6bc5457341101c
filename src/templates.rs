//! Recommendation templates: condition -> guidance rules for common
//! nonprofit AI situations
//!
//! These aren't generic advice - each template pairs a concrete trigger
//! condition with recommendations, dated action items, and the resources
//! needed to execute them. The registry is static and versioned with the
//! crate so the same response always produces the same guidance.

use serde::{Deserialize, Serialize};

use crate::types::{
    ConcernKey, CurrentCapacity, ImpactScale, ImplementationTimeline, OrganizationType,
    ProblemUrgency, QuestionnaireResponse, StakeholderReadiness,
};

/// A static recommendation rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationTemplate {
    pub id: String,
    pub category: TemplateCategory,
    /// When this template applies. Data, not a closure, so the registry
    /// serializes and unit-tests independently of the matcher.
    pub condition: Condition,
    pub recommendations: Vec<String>,
    /// Action items carry their own time markers ("Week 1", "Month 2",
    /// "Day 1-3"); the personalized plan buckets them by those markers.
    pub action_items: Vec<String>,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    ChangeManagement,
    Budget,
    Privacy,
    Ethics,
    Workforce,
    Technical,
    Timeline,
    Scale,
    Sustainability,
}

/// A small boolean expression over the questionnaire response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    StakeholderIs(StakeholderReadiness),
    CapacityIs(CurrentCapacity),
    OrganizationIs(OrganizationType),
    UrgencyIs(ProblemUrgency),
    TimelineIs(ImplementationTimeline),
    ScaleIs(ImpactScale),
    ConcernAtLeast { concern: ConcernKey, rating: u8 },
    /// True only when the respondent explicitly ranked this concern in
    /// their top three; a derived ranking does not count.
    ConcernInTopThree(ConcernKey),
    TechnicalReadinessAtMost(u8),
    Any(Vec<Condition>),
}

impl Condition {
    /// Evaluate against a response. Side-effect-free and total.
    pub fn matches(&self, response: &QuestionnaireResponse) -> bool {
        match self {
            Condition::StakeholderIs(v) => response.stakeholder_readiness == *v,
            Condition::CapacityIs(v) => response.current_capacity == *v,
            Condition::OrganizationIs(v) => response.organization_type == *v,
            Condition::UrgencyIs(v) => response.problem_urgency == *v,
            Condition::TimelineIs(v) => response.implementation_timeline == *v,
            Condition::ScaleIs(v) => response.impact_scale == *v,
            Condition::ConcernAtLeast { concern, rating } => {
                response.concerns.rating(*concern) >= *rating
            }
            Condition::ConcernInTopThree(concern) => response
                .top_three_concerns
                .as_ref()
                .is_some_and(|top| top.contains(concern)),
            Condition::TechnicalReadinessAtMost(v) => response.technical_readiness <= *v,
            Condition::Any(conditions) => conditions.iter().any(|c| c.matches(response)),
        }
    }
}

/// A rated concern at 4+ or an explicit top-three ranking both trigger
/// the concern-focused templates.
fn elevated_concern(concern: ConcernKey) -> Condition {
    Condition::Any(vec![
        Condition::ConcernAtLeast { concern, rating: 4 },
        Condition::ConcernInTopThree(concern),
    ])
}

/// Action items bucketed by timeframe, capped at 5 per bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

/// Maximum entries kept per action-plan bucket. A firm cap: items from
/// earlier-registered templates are never dropped in favor of later ones.
const ACTION_ITEMS_PER_BUCKET: usize = 5;

/// Get all built-in recommendation templates, in registry order.
pub fn get_templates() -> Vec<RecommendationTemplate> {
    vec![
        resistant_stakeholders(),
        skeptical_stakeholders(),
        limited_budget(),
        high_privacy_concern(),
        high_bias_concern(),
        job_displacement_concern(),
        human_dignity_concern(),
        low_technical_readiness(),
        critical_urgency(),
        organization_wide_impact(),
        pilot_scale(),
        environmental_concern(),
    ]
}

/// Every template whose condition holds for this response, registry order
/// preserved.
pub fn matching_templates(response: &QuestionnaireResponse) -> Vec<RecommendationTemplate> {
    get_templates()
        .into_iter()
        .filter(|t| t.condition.matches(response))
        .collect()
}

/// Bucket matched templates' action items into immediate / short-term /
/// long-term by their text markers, keeping template order, then cap each
/// bucket at its first 5 entries.
pub fn personalized_action_plan(templates: &[RecommendationTemplate]) -> ActionPlan {
    let mut plan = ActionPlan::default();

    for template in templates {
        for item in &template.action_items {
            if item.contains("Week 1") || item.contains("Day") {
                plan.immediate.push(item.clone());
            } else if item.contains("Week") || item.contains("Month 2") {
                plan.short_term.push(item.clone());
            } else {
                plan.long_term.push(item.clone());
            }
        }
    }

    plan.immediate.truncate(ACTION_ITEMS_PER_BUCKET);
    plan.short_term.truncate(ACTION_ITEMS_PER_BUCKET);
    plan.long_term.truncate(ACTION_ITEMS_PER_BUCKET);
    plan
}

// ============================================================================
// TEMPLATE DEFINITIONS
// ============================================================================

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn resistant_stakeholders() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "resistant-stakeholders".to_string(),
        category: TemplateCategory::ChangeManagement,
        condition: Condition::StakeholderIs(StakeholderReadiness::Resistant),
        recommendations: strings(&[
            "Implement a comprehensive change management program with focus on early wins",
            "Create stakeholder engagement workshops to address concerns directly",
            "Develop a champion network within each department",
            "Establish transparent feedback loops and regular town halls",
        ]),
        action_items: strings(&[
            "Week 1-2: Conduct stakeholder mapping and influence analysis",
            "Week 3-4: Host initial listening sessions with key resistors",
            "Month 2: Launch pilot with volunteer early adopters",
            "Month 3: Share success stories and measurable wins",
        ]),
        resources: strings(&[
            "Change management consultant or facilitator",
            "Internal communications specialist",
            "Training budget for workshops",
            "Time allocation for staff participation",
        ]),
    }
}

fn skeptical_stakeholders() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "skeptical-stakeholders".to_string(),
        category: TemplateCategory::ChangeManagement,
        condition: Condition::StakeholderIs(StakeholderReadiness::Skeptical),
        recommendations: strings(&[
            "Build trust through transparency and small wins",
            "Provide evidence-based case studies from similar organizations",
            "Create opt-in pilot programs for interested teams",
            "Establish clear success metrics and regular reporting",
        ]),
        action_items: strings(&[
            "Week 1: Share relevant case studies and ROI data",
            "Week 2-3: Identify and engage potential champions",
            "Month 2: Launch voluntary pilot program",
            "Monthly: Publish progress reports with metrics",
        ]),
        resources: strings(&[
            "Case study documentation",
            "Metrics tracking system",
            "Communications budget",
            "Pilot program resources",
        ]),
    }
}

fn limited_budget() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "limited-budget".to_string(),
        category: TemplateCategory::Budget,
        condition: Condition::Any(vec![
            Condition::CapacityIs(CurrentCapacity::Limited),
            Condition::OrganizationIs(OrganizationType::Grassroots),
        ]),
        recommendations: strings(&[
            "Start with free or low-cost AI tools (e.g., Google AI, open-source models)",
            "Apply for technology grants from major tech companies",
            "Partner with local universities for pro-bono support",
            "Implement in phases to spread costs over time",
        ]),
        action_items: strings(&[
            "Week 1: Research and test free AI tools",
            "Week 2: Apply for Google.org, Microsoft, or AWS nonprofit grants",
            "Week 3: Reach out to local university computer science departments",
            "Month 2: Create phased budget proposal for board",
        ]),
        resources: strings(&[
            "Grant writing support",
            "Technical volunteer coordinator",
            "Open-source tool documentation",
            "Phased implementation plan template",
        ]),
    }
}

fn high_privacy_concern() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "high-privacy-concern".to_string(),
        category: TemplateCategory::Privacy,
        condition: elevated_concern(ConcernKey::DataPrivacy),
        recommendations: strings(&[
            "Implement privacy-preserving AI techniques (federated learning, differential privacy)",
            "Establish comprehensive data governance framework",
            "Conduct privacy impact assessments for each AI use case",
            "Use on-premise or private cloud solutions when possible",
        ]),
        action_items: strings(&[
            "Week 1: Conduct data audit and classification",
            "Week 2-3: Develop data governance policy",
            "Month 2: Implement encryption and access controls",
            "Month 3: Complete privacy impact assessment",
        ]),
        resources: strings(&[
            "Data privacy consultant",
            "Legal review budget",
            "Privacy-preserving tech tools",
            "Staff training on data handling",
        ]),
    }
}

fn high_bias_concern() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "high-bias-concern".to_string(),
        category: TemplateCategory::Ethics,
        condition: elevated_concern(ConcernKey::EthicalBias),
        recommendations: strings(&[
            "Implement bias testing protocols at each stage",
            "Ensure diverse representation in AI development team",
            "Use explainable AI models for transparency",
            "Establish ethics review committee with community representation",
        ]),
        action_items: strings(&[
            "Week 1: Form diverse AI ethics committee",
            "Week 2: Define bias testing protocols",
            "Month 2: Conduct initial bias audit",
            "Quarterly: Regular bias testing and reporting",
        ]),
        resources: strings(&[
            "AI ethics expert or consultant",
            "Bias testing tools (e.g., AI Fairness 360)",
            "Community engagement budget",
            "Training on algorithmic bias",
        ]),
    }
}

fn job_displacement_concern() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "job-displacement-concern".to_string(),
        category: TemplateCategory::Workforce,
        condition: elevated_concern(ConcernKey::JobDisplacement),
        recommendations: strings(&[
            "Commit to no involuntary layoffs due to AI implementation",
            "Develop comprehensive reskilling and upskilling programs",
            "Redefine roles to focus on human-centered tasks",
            "Create new positions for AI oversight and management",
        ]),
        action_items: strings(&[
            "Week 1: Issue public commitment to workforce",
            "Week 2-3: Assess current skills and future needs",
            "Month 2: Launch training program enrollment",
            "Month 3: Begin role transition planning",
        ]),
        resources: strings(&[
            "Professional development budget",
            "Training platform or partner",
            "HR consultant for role redesign",
            "Staff time for training",
        ]),
    }
}

fn human_dignity_concern() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "human-dignity-concern".to_string(),
        category: TemplateCategory::Ethics,
        condition: elevated_concern(ConcernKey::HumanDignity),
        recommendations: strings(&[
            "Maintain human decision-makers for all sensitive cases",
            "Implement \"human in the loop\" for all beneficiary-facing decisions",
            "Create clear appeal and review processes",
            "Preserve personal interaction options at every touchpoint",
        ]),
        action_items: strings(&[
            "Week 1: Map all beneficiary touchpoints",
            "Week 2: Define \"sensitive case\" criteria",
            "Week 3: Design appeal process workflow",
            "Month 2: Train staff on new hybrid processes",
        ]),
        resources: strings(&[
            "Service design consultant",
            "Beneficiary feedback systems",
            "Process documentation tools",
            "Staff training resources",
        ]),
    }
}

fn low_technical_readiness() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "low-technical-readiness".to_string(),
        category: TemplateCategory::Technical,
        condition: Condition::Any(vec![
            Condition::TechnicalReadinessAtMost(2),
            Condition::CapacityIs(CurrentCapacity::Overwhelmed),
        ]),
        recommendations: strings(&[
            "Partner with technical assistance providers",
            "Start with pre-built, user-friendly solutions",
            "Invest in basic digital literacy training first",
            "Consider managed services to reduce technical burden",
        ]),
        action_items: strings(&[
            "Week 1: Assess current technical capabilities",
            "Week 2: Research managed AI service providers",
            "Week 3: Schedule demos of user-friendly tools",
            "Month 2: Begin basic digital skills training",
        ]),
        resources: strings(&[
            "Technical assistance provider",
            "Managed service budget",
            "Training resources",
            "IT support augmentation",
        ]),
    }
}

fn critical_urgency() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "critical-urgency".to_string(),
        category: TemplateCategory::Timeline,
        condition: Condition::Any(vec![
            Condition::UrgencyIs(ProblemUrgency::Critical),
            Condition::TimelineIs(ImplementationTimeline::Immediate),
        ]),
        recommendations: strings(&[
            "Deploy quick-win solutions while planning comprehensive approach",
            "Use proven off-the-shelf solutions initially",
            "Establish rapid decision-making committee",
            "Set up parallel workstreams for immediate and long-term needs",
        ]),
        action_items: strings(&[
            "Day 1-3: Form rapid response team",
            "Week 1: Identify and deploy quick wins",
            "Week 2: Begin parallel long-term planning",
            "Week 3-4: Implement initial solutions",
        ]),
        resources: strings(&[
            "Dedicated project team",
            "Emergency implementation budget",
            "Vendor fast-track agreements",
            "Executive sponsorship",
        ]),
    }
}

fn organization_wide_impact() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "organization-wide-impact".to_string(),
        category: TemplateCategory::Scale,
        condition: Condition::ScaleIs(ImpactScale::OrganizationWide),
        recommendations: strings(&[
            "Develop comprehensive governance structure",
            "Create center of excellence for AI",
            "Implement robust change management across all departments",
            "Establish organization-wide training program",
        ]),
        action_items: strings(&[
            "Month 1: Establish AI governance committee",
            "Month 2: Design center of excellence structure",
            "Month 3: Launch department-by-department rollout",
            "Ongoing: Monthly all-hands updates",
        ]),
        resources: strings(&[
            "Executive leadership time",
            "Governance framework consultant",
            "Enterprise training platform",
            "Internal communications team",
        ]),
    }
}

fn pilot_scale() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "pilot-scale".to_string(),
        category: TemplateCategory::Scale,
        condition: Condition::ScaleIs(ImpactScale::Pilot),
        recommendations: strings(&[
            "Define clear success criteria for pilot",
            "Select representative but low-risk use case",
            "Document lessons learned thoroughly",
            "Plan for scale from the beginning",
        ]),
        action_items: strings(&[
            "Week 1: Define pilot scope and success metrics",
            "Week 2: Select pilot team and use case",
            "Month 2-3: Run pilot with close monitoring",
            "Month 4: Evaluate and plan expansion",
        ]),
        resources: strings(&[
            "Pilot team time allocation",
            "Evaluation framework",
            "Documentation system",
            "Scaling roadmap",
        ]),
    }
}

fn environmental_concern() -> RecommendationTemplate {
    RecommendationTemplate {
        id: "environmental-concern".to_string(),
        category: TemplateCategory::Sustainability,
        condition: Condition::ConcernAtLeast {
            concern: ConcernKey::EnvironmentalImpact,
            rating: 4,
        },
        recommendations: strings(&[
            "Choose green cloud providers with renewable energy",
            "Implement efficient model selection and optimization",
            "Purchase carbon offsets for AI compute usage",
            "Monitor and report on environmental impact",
        ]),
        action_items: strings(&[
            "Week 1: Audit current and projected compute needs",
            "Week 2: Research green hosting options",
            "Month 2: Implement carbon tracking",
            "Quarterly: Purchase carbon offsets",
        ]),
        resources: strings(&[
            "Green IT consultant",
            "Carbon offset budget",
            "Environmental impact tracking tools",
            "Sustainable tech partnerships",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    fn base_response() -> QuestionnaireResponse {
        QuestionnaireResponse {
            organization_type: OrganizationType::Small,
            organization_mission: String::new(),
            ai_initiative_types: vec![],
            initiative_description: String::new(),
            expected_outcomes: vec![],
            implementation_timeline: ImplementationTimeline::SixMonths,
            impact_scale: ImpactScale::Department,
            concerns: ConcernRatings {
                environmental_impact: 2,
                job_displacement: 2,
                ethical_bias: 2,
                data_privacy: 2,
                human_dignity: 2,
                accuracy_errors: 2,
                tech_dependency: 2,
            },
            top_three_concerns: None,
            biggest_fears: vec![],
            current_capacity: CurrentCapacity::Adequate,
            problem_urgency: ProblemUrgency::Moderate,
            stakeholder_readiness: StakeholderReadiness::Supportive,
            technical_readiness: 3,
            change_management_capacity: 3,
            ethical_framework_maturity: 3,
            data_governance_status: 3,
        }
    }

    #[test]
    fn test_get_templates_returns_all_12() {
        let templates = get_templates();
        assert_eq!(templates.len(), 12);

        let ids: Vec<_> = templates.iter().map(|t| &t.id).collect();
        let mut unique_ids = ids.clone();
        unique_ids.sort();
        unique_ids.dedup();
        assert_eq!(ids.len(), unique_ids.len(), "Template IDs should be unique");
    }

    #[test]
    fn test_templates_have_required_fields() {
        for template in get_templates() {
            assert!(!template.id.is_empty(), "Template ID should not be empty");
            assert!(
                !template.recommendations.is_empty(),
                "Template {} should have recommendations",
                template.id
            );
            assert!(
                !template.action_items.is_empty(),
                "Template {} should have action items",
                template.id
            );
            assert!(
                !template.resources.is_empty(),
                "Template {} should have resources",
                template.id
            );
        }
    }

    #[test]
    fn test_neutral_response_matches_nothing() {
        let matches = matching_templates(&base_response());
        assert!(
            matches.is_empty(),
            "A middle-of-the-road response should match no templates, got {:?}",
            matches.iter().map(|t| &t.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_resistant_stakeholders_match() {
        let mut response = base_response();
        response.stakeholder_readiness = StakeholderReadiness::Resistant;
        let matches = matching_templates(&response);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "resistant-stakeholders");
    }

    #[test]
    fn test_high_concern_rating_triggers_template() {
        let mut response = base_response();
        response.concerns.data_privacy = 4;
        let ids: Vec<_> = matching_templates(&response)
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(ids, vec!["high-privacy-concern"]);
    }

    #[test]
    fn test_explicit_top_three_triggers_concern_template() {
        let mut response = base_response();
        // Rating stays low; the explicit ranking alone triggers it.
        response.top_three_concerns = Some(vec![ConcernKey::EthicalBias]);
        let ids: Vec<_> = matching_templates(&response)
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(ids, vec!["high-bias-concern"]);
    }

    #[test]
    fn test_derived_top_three_does_not_trigger_concern_template() {
        let mut response = base_response();
        // dataPrivacy 3 is the single highest rating, so it leads the
        // derived top three, but the condition wants an explicit ranking.
        response.concerns.data_privacy = 3;
        response.concerns.environmental_impact = 1;
        assert!(matching_templates(&response).is_empty());
    }

    #[test]
    fn test_match_order_follows_registry_order() {
        let mut response = base_response();
        response.stakeholder_readiness = StakeholderReadiness::Resistant;
        response.concerns.data_privacy = 5;
        response.concerns.environmental_impact = 4;
        response.impact_scale = ImpactScale::Pilot;

        let ids: Vec<_> = matching_templates(&response)
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(
            ids,
            vec![
                "resistant-stakeholders",
                "high-privacy-concern",
                "pilot-scale",
                "environmental-concern"
            ]
        );
    }

    #[test]
    fn test_matcher_is_idempotent() {
        let mut response = base_response();
        response.current_capacity = CurrentCapacity::Overwhelmed;
        response.problem_urgency = ProblemUrgency::Critical;

        let first: Vec<_> = matching_templates(&response).iter().map(|t| t.id.clone()).collect();
        let second: Vec<_> = matching_templates(&response).iter().map(|t| t.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_action_plan_bucketing_markers() {
        let template = critical_urgency();
        let plan = personalized_action_plan(std::slice::from_ref(&template));

        // "Day 1-3" and "Week 1" go immediate; other "Week" items short-term.
        assert_eq!(
            plan.immediate,
            vec![
                "Day 1-3: Form rapid response team",
                "Week 1: Identify and deploy quick wins"
            ]
        );
        assert_eq!(
            plan.short_term,
            vec![
                "Week 2: Begin parallel long-term planning",
                "Week 3-4: Implement initial solutions"
            ]
        );
        assert!(plan.long_term.is_empty());
    }

    #[test]
    fn test_action_plan_long_term_bucket() {
        let template = organization_wide_impact();
        let plan = personalized_action_plan(std::slice::from_ref(&template));
        // "Month 1", "Month 3", "Ongoing" have no Week/Day/Month 2 markers.
        assert_eq!(plan.immediate, Vec::<String>::new());
        assert_eq!(plan.short_term, vec!["Month 2: Design center of excellence structure"]);
        assert_eq!(plan.long_term.len(), 3);
    }

    #[test]
    fn test_action_plan_cap_keeps_earlier_templates() {
        // Enough matched templates to overflow the immediate bucket.
        let templates = vec![
            resistant_stakeholders(),   // 1 immediate item (Week 1-2)
            skeptical_stakeholders(),   // 1 immediate item (Week 1)
            limited_budget(),           // 1 immediate item (Week 1)
            high_privacy_concern(),     // 1 immediate item (Week 1)
            high_bias_concern(),        // 1 immediate item (Week 1)
            job_displacement_concern(), // 1 immediate item (Week 1) - dropped
        ];
        let plan = personalized_action_plan(&templates);
        assert_eq!(plan.immediate.len(), 5);
        assert!(plan.immediate[0].contains("stakeholder mapping"));
        assert!(
            !plan.immediate.iter().any(|i| i.contains("public commitment")),
            "the sixth template's item must be the one dropped"
        );
    }

    #[test]
    fn test_conditions_serialize() {
        let registry = get_templates();
        let json = serde_json::to_string(&registry).unwrap();
        let parsed: Vec<RecommendationTemplate> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 12);
        assert_eq!(parsed[0].condition, registry[0].condition);
    }
}
