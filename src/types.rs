//! Core types for the pathwise decision engine
//!
//! Everything here is a plain value object: constructed once per analysis
//! run, never mutated, serializable as-is for reports, tables, or a
//! downstream PDF generator.

use serde::{Deserialize, Serialize};

/// The three fixed decision paths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PathId {
    /// Pull the lever: full AI implementation
    FullImplementation,
    /// Don't pull: maintain the status quo
    StatusQuo,
    /// Pull with care: phased implementation with safeguards
    PhasedSafeguards,
}

/// Organization size category. Sector labels shown by the form layer map
/// onto these before the engine is invoked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationType {
    Grassroots,
    Small,
    Medium,
    Large,
}

impl OrganizationType {
    /// Budget multiplier applied to the base cost ranges.
    pub fn budget_multiplier(&self) -> u32 {
        match self {
            OrganizationType::Large => 3,
            OrganizationType::Medium => 2,
            OrganizationType::Grassroots | OrganizationType::Small => 1,
        }
    }
}

/// When the solution needs to be operational.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImplementationTimeline {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "future")]
    Future,
}

/// How broadly the initiative will be deployed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ImpactScale {
    Pilot,
    Department,
    OrganizationWide,
    Network,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProblemUrgency {
    Critical,
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StakeholderReadiness {
    Enthusiastic,
    Supportive,
    Skeptical,
    Resistant,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CurrentCapacity {
    Overwhelmed,
    Stretched,
    Limited,
    Adequate,
    Exploring,
}

/// The seven fixed concern dimensions rated by the questionnaire.
///
/// Declaration order is load-bearing: risk iteration and top-three tie
/// breaking both follow it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ConcernKey {
    EnvironmentalImpact,
    JobDisplacement,
    EthicalBias,
    DataPrivacy,
    HumanDignity,
    AccuracyErrors,
    TechDependency,
}

impl ConcernKey {
    pub const ALL: [ConcernKey; 7] = [
        ConcernKey::EnvironmentalImpact,
        ConcernKey::JobDisplacement,
        ConcernKey::EthicalBias,
        ConcernKey::DataPrivacy,
        ConcernKey::HumanDignity,
        ConcernKey::AccuracyErrors,
        ConcernKey::TechDependency,
    ];

    /// Display label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            ConcernKey::EnvironmentalImpact => "Environmental Impact",
            ConcernKey::JobDisplacement => "Job Displacement",
            ConcernKey::EthicalBias => "Ethical Bias",
            ConcernKey::DataPrivacy => "Data Privacy",
            ConcernKey::HumanDignity => "Human Dignity",
            ConcernKey::AccuracyErrors => "Accuracy Errors",
            ConcernKey::TechDependency => "Tech Dependency",
        }
    }
}

/// Expected-outcome tags selectable for an initiative.
///
/// `IncreaseRevenue` is part of the engine domain even though the current
/// form does not offer it; callers that submit it get revenue-specific
/// benefits and metrics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeTag {
    ServeMore,
    ReduceTime,
    ImproveQuality,
    FreeStaff,
    ReduceCosts,
    IncreaseAccess,
    GenerateInsights,
    IncreaseRevenue,
    Other,
}

/// "Biggest fear" tags. Collected for the report's context section; the
/// scoring and path builders do not branch on them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FearTag {
    HarmBeneficiaries,
    LossTrust,
    MissionDrift,
    StaffMorale,
    ResourceWaste,
    Other,
}

impl FearTag {
    pub fn label(&self) -> &'static str {
        match self {
            FearTag::HarmBeneficiaries => "Harming beneficiaries",
            FearTag::LossTrust => "Losing community trust",
            FearTag::MissionDrift => "Drifting from the mission",
            FearTag::StaffMorale => "Damaging staff morale",
            FearTag::ResourceWaste => "Wasting scarce resources",
            FearTag::Other => "Other",
        }
    }
}

/// Ratings for the seven fixed concerns, each 1-5.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConcernRatings {
    pub environmental_impact: u8,
    pub job_displacement: u8,
    pub ethical_bias: u8,
    pub data_privacy: u8,
    pub human_dignity: u8,
    pub accuracy_errors: u8,
    pub tech_dependency: u8,
}

impl ConcernRatings {
    pub fn rating(&self, key: ConcernKey) -> u8 {
        match key {
            ConcernKey::EnvironmentalImpact => self.environmental_impact,
            ConcernKey::JobDisplacement => self.job_displacement,
            ConcernKey::EthicalBias => self.ethical_bias,
            ConcernKey::DataPrivacy => self.data_privacy,
            ConcernKey::HumanDignity => self.human_dignity,
            ConcernKey::AccuracyErrors => self.accuracy_errors,
            ConcernKey::TechDependency => self.tech_dependency,
        }
    }

    /// Iterate (key, rating) pairs in the fixed declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ConcernKey, u8)> + '_ {
        ConcernKey::ALL.iter().map(move |&k| (k, self.rating(k)))
    }
}

/// A completed questionnaire, fully typed and validated. Build one via
/// [`crate::raw::RawResponse::into_response`] or construct it directly in
/// code that already has typed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponse {
    pub organization_type: OrganizationType,
    pub organization_mission: String,

    pub ai_initiative_types: Vec<String>,
    pub initiative_description: String,
    pub expected_outcomes: Vec<OutcomeTag>,
    pub implementation_timeline: ImplementationTimeline,
    pub impact_scale: ImpactScale,

    #[serde(rename = "primaryConcerns")]
    pub concerns: ConcernRatings,
    /// Explicit ranked top-3 concerns, when the respondent ordered them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_three_concerns: Option<Vec<ConcernKey>>,
    pub biggest_fears: Vec<FearTag>,

    pub current_capacity: CurrentCapacity,
    pub problem_urgency: ProblemUrgency,
    pub stakeholder_readiness: StakeholderReadiness,

    /// Readiness sub-ratings, 1-5. Absent values were already resolved to
    /// their default of 3 at the raw boundary.
    pub technical_readiness: u8,
    pub change_management_capacity: u8,
    pub ethical_framework_maturity: u8,
    pub data_governance_status: u8,
}

impl QuestionnaireResponse {
    /// Top-3 concerns: the explicit ranking when present, else the three
    /// highest-rated keys with ties broken by declaration order.
    pub fn top_concerns(&self) -> Vec<ConcernKey> {
        if let Some(explicit) = &self.top_three_concerns {
            return explicit.iter().take(3).copied().collect();
        }
        let mut ranked: Vec<(ConcernKey, u8)> = self.concerns.iter().collect();
        // Stable sort keeps declaration order for equal ratings.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(3).map(|(k, _)| k).collect()
    }
}

/// One normalized scoring dimension, with its fixed weight and a
/// display-only influence label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubScore {
    /// Normalized value in [0, 1].
    pub value: f64,
    pub weight: f64,
    pub influence: String,
}

/// The four weighted sub-scores. Weights sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SubScores {
    pub risk_aversion: SubScore,
    pub urgency: SubScore,
    pub readiness: SubScore,
    pub alignment: SubScore,
}

/// Cost estimate strings for one path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEstimate {
    pub initial: String,
    pub ongoing: String,
    pub three_year_total: String,
}

/// Skills, tools, and partnerships a path calls for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredResources {
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub partnerships: Vec<String>,
}

/// A concern-specific mitigation entry in the phased path's playbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MitigationStrategy {
    pub concern: String,
    pub strategy: String,
    pub timeframe: String,
    pub resources: Vec<String>,
}

/// What a path gains and gives up. Path-identity constants, not derived
/// from the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeOffSummary {
    pub gains: Vec<String>,
    pub losses: Vec<String>,
}

/// Full analysis record for one path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathAnalysis {
    pub path: PathId,
    pub title: String,
    pub benefits: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_costs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigation_strategies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigation_playbook: Option<Vec<MitigationStrategy>>,
    pub action_plan_30_days: Vec<String>,
    pub action_plan_60_days: Vec<String>,
    pub action_plan_90_days: Vec<String>,
    pub budget_estimates: BudgetEstimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_resources: Option<RequiredResources>,
    pub success_metrics: Vec<String>,
    pub red_flags: Vec<String>,
    /// Potential benefit magnitude, 0-100, independent of whether this
    /// path is recommended.
    pub impact_score: u8,
    pub trade_off_summary: TradeOffSummary,
}

/// The selected path plus its rationale. Always exactly one winner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub path: PathId,
    pub rationale: String,
}

/// Everything one analysis run produces: the three path analyses, the
/// recommendation, and the sub-scores that drove it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionAnalysis {
    pub full_implementation: PathAnalysis,
    pub status_quo: PathAnalysis,
    pub phased_safeguards: PathAnalysis,
    pub recommendation: Recommendation,
    pub sub_scores: SubScores,
}
