//! Wire-format questionnaire input and boundary validation
//!
//! The form layer submits enumerated fields as strings and ratings as
//! integers. [`RawResponse::into_response`] is the only fallible step in
//! the crate: it checks every enumerated field against its domain, checks
//! rating ranges, and resolves optional fields to their documented
//! defaults. Past this boundary the engine is total and cannot fail.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::EngineError;
use crate::types::{
    ConcernKey, ConcernRatings, CurrentCapacity, FearTag, ImpactScale, ImplementationTimeline,
    OrganizationType, OutcomeTag, ProblemUrgency, QuestionnaireResponse, StakeholderReadiness,
};

/// Readiness sub-ratings default to the scale midpoint when not answered.
const DEFAULT_READINESS_RATING: u8 = 3;

/// A questionnaire response as submitted over the wire, before domain
/// validation. Field names match the form layer's JSON payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResponse {
    #[serde(default)]
    pub organization_type: String,
    #[serde(default)]
    pub organization_mission: String,

    #[serde(default)]
    pub ai_initiative_types: Vec<String>,
    #[serde(default)]
    pub initiative_description: String,
    #[serde(default)]
    pub expected_outcomes: Vec<String>,
    #[serde(default)]
    pub implementation_timeline: String,
    #[serde(default)]
    pub impact_scale: String,

    #[serde(default)]
    pub primary_concerns: Option<RawConcernRatings>,
    #[serde(default)]
    pub top_three_concerns: Option<Vec<String>>,
    #[serde(default)]
    pub biggest_fears: Vec<String>,

    #[serde(default)]
    pub current_capacity: String,
    #[serde(default)]
    pub problem_urgency: String,
    #[serde(default)]
    pub stakeholder_readiness: String,

    #[serde(default)]
    pub technical_readiness: Option<i64>,
    #[serde(default)]
    pub change_management_capacity: Option<i64>,
    #[serde(default)]
    pub ethical_framework_maturity: Option<i64>,
    #[serde(default)]
    pub data_governance_status: Option<i64>,
}

/// Concern ratings as submitted. All seven are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConcernRatings {
    pub environmental_impact: Option<i64>,
    pub job_displacement: Option<i64>,
    pub ethical_bias: Option<i64>,
    pub data_privacy: Option<i64>,
    pub human_dignity: Option<i64>,
    pub accuracy_errors: Option<i64>,
    pub tech_dependency: Option<i64>,
}

impl RawResponse {
    /// Parse a raw response from the form layer's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::invalid("response", e.to_string()))
    }

    /// Validate domains, check rating ranges, and resolve defaults.
    pub fn into_response(self) -> Result<QuestionnaireResponse, EngineError> {
        let concerns = self
            .primary_concerns
            .ok_or_else(|| EngineError::missing("primaryConcerns"))?;

        let top_three_concerns = match self.top_three_concerns {
            Some(keys) => Some(
                keys.iter()
                    .map(|k| parse_enum::<ConcernKey>("topThreeConcerns", k))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };

        Ok(QuestionnaireResponse {
            organization_type: parse_required::<OrganizationType>(
                "organizationType",
                &self.organization_type,
            )?,
            organization_mission: self.organization_mission,
            ai_initiative_types: self.ai_initiative_types,
            initiative_description: self.initiative_description,
            expected_outcomes: self
                .expected_outcomes
                .iter()
                .map(|tag| parse_enum::<OutcomeTag>("expectedOutcomes", tag))
                .collect::<Result<Vec<_>, _>>()?,
            implementation_timeline: parse_required::<ImplementationTimeline>(
                "implementationTimeline",
                &self.implementation_timeline,
            )?,
            impact_scale: parse_required::<ImpactScale>("impactScale", &self.impact_scale)?,
            concerns: ConcernRatings {
                environmental_impact: required_rating(
                    "primaryConcerns.environmentalImpact",
                    concerns.environmental_impact,
                )?,
                job_displacement: required_rating(
                    "primaryConcerns.jobDisplacement",
                    concerns.job_displacement,
                )?,
                ethical_bias: required_rating(
                    "primaryConcerns.ethicalBias",
                    concerns.ethical_bias,
                )?,
                data_privacy: required_rating(
                    "primaryConcerns.dataPrivacy",
                    concerns.data_privacy,
                )?,
                human_dignity: required_rating(
                    "primaryConcerns.humanDignity",
                    concerns.human_dignity,
                )?,
                accuracy_errors: required_rating(
                    "primaryConcerns.accuracyErrors",
                    concerns.accuracy_errors,
                )?,
                tech_dependency: required_rating(
                    "primaryConcerns.techDependency",
                    concerns.tech_dependency,
                )?,
            },
            top_three_concerns,
            biggest_fears: self
                .biggest_fears
                .iter()
                .map(|fear| parse_enum::<FearTag>("biggestFears", fear))
                .collect::<Result<Vec<_>, _>>()?,
            current_capacity: parse_required::<CurrentCapacity>(
                "currentCapacity",
                &self.current_capacity,
            )?,
            problem_urgency: parse_required::<ProblemUrgency>(
                "problemUrgency",
                &self.problem_urgency,
            )?,
            stakeholder_readiness: parse_required::<StakeholderReadiness>(
                "stakeholderReadiness",
                &self.stakeholder_readiness,
            )?,
            technical_readiness: optional_rating("technicalReadiness", self.technical_readiness)?,
            change_management_capacity: optional_rating(
                "changeManagementCapacity",
                self.change_management_capacity,
            )?,
            ethical_framework_maturity: optional_rating(
                "ethicalFrameworkMaturity",
                self.ethical_framework_maturity,
            )?,
            data_governance_status: optional_rating(
                "dataGovernanceStatus",
                self.data_governance_status,
            )?,
        })
    }
}

/// Parse an enumerated wire value through its serde name. One source of
/// truth for domains: the enum definitions in `types.rs`.
fn parse_enum<T: DeserializeOwned>(field: &'static str, value: &str) -> Result<T, EngineError> {
    serde_json::from_value(Value::String(value.to_string()))
        .map_err(|_| EngineError::invalid(field, value))
}

fn parse_required<T: DeserializeOwned>(field: &'static str, value: &str) -> Result<T, EngineError> {
    if value.is_empty() {
        return Err(EngineError::missing(field));
    }
    parse_enum(field, value)
}

fn check_rating(field: &'static str, value: i64) -> Result<u8, EngineError> {
    if (1..=5).contains(&value) {
        Ok(value as u8)
    } else {
        Err(EngineError::invalid(field, value.to_string()))
    }
}

fn required_rating(field: &'static str, value: Option<i64>) -> Result<u8, EngineError> {
    match value {
        Some(v) => check_rating(field, v),
        None => Err(EngineError::missing(field)),
    }
}

fn optional_rating(field: &'static str, value: Option<i64>) -> Result<u8, EngineError> {
    match value {
        Some(v) => check_rating(field, v),
        None => Ok(DEFAULT_READINESS_RATING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_fixture() -> RawResponse {
        RawResponse {
            organization_type: "medium".to_string(),
            organization_mission: "Shelter access for all".to_string(),
            ai_initiative_types: vec!["chatbot".to_string()],
            initiative_description: "Benefits eligibility helper".to_string(),
            expected_outcomes: vec!["serve_more".to_string(), "reduce_time".to_string()],
            implementation_timeline: "6months".to_string(),
            impact_scale: "department".to_string(),
            primary_concerns: Some(RawConcernRatings {
                environmental_impact: Some(2),
                job_displacement: Some(3),
                ethical_bias: Some(4),
                data_privacy: Some(5),
                human_dignity: Some(3),
                accuracy_errors: Some(4),
                tech_dependency: Some(2),
            }),
            top_three_concerns: None,
            biggest_fears: vec!["harm_beneficiaries".to_string()],
            current_capacity: "stretched".to_string(),
            problem_urgency: "high".to_string(),
            stakeholder_readiness: "supportive".to_string(),
            technical_readiness: Some(4),
            change_management_capacity: None,
            ethical_framework_maturity: None,
            data_governance_status: Some(2),
        }
    }

    #[test]
    fn test_valid_response_converts() {
        let response = raw_fixture().into_response().unwrap();
        assert_eq!(response.organization_type, crate::types::OrganizationType::Medium);
        assert_eq!(response.concerns.data_privacy, 5);
        assert_eq!(response.expected_outcomes.len(), 2);
        assert_eq!(response.biggest_fears, vec![FearTag::HarmBeneficiaries]);
    }

    #[test]
    fn test_absent_readiness_ratings_default_to_three() {
        let response = raw_fixture().into_response().unwrap();
        assert_eq!(response.technical_readiness, 4);
        assert_eq!(response.change_management_capacity, 3);
        assert_eq!(response.ethical_framework_maturity, 3);
        assert_eq!(response.data_governance_status, 2);
    }

    #[test]
    fn test_unknown_urgency_is_invalid_input() {
        let mut raw = raw_fixture();
        raw.problem_urgency = "apocalyptic".to_string();
        let err = raw.into_response().unwrap_err();
        assert_eq!(err, EngineError::invalid("problemUrgency", "apocalyptic"));
    }

    #[test]
    fn test_empty_required_field_is_missing() {
        let mut raw = raw_fixture();
        raw.stakeholder_readiness = String::new();
        let err = raw.into_response().unwrap_err();
        assert_eq!(err, EngineError::missing("stakeholderReadiness"));
    }

    #[test]
    fn test_missing_concern_block_is_missing() {
        let mut raw = raw_fixture();
        raw.primary_concerns = None;
        let err = raw.into_response().unwrap_err();
        assert_eq!(err, EngineError::missing("primaryConcerns"));
    }

    #[test]
    fn test_rating_out_of_range_is_invalid() {
        let mut raw = raw_fixture();
        raw.primary_concerns.as_mut().unwrap().ethical_bias = Some(6);
        let err = raw.into_response().unwrap_err();
        assert_eq!(
            err,
            EngineError::invalid("primaryConcerns.ethicalBias", "6")
        );

        let mut raw = raw_fixture();
        raw.technical_readiness = Some(0);
        let err = raw.into_response().unwrap_err();
        assert_eq!(err, EngineError::invalid("technicalReadiness", "0"));
    }

    #[test]
    fn test_unknown_outcome_tag_is_invalid() {
        let mut raw = raw_fixture();
        raw.expected_outcomes.push("teleportation".to_string());
        let err = raw.into_response().unwrap_err();
        assert_eq!(err, EngineError::invalid("expectedOutcomes", "teleportation"));
    }

    #[test]
    fn test_top_three_concerns_parse() {
        let mut raw = raw_fixture();
        raw.top_three_concerns = Some(vec![
            "dataPrivacy".to_string(),
            "ethicalBias".to_string(),
            "humanDignity".to_string(),
        ]);
        let response = raw.into_response().unwrap();
        assert_eq!(
            response.top_three_concerns,
            Some(vec![
                ConcernKey::DataPrivacy,
                ConcernKey::EthicalBias,
                ConcernKey::HumanDignity
            ])
        );
    }

    #[test]
    fn test_from_json_wire_payload() {
        let json = r#"{
            "organizationType": "large",
            "organizationMission": "Coastal cleanup",
            "aiInitiativeTypes": ["data_analysis"],
            "initiativeDescription": "Predict debris hotspots",
            "expectedOutcomes": ["generate_insights"],
            "implementationTimeline": "1year",
            "impactScale": "organization-wide",
            "primaryConcerns": {
                "environmentalImpact": 5,
                "jobDisplacement": 1,
                "ethicalBias": 2,
                "dataPrivacy": 3,
                "humanDignity": 1,
                "accuracyErrors": 3,
                "techDependency": 4
            },
            "biggestFears": ["resource_waste"],
            "currentCapacity": "adequate",
            "problemUrgency": "moderate",
            "stakeholderReadiness": "enthusiastic"
        }"#;
        let response = RawResponse::from_json(json).unwrap().into_response().unwrap();
        assert_eq!(response.impact_scale, ImpactScale::OrganizationWide);
        assert_eq!(response.concerns.environmental_impact, 5);
        // All four readiness sub-ratings absent, so all default.
        assert_eq!(response.change_management_capacity, 3);
    }

    #[test]
    fn test_malformed_json_is_invalid_input() {
        let err = RawResponse::from_json("{not json").unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { field: "response", .. }));
    }
}
