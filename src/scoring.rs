//! Scoring Model: four normalized sub-scores from a questionnaire response
//!
//! Pure and total. The weights are fixed (they sum to 1.0) and the
//! influence labels are display-only; the recommendation selector reads
//! only the values.

use crate::types::{ProblemUrgency, QuestionnaireResponse, StakeholderReadiness, SubScore, SubScores};

pub const RISK_AVERSION_WEIGHT: f64 = 0.30;
pub const URGENCY_WEIGHT: f64 = 0.25;
pub const READINESS_WEIGHT: f64 = 0.25;
pub const ALIGNMENT_WEIGHT: f64 = 0.20;

/// Compute all four sub-scores. Each value lands in [0, 1].
pub fn compute_sub_scores(response: &QuestionnaireResponse) -> SubScores {
    let risk = risk_aversion_score(response);
    let urgency = urgency_score(response.problem_urgency);
    let readiness = readiness_score(response);
    let alignment = alignment_score(response.stakeholder_readiness);

    SubScores {
        risk_aversion: SubScore {
            value: risk,
            weight: RISK_AVERSION_WEIGHT,
            influence: if risk > 0.6 {
                "High caution needed".to_string()
            } else {
                "Moderate risk tolerance".to_string()
            },
        },
        urgency: SubScore {
            value: urgency,
            weight: URGENCY_WEIGHT,
            influence: if urgency > 0.7 {
                "Fast implementation needed".to_string()
            } else {
                "Time for careful planning".to_string()
            },
        },
        readiness: SubScore {
            value: readiness,
            weight: READINESS_WEIGHT,
            influence: if readiness > 0.6 {
                "Well-prepared for implementation".to_string()
            } else {
                "Significant preparation needed".to_string()
            },
        },
        alignment: SubScore {
            value: alignment,
            weight: ALIGNMENT_WEIGHT,
            influence: if alignment > 0.6 {
                "Strong buy-in expected".to_string()
            } else {
                "Change management critical".to_string()
            },
        },
    }
}

/// Mean of the four risk-facing concern ratings, normalized to [0, 1].
fn risk_aversion_score(response: &QuestionnaireResponse) -> f64 {
    let c = &response.concerns;
    let sum = c.ethical_bias + c.data_privacy + c.human_dignity + c.accuracy_errors;
    f64::from(sum) / 20.0
}

fn urgency_score(urgency: ProblemUrgency) -> f64 {
    match urgency {
        ProblemUrgency::Critical => 1.0,
        ProblemUrgency::High => 0.75,
        ProblemUrgency::Moderate => 0.5,
        ProblemUrgency::Low => 0.25,
    }
}

/// Mean of the four readiness sub-ratings, normalized to [0, 1]. Absent
/// ratings were already defaulted to 3 at the raw boundary.
fn readiness_score(response: &QuestionnaireResponse) -> f64 {
    let sum = response.technical_readiness
        + response.change_management_capacity
        + response.ethical_framework_maturity
        + response.data_governance_status;
    f64::from(sum) / 20.0
}

fn alignment_score(readiness: StakeholderReadiness) -> f64 {
    match readiness {
        StakeholderReadiness::Enthusiastic => 1.0,
        StakeholderReadiness::Supportive => 0.75,
        StakeholderReadiness::Skeptical => 0.4,
        StakeholderReadiness::Resistant => 0.2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    fn response_with(
        concerns: [u8; 7],
        urgency: ProblemUrgency,
        stakeholders: StakeholderReadiness,
        readiness: [u8; 4],
    ) -> QuestionnaireResponse {
        QuestionnaireResponse {
            organization_type: OrganizationType::Small,
            organization_mission: String::new(),
            ai_initiative_types: vec![],
            initiative_description: String::new(),
            expected_outcomes: vec![],
            implementation_timeline: ImplementationTimeline::SixMonths,
            impact_scale: ImpactScale::Pilot,
            concerns: ConcernRatings {
                environmental_impact: concerns[0],
                job_displacement: concerns[1],
                ethical_bias: concerns[2],
                data_privacy: concerns[3],
                human_dignity: concerns[4],
                accuracy_errors: concerns[5],
                tech_dependency: concerns[6],
            },
            top_three_concerns: None,
            biggest_fears: vec![],
            current_capacity: CurrentCapacity::Adequate,
            problem_urgency: urgency,
            stakeholder_readiness: stakeholders,
            technical_readiness: readiness[0],
            change_management_capacity: readiness[1],
            ethical_framework_maturity: readiness[2],
            data_governance_status: readiness[3],
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total = RISK_AVERSION_WEIGHT + URGENCY_WEIGHT + READINESS_WEIGHT + ALIGNMENT_WEIGHT;
        assert!((total - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_risk_aversion_uses_only_the_four_risk_concerns() {
        // environmentalImpact, jobDisplacement, techDependency maxed out
        // must not move the risk-aversion score.
        let response = response_with(
            [5, 5, 2, 2, 2, 2, 5],
            ProblemUrgency::Low,
            StakeholderReadiness::Supportive,
            [3, 3, 3, 3],
        );
        let scores = compute_sub_scores(&response);
        assert!((scores.risk_aversion.value - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_risk_aversion_maxed() {
        let response = response_with(
            [1, 1, 5, 5, 5, 5, 1],
            ProblemUrgency::Low,
            StakeholderReadiness::Supportive,
            [3, 3, 3, 3],
        );
        let scores = compute_sub_scores(&response);
        assert_eq!(scores.risk_aversion.value, 1.0);
        assert_eq!(scores.risk_aversion.influence, "High caution needed");
    }

    #[test]
    fn test_urgency_mapping() {
        for (urgency, expected) in [
            (ProblemUrgency::Critical, 1.0),
            (ProblemUrgency::High, 0.75),
            (ProblemUrgency::Moderate, 0.5),
            (ProblemUrgency::Low, 0.25),
        ] {
            let response = response_with(
                [3; 7],
                urgency,
                StakeholderReadiness::Supportive,
                [3, 3, 3, 3],
            );
            assert_eq!(compute_sub_scores(&response).urgency.value, expected);
        }
    }

    #[test]
    fn test_alignment_mapping() {
        for (readiness, expected) in [
            (StakeholderReadiness::Enthusiastic, 1.0),
            (StakeholderReadiness::Supportive, 0.75),
            (StakeholderReadiness::Skeptical, 0.4),
            (StakeholderReadiness::Resistant, 0.2),
        ] {
            let response =
                response_with([3; 7], ProblemUrgency::Moderate, readiness, [3, 3, 3, 3]);
            assert_eq!(compute_sub_scores(&response).alignment.value, expected);
        }
    }

    #[test]
    fn test_readiness_is_mean_of_sub_ratings() {
        let response = response_with(
            [3; 7],
            ProblemUrgency::Moderate,
            StakeholderReadiness::Supportive,
            [5, 4, 2, 1],
        );
        let scores = compute_sub_scores(&response);
        assert!((scores.readiness.value - 0.6).abs() < 1e-9);
        assert_eq!(scores.readiness.influence, "Significant preparation needed");
    }

    #[test]
    fn test_all_scores_stay_in_unit_interval() {
        for rating in 1..=5u8 {
            let response = response_with(
                [rating; 7],
                ProblemUrgency::Critical,
                StakeholderReadiness::Resistant,
                [rating; 4],
            );
            let scores = compute_sub_scores(&response);
            for score in [
                &scores.risk_aversion,
                &scores.urgency,
                &scores.readiness,
                &scores.alignment,
            ] {
                assert!((0.0..=1.0).contains(&score.value));
            }
        }
    }

    #[test]
    fn test_influence_labels_at_thresholds() {
        // risk-aversion of exactly 0.6 is not "high caution".
        let response = response_with(
            [3, 3, 3, 3, 3, 3, 3],
            ProblemUrgency::Moderate,
            StakeholderReadiness::Supportive,
            [3, 3, 3, 3],
        );
        let scores = compute_sub_scores(&response);
        assert_eq!(scores.risk_aversion.influence, "Moderate risk tolerance");
        // alignment 0.75 > 0.6
        assert_eq!(scores.alignment.influence, "Strong buy-in expected");
        // urgency 0.5 <= 0.7
        assert_eq!(scores.urgency.influence, "Time for careful planning");
    }
}
