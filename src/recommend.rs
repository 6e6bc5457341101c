//! Recommendation Selector: ordered rules over the four sub-scores
//!
//! The rules are evaluated top to bottom and the first match wins, so
//! critical-and-ready beats high-risk, and high-risk beats the default.

use crate::types::{PathId, Recommendation, SubScores};

const URGENCY_FAST_TRACK: f64 = 0.8;
const READINESS_FAST_TRACK: f64 = 0.6;
const RISK_GATE: f64 = 0.7;
const ALIGNMENT_GATE: f64 = 0.4;
const URGENCY_DEFERRAL: f64 = 0.5;

/// Pick a path from the sub-scores. Total over its input domain; every
/// combination of scores lands on exactly one rule.
pub fn select_path(scores: &SubScores) -> Recommendation {
    let urgency = scores.urgency.value;
    let readiness = scores.readiness.value;
    let risk = scores.risk_aversion.value;
    let alignment = scores.alignment.value;

    if urgency > URGENCY_FAST_TRACK && readiness > READINESS_FAST_TRACK {
        return Recommendation {
            path: PathId::FullImplementation,
            rationale: "Your critical urgency combined with good organizational readiness \
                        suggests moving forward quickly with full implementation while managing \
                        risks actively."
                .to_string(),
        };
    }

    if risk > RISK_GATE || alignment < ALIGNMENT_GATE {
        if urgency < URGENCY_DEFERRAL {
            return Recommendation {
                path: PathId::StatusQuo,
                rationale: "High risk concerns and/or low stakeholder alignment, combined with \
                            non-urgent timeline, suggest focusing on preparation before \
                            considering AI implementation."
                    .to_string(),
            };
        }
        return Recommendation {
            path: PathId::PhasedSafeguards,
            rationale: "Your significant concerns require a careful approach, but the urgency \
                        of your needs means you should proceed with robust safeguards and \
                        phased implementation."
                .to_string(),
        };
    }

    Recommendation {
        path: PathId::PhasedSafeguards,
        rationale: "A phased approach with safeguards balances your need for AI benefits with \
                    appropriate risk management and stakeholder engagement."
            .to_string(),
    }
}
