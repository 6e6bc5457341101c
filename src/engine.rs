//! Engine facade: one call from questionnaire response to full analysis
//!
//! `analyze` is the deterministic core - same response in, same analysis
//! out. The fallible variants only add boundary validation and JSON
//! parsing in front of it.

use tracing::debug;

use crate::analysis::{build_full_path, build_phased_path, build_status_quo_path};
use crate::error::EngineError;
use crate::raw::RawResponse;
use crate::recommend::select_path;
use crate::scoring::compute_sub_scores;
use crate::templates::matching_templates;
use crate::types::{DecisionAnalysis, QuestionnaireResponse};

/// Run the whole pipeline on an already-validated response.
pub fn analyze(response: &QuestionnaireResponse) -> DecisionAnalysis {
    let sub_scores = compute_sub_scores(response);
    let templates = matching_templates(response);
    debug!(
        matched = templates.len(),
        risk = sub_scores.risk_aversion.value,
        urgency = sub_scores.urgency.value,
        readiness = sub_scores.readiness.value,
        alignment = sub_scores.alignment.value,
        "scored response"
    );

    let recommendation = select_path(&sub_scores);
    debug!(path = ?recommendation.path, "selected recommendation");

    DecisionAnalysis {
        full_implementation: build_full_path(response, &sub_scores, &templates),
        status_quo: build_status_quo_path(response, &sub_scores),
        phased_safeguards: build_phased_path(response, &sub_scores, &templates),
        recommendation,
        sub_scores,
    }
}

/// Validate a raw submission, then analyze it.
pub fn analyze_raw(raw: RawResponse) -> Result<DecisionAnalysis, EngineError> {
    let response = raw.into_response()?;
    Ok(analyze(&response))
}

/// Parse a JSON submission, then analyze it.
pub fn analyze_json(json: &str) -> Result<DecisionAnalysis, EngineError> {
    analyze_raw(RawResponse::from_json(json)?)
}
