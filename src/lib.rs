//! pathwise - Three-Path Decision Engine for Nonprofit AI Adoption
//!
//! Turns a questionnaire about a nonprofit's AI initiative into a
//! deterministic three-way analysis: adopt fully, hold the status quo,
//! or phase in with safeguards. No models, no randomness - the same
//! response always produces the same analysis.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pathwise::{analyze_json, ReportDocument};
//!
//! let analysis = analyze_json(&submission)?;
//! println!("{}", analysis.recommendation.rationale);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! JSON submission
//!       │ raw::RawResponse (boundary validation)
//!       ▼
//! QuestionnaireResponse
//!       │ scoring (4 weighted sub-scores)
//!       │ templates (12-entry registry matcher)
//!       ▼
//! analysis (3 path builders) ──► recommend (ordered selector)
//!       ▼
//! DecisionAnalysis ──► report (markdown / JSON export)
//! ```

pub mod analysis;
pub mod engine;
pub mod error;
pub mod raw;
pub mod recommend;
pub mod report;
pub mod scoring;
pub mod templates;
pub mod types;

// Core entry points
pub use engine::{analyze, analyze_json, analyze_raw};
pub use error::EngineError;
pub use types::*;

// Boundary validation
pub use raw::RawResponse;

// Scoring and selection
pub use recommend::select_path;
pub use scoring::compute_sub_scores;

// Template registry
pub use templates::{get_templates, matching_templates, personalized_action_plan, ActionPlan, Condition, RecommendationTemplate, TemplateCategory};

// Report export
pub use report::ReportDocument;
