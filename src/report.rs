//! Report Assembler: markdown and JSON views over a finished analysis
//!
//! Strictly presentational. Nothing in here feeds back into scoring or
//! path selection; a report is a snapshot of engine output plus an id
//! and a timestamp for downstream export tooling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{DecisionAnalysis, PathAnalysis, QuestionnaireResponse, SubScore};

/// A decision analysis packaged for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub response: QuestionnaireResponse,
    pub analysis: DecisionAnalysis,
}

impl ReportDocument {
    pub fn new(response: QuestionnaireResponse, analysis: DecisionAnalysis) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            response,
            analysis,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Full report, section order following the exported PDF layout:
    /// context, scores, recommendation, then one section per path.
    pub fn render_markdown(&self) -> String {
        let mut out = String::new();

        out.push_str("# AI Adoption Decision Report\n\n");
        out.push_str(&format!(
            "Report `{}`, generated {}\n\n",
            self.report_id,
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));

        out.push_str("## Organization Context\n\n");
        out.push_str(&format!("**Mission:** {}\n\n", self.response.organization_mission));
        out.push_str(&format!(
            "**Initiative:** {}\n\n",
            self.response.initiative_description
        ));
        if !self.response.ai_initiative_types.is_empty() {
            out.push_str(&format!(
                "**Initiative types:** {}\n\n",
                self.response.ai_initiative_types.join(", ")
            ));
        }
        if !self.response.biggest_fears.is_empty() {
            out.push_str("**Biggest fears:**\n\n");
            for fear in &self.response.biggest_fears {
                out.push_str(&format!("- {}\n", fear.label()));
            }
            out.push('\n');
        }
        let top_concerns = self.response.top_concerns();
        if !top_concerns.is_empty() {
            out.push_str("**Top concerns:**\n\n");
            for concern in top_concerns {
                out.push_str(&format!("- {}\n", concern.label()));
            }
            out.push('\n');
        }

        out.push_str("## Decision Scores\n\n");
        out.push_str("| Factor | Score | Weight | Influence |\n");
        out.push_str("|---|---|---|---|\n");
        let scores = &self.analysis.sub_scores;
        for (name, score) in [
            ("Risk aversion", &scores.risk_aversion),
            ("Urgency", &scores.urgency),
            ("Readiness", &scores.readiness),
            ("Alignment", &scores.alignment),
        ] {
            out.push_str(&score_row(name, score));
        }
        out.push('\n');

        out.push_str("## Recommendation\n\n");
        let recommended = self.recommended_path();
        out.push_str(&format!("**{}**\n\n", recommended.title));
        out.push_str(&format!("{}\n\n", self.analysis.recommendation.rationale));

        for path in [
            &self.analysis.full_implementation,
            &self.analysis.status_quo,
            &self.analysis.phased_safeguards,
        ] {
            out.push_str(&path_section(path));
        }

        out
    }

    /// Side-by-side markdown table of the three paths.
    pub fn comparison_table(&self) -> String {
        let mut out = String::new();
        out.push_str("| Path | Impact Score | Initial Budget | Gains | Losses | Recommended |\n");
        out.push_str("|---|---|---|---|---|---|\n");
        for path in [
            &self.analysis.full_implementation,
            &self.analysis.status_quo,
            &self.analysis.phased_safeguards,
        ] {
            let marker = if path.path == self.analysis.recommendation.path {
                "yes"
            } else {
                ""
            };
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                path.title,
                path.impact_score,
                path.budget_estimates.initial,
                path.trade_off_summary.gains.len(),
                path.trade_off_summary.losses.len(),
                marker,
            ));
        }
        out
    }

    fn recommended_path(&self) -> &PathAnalysis {
        let paths = [
            &self.analysis.full_implementation,
            &self.analysis.status_quo,
            &self.analysis.phased_safeguards,
        ];
        paths
            .into_iter()
            .find(|p| p.path == self.analysis.recommendation.path)
            .unwrap_or(&self.analysis.phased_safeguards)
    }
}

fn score_row(name: &str, score: &SubScore) -> String {
    format!(
        "| {} | {:.2} | {:.0}% | {} |\n",
        name,
        score.value,
        score.weight * 100.0,
        score.influence
    )
}

fn path_section(path: &PathAnalysis) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {}\n\n", path.title));
    out.push_str(&format!("Impact score: **{}**/100\n\n", path.impact_score));

    out.push_str(&list_block("Benefits", &path.benefits));
    out.push_str(&list_block("Risks", &path.risks));
    out.push_str(&list_block("Recommendations", &path.recommendations));
    if let Some(costs) = &path.opportunity_costs {
        out.push_str(&list_block("Opportunity Costs", costs));
    }

    if let Some(playbook) = &path.mitigation_playbook {
        if !playbook.is_empty() {
            out.push_str("### Mitigation Playbook\n\n");
            for entry in playbook {
                out.push_str(&format!("**{}**\n\n", entry.concern));
                out.push_str(&format!("- Strategy: {}\n", entry.strategy));
                out.push_str(&format!("- Timeframe: {}\n", entry.timeframe));
                out.push_str(&format!("- Resources: {}\n\n", entry.resources.join(", ")));
            }
        }
    }

    out.push_str(&list_block("First 30 Days", &path.action_plan_30_days));
    out.push_str(&list_block("Days 31-60", &path.action_plan_60_days));
    out.push_str(&list_block("Days 61-90", &path.action_plan_90_days));

    out.push_str("### Budget\n\n");
    out.push_str(&format!("- Initial: {}\n", path.budget_estimates.initial));
    out.push_str(&format!("- Ongoing: {}\n", path.budget_estimates.ongoing));
    out.push_str(&format!(
        "- Three-year total: {}\n\n",
        path.budget_estimates.three_year_total
    ));

    if let Some(resources) = &path.required_resources {
        out.push_str("### Required Resources\n\n");
        out.push_str(&format!("- Skills: {}\n", resources.skills.join(", ")));
        out.push_str(&format!("- Tools: {}\n", resources.tools.join(", ")));
        out.push_str(&format!(
            "- Partnerships: {}\n\n",
            resources.partnerships.join(", ")
        ));
    }

    out.push_str(&list_block("Success Metrics", &path.success_metrics));
    out.push_str(&list_block("Red Flags", &path.red_flags));

    out.push_str("### Trade-offs\n\n");
    out.push_str(&format!(
        "- Gains: {}\n",
        path.trade_off_summary.gains.join(", ")
    ));
    out.push_str(&format!(
        "- Losses: {}\n\n",
        path.trade_off_summary.losses.join(", ")
    ));

    out
}

fn list_block(heading: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = format!("### {heading}\n\n");
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
    out.push('\n');
    out
}
