//! Structured compatibility reports

use std::fmt;

use serde::Serialize;

use crate::build::{BuildNumber, CompatibilityRange};
use crate::catalog::CatalogEntry;
use crate::check::evaluator::Evaluation;
use crate::check::issue::ApiUsageIssue;

/// Counts per evaluation outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub in_range: usize,
    pub below_range: usize,
    pub above_range: usize,
    pub unbounded_above: usize,
}

impl Summary {
    fn record(&mut self, outcome: &Evaluation) {
        match outcome {
            Evaluation::InRange => self.in_range += 1,
            Evaluation::BelowRange { .. } => self.below_range += 1,
            Evaluation::AboveRange { .. } => self.above_range += 1,
            Evaluation::UnboundedAbove => self.unbounded_above += 1,
        }
    }

    /// True when any target failed outright (below or above the declaration)
    pub fn has_failures(&self) -> bool {
        self.below_range > 0 || self.above_range > 0
    }
}

/// A since-build/until-build pair in manifest form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeDecl {
    pub since_build: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_build: Option<String>,
}

impl RangeDecl {
    fn from_range(range: &CompatibilityRange) -> Self {
        Self {
            since_build: range.lower().to_string(),
            until_build: range.upper().map(BuildNumber::to_string),
        }
    }
}

impl fmt::Display for RangeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.until_build {
            Some(until) => write!(f, "since-build {}, until-build {}", self.since_build, until),
            None => write!(f, "since-build {}, no until-build", self.since_build),
        }
    }
}

/// One evaluated target in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetReport {
    pub marketing_version: String,
    pub build_number: BuildNumber,
    pub outcome: Evaluation,
}

/// Structured compatibility report
///
/// Built once from evaluation results and externally collected issues; never
/// mutates its inputs. Human rendering through `Display`, stable data through
/// serde (camelCase, see the integration tests for the exact shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Normalized echo of the declared range
    pub declared_range: RangeDecl,
    pub summary: Summary,
    /// Targets sorted by catalog build number ascending, whatever the input
    /// order was
    pub per_target: Vec<TargetReport>,
    /// Minimal adjusted declaration bringing every target in range; `None`
    /// when nothing needs fixing
    pub suggested_range: Option<RangeDecl>,
    /// Findings passed through from the external analyzer, input order kept
    pub issues: Vec<ApiUsageIssue>,
}

impl Report {
    /// Assemble a report from per-target outcomes and external findings
    pub fn build(
        range: &CompatibilityRange,
        results: &[(CatalogEntry, Evaluation)],
        issues: &[ApiUsageIssue],
    ) -> Self {
        let mut per_target: Vec<TargetReport> = results
            .iter()
            .map(|(entry, outcome)| TargetReport {
                marketing_version: entry.marketing_version.clone(),
                build_number: entry.build_number,
                outcome: *outcome,
            })
            .collect();
        per_target.sort_by(|a, b| a.build_number.cmp(&b.build_number));

        let mut summary = Summary::default();
        for row in &per_target {
            summary.record(&row.outcome);
        }

        let suggested_range = suggest(range, &per_target);

        Report {
            declared_range: RangeDecl::from_range(range),
            summary,
            per_target,
            suggested_range,
            issues: issues.to_vec(),
        }
    }
}

/// Minimal declaration adjustment covering every requested target
///
/// The lowest below-range branch becomes the new since-build; the highest
/// above-range branch plus `.*` the new until-build. An open-ended
/// declaration is always bounded to the highest requested target branch,
/// since leaving it open would keep every target unverifiable. Unchanged
/// edges echo the declared value.
fn suggest(range: &CompatibilityRange, rows: &[TargetReport]) -> Option<RangeDecl> {
    if rows.iter().all(|row| row.outcome == Evaluation::InRange) {
        return None;
    }

    let lowest_below = rows
        .iter()
        .filter(|row| matches!(row.outcome, Evaluation::BelowRange { .. }))
        .map(|row| row.build_number.branch())
        .min();
    let since_build = match lowest_below {
        Some(branch) => branch.to_string(),
        None => range.lower().to_string(),
    };

    let until_build = match range.upper() {
        Some(upper) => {
            let highest_above = rows
                .iter()
                .filter(|row| matches!(row.outcome, Evaluation::AboveRange { .. }))
                .map(|row| row.build_number.branch())
                .max();
            match highest_above {
                Some(branch) => Some(format!("{branch}.*")),
                None => Some(upper.to_string()),
            }
        }
        // rows cannot be empty here: an empty report is all-InRange vacuously.
        None => rows
            .iter()
            .map(|row| row.build_number.branch())
            .max()
            .map(|branch| format!("{branch}.*")),
    };

    Some(RangeDecl {
        since_build,
        until_build,
    })
}

fn outcome_note(outcome: &Evaluation) -> Option<String> {
    match outcome {
        Evaluation::InRange => None,
        Evaluation::BelowRange { distance: 0 } => {
            Some("below since-build in the same branch".to_string())
        }
        Evaluation::BelowRange { distance } => {
            Some(format!("{} below since-build", branches(*distance)))
        }
        Evaluation::AboveRange { distance: 0 } => {
            Some("above until-build in the same branch".to_string())
        }
        Evaluation::AboveRange { distance } => {
            Some(format!("{} above until-build", branches(*distance)))
        }
        Evaluation::UnboundedAbove => Some("cannot verify: no until-build declared".to_string()),
    }
}

fn branches(n: u32) -> String {
    if n == 1 {
        "1 branch".to_string()
    } else {
        format!("{n} branches")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Declared range: {}", self.declared_range)?;

        let version_width = self
            .per_target
            .iter()
            .map(|row| row.marketing_version.len())
            .max()
            .unwrap_or(0);
        let build_width = self
            .per_target
            .iter()
            .map(|row| row.build_number.to_string().len())
            .max()
            .unwrap_or(0);

        let groups: [(&str, fn(&Evaluation) -> bool); 4] = [
            ("Below range", |o| matches!(o, Evaluation::BelowRange { .. })),
            ("In range", |o| matches!(o, Evaluation::InRange)),
            ("Above range", |o| matches!(o, Evaluation::AboveRange { .. })),
            ("Unbounded above", |o| matches!(o, Evaluation::UnboundedAbove)),
        ];
        for (label, belongs) in groups {
            let rows: Vec<&TargetReport> = self
                .per_target
                .iter()
                .filter(|row| belongs(&row.outcome))
                .collect();
            if rows.is_empty() {
                continue;
            }

            writeln!(f)?;
            writeln!(f, "{label} ({}):", rows.len())?;
            for row in rows {
                let version = &row.marketing_version;
                let build = row.build_number.to_string();
                match outcome_note(&row.outcome) {
                    Some(note) => writeln!(
                        f,
                        "  {version:<version_width$}  {build:<build_width$}  {note}"
                    )?,
                    None => writeln!(f, "  {version:<version_width$}  {build}")?,
                }
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} in range, {} below range, {} above range, {} unbounded above",
            self.summary.in_range,
            self.summary.below_range,
            self.summary.above_range,
            self.summary.unbounded_above
        )?;
        if let Some(suggested) = &self.suggested_range {
            writeln!(f, "Suggested range: {suggested}")?;
        }

        if !self.issues.is_empty() {
            let kind_width = self
                .issues
                .iter()
                .map(|issue| issue.kind.as_str().len())
                .max()
                .unwrap_or(0);

            writeln!(f)?;
            writeln!(f, "API usage issues ({}):", self.issues.len())?;
            for issue in &self.issues {
                let kind = issue.kind.as_str();
                match &issue.replacement {
                    Some(replacement) => writeln!(
                        f,
                        "  {kind:<kind_width$}  {} -> {replacement}",
                        issue.location
                    )?,
                    None => writeln!(f, "  {kind:<kind_width$}  {}", issue.location)?,
                }
            }
        }

        Ok(())
    }
}
