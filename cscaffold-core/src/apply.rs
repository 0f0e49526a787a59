use crate::error::ScaffoldError;
use crate::plan::ScaffoldPlan;
use crate::rename::rename_dir;
use crate::replace::replace_in_file;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a single step of the plan did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    RenameDir,
    RewriteFile,
}

/// Outcome of one step: the rename, or one file rewrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    pub kind: StepKind,
    pub path: PathBuf,
    /// Occurrences replaced; always 0 for the rename step.
    pub replacements: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepReport {
    fn ok(kind: StepKind, path: PathBuf, replacements: usize) -> Self {
        Self {
            kind,
            path,
            replacements,
            error_kind: None,
            error: None,
        }
    }

    fn failed(kind: StepKind, path: PathBuf, err: &ScaffoldError) -> Self {
        Self {
            kind,
            path,
            replacements: 0,
            error_kind: Some(err.kind().to_string()),
            error: Some(err.to_string()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregated outcome of a scaffold run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub steps: Vec<StepReport>,
    pub files_changed: usize,
    pub replacements: usize,
    pub renamed: bool,
    pub failures: usize,
}

impl ScaffoldReport {
    pub fn success(&self) -> bool {
        self.failures == 0
    }
}

/// Execute a scaffold plan: the directory rename first, then each rewrite
/// target in order.
///
/// Fail-forward: a failed step is recorded and execution continues with the
/// next one, so a missing file never blocks the remaining rewrites. There is
/// no rollback; the report tells the caller exactly what happened.
pub fn apply_plan(plan: &ScaffoldPlan) -> ScaffoldReport {
    let mut steps = Vec::with_capacity(plan.targets.len() + 1);

    let renamed = match rename_dir(&plan.rename.from, &plan.rename.to) {
        Ok(()) => {
            steps.push(StepReport::ok(StepKind::RenameDir, plan.rename.to.clone(), 0));
            true
        },
        Err(e) => {
            steps.push(StepReport::failed(
                StepKind::RenameDir,
                plan.rename.to.clone(),
                &e,
            ));
            false
        },
    };

    for target in &plan.targets {
        match replace_in_file(&target.path, &target.old, &target.new) {
            Ok(outcome) => {
                steps.push(StepReport::ok(
                    StepKind::RewriteFile,
                    target.path.clone(),
                    outcome.replacements,
                ));
            },
            Err(e) => {
                steps.push(StepReport::failed(
                    StepKind::RewriteFile,
                    target.path.clone(),
                    &e,
                ));
            },
        }
    }

    let files_changed = steps
        .iter()
        .filter(|s| s.kind == StepKind::RewriteFile && s.succeeded() && s.replacements > 0)
        .count();
    let replacements = steps.iter().map(|s| s.replacements).sum();
    let failures = steps.iter().filter(|s| !s.succeeded()).count();

    ScaffoldReport {
        project_name: plan.project_name.clone(),
        steps,
        files_changed,
        replacements,
        renamed,
        failures,
    }
}
