//! High-level operations that correspond to CLI commands
//!
//! These functions contain the business logic for each cscaffold command,
//! separated from CLI concerns like argument parsing and output formatting.

use crate::apply::apply_plan;
use crate::output::{ScaffoldResult, VersionResult};
use crate::plan::ScaffoldPlan;
use anyhow::{bail, Result};
use std::path::Path;

/// Scaffold operation - returns structured data
///
/// Builds the plan for `project_name` against the skeleton rooted at `root`
/// and applies it. With `dry_run` the filesystem is untouched and the plan
/// is attached to the result instead.
pub fn scaffold_operation(
    project_name: &str,
    root: &Path,
    dry_run: bool,
) -> Result<ScaffoldResult> {
    let project_name = project_name.trim();
    if project_name.is_empty() {
        bail!("project name must not be empty");
    }

    let plan = ScaffoldPlan::new(root, project_name);

    if dry_run {
        return Ok(ScaffoldResult {
            project_name: plan.project_name.clone(),
            guard_token: plan.guard_token.clone(),
            dry_run: true,
            files_changed: 0,
            replacements: 0,
            renamed: false,
            failures: 0,
            steps: vec![],
            plan: Some(plan),
        });
    }

    let report = apply_plan(&plan);
    Ok(ScaffoldResult {
        project_name: report.project_name,
        guard_token: plan.guard_token,
        dry_run: false,
        files_changed: report.files_changed,
        replacements: report.replacements,
        renamed: report.renamed,
        failures: report.failures,
        steps: report.steps,
        plan: None,
    })
}

/// Version operation - returns structured data
pub fn version_operation(name: &str, version: &str) -> VersionResult {
    VersionResult {
        name: name.to_string(),
        version: version.to_string(),
    }
}
