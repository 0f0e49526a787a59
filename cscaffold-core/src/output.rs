use crate::apply::StepReport;
use crate::plan::ScaffoldPlan;
use nu_ansi_term::Color as AnsiColor;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a scaffold operation
#[derive(Debug, Serialize, Deserialize)]
pub struct ScaffoldResult {
    pub project_name: String,
    pub guard_token: String,
    pub dry_run: bool,
    pub files_changed: usize,
    pub replacements: usize,
    pub renamed: bool,
    pub failures: usize,
    pub steps: Vec<StepReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<ScaffoldPlan>,
}

impl ScaffoldResult {
    pub fn success(&self) -> bool {
        self.failures == 0
    }
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for ScaffoldResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.success(),
            "operation": "new",
            "project_name": self.project_name,
            "guard_token": self.guard_token,
            "dry_run": self.dry_run,
            "summary": {
                "files_changed": self.files_changed,
                "replacements": self.replacements,
                "renamed": self.renamed,
                "failures": self.failures,
            },
            "steps": self.steps,
            "plan": self.plan,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.dry_run {
            writeln!(output, "Dry run: would create C project '{}'", self.project_name).unwrap();
            if let Some(plan) = &self.plan {
                writeln!(
                    output,
                    "Would rename {} -> {}",
                    plan.rename.from.display(),
                    plan.rename.to.display()
                )
                .unwrap();
                for target in &plan.targets {
                    writeln!(
                        output,
                        "Would rewrite {}: '{}' -> '{}'",
                        target.path.display(),
                        target.old,
                        target.new
                    )
                    .unwrap();
                }
            }
            return output;
        }

        writeln!(output, "Creating C project: {}", self.project_name).unwrap();
        if self.renamed {
            writeln!(output, "✓ Renamed include directory").unwrap();
        }
        writeln!(
            output,
            "✓ Applied {} replacements across {} files",
            self.replacements, self.files_changed
        )
        .unwrap();

        if self.failures > 0 {
            writeln!(output, "✗ {} steps failed", self.failures).unwrap();
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

/// Render the failed steps of a run, one per line, for stderr.
pub fn render_step_failures(steps: &[StepReport], use_color: bool) -> String {
    let mut output = String::new();
    for step in steps.iter().filter(|s| !s.succeeded()) {
        let message = step.error.as_deref().unwrap_or("unknown error");
        if use_color {
            writeln!(
                output,
                "{} {}",
                AnsiColor::Red.bold().paint("error:"),
                message
            )
            .unwrap();
        } else {
            writeln!(output, "error: {}", message).unwrap();
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::{StepKind, StepReport};
    use std::path::PathBuf;

    fn sample_result(failures: usize) -> ScaffoldResult {
        ScaffoldResult {
            project_name: "widget".to_string(),
            guard_token: "WIDGET".to_string(),
            dry_run: false,
            files_changed: 5,
            replacements: 9,
            renamed: true,
            failures,
            steps: vec![],
            plan: None,
        }
    }

    #[test]
    fn test_json_output_reports_success_flag() {
        let result = sample_result(0);
        let json: serde_json::Value = serde_json::from_str(&result.format_json()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["summary"]["files_changed"], 5);

        let failed = sample_result(2);
        let json: serde_json::Value = serde_json::from_str(&failed.format_json()).unwrap();
        assert_eq!(json["success"], false);
    }

    #[test]
    fn test_summary_mentions_failures() {
        let result = sample_result(1);
        let summary = result.format_summary();
        assert!(summary.contains("Creating C project: widget"));
        assert!(summary.contains("1 steps failed"));
    }

    #[test]
    fn test_render_step_failures_plain() {
        let steps = vec![StepReport {
            kind: StepKind::RewriteFile,
            path: PathBuf::from("Makefile"),
            replacements: 0,
            error_kind: Some("file_not_found".to_string()),
            error: Some("file not found: Makefile".to_string()),
        }];
        let rendered = render_step_failures(&steps, false);
        assert_eq!(rendered, "error: file not found: Makefile\n");
    }
}
