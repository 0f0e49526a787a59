#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod apply;
pub mod error;
pub mod guard;
pub mod operations;
pub mod output;
pub mod plan;
pub mod rename;
pub mod replace;

pub use apply::{apply_plan, ScaffoldReport, StepKind, StepReport};
pub use error::ScaffoldError;
pub use guard::guard_token;
pub use operations::{scaffold_operation, version_operation};
pub use output::{
    render_step_failures, OutputFormat, OutputFormatter, ScaffoldResult, VersionResult,
};
pub use plan::{DirRename, RewriteTarget, ScaffoldPlan, PLACEHOLDER, PLACEHOLDER_UPPER};
pub use rename::rename_dir;
pub use replace::{replace_in_file, ReplaceOutcome};
