use crate::guard::guard_token;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The template's default project identifier, as it appears in the skeleton.
pub const PLACEHOLDER: &str = "ctemplate";
/// The placeholder as it appears in the skeleton's header guard.
pub const PLACEHOLDER_UPPER: &str = "CTEMPLATE";

/// One file rewrite: replace every occurrence of `old` with `new` in `path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteTarget {
    pub path: PathBuf,
    pub old: String,
    pub new: String,
}

/// The single directory rename performed by a scaffold run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Everything a scaffold run will do, as inspectable data.
///
/// The rename happens first so the guard-header rewrite can address the
/// file at its post-rename location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldPlan {
    pub project_name: String,
    pub guard_token: String,
    pub rename: DirRename,
    pub targets: Vec<RewriteTarget>,
}

impl ScaffoldPlan {
    /// Build the plan for instantiating the skeleton rooted at `root` with
    /// `project_name`.
    pub fn new(root: &Path, project_name: &str) -> Self {
        let guard = guard_token(project_name);
        let include = root.join("include");

        let rename = DirRename {
            from: include.join(PLACEHOLDER),
            to: include.join(project_name),
        };

        let mut targets = vec![RewriteTarget {
            path: rename.to.join("fns.h"),
            old: PLACEHOLDER_UPPER.to_string(),
            new: guard.clone(),
        }];
        for relative in [
            PathBuf::from("Makefile"),
            Path::new("src").join("main.c"),
            Path::new("src").join("fns.c"),
            Path::new("tests").join("src").join("test_fns.c"),
        ] {
            targets.push(RewriteTarget {
                path: root.join(relative),
                old: PLACEHOLDER.to_string(),
                new: project_name.to_string(),
            });
        }

        Self {
            project_name: project_name.to_string(),
            guard_token: guard,
            rename,
            targets,
        }
    }
}
