//! Run configuration resolved from the command line.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ExtractResult;
use crate::workspace::Workspace;

/// GitHub organization hosting the training repositories.
const GIT_ORG: &str = "Zenika";

/// Repository name convention for a training.
fn repo_name(training_name: &str) -> String {
    format!("formation-{training_name}")
}

/// Immutable configuration for one extraction run.
///
/// Resolved once at startup and passed by reference into each stage; no
/// stage mutates it.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Training identifier, e.g. `rust` for `formation-rust`.
    pub training_name: String,
    /// Absolute path of the zip file to produce.
    pub destination: PathBuf,
    /// Extra branch names processed after the pattern-discovered ones,
    /// verbatim and in order.
    pub additional_branches: Vec<String>,
    /// Clone URL for the training repository.
    pub remote_url: String,
    /// Temp directories owned by this run.
    pub workspace: Workspace,
}

impl ExtractConfig {
    /// Resolve the configuration from raw invocation parameters.
    ///
    /// The destination defaults to `<trainingName>-tps.zip` in the current
    /// directory and is always made absolute. Empty additional-branch
    /// segments (from trailing or doubled commas) are discarded.
    pub fn new(
        training_name: impl Into<String>,
        destination: Option<PathBuf>,
        additional_branches: Vec<String>,
    ) -> ExtractResult<Self> {
        let training_name = training_name.into();
        let repo_name = repo_name(&training_name);

        let cwd = env::current_dir()?;
        let destination = match destination {
            Some(path) if path.is_absolute() => path,
            Some(path) => cwd.join(path),
            None => cwd.join(format!("{training_name}-tps.zip")),
        };

        let additional_branches = additional_branches
            .into_iter()
            .filter(|name| !name.is_empty())
            .collect();

        let workspace = Workspace::new(env::temp_dir().join(env!("CARGO_PKG_NAME")), &repo_name);

        Ok(Self {
            training_name,
            destination,
            additional_branches,
            remote_url: format!("git@github.com:{GIT_ORG}/{repo_name}.git"),
            workspace,
        })
    }

    /// Use `url` in place of the organization clone convention.
    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = url.into();
        self
    }

    /// Relocate the workspace under a different root.
    pub fn with_workspace_root(mut self, root: impl AsRef<Path>) -> Self {
        self.workspace = Workspace::new(root.as_ref(), &repo_name(&self.training_name));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_defaults_to_training_name_in_cwd() {
        let config = ExtractConfig::new("rust", None, vec![]).unwrap();
        let expected = env::current_dir().unwrap().join("rust-tps.zip");
        assert_eq!(config.destination, expected);
    }

    #[test]
    fn relative_destination_resolves_against_cwd() {
        let config =
            ExtractConfig::new("rust", Some(PathBuf::from("out/bundle.zip")), vec![]).unwrap();
        let expected = env::current_dir().unwrap().join("out/bundle.zip");
        assert_eq!(config.destination, expected);
    }

    #[test]
    fn absolute_destination_is_used_verbatim() {
        let dest = env::temp_dir().join("bundle.zip");
        let config = ExtractConfig::new("rust", Some(dest.clone()), vec![]).unwrap();
        assert_eq!(config.destination, dest);
    }

    #[test]
    fn remote_url_follows_the_formation_convention() {
        let config = ExtractConfig::new("rust", None, vec![]).unwrap();
        assert_eq!(config.remote_url, "git@github.com:Zenika/formation-rust.git");
        assert!(config
            .workspace
            .work_dir()
            .ends_with("zen-extract-tps/formation-rust"));
    }

    #[test]
    fn empty_additional_branch_segments_are_discarded() {
        let config = ExtractConfig::new(
            "rust",
            None,
            vec![
                "custom1".to_string(),
                String::new(),
                "custom2".to_string(),
                String::new(),
            ],
        )
        .unwrap();
        assert_eq!(config.additional_branches, ["custom1", "custom2"]);
    }
}
