//! Thin wrapper over the `git` command-line client.
//!
//! Every operation is a blocking subprocess call scoped to one working
//! directory. A non-zero exit surfaces as [`ExtractError::Git`] with the
//! captured stderr; there is no retry and no timeout, so a hung subprocess
//! blocks the pipeline.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ExtractError, ExtractResult};

/// Runs git subcommands with a fixed working directory.
pub struct GitClient {
    working_dir: PathBuf,
}

impl GitClient {
    /// Create a client for `working_dir`.
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }

    /// Run a git subcommand and return its trimmed stdout.
    fn run(&self, args: &[&str]) -> ExtractResult<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| ExtractError::git(args.join(" "), e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::git(args.join(" "), stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Clone `url` into the working directory. The clone lands in a
    /// subdirectory named after the repository, as `git clone` does.
    pub fn clone_repo(&self, url: &str) -> ExtractResult<()> {
        self.run(&["clone", url])?;
        Ok(())
    }

    /// Raw `git branch -r` listing, one remote-tracking branch per line.
    pub fn remote_branches(&self) -> ExtractResult<String> {
        self.run(&["branch", "-r"])
    }

    /// Check out `branch`, rewriting the working tree in place.
    pub fn checkout(&self, branch: &str) -> ExtractResult<()> {
        self.run(&["checkout", branch])?;
        Ok(())
    }
}
