//! Temporary workspace lifecycle for one extraction run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ExtractResult;

/// Directories owned by one run: the workspace root, the working clone
/// inside it, and the results tree.
///
/// The root is deterministic for a given training name, so a rerun after a
/// crash lands on the same path and `prepare` wipes the leftovers. Nothing
/// guards against two concurrent runs sharing a root.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    work_dir: PathBuf,
    result_dir: PathBuf,
}

impl Workspace {
    /// Lay out a workspace under `root` with a working clone named
    /// `repo_name`.
    pub fn new(root: impl Into<PathBuf>, repo_name: &str) -> Self {
        let root = root.into();
        let work_dir = root.join(repo_name);
        let result_dir = root.join("result");
        Self {
            root,
            work_dir,
            result_dir,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The single mutable checkout shared by all branch snapshots.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Parent of the per-branch snapshot directories.
    pub fn result_dir(&self) -> &Path {
        &self.result_dir
    }

    /// Remove leftovers from a previous crashed run, then recreate the
    /// working-clone and results directories.
    ///
    /// Idempotent: running it twice yields the same clean state.
    pub fn prepare(&self) -> ExtractResult<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root)?;
        }
        fs::create_dir_all(&self.work_dir)?;
        fs::create_dir_all(&self.result_dir)?;
        Ok(())
    }

    /// Best-effort recursive removal, used on both the success and failure
    /// paths. A failed cleanup is logged and otherwise ignored.
    pub fn cleanup(&self) {
        if !self.root.exists() {
            return;
        }
        if let Err(err) = fs::remove_dir_all(&self.root) {
            warn!(root = %self.root.display(), error = %err, "workspace cleanup failed");
        }
    }
}
