//! Branch materialization: sequential checkout-and-copy snapshots.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

use crate::error::ExtractResult;
use crate::git::GitClient;

/// Marker for version-control metadata excluded from snapshots. Matches any
/// file name containing it, so `.git`, `.gitignore` and `.gitattributes`
/// are all skipped.
const VCS_MARKER: &str = ".git";

/// Copies one branch at a time from the shared working clone into the
/// results tree.
///
/// The loop is strictly sequential: the working clone is a single mutable
/// checkout, so each branch must be fully copied before the next checkout
/// rewrites the tree.
pub struct BranchSnapshotter {
    git: GitClient,
    work_dir: PathBuf,
    result_dir: PathBuf,
}

impl BranchSnapshotter {
    /// Create a snapshotter over the working clone at `work_dir`, writing
    /// per-branch snapshots under `result_dir`.
    pub fn new(work_dir: impl AsRef<Path>, result_dir: impl AsRef<Path>) -> Self {
        let work_dir = work_dir.as_ref().to_path_buf();
        Self {
            git: GitClient::new(&work_dir),
            work_dir,
            result_dir: result_dir.as_ref().to_path_buf(),
        }
    }

    /// Check out and snapshot every branch, in order. The first checkout or
    /// copy failure aborts the whole run.
    pub fn snapshot_all(&self, branches: &[String]) -> ExtractResult<()> {
        for branch in branches {
            info!(branch = %branch, "checking out and copying");
            self.git.checkout(branch)?;

            let branch_dir = self.result_dir.join(branch);
            fs::create_dir_all(&branch_dir)?;
            copy_tree(&self.work_dir, &branch_dir)?;
        }
        Ok(())
    }
}

/// Recursively copy `src` into `dst`, skipping version-control metadata.
///
/// `dst` must already exist. Directories are recreated so that empty ones
/// survive the copy.
pub fn copy_tree(src: &Path, dst: &Path) -> ExtractResult<()> {
    let walker = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !entry.file_name().to_string_lossy().contains(VCS_MARKER));

    for entry in walker {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .expect("walked entry is under the copy root");
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
