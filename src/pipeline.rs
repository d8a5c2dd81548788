//! The four-stage extraction pipeline.
//!
//! Prepare workspace → clone → materialize branches → archive, strictly in
//! sequence. Any stage error aborts the run; the workspace is removed on
//! both exit paths.

use tracing::info;

use crate::archive;
use crate::branches;
use crate::config::ExtractConfig;
use crate::error::ExtractResult;
use crate::git::GitClient;
use crate::snapshot::BranchSnapshotter;

/// Run the full pipeline for one invocation.
///
/// The stage error, if any, is returned unchanged after the workspace has
/// been cleaned up.
pub fn run(config: &ExtractConfig) -> ExtractResult<()> {
    config.workspace.prepare()?;

    let result = run_stages(config);
    config.workspace.cleanup();

    if result.is_ok() {
        info!(archive = %config.destination.display(), "finished");
    }
    result
}

fn run_stages(config: &ExtractConfig) -> ExtractResult<()> {
    let workspace = &config.workspace;

    info!(repo = %config.remote_url, "cloning");
    GitClient::new(workspace.root()).clone_repo(&config.remote_url)?;
    info!("clone done");

    let listing = GitClient::new(workspace.work_dir()).remote_branches()?;
    let selected = branches::select(&listing, &config.additional_branches);
    info!(count = selected.len(), "branches selected");

    BranchSnapshotter::new(workspace.work_dir(), workspace.result_dir())
        .snapshot_all(&selected)?;

    info!(destination = %config.destination.display(), "zipping");
    archive::zip_dir(workspace.result_dir(), &config.destination)?;

    Ok(())
}
