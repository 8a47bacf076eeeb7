//! Start and stop the monitoring stack through a compose executable.

use crate::CliResult;
use std::path::Path;
use tokio::process::Command;

/// Bring the stack up in the background.
pub(crate) async fn start_stack(root: &Path, compose_bin: &str) -> CliResult<()> {
    run_compose(compose_bin, root, &["up", "-d"]).await
}

/// Tear the stack down.
pub(crate) async fn stop_stack(root: &Path, compose_bin: &str) -> CliResult<()> {
    run_compose(compose_bin, root, &["down"]).await
}

async fn run_compose(compose_bin: &str, root: &Path, args: &[&str]) -> CliResult<()> {
    let invocation = format!("{compose_bin} {}", args.join(" "));
    log::info!("running `{invocation}` in {}", root.display());
    let status = Command::new(compose_bin)
        .args(args)
        .current_dir(root)
        .status()
        .await
        .map_err(|err| format!("failed to run `{invocation}`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`{invocation}` failed with status {status}").into())
    }
}
