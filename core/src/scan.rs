//! Scan execution.

use std::path::Path;

use tokio::process::Command;

use nukr_common::config::Config;
use nukr_common::error::ProvisionError;
use nukr_common::info;

use crate::provision::check;

/// Launches the scanner against the materialized target list.
///
/// Fixed flag set: headless browser checks on, redirects followed, output
/// deduplicated, templates read from the configured checkout. Findings
/// stream to the operator's terminal; a nonzero exit is fatal.
pub async fn run(cfg: &Config, list_file: &Path) -> Result<(), ProvisionError> {
    info!("running nuclei against {}", list_file.display());
    let status = Command::new(&cfg.nuclei_bin)
        .arg("-l")
        .arg(list_file)
        .args(["-fr", "-uc", "-headless"])
        .arg("-t")
        .arg(&cfg.templates_dir)
        .status()
        .await
        .map_err(|source| ProvisionError::Spawn {
            tool: "nuclei",
            source,
        })?;
    check("nuclei", status)
}
