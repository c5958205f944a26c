//! # Tooling Provisioning
//!
//! Brings the external tool stack into a runnable state, in run order:
//! toolchain, scanner, template checkout, template refresh.
//!
//! Every spawned tool inherits stdio, so its own output streams straight
//! to the operator's terminal.

use std::io::ErrorKind;
use std::process::ExitStatus;

use tokio::process::Command;

use nukr_common::config::{Config, SCANNER_PACKAGE, TEMPLATES_REPO};
use nukr_common::error::ProvisionError;
use nukr_common::{info, warn};

pub(crate) fn check(tool: &'static str, status: ExitStatus) -> Result<(), ProvisionError> {
    if status.success() {
        Ok(())
    } else {
        Err(ProvisionError::Failed { tool, status })
    }
}

/// Confirms the Go toolchain answers a trivial invocation.
pub async fn ensure_toolchain(cfg: &Config) -> Result<(), ProvisionError> {
    match Command::new(&cfg.go_bin).arg("version").status().await {
        Ok(status) if status.success() => Ok(()),
        Ok(_) => Err(ProvisionError::ToolchainBroken),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(ProvisionError::ToolchainMissing),
        Err(_) => Err(ProvisionError::ToolchainBroken),
    }
}

/// Makes sure the scanner binary is runnable, installing it when absent.
///
/// A binary that exists but fails its version probe is reported and
/// tolerated; the scan itself will surface anything real.
pub async fn ensure_scanner(cfg: &Config) -> Result<(), ProvisionError> {
    match Command::new(&cfg.nuclei_bin).arg("-version").status().await {
        Ok(status) if status.success() => Ok(()),
        Ok(_) => {
            warn!("nuclei is installed, but its version check failed");
            Ok(())
        }
        Err(err) if err.kind() == ErrorKind::NotFound => install_scanner(cfg).await,
        Err(source) => Err(ProvisionError::Spawn {
            tool: "nuclei",
            source,
        }),
    }
}

async fn install_scanner(cfg: &Config) -> Result<(), ProvisionError> {
    info!("nuclei not found, installing {}", SCANNER_PACKAGE);
    let status = Command::new(&cfg.go_bin)
        .args(["install", "-v", SCANNER_PACKAGE])
        .status()
        .await
        .map_err(|source| ProvisionError::Spawn {
            tool: "go install",
            source,
        })?;
    check("go install", status)
}

/// Clones the template repository when the local checkout is missing.
///
/// An existing directory is trusted as-is; the unconditional
/// [`update_templates`] pass brings it up to date.
pub async fn ensure_templates(cfg: &Config) -> Result<(), ProvisionError> {
    if cfg.templates_dir.exists() {
        return Ok(());
    }

    info!("scan templates not found, cloning {}", TEMPLATES_REPO);
    let status = Command::new("git")
        .arg("clone")
        .arg(TEMPLATES_REPO)
        .arg(&cfg.templates_dir)
        .status()
        .await
        .map_err(|source| ProvisionError::Spawn {
            tool: "git clone",
            source,
        })?;
    check("git clone", status)
}

/// Refreshes the local templates. Runs on every invocation.
pub async fn update_templates(cfg: &Config) -> Result<(), ProvisionError> {
    info!("updating scan templates");
    let status = Command::new(&cfg.nuclei_bin)
        .args(["-update-templates", "-silent"])
        .status()
        .await
        .map_err(|source| ProvisionError::Spawn {
            tool: "nuclei",
            source,
        })?;
    check("nuclei -update-templates", status)
}
