//! The one workflow this tool has: acquire a target list, provision the
//! tool stack, launch the scan.

use std::path::Path;

use anyhow::Context;

use crate::terminal::{input, print, spinner};
use nukr_common::config::Config;
use nukr_common::target::Target;
use nukr_common::{info, success};
use nukr_core::targets::{self, AcquireError, TargetSource};
use nukr_core::{provision, scan};

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    print::header("target acquisition", cfg.quiet);
    let target = input::read_target()?;

    if cfg.api_key.is_none() {
        info!("no API key configured, running against the bare target");
    }

    let source = targets::source_for(cfg);
    let hosts = collect(cfg, source.as_ref(), &target).await?;

    let list_file = targets::write_target_list(Path::new("."), &target, &hosts)
        .with_context(|| format!("failed to write the target list for {target}"))?;
    success!("{} target(s) written to {}", hosts.len(), list_file.display());

    print::header("provisioning", cfg.quiet);
    provision::ensure_toolchain(cfg).await?;
    provision::ensure_scanner(cfg).await?;
    provision::ensure_templates(cfg).await?;
    provision::update_templates(cfg).await?;

    print::header("vulnerability scan", cfg.quiet);
    print_summary(cfg, source.describe(), hosts.len(), &list_file);
    scan::run(cfg, &list_file).await?;

    print::end_of_program();
    Ok(())
}

/// Runs the provider with a spinner over the (possibly slow) remote call.
///
/// An empty enumeration result shows the full-width no-results art before
/// the error propagates.
async fn collect(
    cfg: &Config,
    source: &dyn TargetSource,
    target: &Target,
) -> anyhow::Result<Vec<String>> {
    let spin = (cfg.quiet == 0).then(|| spinner::start(format!("collecting targets for {target}...")));
    let outcome = source.collect(target).await;
    if let Some(spin) = spin {
        spin.finish_and_clear();
    }

    match outcome {
        Err(AcquireError::NoSubdomains { domain }) => {
            print::no_results();
            Err(AcquireError::NoSubdomains { domain }.into())
        }
        other => Ok(other?),
    }
}

fn print_summary(cfg: &Config, provider: &'static str, host_count: usize, list_file: &Path) {
    if cfg.quiet > 1 {
        return;
    }

    print::set_key_width(&["Provider", "Targets", "Templates", "Scanner"]);
    print::aligned_line("Provider", provider);
    print::aligned_line(
        "Targets",
        format!("{} ({})", host_count, list_file.display()),
    );
    print::aligned_line("Templates", cfg.templates_dir.display().to_string());
    print::aligned_line("Scanner", cfg.nuclei_bin.display().to_string());
}
