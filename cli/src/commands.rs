pub mod run;

use std::path::PathBuf;

use clap::Parser;
use nukr_common::config::Config;

#[derive(Parser)]
#[command(name = "nukr")]
#[command(about = "Recon pipeline runner: enumerate subdomains, provision nuclei, scan.")]
pub struct CommandLine {
    /// SecurityTrails API key; enables subdomain enumeration
    #[arg(long)]
    pub api_key: Option<String>,

    /// Go toolchain executable
    #[arg(long)]
    pub go_bin: Option<PathBuf>,

    /// Scanner executable
    #[arg(long)]
    pub nuclei_bin: Option<PathBuf>,

    /// Local scan-template checkout
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,

    /// Less decorative output; repeat for even less
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Environment-derived configuration with flag overrides on top.
    pub fn to_config(&self) -> Config {
        let mut cfg = Config::from_env();

        if let Some(api_key) = &self.api_key {
            cfg.api_key = Some(api_key.clone());
        }
        if let Some(go_bin) = &self.go_bin {
            cfg.go_bin = go_bin.clone();
        }
        if let Some(nuclei_bin) = &self.nuclei_bin {
            cfg.nuclei_bin = nuclei_bin.clone();
        }
        if let Some(templates_dir) = &self.templates_dir {
            cfg.templates_dir = templates_dir.clone();
        }
        cfg.quiet = self.quiet;
        cfg.no_banner = self.no_banner;

        cfg
    }
}
