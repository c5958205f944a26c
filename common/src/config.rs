//! Runtime configuration for a pipeline run.
//!
//! Every external location the pipeline touches is a default here, each
//! one overridable first by environment, then by command-line flag:
//!
//! | value          | default                    | environment          |
//! |----------------|----------------------------|----------------------|
//! | API key        | unset                      | `NUKR_API_KEY`       |
//! | go binary      | `go` (via PATH)            | `NUKR_GO_BIN`        |
//! | nuclei binary  | `$HOME/go/bin/nuclei`      | `NUKR_NUCLEI_BIN`    |
//! | templates dir  | `$HOME/nuclei-templates`   | `NUKR_TEMPLATES_DIR` |
//!
//! An unset API key selects the single-host branch of target acquisition.

use std::env;
use std::path::{Path, PathBuf};

/// Where the scan templates are cloned from when missing locally.
pub const TEMPLATES_REPO: &str = "https://github.com/projectdiscovery/nuclei-templates";

/// Package identifier handed to `go install` when the scanner is missing.
pub const SCANNER_PACKAGE: &str = "github.com/projectdiscovery/nuclei/v3/cmd/nuclei@latest";

#[derive(Clone, Debug)]
pub struct Config {
    /// SecurityTrails credential. `None` skips remote enumeration and the
    /// run targets the bare domain.
    pub api_key: Option<String>,
    /// Go toolchain executable.
    pub go_bin: PathBuf,
    /// Vulnerability scanner executable.
    pub nuclei_bin: PathBuf,
    /// Local checkout of the scan-rule templates.
    pub templates_dir: PathBuf,

    pub quiet: u8,
    pub no_banner: bool,
}

impl Config {
    /// Baseline configuration for the given home directory.
    pub fn defaults(home: Option<&Path>) -> Self {
        let home = home.unwrap_or(Path::new("/root"));
        Self {
            api_key: None,
            go_bin: PathBuf::from("go"),
            nuclei_bin: home.join("go").join("bin").join("nuclei"),
            templates_dir: home.join("nuclei-templates"),
            quiet: 0,
            no_banner: false,
        }
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let home = env::var_os("HOME").map(PathBuf::from);
        let mut cfg = Self::defaults(home.as_deref());

        if let Some(key) = env::var("NUKR_API_KEY").ok().filter(|k| !k.is_empty()) {
            cfg.api_key = Some(key);
        }
        if let Ok(go_bin) = env::var("NUKR_GO_BIN") {
            cfg.go_bin = PathBuf::from(go_bin);
        }
        if let Ok(nuclei_bin) = env::var("NUKR_NUCLEI_BIN") {
            cfg.nuclei_bin = PathBuf::from(nuclei_bin);
        }
        if let Ok(templates_dir) = env::var("NUKR_TEMPLATES_DIR") {
            cfg.templates_dir = PathBuf::from(templates_dir);
        }

        cfg
    }
}
