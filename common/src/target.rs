//! # Scan Target Model
//!
//! Represents the operator-supplied target of a run.
//!
//! A target is a bare hostname or IP (e.g. `example.com`, `127.0.0.1`).
//! The string is taken verbatim apart from surrounding whitespace; the
//! scanner is the authority on what it accepts, so no format validation
//! happens here.

use std::fmt;

/// The root hostname or IP the operator wants scanned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    raw: String,
}

impl Target {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into().trim().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Name of the target-list file derived from this target.
    ///
    /// Dots become underscores so `example.com` maps to `example_com.txt`
    /// and `10.0.0.1` maps to `10_0_0_1.txt`.
    pub fn list_file_name(&self) -> String {
        format!("{}.txt", self.raw.replace('.', "_"))
    }

    /// Qualifies a subdomain label against this target.
    ///
    /// Enumeration providers return bare labels (`www`, `mail`); the scan
    /// wants full hostnames (`www.example.com`).
    pub fn qualify(&self, label: &str) -> String {
        format!("{}.{}", label, self.raw)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
