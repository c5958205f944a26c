//! # Target-List Acquisition
//!
//! Implements the "produce a target list" step of the pipeline.
//!
//! Two providers exist behind one trait: remote enumeration when an API
//! credential is configured, and a single-host fallback otherwise. Both
//! feed [`write_target_list`], which materializes the hostnames the
//! scanner will read.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use nukr_common::config::Config;
use nukr_common::target::Target;

use crate::securitytrails::{SecurityTrails, SecurityTrailsError};

#[derive(Debug, Error)]
pub enum AcquireError {
    /// The enumeration service refused the configured credential.
    #[error("ping to SecurityTrails failed, check your API key")]
    CredentialRejected,

    /// The service answered but knows no subdomains for the target.
    #[error("no subdomains found for {domain}")]
    NoSubdomains { domain: String },

    #[error(transparent)]
    Api(#[from] SecurityTrailsError),
}

/// Produces the hostnames a run will scan.
#[async_trait]
pub trait TargetSource: Send + Sync {
    async fn collect(&self, target: &Target) -> Result<Vec<String>, AcquireError>;

    /// Short provider name for status output.
    fn describe(&self) -> &'static str;
}

/// Expands the target into every subdomain the enumeration service knows.
pub struct RemoteEnumeration {
    client: SecurityTrails,
}

impl RemoteEnumeration {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: SecurityTrails::new(api_key),
        }
    }

    pub fn with_client(client: SecurityTrails) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TargetSource for RemoteEnumeration {
    async fn collect(&self, target: &Target) -> Result<Vec<String>, AcquireError> {
        match self.client.ping().await {
            Ok(()) => {}
            Err(SecurityTrailsError::InvalidKey) => return Err(AcquireError::CredentialRejected),
            Err(other) => return Err(other.into()),
        }

        let labels = self.client.domain_subdomains(target.as_str()).await?;
        if labels.is_empty() {
            return Err(AcquireError::NoSubdomains {
                domain: target.to_string(),
            });
        }

        // Response order and duplicates carry through untouched.
        Ok(labels.iter().map(|label| target.qualify(label)).collect())
    }

    fn describe(&self) -> &'static str {
        "SecurityTrails enumeration"
    }
}

/// Fallback when no credential is configured: the run scans the bare
/// target and nothing else.
pub struct SingleHost;

#[async_trait]
impl TargetSource for SingleHost {
    async fn collect(&self, target: &Target) -> Result<Vec<String>, AcquireError> {
        Ok(vec![target.as_str().to_string()])
    }

    fn describe(&self) -> &'static str {
        "single host"
    }
}

/// Picks the provider the configuration calls for.
pub fn source_for(cfg: &Config) -> Box<dyn TargetSource> {
    match &cfg.api_key {
        Some(key) => Box::new(RemoteEnumeration::new(key)),
        None => Box::new(SingleHost),
    }
}

/// Writes one hostname per line to the target-list file inside `dir`.
///
/// The file name derives from the target ([`Target::list_file_name`]) and
/// any previous run's file is overwritten.
pub fn write_target_list(
    dir: &Path,
    target: &Target,
    hosts: &[String],
) -> std::io::Result<PathBuf> {
    let path = dir.join(target.list_file_name());
    let mut file = File::create(&path)?;
    for host in hosts {
        writeln!(file, "{host}")?;
    }
    Ok(path)
}
