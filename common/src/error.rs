//! Failures raised while provisioning or driving external tooling.
//!
//! Every variant is fatal to the run; the binary's top-level handler turns
//! them into a message and a non-zero exit. The one recoverable condition
//! in the workflow (a scanner that runs but fails its version probe) never
//! becomes an error, only a warning at the call site.

use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The Go toolchain could not be found at all.
    #[error("go toolchain not found. Install Go before running nukr: https://go.dev/dl")]
    ToolchainMissing,

    /// The Go toolchain exists but a trivial invocation failed.
    #[error("go toolchain is present but failed to run")]
    ToolchainBroken,

    /// An external tool could not be started.
    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// An external tool ran and reported failure.
    #[error("{tool} exited with {status}")]
    Failed {
        tool: &'static str,
        status: ExitStatus,
    },
}
