pub mod config;
pub mod error;
pub mod target;

mod macros;

// The logging macros expand to paths through this re-export.
#[doc(hidden)]
pub use tracing;
