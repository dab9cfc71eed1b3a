//! # Predicate CLI
//!
//! Predicate type resolution and command-line options for in-toto attestations.
//!
//! An attestation statement names the schema of its payload through a
//! `predicateType` URI. This crate lets users pick that URI with a short alias
//! (`slsaprovenance1`, `spdx`, `openvex`, ...) or pass any absolute URI for a
//! custom predicate, and provides the option bundles that carry the choice on
//! the command line:
//!
//! - [`predicate::options::PredicateOptions`] - the `--type` flag
//! - [`predicate::options::PredicateLocalOptions`] - `--type` plus the local
//!   `--predicate`/`--statement` inputs, at least one of which is required
//! - [`predicate::options::PredicateRemoteOptions`] - `--type` only
//!
//! ## Quick Start
//!
//! ```bash
//! predicate-cli types
//! predicate-cli resolve --type slsaprovenance
//! predicate-cli inputs --type spdxjson --predicate sbom.spdx.json --format json
//! ```

pub mod cli;
pub mod error;
pub mod predicate;

use cli::OutputFormat;

// Re-export error types
pub use error::{Error, Result};

/// CLI configuration options
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// How command results are printed
    pub output_format: OutputFormat,
}

/// Initialize logging for the CLI
///
/// # Examples
///
/// ```
/// use predicate_cli::init_logging;
///
/// // Initialize with default settings
/// let result = init_logging();
/// // Note: This might fail if already initialized
/// assert!(result.is_ok() || result.is_err());
/// ```
pub fn init_logging() -> Result<()> {
    env_logger::try_init().map_err(|e| Error::InitializationError(e.to_string()))
}

// Re-export commonly used types and functions
pub use predicate::{ResolvedPredicate, parse_predicate_type};
