//! Command-line option bundles for predicate inputs.
//!
//! Each bundle registers its flags on a `clap::Command` through
//! [`Interface::add_flags`]. The local and remote bundles embed the base
//! [`PredicateOptions`] with `#[command(flatten)]`, so registering them always
//! registers `--type` first and then whatever the bundle adds.
//!
//! ```
//! use clap::Command;
//! use predicate_cli::predicate::options::{Interface, PredicateLocalOptions};
//!
//! let cmd = PredicateLocalOptions::add_flags(Command::new("attest"));
//! let matches = cmd
//!     .try_get_matches_from(["attest", "--type", "spdx", "--predicate", "sbom.json"])
//!     .unwrap();
//!
//! let opts: PredicateLocalOptions = predicate_cli::predicate::options::from_matches(&matches).unwrap();
//! assert_eq!(opts.resolve().unwrap().uri, "https://spdx.dev/Document");
//! ```

use super::{PREDICATE_CUSTOM, ResolvedPredicate, resolve_predicate_type};
use crate::error::{Error, Result};

use clap::{ArgMatches, Args, Command};
use std::path::PathBuf;

pub const TYPE_FLAG: &str = "type";
pub const PREDICATE_FLAG: &str = "predicate";
pub const STATEMENT_FLAG: &str = "statement";

const PREDICATE_TYPE_HELP: &str = "specify a predicate type (slsaprovenance|slsaprovenance02|slsaprovenance1|link|spdx|spdxjson|cyclonedx|vuln|openvex|custom) or an URI";

/// Common surface of the predicate option bundles.
pub trait Interface: Args {
    /// The embedded base options.
    fn predicate(&self) -> &PredicateOptions;

    /// Registers the bundle's flags on `cmd`.
    fn add_flags(cmd: Command) -> Command {
        Self::augment_args(cmd)
    }

    /// Cross-field checks that run after parsing.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn resolve(&self) -> Result<ResolvedPredicate> {
        resolve_predicate_type(&self.predicate().predicate_type)
    }
}

/// Builds a bundle from parsed matches and runs its post-parse validation.
pub fn from_matches<T: Interface>(matches: &ArgMatches) -> Result<T> {
    let opts = T::from_arg_matches(matches).map_err(|e| Error::Validation(e.to_string()))?;
    opts.validate()?;

    Ok(opts)
}

/// Predicate type selection.
#[derive(Debug, Clone, Args)]
pub struct PredicateOptions {
    #[arg(
        id = "type",
        long = "type",
        value_name = "TYPE",
        default_value = PREDICATE_CUSTOM,
        help = PREDICATE_TYPE_HELP
    )]
    pub predicate_type: String,
}

impl Interface for PredicateOptions {
    fn predicate(&self) -> &PredicateOptions {
        self
    }
}

/// Predicate options for commands reading the predicate from local files.
#[derive(Debug, Clone, Args)]
pub struct PredicateLocalOptions {
    #[command(flatten)]
    pub base: PredicateOptions,

    /// path to the predicate file.
    #[arg(id = "predicate", long = "predicate", value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// path to the statement file.
    #[arg(id = "statement", long = "statement", value_name = "PATH")]
    pub statement: Option<PathBuf>,
}

impl Interface for PredicateLocalOptions {
    fn predicate(&self) -> &PredicateOptions {
        &self.base
    }

    // At least one input is required. Supplying both is accepted.
    fn validate(&self) -> Result<()> {
        if self.path.is_none() && self.statement.is_none() {
            return Err(Error::MissingRequiredFlag(vec![
                PREDICATE_FLAG.to_string(),
                STATEMENT_FLAG.to_string(),
            ]));
        }

        Ok(())
    }
}

/// Predicate options for commands whose predicate comes from elsewhere.
#[derive(Debug, Clone, Args)]
pub struct PredicateRemoteOptions {
    #[command(flatten)]
    pub base: PredicateOptions,
}

impl Interface for PredicateRemoteOptions {
    fn predicate(&self) -> &PredicateOptions {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{COSIGN_CUSTOM_PROVENANCE_V01, PREDICATE_TYPES};

    fn parse<T: Interface>(args: &[&str]) -> Result<T> {
        let cmd = T::add_flags(Command::new("attest"));
        let matches = cmd
            .try_get_matches_from(std::iter::once("attest").chain(args.iter().copied()))
            .map_err(|e| Error::Validation(e.to_string()))?;
        from_matches(&matches)
    }

    fn has_flag(cmd: &Command, long: &str) -> bool {
        cmd.get_arguments().any(|a| a.get_long() == Some(long))
    }

    #[test]
    fn test_type_defaults_to_custom() {
        let opts: PredicateOptions = parse(&[]).unwrap();
        assert_eq!(opts.predicate_type, PREDICATE_CUSTOM);
        assert_eq!(opts.resolve().unwrap().uri, COSIGN_CUSTOM_PROVENANCE_V01);
    }

    #[test]
    fn test_type_help_lists_every_alias() {
        let cmd = PredicateOptions::add_flags(Command::new("attest"));
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id().as_str() == TYPE_FLAG)
            .unwrap();
        let help = arg.get_help().unwrap().to_string();

        for (alias, _) in PREDICATE_TYPES {
            assert!(help.contains(alias), "help text is missing {alias}");
        }
    }

    #[test]
    fn test_local_accepts_predicate_only() {
        let opts: PredicateLocalOptions = parse(&["--predicate=/tmp/p.json"]).unwrap();
        assert_eq!(opts.path, Some(PathBuf::from("/tmp/p.json")));
        assert_eq!(opts.statement, None);
        assert_eq!(opts.base.predicate_type, PREDICATE_CUSTOM);
    }

    #[test]
    fn test_local_accepts_statement_only() {
        let opts: PredicateLocalOptions =
            parse(&["--type", "link", "--statement", "/tmp/s.json"]).unwrap();
        assert_eq!(opts.statement, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(opts.resolve().unwrap().uri, "https://in-toto.io/Link/v1");
    }

    #[test]
    fn test_local_requires_one_input() {
        let result: Result<PredicateLocalOptions> = parse(&["--type", "spdx"]);
        match result {
            Err(Error::MissingRequiredFlag(flags)) => {
                assert_eq!(flags, vec!["predicate", "statement"]);
            }
            other => panic!("expected MissingRequiredFlag, got {other:?}"),
        }
    }

    // An explicit empty value still counts as supplied
    #[test]
    fn test_local_accepts_explicit_empty_predicate() {
        let opts: PredicateLocalOptions = parse(&["--predicate="]).unwrap();
        assert_eq!(opts.path, Some(PathBuf::from("")));
        assert_eq!(opts.statement, None);
    }

    #[test]
    fn test_local_accepts_both_inputs() {
        let opts: PredicateLocalOptions =
            parse(&["--predicate", "/tmp/p.json", "--statement", "/tmp/s.json"]).unwrap();
        assert!(opts.path.is_some());
        assert!(opts.statement.is_some());
    }

    #[test]
    fn test_local_registers_base_flags() {
        let cmd = PredicateLocalOptions::add_flags(Command::new("attest"));
        assert!(has_flag(&cmd, TYPE_FLAG));
        assert!(has_flag(&cmd, PREDICATE_FLAG));
        assert!(has_flag(&cmd, STATEMENT_FLAG));
    }

    #[test]
    fn test_remote_exposes_type_only() {
        let cmd = PredicateRemoteOptions::add_flags(Command::new("attest"));
        assert!(has_flag(&cmd, TYPE_FLAG));
        assert!(!has_flag(&cmd, PREDICATE_FLAG));
        assert!(!has_flag(&cmd, STATEMENT_FLAG));

        let result: Result<PredicateRemoteOptions> = parse(&["--predicate", "/tmp/p.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_registration_on_separate_commands() {
        let first = PredicateLocalOptions::add_flags(Command::new("attest"));
        let second = PredicateLocalOptions::add_flags(Command::new("attest-blob"));
        assert!(has_flag(&first, PREDICATE_FLAG));
        assert!(has_flag(&second, PREDICATE_FLAG));
    }

    #[test]
    fn test_resolve_rejects_invalid_type() {
        let opts: PredicateRemoteOptions = parse(&["--type", "not a uri"]).unwrap();
        assert!(matches!(
            opts.resolve(),
            Err(Error::InvalidPredicateType(s)) if s == "not a uri"
        ));
    }
}
