use crate::predicate::options::{PredicateLocalOptions, PredicateRemoteOptions};
use clap::Subcommand;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum PredicateCommands {
    /// List the recognized predicate type aliases and their URIs
    Types,
    /// Resolve a predicate type alias or URI
    Resolve {
        #[command(flatten)]
        predicate: PredicateRemoteOptions,
    },
    /// Check the local predicate inputs and resolve their predicate type
    Inputs {
        #[command(flatten)]
        predicate: PredicateLocalOptions,
    },
}
