pub mod commands;
pub mod handlers;
use crate::error::Error;

// Re-export commonly used items
pub use commands::{OutputFormat, PredicateCommands};
pub use handlers::handle_predicate_command;

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CLI_NAME: &str = "predicate-cli";

pub fn format_error(error: &Error) -> String {
    match error {
        Error::InvalidPredicateType(_) | Error::MissingRequiredFlag(_) => format!("Error: {error}"),
        Error::Validation(msg) => format!("Validation error: {msg}"),
        Error::InitializationError(msg) => format!("Initialization error: {msg}"),
        Error::Json(err) => format!("JSON error: {err}"),
    }
}
