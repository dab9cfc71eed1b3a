use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid predicate type: {0}")]
    InvalidPredicateType(String),

    #[error("missing required flag: one of {} must be provided", format_flags(.0))]
    MissingRequiredFlag(Vec<String>),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Initialization error: {0}")]
    InitializationError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_flags(flags: &[String]) -> String {
    flags
        .iter()
        .map(|f| format!("--{f}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_predicate_type_mentions_input() {
        let err = Error::InvalidPredicateType("not a uri".to_string());
        assert_eq!(err.to_string(), "invalid predicate type: not a uri");
    }

    #[test]
    fn test_missing_required_flag_names_every_flag() {
        let err =
            Error::MissingRequiredFlag(vec!["predicate".to_string(), "statement".to_string()]);
        assert_eq!(
            err.to_string(),
            "missing required flag: one of --predicate, --statement must be provided"
        );
    }
}
