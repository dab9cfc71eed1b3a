use crate::Config;
use crate::error::Result;

use super::commands::{OutputFormat, PredicateCommands};
use crate::predicate::options::{Interface, PredicateLocalOptions, PredicateRemoteOptions};
use crate::predicate::{PREDICATE_TYPES, ResolvedPredicate};

use log::{debug, info};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct PredicateTypeEntry {
    alias: &'static str,
    uri: &'static str,
}

/// What a local attestation command hands downstream once its options check out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalPredicateInputs {
    pub predicate_type: ResolvedPredicate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<PathBuf>,
}

pub fn handle_predicate_command(cmd: PredicateCommands, config: &Config) -> Result<()> {
    let output = match cmd {
        PredicateCommands::Types => render_types(config.output_format)?,
        PredicateCommands::Resolve { predicate } => {
            render_resolved(&resolve_remote(&predicate)?, config.output_format)?
        }
        PredicateCommands::Inputs { predicate } => {
            render_local_inputs(&check_local_inputs(predicate)?, config.output_format)?
        }
    };

    println!("{output}");

    Ok(())
}

pub fn resolve_remote(opts: &PredicateRemoteOptions) -> Result<ResolvedPredicate> {
    opts.validate()?;
    let resolved = opts.resolve()?;
    info!("Resolved predicate type '{}' to {}", resolved.input, resolved.uri);

    Ok(resolved)
}

pub fn check_local_inputs(opts: PredicateLocalOptions) -> Result<LocalPredicateInputs> {
    opts.validate()?;
    let resolved = opts.resolve()?;

    if opts.path.is_some() && opts.statement.is_some() {
        debug!("Both --predicate and --statement were supplied");
    }
    info!("Resolved predicate type '{}' to {}", resolved.input, resolved.uri);

    Ok(LocalPredicateInputs {
        predicate_type: resolved,
        predicate: opts.path,
        statement: opts.statement,
    })
}

pub fn render_types(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(PREDICATE_TYPES
            .iter()
            .map(|(alias, uri)| format!("{alias:<18} {uri}"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let entries: Vec<PredicateTypeEntry> = PREDICATE_TYPES
                .iter()
                .map(|&(alias, uri)| PredicateTypeEntry { alias, uri })
                .collect();
            Ok(serde_json::to_string_pretty(&entries)?)
        }
    }
}

pub fn render_resolved(resolved: &ResolvedPredicate, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(resolved.uri.clone()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(resolved)?),
    }
}

pub fn render_local_inputs(inputs: &LocalPredicateInputs, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![format!("predicateType: {}", inputs.predicate_type.uri)];
            if let Some(path) = &inputs.predicate {
                lines.push(format!("predicate: {}", path.display()));
            }
            if let Some(path) = &inputs.statement {
                lines.push(format!("statement: {}", path.display()));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(inputs)?),
    }
}
