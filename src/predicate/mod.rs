//! # Predicate Type Resolution
//!
//! An in-toto Statement tags its predicate with a `predicateType` URI. At the
//! command line users rarely want to type those URIs, so this module keeps a
//! fixed table of short aliases for the well-known predicate schemas and
//! resolves a user-supplied `--type` value against it.
//!
//! Resolution is a two step rule:
//! - an exact, case-sensitive alias match returns the mapped URI;
//! - anything else must be a syntactically valid absolute URI, which is
//!   returned verbatim as a custom predicate type.
//!
//! No registry or network lookup is performed for custom URIs.
//!
//! ## Key Components
//!
//! - [`PREDICATE_TYPES`] - The alias table, in display order
//! - [`parse_predicate_type`] - Resolve a `--type` value to a predicate URI
//! - [`options`] - The command-line option bundles carrying the `--type` flag
//!
//! ## Examples
//!
//! ```
//! use predicate_cli::predicate::parse_predicate_type;
//!
//! let uri = parse_predicate_type("slsaprovenance1").unwrap();
//! assert_eq!(uri, "https://slsa.dev/provenance/v1");
//!
//! let custom = parse_predicate_type("https://example.com/custom-predicate/v1").unwrap();
//! assert_eq!(custom, "https://example.com/custom-predicate/v1");
//!
//! assert!(parse_predicate_type("not a uri").is_err());
//! ```
pub mod options;

use crate::error::{Error, Result};

use lazy_static::lazy_static;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

pub const PREDICATE_CUSTOM: &str = "custom";
pub const PREDICATE_SLSA: &str = "slsaprovenance";
pub const PREDICATE_SLSA02: &str = "slsaprovenance02";
pub const PREDICATE_SLSA1: &str = "slsaprovenance1";
pub const PREDICATE_SPDX: &str = "spdx";
pub const PREDICATE_SPDX_JSON: &str = "spdxjson";
pub const PREDICATE_CYCLONEDX: &str = "cyclonedx";
pub const PREDICATE_LINK: &str = "link";
pub const PREDICATE_VULN: &str = "vuln";
pub const PREDICATE_OPENVEX: &str = "openvex";

/// Predicate type for free-form cosign attestations.
pub const COSIGN_CUSTOM_PROVENANCE_V01: &str = "https://cosign.sigstore.dev/attestation/v1";
/// Predicate type for cosign vulnerability scan attestations.
pub const COSIGN_VULN_PROVENANCE_V01: &str = "https://cosign.sigstore.dev/attestation/vuln/v1";
pub const SLSA_PROVENANCE_V02: &str = "https://slsa.dev/provenance/v0.2";
pub const SLSA_PROVENANCE_V1: &str = "https://slsa.dev/provenance/v1";
pub const SPDX_DOCUMENT: &str = "https://spdx.dev/Document";
pub const CYCLONEDX_BOM: &str = "https://cyclonedx.org/bom";
pub const IN_TOTO_LINK_V1: &str = "https://in-toto.io/Link/v1";
pub const OPENVEX_NAMESPACE: &str = "https://openvex.dev/ns";

/// Every recognized predicate type alias and the URI it stands for.
///
/// Several aliases can share a URI; `slsaprovenance` and `slsaprovenance02`
/// are synonyms, as are `spdx` and `spdxjson`.
pub const PREDICATE_TYPES: &[(&str, &str)] = &[
    (PREDICATE_SLSA, SLSA_PROVENANCE_V02),
    (PREDICATE_SLSA02, SLSA_PROVENANCE_V02),
    (PREDICATE_SLSA1, SLSA_PROVENANCE_V1),
    (PREDICATE_LINK, IN_TOTO_LINK_V1),
    (PREDICATE_SPDX, SPDX_DOCUMENT),
    (PREDICATE_SPDX_JSON, SPDX_DOCUMENT),
    (PREDICATE_CYCLONEDX, CYCLONEDX_BOM),
    (PREDICATE_VULN, COSIGN_VULN_PROVENANCE_V01),
    (PREDICATE_OPENVEX, OPENVEX_NAMESPACE),
    (PREDICATE_CUSTOM, COSIGN_CUSTOM_PROVENANCE_V01),
];

lazy_static! {
    /// Lookup view of [`PREDICATE_TYPES`].
    pub static ref PREDICATE_TYPE_MAP: HashMap<&'static str, &'static str> =
        PREDICATE_TYPES.iter().copied().collect();
}

/// Outcome of resolving a `--type` value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedPredicate {
    /// The value as the user supplied it
    pub input: String,
    /// The predicate type URI to put in the statement
    pub uri: String,
    /// True when `input` was not an alias and was accepted as a URI
    pub custom: bool,
}

/// Resolves a predicate `type` option into a predicate type URI.
///
/// Aliases are matched exactly. Any other value is accepted unchanged if it is
/// an absolute URI, otherwise [`Error::InvalidPredicateType`] is returned
/// carrying the rejected value.
///
/// # Examples
///
/// ```
/// use predicate_cli::predicate::{parse_predicate_type, SLSA_PROVENANCE_V02};
///
/// assert_eq!(parse_predicate_type("slsaprovenance").unwrap(), SLSA_PROVENANCE_V02);
/// assert_eq!(parse_predicate_type("slsaprovenance02").unwrap(), SLSA_PROVENANCE_V02);
/// ```
pub fn parse_predicate_type(t: &str) -> Result<String> {
    resolve_predicate_type(t).map(|resolved| resolved.uri)
}

/// Like [`parse_predicate_type`], but also reports whether the value was an
/// alias or a custom URI.
pub fn resolve_predicate_type(t: &str) -> Result<ResolvedPredicate> {
    if let Some(uri) = PREDICATE_TYPE_MAP.get(t) {
        debug!("Predicate type alias '{t}' resolved to {uri}");
        return Ok(ResolvedPredicate {
            input: t.to_string(),
            uri: uri.to_string(),
            custom: false,
        });
    }

    if !is_absolute_uri(t) {
        return Err(Error::InvalidPredicateType(t.to_string()));
    }

    debug!("Accepting '{t}' as a custom predicate type URI");
    Ok(ResolvedPredicate {
        input: t.to_string(),
        uri: t.to_string(),
        custom: true,
    })
}

/// Returns every alias mapping to `uri`, in table order.
pub fn aliases_for(uri: &str) -> Vec<&'static str> {
    PREDICATE_TYPES
        .iter()
        .filter(|(_, u)| *u == uri)
        .map(|(alias, _)| *alias)
        .collect()
}

// The resolved value is the raw input, so anything the url parser would
// strip or trim is refused rather than normalized.
fn is_absolute_uri(t: &str) -> bool {
    if t.is_empty()
        || t.chars().any(char::is_control)
        || t.starts_with(char::is_whitespace)
        || t.ends_with(char::is_whitespace)
    {
        return false;
    }

    match Url::parse(t) {
        Ok(url) => url.has_host() || !url.path().is_empty(),
        Err(e) => {
            debug!("'{t}' is not an absolute URI: {e}");
            false
        }
    }
}
