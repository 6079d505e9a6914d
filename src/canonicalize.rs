//! Canonical encoding of per-cluster resource versions
//!
//! Clients compare encoded versions as plain strings, so the same logical
//! mapping must always produce the same bytes. Hash map iteration order is
//! unspecified, which rules out handing the map to a JSON encoder directly.
//! Entries are sorted by cluster name and the object is written by hand.
//!
//! The output has the shape of a flat JSON object of strings and stays
//! readable by producers that emitted real JSON. Nothing inside the quotes is
//! escaped: cluster names and versions must not contain `"`, `\` or control
//! characters.

use std::collections::HashMap;

use crate::errors::{VersionError, VersionResult};

/// Encode `(cluster, version)` pairs as `{"cluster":"version",...}` with
/// clusters in ascending byte order.
///
/// An empty input yields an empty string, never `{}`.
pub fn canonicalize_versions<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut pairs: Vec<(&str, &str)> = entries.into_iter().collect();
    if pairs.is_empty() {
        return String::new();
    }

    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    // `"c":"v"` is five bytes of punctuation per pair, plus separators and braces.
    let payload: usize = pairs.iter().map(|(c, v)| c.len() + v.len() + 5).sum();
    let mut output = String::with_capacity(payload + pairs.len() + 1);

    output.push('{');
    for (i, (cluster, version)) in pairs.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push('"');
        output.push_str(cluster);
        output.push_str("\":\"");
        output.push_str(version);
        output.push('"');
    }
    output.push('}');

    output
}

/// Parse a flat `{"cluster":"version",...}` object.
///
/// Anything else (nested values, non-string values, arrays, truncated input)
/// is rejected as a whole; no partial mapping is returned. Duplicate keys keep
/// the last value.
pub fn parse_versions(input: &str) -> VersionResult<HashMap<String, String>> {
    serde_json::from_str::<HashMap<String, String>>(input)
        .map_err(|e| VersionError::malformed(input, e))
}

/// Canonicalize an encoded version string.
///
/// Reorders a well-formed object produced by any encoder into canonical form.
pub fn canonicalize_version_string(input: &str) -> VersionResult<String> {
    let versions = parse_versions(input)?;
    Ok(canonicalize_versions(
        versions.iter().map(|(c, v)| (c.as_str(), v.as_str())),
    ))
}
