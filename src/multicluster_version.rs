//! Multi-cluster resource version
//!
//! A single opaque version string summarizing one resource version per
//! source cluster, plus the legacy `"0"` sentinel meaning "no information,
//! start from the earliest version".
//!
//! Wire forms:
//! - `0` is the zero sentinel
//! - the empty string means no clusters are known
//! - `{"a":"3","b":"7"}` lists per-cluster versions, clusters sorted
//!
//! Parsing is best effort. An unrecognized string yields an empty version
//! instead of an error, so a corrupt or foreign token only costs freshness
//! information and never blocks the caller.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::canonicalize::{canonicalize_versions, parse_versions};
use crate::errors::VersionResult;

/// The literal that doubles as the global zero sentinel and as an ordinary
/// per-cluster version.
pub const ZERO_VERSION: &str = "0";

/// Per-cluster resource versions with a zero sentinel flag.
///
/// The zero state is tracked separately from the map: a cluster may
/// legitimately be at version `"0"` without the whole token being zero.
/// Equality is equality of the canonical string.
#[derive(Debug, Clone, Default)]
pub struct MultiClusterVersion {
    versions: HashMap<String, String>,
    is_zero: bool,
}

impl MultiClusterVersion {
    /// Empty version with no clusters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty version with room for `capacity` clusters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            versions: HashMap::with_capacity(capacity),
            is_zero: false,
        }
    }

    /// The zero sentinel.
    pub fn zero() -> Self {
        Self {
            versions: HashMap::new(),
            is_zero: true,
        }
    }

    /// Strict parse of `""`, `"0"` or a flat `{"cluster":"version"}` object.
    pub fn parse(s: &str) -> VersionResult<Self> {
        match s {
            "" => Ok(Self::new()),
            ZERO_VERSION => Ok(Self::zero()),
            _ => Ok(Self {
                versions: parse_versions(s)?,
                is_zero: false,
            }),
        }
    }

    /// Best-effort parse. Malformed input yields an empty version.
    pub fn from_string(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|e| {
            debug!("Ignoring unparseable resource version: {}", e);
            Self::new()
        })
    }

    /// Record `version` for `cluster`.
    ///
    /// Any version other than `"0"` clears the zero state for good. Writing
    /// `"0"` leaves the zero state as it was.
    pub fn set(&mut self, cluster: impl Into<String>, version: impl Into<String>) {
        let version = version.into();
        if version != ZERO_VERSION && self.is_zero {
            trace!("Resource version leaves zero state");
            self.is_zero = false;
        }
        self.versions.insert(cluster.into(), version);
    }

    /// Version for `cluster`: `"0"` while zero, `""` when unknown.
    pub fn get(&self, cluster: &str) -> &str {
        if self.is_zero {
            return ZERO_VERSION;
        }
        self.versions.get(cluster).map(String::as_str).unwrap_or("")
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero
    }

    /// Number of stored clusters, including entries held while zero.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Reserve room for at least `additional` more clusters.
    pub fn reserve(&mut self, additional: usize) {
        self.versions.reserve(additional);
    }

    /// Stored `(cluster, version)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    /// Stored cluster names in canonical order.
    pub fn clusters(&self) -> Vec<&str> {
        let mut clusters: Vec<&str> = self.versions.keys().map(String::as_str).collect();
        clusters.sort_unstable();
        clusters
    }

    /// The canonical string form.
    pub fn canonical(&self) -> String {
        if self.is_zero {
            return ZERO_VERSION.to_string();
        }
        canonicalize_versions(self.iter())
    }
}

impl fmt::Display for MultiClusterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for MultiClusterVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string(s))
    }
}

impl PartialEq for MultiClusterVersion {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for MultiClusterVersion {}

impl Serialize for MultiClusterVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical())
    }
}

impl<'de> Deserialize<'de> for MultiClusterVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_string(&s))
    }
}
