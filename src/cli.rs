use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::config_loader::McVersionConfig;
use crate::errors::{VersionError, VersionResult};
use crate::multicluster_version::MultiClusterVersion;

/// Top-level CLI interface for mcversion
#[derive(Parser, Debug)]
#[command(
    name = "mcversion",
    version,
    about = "Inspect and canonicalize multi-cluster resource versions"
)]
pub struct Cli {
    /// Configuration file (defaults to ./mcversion.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fail on malformed tokens instead of treating them as empty
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical form of a token
    Canonical { token: String },

    /// Print the version recorded for one cluster
    Get { token: String, cluster: String },

    /// Apply <cluster>=<version> assignments in order and print the result
    Set {
        token: String,
        #[arg(required = true)]
        assignments: Vec<String>,
    },

    /// Show the zero flag and every stored cluster
    Inspect { token: String },

    /// Report whether two tokens are equal in canonical form
    Compare { left: String, right: String },
}

/// Run a parsed command, writing its output to `out`.
pub fn execute<W: Write>(cli: &Cli, config: &McVersionConfig, out: &mut W) -> VersionResult<()> {
    let strict = cli.strict || config.strict;
    debug!("Executing {:?} (strict={})", cli.command, strict);

    match &cli.command {
        Commands::Canonical { token } => {
            let version = load_token(token, strict)?;
            emit(out, &version.canonical())
        }
        Commands::Get { token, cluster } => {
            let version = load_token(token, strict)?;
            emit(out, version.get(cluster))
        }
        Commands::Set { token, assignments } => {
            let mut version = load_token(token, strict)?;
            version.reserve(assignments.len());
            for argument in assignments {
                let (cluster, value) = parse_assignment(argument)?;
                version.set(cluster, value);
            }
            emit(out, &version.canonical())
        }
        Commands::Inspect { token } => {
            let version = load_token(token, strict)?;
            emit(out, &format!("zero: {}", version.is_zero()))?;
            emit(out, &format!("clusters: {}", version.len()))?;
            // Raw stored values; `get` would mask them with "0" while zero.
            let mut entries: Vec<(&str, &str)> = version.iter().collect();
            entries.sort_unstable();
            for (cluster, stored) in entries {
                emit(out, &format!("{} = {}", cluster, stored))?;
            }
            Ok(())
        }
        Commands::Compare { left, right } => {
            let left = load_token(left, strict)?;
            let right = load_token(right, strict)?;
            emit(out, if left == right { "equal" } else { "different" })
        }
    }
}

fn load_token(token: &str, strict: bool) -> VersionResult<MultiClusterVersion> {
    match MultiClusterVersion::parse(token) {
        Ok(version) => Ok(version),
        Err(e) if strict => Err(e),
        Err(e) => {
            warn!("Treating token as empty: {}", e);
            Ok(MultiClusterVersion::new())
        }
    }
}

/// Split `<cluster>=<version>`. The version may be empty, the cluster may not.
pub fn parse_assignment(argument: &str) -> VersionResult<(&str, &str)> {
    match argument.split_once('=') {
        Some((cluster, version)) if !cluster.is_empty() => Ok((cluster, version)),
        _ => Err(VersionError::invalid_assignment(argument)),
    }
}

fn emit<W: Write>(out: &mut W, line: &str) -> VersionResult<()> {
    writeln!(out, "{}", line).map_err(|e| VersionError::io("write output", e))
}
