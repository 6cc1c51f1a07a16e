//! Run configuration resolved from the command line and environment.

use std::path::PathBuf;

use crate::boundary::TeamBoundary;
use crate::cli::Args;

/// Items pulled per batch when no size is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 100;
/// Smallest batch size the pipeline will run with.
pub const MIN_CHUNK_SIZE: usize = 10;

/// Fully resolved configuration for one measurement run.
pub struct RunConfig {
    pub repo_path: PathBuf,
    pub org_data: PathBuf,
    pub owning_team: Option<TeamBoundary>,
    pub pulls: Option<PathBuf>,
    pub issues: Option<PathBuf>,
    pub chunk_size: usize,
    pub report_title: String,
    pub output_file: PathBuf,
    pub json: bool,
}

impl RunConfig {
    pub fn from_args(args: Args) -> Self {
        Self {
            repo_path: args.path.unwrap_or_else(|| PathBuf::from(".")),
            org_data: args.org_data,
            owning_team: args.owning_team.as_deref().and_then(parse_owning_team),
            pulls: args.pulls,
            issues: args.issues,
            chunk_size: resolve_chunk_size(args.chunk_size),
            report_title: args.report_title,
            output_file: args.output,
            json: args.json,
        }
    }
}

/// Clamp a requested chunk size to the enforced minimum; unset falls
/// back to the default.
pub fn clamp_chunk_size(requested: Option<usize>) -> usize {
    requested.unwrap_or(DEFAULT_CHUNK_SIZE).max(MIN_CHUNK_SIZE)
}

/// Resolve the chunk size from the CLI or the `CHUNK_SIZE` environment
/// variable. A value that does not parse falls back to the default
/// rather than failing the run.
fn resolve_chunk_size(cli_value: Option<usize>) -> usize {
    let requested = cli_value.or_else(|| {
        std::env::var("CHUNK_SIZE")
            .ok()
            .and_then(|v| v.trim().parse().ok())
    });
    clamp_chunk_size(requested)
}

/// Parse a comma-separated owning-team override. Blank entries are
/// dropped; an effectively empty list means no override at all.
pub fn parse_owning_team(raw: &str) -> Option<TeamBoundary> {
    let team: TeamBoundary = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect();
    if team.is_empty() { None } else { Some(team) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
