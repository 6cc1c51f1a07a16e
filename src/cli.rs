/// CLI argument definitions for the `inscope` command.
///
/// A single command: point it at a repository, give it org data, get an
/// InnerSource report. Most options also read an environment variable so
/// the tool drops into CI workflows without flag plumbing.
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "inscope",
    version,
    about = "Measure InnerSource collaboration in a repository",
    long_about = "\
Measure InnerSource collaboration in a repository.

Every contributor is classified as a member of the repository's owning
team or as an outside (InnerSource) contributor, and contributions
(commits, pull requests, issues) are tallied per class to produce a
collaboration ratio.

The owning team is derived from the org hierarchy in org-data.json: the
original commit author, their manager, the manager's direct reports, and
then everyone reporting up into that set. Use --owning-team to override
the derivation when the first committer no longer represents current
ownership.

Commits are read from the local git history. Pull-request and issue
authors come from exported JSON snapshot files (arrays of objects with
an `author` login, newest first), since API extraction happens outside
this tool.

Examples:
  inscope                                   # analyze the current directory
  inscope path/to/repo --org-data org.json
  inscope --owning-team alice,bob,charlie   # skip boundary derivation
  inscope --pulls pulls.json --issues issues.json
  inscope --json                            # also print the data as JSON"
)]
pub struct Args {
    /// Repository to analyze (default: current directory)
    pub path: Option<PathBuf>,

    /// Org hierarchy file mapping each username to its manager
    #[arg(long, env = "ORG_DATA_FILE", default_value = "org-data.json")]
    pub org_data: PathBuf,

    /// Comma-separated owning-team override (skips boundary derivation)
    #[arg(long, env = "OWNING_TEAM")]
    pub owning_team: Option<String>,

    /// Exported pull-request snapshot (JSON array, newest first)
    #[arg(long, env = "PULLS_FILE")]
    pub pulls: Option<PathBuf>,

    /// Exported issue snapshot (JSON array, newest first)
    #[arg(long, env = "ISSUES_FILE")]
    pub issues: Option<PathBuf>,

    /// Items to process per batch (default: 100, minimum: 10)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Title of the generated report
    #[arg(long, env = "REPORT_TITLE", default_value = "InnerSource Report")]
    pub report_title: String,

    /// Output markdown file
    #[arg(
        short,
        long,
        env = "OUTPUT_FILE",
        default_value = "innersource_report.md"
    )]
    pub output: PathBuf,

    /// Also print the report data as JSON to stdout
    #[arg(long)]
    pub json: bool,
}
