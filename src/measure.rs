//! The measurement pipeline: org data → team boundary → chunked
//! aggregation → classification → report.
//!
//! Fatal conditions are limited to unusable org data, an unreadable
//! repository, and report I/O. Everything else degrades: a missing
//! snapshot or a failed batch is logged and the run keeps going, with
//! the understanding that counts may undercount actual activity.

use std::error::Error;

use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::boundary;
use crate::config::RunConfig;
use crate::contrib::{self, ContributionKind, ContributionSource, snapshot::SnapshotSource};
use crate::git::GitRepo;
use crate::org::OrgGraph;
use crate::ratio;
use crate::report::{self, ReportContext};

pub fn run(config: &RunConfig) -> Result<(), Box<dyn Error>> {
    info!("reading org data from {}", config.org_data.display());
    let org = OrgGraph::from_path(&config.org_data)?;
    info!("org data loaded ({} users)", org.len());

    let repo = GitRepo::open(&config.repo_path)?;

    // Boundary seed; skipped entirely when the team is given explicitly.
    let mut original_author = None;
    let mut original_author_manager = None;
    if let Some(team) = &config.owning_team {
        info!(
            "using explicitly specified owning team ({} members)",
            team.len()
        );
    } else {
        original_author = repo.original_author()?;
        match original_author.as_deref() {
            Some(author) => {
                if !org.contains(author) {
                    warn!(
                        "original commit author '{author}' not found in org data; \
                         the derived team may be too small"
                    );
                }
                original_author_manager = org.manager(author).map(String::from);
                info!(
                    "original commit author: {author}, with manager: {}",
                    original_author_manager.as_deref().unwrap_or("none")
                );
            }
            None => warn!("repository has no commits; cannot derive an owning team"),
        }
    }

    let team = boundary::resolve(
        original_author.as_deref(),
        &org,
        config.owning_team.as_ref(),
    );
    info!("resolved owning team of {} members", team.len());

    // The commit source is required; snapshot sources degrade to a
    // warning and zero contributions for that kind.
    let mut sources: Vec<Box<dyn ContributionSource>> =
        vec![Box::new(repo.into_commit_source()?)];
    for (path, kind) in [
        (&config.pulls, ContributionKind::PullRequest),
        (&config.issues, ContributionKind::Issue),
    ] {
        if let Some(path) = path {
            match SnapshotSource::open(path, kind) {
                Ok(source) => sources.push(Box::new(source)),
                Err(e) => warn!(
                    "{kind} source unavailable, counting zero {}: {e}",
                    kind.label()
                ),
            }
        }
    }

    info!("processing contributions in chunks of {}", config.chunk_size);
    let spinner = ProgressBar::new_spinner();
    let outcome = contrib::aggregate(&mut sources, config.chunk_size, |kind, processed| {
        spinner.set_message(format!("processed {processed} {}", kind.label()));
        spinner.tick();
    });
    spinner.finish_and_clear();
    info!("tallied {} contributors", outcome.tally.len());

    if !outcome.warnings.is_empty() {
        warn!(
            "run completed with {} source warnings; counts may undercount actual activity",
            outcome.warnings.len()
        );
    }

    let data = ratio::classify(&outcome.tally, &team);
    info!(
        "InnerSource contribution ratio: {:.2}%",
        data.ratio_or_zero() * 100.0
    );

    let repository = repository_name(config);
    let ctx = ReportContext {
        title: &config.report_title,
        repository: &repository,
        original_author: original_author.as_deref(),
        original_author_manager: original_author_manager.as_deref(),
        team_explicitly_specified: config.owning_team.is_some(),
    };
    report::write_report(&data, &ctx, &config.output_file)?;
    info!(
        "InnerSource report written to {}",
        config.output_file.display()
    );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    }

    Ok(())
}

/// Display name for the analyzed repository: the directory name when
/// there is one, the raw path otherwise.
fn repository_name(config: &RunConfig) -> String {
    let canonical = config.repo_path.canonicalize();
    let path = canonical.as_deref().unwrap_or(&config.repo_path);
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "measure_test.rs"]
mod tests;
