use tracing::{debug, warn};

use super::{BOT_MARKER, ContributionKind, ContributionSource, ContributionTally};

/// Consecutive failed pulls after which a source is abandoned. A skipped
/// batch keeps the run alive; the cap keeps a dead source from stalling
/// it forever.
const MAX_CONSECUTIVE_FAILURES: usize = 3;

/// Result of an aggregation run: the combined tally plus the non-fatal
/// conditions the caller should surface.
#[derive(Debug)]
pub struct AggregateOutcome {
    pub tally: ContributionTally,
    pub warnings: Vec<String>,
}

/// Drain every source in batches of at most `chunk_size`, counting one
/// contribution per surviving event; all kinds share one counter
/// namespace. Authors carrying the bot marker are discarded.
///
/// The progress callback fires after every batch with the source kind
/// and the number of items processed so far for that source; it is
/// observational only and never alters the tally.
///
/// A failed batch is logged and skipped without aborting the run; any
/// successful pull resets the failure streak. Sources are processed
/// strictly one at a time, one batch at a time.
pub fn aggregate(
    sources: &mut [Box<dyn ContributionSource>],
    chunk_size: usize,
    mut progress: impl FnMut(ContributionKind, usize),
) -> AggregateOutcome {
    let chunk_size = chunk_size.max(1);
    let mut tally = ContributionTally::new();
    let mut warnings = Vec::new();

    for source in sources {
        let kind = source.kind();
        let mut processed = 0usize;
        let mut failure_streak = 0usize;

        loop {
            let batch = match source.next_batch(chunk_size) {
                Ok(batch) => batch,
                Err(e) => {
                    failure_streak += 1;
                    warn!("skipping failed {kind} batch: {e}");
                    if failure_streak >= MAX_CONSECUTIVE_FAILURES {
                        let msg = format!(
                            "{} source abandoned after {failure_streak} consecutive failed batches; \
                             {} may be undercounted",
                            kind,
                            kind.label(),
                        );
                        warn!("{msg}");
                        warnings.push(msg);
                        break;
                    }
                    continue;
                }
            };
            if batch.is_empty() {
                break;
            }
            failure_streak = 0;

            for author in &batch {
                if author.contains(BOT_MARKER) {
                    continue;
                }
                *tally.entry(author.clone()).or_insert(0) += 1;
            }

            processed += batch.len();
            debug!("processed {processed} {} so far", kind.label());
            progress(kind, processed);
        }
    }

    AggregateOutcome { tally, warnings }
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;
