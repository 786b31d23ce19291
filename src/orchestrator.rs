// Drives a full run: every source is loaded then uploaded in order, and a
// failure in one source never stops the others.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::api::{post_products, ProductApi, ResultEntry};
use crate::loader::Loader;
use crate::record::Source;
use crate::ui::Reporter;

/// Final tally across all sources. `successes + failures == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub successes: usize,
    pub failures: usize,
}

impl Summary {
    pub fn from_entries(entries: &[ResultEntry]) -> Self {
        let successes = entries.iter().filter(|e| e.is_success()).count();
        Summary {
            total: entries.len(),
            successes,
            failures: entries.len() - successes,
        }
    }
}

/// Everything a run produced, in processing order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub entries: Vec<ResultEntry>,
    /// Categories whose file could not be loaded.
    pub failed_sources: Vec<String>,
    pub summary: Summary,
}

/// Process `sources` in order and print the final summary. Only a failure
/// to write the report itself is returned as an error.
pub fn run<A, W>(
    sources: &[Source],
    loader: &Loader,
    api: &A,
    reporter: &mut Reporter<W>,
) -> io::Result<RunReport>
where
    A: ProductApi + ?Sized,
    W: Write,
{
    info!(sources = sources.len(), dir = %loader.dir().display(), "starting upload run");
    reporter.start()?;

    let mut report = RunReport::default();
    for source in sources {
        reporter.loading(source.category)?;
        let items = match loader.load(source.file) {
            Ok(items) => items,
            Err(e) => {
                warn!(category = source.category, error = %e, "skipping source");
                reporter.source_failed(source.category, &e)?;
                report.failed_sources.push(source.category.to_string());
                continue;
            }
        };

        let results = post_products(api, &items, source.category, reporter)?;
        report.entries.extend(results);
        reporter.completed(source.category, items.len())?;
    }

    report.summary = Summary::from_entries(&report.entries);
    info!(
        total = report.summary.total,
        successes = report.summary.successes,
        failures = report.summary.failures,
        "upload run finished"
    );
    reporter.summary(&report.summary)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UploadOutcome;

    #[test]
    fn summary_counts_only_created() {
        let entries = vec![
            ResultEntry {
                name: "A".into(),
                outcome: UploadOutcome::Created,
            },
            ResultEntry {
                name: "B".into(),
                outcome: UploadOutcome::HttpFailure { status: 500 },
            },
            ResultEntry {
                name: "C".into(),
                outcome: UploadOutcome::TransportError {
                    message: "timed out".into(),
                },
            },
        ];
        assert_eq!(
            Summary::from_entries(&entries),
            Summary {
                total: 3,
                successes: 1,
                failures: 2
            }
        );
    }

    #[test]
    fn empty_run_summary_is_zero() {
        assert_eq!(Summary::from_entries(&[]), Summary::default());
    }
}
