//! Terminal outcome of processing one file, and the per-run report.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Disposition {
    /// Moved to an empty destination.
    Moved,
    /// Source was newer and replaced the destination.
    Overwritten,
    /// Destination had the same size; source removed.
    SkippedDuplicate,
    /// Destination was newer; source removed.
    SkippedStale,
    /// Destination differs and neither side is newer; both left alone.
    SkippedConflict,
    SkippedIncompleteMetadata,
    SkippedUnreadable,
    SkippedUnknownFormat,
    /// The filesystem operation itself failed; source left in place.
    Failed,
}

impl Disposition {
    pub fn as_str(self) -> &'static str {
        match self {
            Disposition::Moved => "moved",
            Disposition::Overwritten => "overwritten",
            Disposition::SkippedDuplicate => "duplicate",
            Disposition::SkippedStale => "stale",
            Disposition::SkippedConflict => "conflict",
            Disposition::SkippedIncompleteMetadata => "incomplete-metadata",
            Disposition::SkippedUnreadable => "unreadable",
            Disposition::SkippedUnknownFormat => "unknown-format",
            Disposition::Failed => "failed",
        }
    }

    /// Whether the source path no longer exists after this outcome.
    pub fn source_removed(self) -> bool {
        matches!(
            self,
            Disposition::Moved
                | Disposition::Overwritten
                | Disposition::SkippedDuplicate
                | Disposition::SkippedStale
        )
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub path: PathBuf,
    pub disposition: Disposition,
}

/// Outcomes of one run, in crawl order.
#[derive(Debug, Clone, Default)]
pub struct OrganizeReport {
    pub outcomes: Vec<Outcome>,
    /// Traversal errors (unreadable directories) encountered while crawling.
    pub crawl_errors: usize,
}

impl OrganizeReport {
    pub(crate) fn record(&mut self, path: PathBuf, disposition: Disposition) {
        self.outcomes.push(Outcome { path, disposition });
    }

    pub fn counts(&self) -> BTreeMap<Disposition, usize> {
        let mut counts = BTreeMap::new();
        for outcome in &self.outcomes {
            *counts.entry(outcome.disposition).or_insert(0) += 1;
        }
        counts
    }

    pub fn count(&self, disposition: Disposition) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.disposition == disposition)
            .count()
    }

    pub fn disposition_of(&self, path: &std::path::Path) -> Option<Disposition> {
        self.outcomes
            .iter()
            .find(|o| o.path == path)
            .map(|o| o.disposition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_by_disposition() {
        let mut report = OrganizeReport::default();
        report.record("a.epub".into(), Disposition::Moved);
        report.record("b.epub".into(), Disposition::Moved);
        report.record("c.mobi".into(), Disposition::SkippedUnreadable);

        let counts = report.counts();
        assert_eq!(counts.get(&Disposition::Moved), Some(&2));
        assert_eq!(counts.get(&Disposition::SkippedUnreadable), Some(&1));
        assert_eq!(report.count(Disposition::Failed), 0);
        assert_eq!(
            report.disposition_of(std::path::Path::new("c.mobi")),
            Some(Disposition::SkippedUnreadable)
        );
    }

    #[test]
    fn only_relocations_and_removals_consume_the_source() {
        assert!(Disposition::SkippedStale.source_removed());
        assert!(!Disposition::SkippedConflict.source_removed());
        assert!(!Disposition::Failed.source_removed());
    }
}
