//! End-of-run summary printed to stdout.

use shelver_core::OrganizeReport;

pub fn print_summary(report: &OrganizeReport) {
    if report.outcomes.is_empty() {
        println!("No ebooks found.");
    } else {
        println!("{:<22} {}", "OUTCOME", "FILES");
        for (disposition, count) in report.counts() {
            println!("{:<22} {}", disposition.as_str(), count);
        }
        println!(
            "{} of {} file(s) left the source tree",
            sources_consumed(report),
            report.outcomes.len()
        );
    }
    if report.crawl_errors > 0 {
        println!("{} director(ies) could not be read; see the log", report.crawl_errors);
    }
}

/// Outcomes after which the source file no longer exists.
pub(crate) fn sources_consumed(report: &OrganizeReport) -> usize {
    report
        .outcomes
        .iter()
        .filter(|o| o.disposition.source_removed())
        .count()
}
