//! Report generation.
//!
//! This module renders word statistics as plain text, Markdown or JSON.

use crate::counter::WordCounter;
use crate::models::{AggregateStats, LengthHistogram, Report, ReportMetadata, SourceStatus};
use anyhow::Result;
use chrono::Utc;

/// Build a report from a counter that has processed a source.
pub fn build_report(counter: &WordCounter, include_histogram: bool) -> Report {
    let metadata = ReportMetadata {
        source: counter
            .source()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        status: counter.status(),
        lines_read: counter.lines_read(),
        generated_at: Utc::now(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Report {
        metadata,
        stats: counter.stats(),
        histogram: include_histogram.then(|| counter.histogram().clone()),
    }
}

/// Generate the plain text report.
pub fn generate_text_report(report: &Report) -> String {
    let stats = &report.stats;
    let mut output = String::new();

    output.push_str(&format!("Word count = {}\n", stats.word_count));
    output.push_str(&format!(
        "Average word length = {}\n",
        stats.average_length
    ));

    if let Some(ref histogram) = report.histogram {
        for (length, count) in histogram.iter() {
            output.push_str(&format!(
                "Number of words of length {} is {}\n",
                length, count
            ));
        }
    }

    output.push_str(&format!(
        "The most frequently occurring word length is {}, for word lengths of {}\n",
        stats.modal_count,
        stats.modal_lengths_string()
    ));

    output
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("# Word Statistics Report\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_summary_section(&report.stats));

    if let Some(ref histogram) = report.histogram {
        output.push_str(&generate_histogram_section(histogram, report.stats.modal_count));
    }

    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Source:** `{}`\n", metadata.source));
    if metadata.status == SourceStatus::NotFound {
        section.push_str("- **Status:** file not found\n");
    }
    section.push_str(&format!("- **Lines Read:** {}\n", metadata.lines_read));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push('\n');

    section
}

/// Generate the summary section.
fn generate_summary_section(stats: &AggregateStats) -> String {
    let mut section = String::new();

    section.push_str("## Summary\n\n");

    if stats.word_count == 0 {
        section.push_str("No words were found.\n\n");
        return section;
    }

    section.push_str("| Statistic | Value |\n");
    section.push_str("|:---|---:|\n");
    section.push_str(&format!("| Word count | {} |\n", stats.word_count));
    section.push_str(&format!("| Total characters | {} |\n", stats.total_length));
    section.push_str(&format!(
        "| Average word length | {} |\n",
        stats.average_length
    ));
    section.push_str(&format!(
        "| Most frequent length(s) | {} |\n",
        stats.modal_lengths_string()
    ));
    section.push_str(&format!(
        "| Occurrences of most frequent length | {} |\n",
        stats.modal_count
    ));
    section.push('\n');

    section
}

/// Generate the histogram section, marking modal rows.
fn generate_histogram_section(histogram: &LengthHistogram, modal_count: usize) -> String {
    if histogram.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Word Lengths\n\n");
    section.push_str("| Length | Words |\n");
    section.push_str("|---:|---:|\n");

    for (length, count) in histogram.iter() {
        if count == modal_count {
            section.push_str(&format!("| **{}** | **{}** |\n", length, count));
        } else {
            section.push_str(&format!("| {} | {} |\n", length, count));
        }
    }
    section.push('\n');

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    format!("---\n\n*Report generated by wordstats v{}*\n", env!("CARGO_PKG_VERSION"))
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_report(include_histogram: bool) -> Report {
        let mut counter = WordCounter::new();
        counter.process_lines(["Hello world & good morning. The date is 18/05/2016"]);
        build_report(&counter, include_histogram)
    }

    #[test]
    fn test_generate_text_report() {
        let report = create_test_report(true);
        let text = generate_text_report(&report);

        assert!(text.starts_with("Word count = 9\n"));
        assert!(text.contains("Average word length = 4.556\n"));
        assert!(text.contains("Number of words of length 1 is 1\n"));
        assert!(text.contains("Number of words of length 10 is 1\n"));
        assert!(text.contains(
            "The most frequently occurring word length is 2, for word lengths of 4 & 5\n"
        ));
    }

    #[test]
    fn test_text_report_histogram_ascending() {
        let report = create_test_report(true);
        let text = generate_text_report(&report);

        let two = text.find("of length 2 is").unwrap();
        let ten = text.find("of length 10 is").unwrap();
        assert!(two < ten);
    }

    #[test]
    fn test_text_report_without_histogram() {
        let report = create_test_report(false);
        let text = generate_text_report(&report);
        assert!(!text.contains("Number of words of length"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_text_report_for_empty_input() {
        let report = build_report(&WordCounter::new(), true);
        let text = generate_text_report(&report);
        assert!(text.contains("Word count = 0\n"));
        assert!(text.contains("Average word length = 0.000\n"));
        assert!(text.ends_with("word length is 0, for word lengths of \n"));
    }

    #[test]
    fn test_generate_markdown_report() {
        let report = create_test_report(true);
        let markdown = generate_markdown_report(&report);

        assert!(markdown.contains("# Word Statistics Report"));
        assert!(markdown.contains("## Metadata"));
        assert!(markdown.contains("## Summary"));
        assert!(markdown.contains("| Average word length | 4.556 |"));
        assert!(markdown.contains("## Word Lengths"));
        assert!(markdown.contains("| **4** | **2** |"));
        assert!(markdown.contains("| 7 | 1 |"));
    }

    #[test]
    fn test_markdown_report_empty_input() {
        let report = build_report(&WordCounter::new(), true);
        let markdown = generate_markdown_report(&report);
        assert!(markdown.contains("No words were found."));
        assert!(!markdown.contains("## Word Lengths"));
    }

    #[test]
    fn test_generate_json_report() {
        let report = create_test_report(true);
        let json = generate_json_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["stats"]["word_count"], 9);
        assert_eq!(value["stats"]["average_length"], 4.556);
        assert_eq!(value["stats"]["modal_count"], 2);
        assert_eq!(value["histogram"]["4"], 2);
        assert_eq!(value["metadata"]["status"], "processed");
    }

    #[test]
    fn test_json_report_omits_histogram() {
        let report = create_test_report(false);
        let json = generate_json_report(&report).unwrap();
        assert!(!json.contains("\"histogram\""));
    }
}
