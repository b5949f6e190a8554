/*!
 * Markdown report exporter.
 *
 * Groups search results by their resolved video file, applies the count cap
 * and keep-every-Nth interval, and renders a deterministic text report.
 * Writing the report to disk is the caller's responsibility.
 */

use std::cmp::Ordering;
use std::collections::BTreeMap;
use chrono::Local;
use log::debug;

use crate::search::SearchResult;

// @struct: Export limits and labeling
#[derive(Debug, Clone)]
pub struct ExportConfiguration {
    // @field: Total cap on emitted entries across the whole report
    pub max_results: usize,

    // @field: Keep-every-Nth-result sampling, 1 keeps everything
    pub interval: usize,

    // @field: Search keyword, used in the report title only
    pub search_keyword: String,
}

impl ExportConfiguration {
    // @creates: Configuration with explicit limits
    pub fn new(max_results: usize, interval: usize, search_keyword: &str) -> Self {
        ExportConfiguration {
            max_results,
            interval,
            search_keyword: search_keyword.to_string(),
        }
    }

    // @creates: Configuration with the default limits (100 results, keep all)
    pub fn with_keyword(search_keyword: &str) -> Self {
        Self::new(100, 1, search_keyword)
    }
}

/// Render search results as a Markdown report.
///
/// Groups are ordered by video file name, entries within a group by start
/// time. Two counters walk the groups: every entry seen advances
/// `processed`, and an entry is emitted only when `processed` is a multiple
/// of the interval; rendering stops once `exported` reaches the cap.
pub fn render(results: &[SearchResult], config: &ExportConfiguration) -> String {
    let max_results = config.max_results.max(1);
    let interval = config.interval.max(1);

    let mut content = String::new();
    content.push_str(&format!(
        "# VidSearch export: search keyword \"{}\"\n\n",
        config.search_keyword
    ));
    content.push_str(&format!(
        "Generated: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    content.push_str(&format!("Total results: {}\n", results.len()));
    content.push_str(&format!(
        "Export config: max results {}, interval {}\n\n",
        max_results, interval
    ));
    content.push_str("---\n\n");

    // Group by resolved video name; BTreeMap keeps groups sorted
    let mut groups: BTreeMap<String, Vec<&SearchResult>> = BTreeMap::new();
    for result in results {
        groups.entry(result.video_file_name()).or_default().push(result);
    }

    let mut processed: usize = 0;
    let mut exported: usize = 0;

    'groups: for (video_file_name, mut group) in groups {
        if exported >= max_results {
            break;
        }

        content.push_str(&format!("## Grouped by: {}\n\n", video_file_name));

        group.sort_by(|a, b| {
            a.entry
                .start_time
                .partial_cmp(&b.entry.start_time)
                .unwrap_or(Ordering::Equal)
        });

        for result in group {
            if processed % interval == 0 {
                if exported >= max_results {
                    content.push_str("\n---\n\n");
                    break 'groups;
                }

                let clean = result.entry.content.replace('\n', " ");
                content.push_str(&format!(
                    "- **[{}]** {}\n",
                    result.formatted_time(),
                    clean.trim()
                ));
                exported += 1;
            }
            processed += 1;
        }

        content.push_str("\n---\n\n");
    }

    debug!("Rendered report: {} of {} result(s) emitted", exported, results.len());

    content.push_str("\n*Generated by VidSearch*\n");
    content
}
