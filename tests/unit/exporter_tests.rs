/*!
 * Tests for the Markdown report exporter
 */

use vidsearch::exporter::{self, ExportConfiguration};
use vidsearch::search::SearchResult;
use vidsearch::subtitle::SubtitleEntry;
use crate::common;

fn bullet_count(report: &str) -> usize {
    report.lines().filter(|line| line.starts_with("- **[")).count()
}

/// Build a corpus of entries split across two placeholder videos
fn two_video_corpus(count_a: usize, count_b: usize) -> Vec<SubtitleEntry> {
    let mut corpus = Vec::new();
    for i in 0..count_a {
        corpus.push(common::make_entry(
            i as f64,
            &format!("alpha line {}", i),
            "/nonexistent/videoA.srt",
        ));
    }
    for i in 0..count_b {
        corpus.push(common::make_entry(
            i as f64,
            &format!("beta line {}", i),
            "/nonexistent/videoB.srt",
        ));
    }
    corpus
}

/// Test the bounded export from the reference scenario: 25 results across
/// 2 videos with max 10 and interval 2 emit exactly 10 lines
#[test]
fn test_render_withCapAndInterval_shouldEmitExactlyTen() {
    let corpus = two_video_corpus(13, 12);
    let results: Vec<SearchResult> =
        corpus.iter().map(|entry| SearchResult::new(entry, "line")).collect();

    let config = ExportConfiguration::new(10, 2, "line");
    let report = exporter::render(&results, &config);

    assert_eq!(bullet_count(&report), 10);
}

/// Test that every entry is emitted with no sampling configured
#[test]
fn test_render_withIntervalOne_shouldEmitEverything() {
    let corpus = two_video_corpus(3, 2);
    let results: Vec<SearchResult> =
        corpus.iter().map(|entry| SearchResult::new(entry, "line")).collect();

    let config = ExportConfiguration::new(100, 1, "line");
    let report = exporter::render(&results, &config);

    assert_eq!(bullet_count(&report), 5);
}

/// Test group ordering by video file name
#[test]
fn test_render_withTwoVideos_shouldOrderGroupsLexicographically() {
    let corpus = two_video_corpus(1, 1);
    let results: Vec<SearchResult> =
        corpus.iter().map(|entry| SearchResult::new(entry, "line")).collect();

    let config = ExportConfiguration::with_keyword("line");
    let report = exporter::render(&results, &config);

    let pos_a = report.find("## Grouped by: videoA.mp4").expect("group A missing");
    let pos_b = report.find("## Grouped by: videoB.mp4").expect("group B missing");
    assert!(pos_a < pos_b);
}

/// Test that entries inside a group are sorted by start time
#[test]
fn test_render_withUnsortedResults_shouldSortGroupByStartTime() {
    let late = common::make_entry(30.0, "late entry", "/nonexistent/videoA.srt");
    let early = common::make_entry(5.0, "early entry", "/nonexistent/videoA.srt");
    let results = vec![
        SearchResult::new(&late, "entry"),
        SearchResult::new(&early, "entry"),
    ];

    let config = ExportConfiguration::with_keyword("entry");
    let report = exporter::render(&results, &config);

    let pos_early = report.find("early entry").unwrap();
    let pos_late = report.find("late entry").unwrap();
    assert!(pos_early < pos_late);
}

/// Test bullet formatting with timestamp and collapsed newlines
#[test]
fn test_render_withMultilineContent_shouldCollapseToOneLine() {
    let entry = common::make_entry(90.0, "first line\nsecond line", "/nonexistent/videoA.srt");
    let results = vec![SearchResult::new(&entry, "line")];

    let config = ExportConfiguration::with_keyword("line");
    let report = exporter::render(&results, &config);

    assert!(report.contains("- **[00:01:30]** first line second line"));
}

/// Test the report header fields
#[test]
fn test_render_withResults_shouldIncludeHeaderBlock() {
    let entry = common::make_entry(1.0, "content", "/nonexistent/videoA.srt");
    let results = vec![SearchResult::new(&entry, "content")];

    let config = ExportConfiguration::new(50, 3, "content");
    let report = exporter::render(&results, &config);

    assert!(report.starts_with("# VidSearch export: search keyword \"content\""));
    assert!(report.contains("Total results: 1"));
    assert!(report.contains("Export config: max results 50, interval 3"));
    assert!(report.contains("Generated: "));
    assert!(report.trim_end().ends_with("*Generated by VidSearch*"));
}

/// Test that empty results yield a minimal report rather than an error
#[test]
fn test_render_withNoResults_shouldProduceMinimalReport() {
    let config = ExportConfiguration::with_keyword("nothing");
    let report = exporter::render(&[], &config);

    assert_eq!(bullet_count(&report), 0);
    assert!(report.contains("Total results: 0"));
    assert!(report.contains("*Generated by VidSearch*"));
}

/// Test that zero limits are clamped instead of looping or panicking
#[test]
fn test_render_withZeroLimits_shouldClampToOne() {
    let entry = common::make_entry(1.0, "content", "/nonexistent/videoA.srt");
    let results = vec![SearchResult::new(&entry, "content")];

    let config = ExportConfiguration::new(0, 0, "content");
    let report = exporter::render(&results, &config);

    assert_eq!(bullet_count(&report), 1);
}
