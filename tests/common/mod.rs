/*!
 * Common test utilities for the vidsearch test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;
use vidsearch::subtitle::SubtitleEntry;

/// Initializes logging for tests that want parser diagnostics visible
#[allow(dead_code)]
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample SRT subtitle file for testing
pub fn create_test_srt(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SRT_SAMPLE)
}

/// Builds an in-memory entry for search and export tests
pub fn make_entry(start: f64, content: &str, source: &str) -> SubtitleEntry {
    SubtitleEntry::new(start, start + 2.0, content.to_string(), source, 1)
}

/// A well-formed three-entry SRT sample
pub const SRT_SAMPLE: &str = "1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
";

/// A well-formed two-event ASS sample with a reordered Format header
pub const ASS_SAMPLE: &str = "[Script Info]
Title: Test script

[V4+ Styles]
Format: Name, Fontname
Style: Default,Arial

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,0:00:04.00,Default,,0,0,0,,First line
Dialogue: 0,0:00:05.50,0:00:08.00,Default,,0,0,0,,{\\pos(120,30)}Second, with commas, kept
";

/// A well-formed WebVTT sample with one identified cue
pub const VTT_SAMPLE: &str = "WEBVTT

00:00:01.000 --> 00:00:04.000
First cue text

intro
00:01.500 --> 00:03.000
Short-clock cue
";
