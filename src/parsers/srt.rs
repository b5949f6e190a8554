use std::path::Path;
use log::{debug, warn};

use crate::errors::SubtitleError;
use crate::subtitle::SubtitleEntry;
use crate::timecode;
use super::{encoding, sort_by_start_time, SubtitleParser};

// @module: SRT (SubRip) subtitle parser

/// Parser for SubRip `.srt` files
pub struct SrtParser;

impl SubtitleParser for SrtParser {
    fn extensions(&self) -> &'static [&'static str] {
        &["srt"]
    }

    fn parse(&self, path: &Path) -> Result<Vec<SubtitleEntry>, SubtitleError> {
        let content = encoding::read_subtitle_text(path)?;
        parse_content(&content, path)
    }
}

/// Parse SRT content into entries sorted by start time
pub fn parse_content(content: &str, source: &Path) -> Result<Vec<SubtitleEntry>, SubtitleError> {
    let mut entries = Vec::new();

    // Split on blank lines. Try both line-ending conventions and keep the
    // split that produced more blocks, which handles mixed-ending files.
    let crlf_blocks: Vec<&str> = content.split("\r\n\r\n").collect();
    let lf_blocks: Vec<&str> = content.split("\n\n").collect();
    let raw_blocks = if non_empty_count(&crlf_blocks) > non_empty_count(&lf_blocks) {
        crlf_blocks
    } else {
        lf_blocks
    };

    for block in raw_blocks {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        match parse_block(block, source) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Skipping malformed SRT block in {:?}: {}", source, e),
        }
    }

    if entries.is_empty() {
        return Err(SubtitleError::InvalidFormat(format!(
            "No parseable SRT blocks in {:?}",
            source
        )));
    }

    debug!("Parsed {} SRT entries from {:?}", entries.len(), source);
    sort_by_start_time(&mut entries);
    Ok(entries)
}

fn non_empty_count(blocks: &[&str]) -> usize {
    blocks.iter().filter(|b| !b.trim().is_empty()).count()
}

/// Parse one SRT block: sequence number, time range, content lines
fn parse_block(block: &str, source: &Path) -> Result<SubtitleEntry, SubtitleError> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 3 {
        return Err(SubtitleError::InvalidFormat(format!(
            "Block has {} lines, expected at least 3",
            lines.len()
        )));
    }

    // First line: sequence number. A BOM can precede it in the very first block.
    let sequence_number: usize = lines[0]
        .trim_start_matches('\u{FEFF}')
        .parse()
        .map_err(|_| SubtitleError::InvalidFormat(format!("Bad sequence number: {}", lines[0])))?;

    // Second line: time range
    let (start_time, end_time) = parse_time_range(lines[1])?;

    // Remaining lines: content
    let content = lines[2..].join("\n");

    Ok(SubtitleEntry::new(
        start_time,
        end_time,
        content,
        source,
        sequence_number,
    ))
}

/// Parse a `start --> end` time range line
fn parse_time_range(line: &str) -> Result<(f64, f64), SubtitleError> {
    let parts: Vec<&str> = line.split(" --> ").collect();
    if parts.len() != 2 {
        return Err(SubtitleError::InvalidFormat(format!(
            "Bad time range line: {}",
            line
        )));
    }

    let start = timecode::parse(parts[0])?;
    let end = timecode::parse(parts[1])?;
    Ok((start, end))
}
