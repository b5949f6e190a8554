use std::path::Path;
use log::{debug, warn};

use crate::errors::SubtitleError;
use crate::subtitle::SubtitleEntry;
use crate::timecode;
use super::{encoding, sort_by_start_time, SubtitleParser};

// @module: WebVTT subtitle parser

/// Parser for WebVTT `.vtt` / `.webvtt` files
pub struct VttParser;

impl SubtitleParser for VttParser {
    fn extensions(&self) -> &'static [&'static str] {
        &["vtt", "webvtt"]
    }

    fn parse(&self, path: &Path) -> Result<Vec<SubtitleEntry>, SubtitleError> {
        let content = encoding::read_subtitle_text(path)?;
        parse_content(&content, path)
    }
}

/// Parse WebVTT content into entries sorted by start time
pub fn parse_content(content: &str, source: &Path) -> Result<Vec<SubtitleEntry>, SubtitleError> {
    let clean = content.replace('\u{FEFF}', "").replace("\r\n", "\n");

    // The header line is mandatory
    if !clean.lines().next().is_some_and(|line| line.starts_with("WEBVTT")) {
        return Err(SubtitleError::InvalidFormat(format!(
            "Missing WEBVTT header in {:?}",
            source
        )));
    }

    let mut entries = Vec::new();
    let mut sequence_number = 1;

    let blocks = clean
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty() && !block.starts_with("WEBVTT"));

    for block in blocks {
        match parse_cue_block(block, source, sequence_number) {
            Ok(entry) => {
                entries.push(entry);
                sequence_number += 1;
            }
            Err(e) => warn!("Skipping VTT cue block in {:?}: {}", source, e),
        }
    }

    if entries.is_empty() {
        return Err(SubtitleError::InvalidFormat(format!(
            "No parseable cue blocks in {:?}",
            source
        )));
    }

    debug!("Parsed {} VTT cues from {:?}", entries.len(), source);
    sort_by_start_time(&mut entries);
    Ok(entries)
}

/// Parse one cue block: optional cue identifier, timing line, content lines
fn parse_cue_block(
    block: &str,
    source: &Path,
    sequence_number: usize,
) -> Result<SubtitleEntry, SubtitleError> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(SubtitleError::InvalidFormat(format!(
            "Cue block has {} lines, expected at least 2",
            lines.len()
        )));
    }

    // When the first line carries the arrow it is the timing line; otherwise
    // it is a cue identifier and the timing line follows.
    let (timing_index, text_start) = if lines[0].contains("-->") {
        (0, 1)
    } else {
        if lines.len() < 3 {
            return Err(SubtitleError::InvalidFormat(
                "Identified cue block has no content lines".to_string(),
            ));
        }
        (1, 2)
    };

    let (start_time, end_time) = parse_time_range(lines[timing_index])?;
    let content = lines[text_start..].join("\n");

    Ok(SubtitleEntry::new(
        start_time,
        end_time,
        content,
        source,
        sequence_number,
    ))
}

/// Parse a `start --> end` timing line with 2- or 3-field clocks
fn parse_time_range(line: &str) -> Result<(f64, f64), SubtitleError> {
    let parts: Vec<&str> = line.split(" --> ").collect();
    if parts.len() != 2 {
        return Err(SubtitleError::InvalidFormat(format!(
            "Bad cue timing line: {}",
            line
        )));
    }

    // Cue settings may trail the end time; keep only the clock itself
    let end = parts[1].split_whitespace().next().unwrap_or(parts[1]);

    let start_time = timecode::parse(parts[0])?;
    let end_time = timecode::parse(end)?;
    Ok((start_time, end_time))
}
