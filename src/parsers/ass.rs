use std::path::Path;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;
use crate::subtitle::SubtitleEntry;
use crate::timecode;
use super::{encoding, sort_by_start_time, SubtitleParser};

// @module: ASS/SSA (SubStation Alpha) subtitle parser

// @const: Style override tag pattern, e.g. {\pos(435.8,46.9)}
static OVERRIDE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// Parser for SubStation Alpha `.ass` / `.ssa` files
pub struct AssParser;

impl SubtitleParser for AssParser {
    fn extensions(&self) -> &'static [&'static str] {
        &["ass", "ssa"]
    }

    fn parse(&self, path: &Path) -> Result<Vec<SubtitleEntry>, SubtitleError> {
        let content = encoding::read_subtitle_text(path)?;
        parse_content(&content, path)
    }
}

/// Parse ASS content into entries sorted by start time.
///
/// Line-oriented state machine: only the `[Events]` section is processed.
/// The `Format:` line inside it declares the column order that subsequent
/// `Dialogue:` lines follow.
pub fn parse_content(content: &str, source: &Path) -> Result<Vec<SubtitleEntry>, SubtitleError> {
    let mut entries = Vec::new();
    let mut sequence_number = 1;
    let mut in_events = false;
    let mut format_fields: Vec<String> = Vec::new();

    for line in content.lines() {
        let line = line.trim();

        if line == "[Events]" {
            in_events = true;
            continue;
        }
        if line.starts_with('[') {
            in_events = false;
            continue;
        }
        if !in_events {
            continue;
        }

        if let Some(format_line) = line.strip_prefix("Format:") {
            format_fields = format_line
                .split(',')
                .map(|field| field.trim().to_string())
                .collect();
            continue;
        }

        if let Some(dialogue_line) = line.strip_prefix("Dialogue:") {
            match parse_dialogue(dialogue_line.trim(), &format_fields, source, sequence_number) {
                Ok(entry) => {
                    entries.push(entry);
                    sequence_number += 1;
                }
                Err(e) => warn!("Skipping Dialogue line in {:?}: {}", source, e),
            }
        }
    }

    if entries.is_empty() {
        return Err(SubtitleError::InvalidFormat(format!(
            "No parseable Dialogue lines in {:?}",
            source
        )));
    }

    debug!("Parsed {} ASS entries from {:?}", entries.len(), source);
    sort_by_start_time(&mut entries);
    Ok(entries)
}

/// Parse one `Dialogue:` line against the declared Format columns
fn parse_dialogue(
    line: &str,
    format_fields: &[String],
    source: &Path,
    sequence_number: usize,
) -> Result<SubtitleEntry, SubtitleError> {
    if format_fields.is_empty() {
        return Err(SubtitleError::InvalidFormat(
            "Dialogue line before any Format declaration".to_string(),
        ));
    }

    let fields = split_dialogue_fields(line, format_fields.len());
    if fields.len() < format_fields.len() {
        return Err(SubtitleError::InvalidFormat(format!(
            "Dialogue has {} fields, Format declares {}",
            fields.len(),
            format_fields.len()
        )));
    }

    // Column positions come from the Format header, not fixed indices
    let start_index = field_index(format_fields, "Start")?;
    let end_index = field_index(format_fields, "End")?;
    let text_index = field_index(format_fields, "Text")?;

    let start_time = timecode::parse(&fields[start_index])?;
    let end_time = timecode::parse(&fields[end_index])?;
    let content = clean_text(&fields[text_index]);

    Ok(SubtitleEntry::new(
        start_time,
        end_time,
        content,
        source,
        sequence_number,
    ))
}

fn field_index(format_fields: &[String], name: &str) -> Result<usize, SubtitleError> {
    format_fields
        .iter()
        .position(|field| field == name)
        .ok_or_else(|| {
            SubtitleError::InvalidFormat(format!("Format declares no '{}' column", name))
        })
}

/// Split a Dialogue line on commas, except commas inside `{...}` override
/// braces, and only for the first N-1 expected columns so the trailing Text
/// field absorbs all remaining content including any commas.
fn split_dialogue_fields(line: &str, expected_fields: usize) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut brace_depth: i32 = 0;

    for ch in line.chars() {
        match ch {
            '{' => {
                brace_depth += 1;
                current.push(ch);
            }
            '}' => {
                brace_depth -= 1;
                current.push(ch);
            }
            ',' if brace_depth == 0 && fields.len() < expected_fields - 1 => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Strip style override tags and translate ASS escapes to plain text
fn clean_text(text: &str) -> String {
    let cleaned = OVERRIDE_TAG_REGEX.replace_all(text, "");
    cleaned
        .replace("\\N", "\n")
        .replace("\\n", "\n")
        .replace("\\h", " ")
        .trim()
        .to_string()
}
