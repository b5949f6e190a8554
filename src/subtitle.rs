use std::fmt;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::media;
use crate::timecode;

// @module: Subtitle entry data model

// @struct: Single timed subtitle entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtitleEntry {
    // @field: Opaque unique identifier
    pub id: Uuid,

    // @field: Start time in seconds
    pub start_time: f64,

    // @field: End time in seconds
    pub end_time: f64,

    // @field: Subtitle text, newlines preserved
    pub content: String,

    // @field: Path of the file this entry was parsed from
    pub source_file_path: PathBuf,

    // @field: 1-based order within the source file, parser-assigned
    pub sequence_number: usize,
}

impl SubtitleEntry {
    // @creates: Entry with a fresh id
    pub fn new<P: AsRef<Path>>(
        start_time: f64,
        end_time: f64,
        content: String,
        source_file_path: P,
        sequence_number: usize,
    ) -> Self {
        SubtitleEntry {
            id: Uuid::new_v4(),
            start_time,
            end_time,
            content,
            source_file_path: source_file_path.as_ref().to_path_buf(),
            sequence_number,
        }
    }

    /// Start time rendered as `HH:MM:SS`
    pub fn formatted_start_time(&self) -> String {
        timecode::format(self.start_time)
    }

    /// Source file name without its extension
    pub fn source_file_name(&self) -> String {
        self.source_file_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Sibling video file for this entry's source, if one exists on disk.
    ///
    /// Pure lookup, re-run on every call; the filesystem may have changed
    /// since the entry was parsed.
    pub fn associated_video_path(&self) -> Option<PathBuf> {
        media::find_sibling(&self.source_file_path, media::VIDEO_EXTENSIONS)
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}] #{} {}",
            self.formatted_start_time(),
            self.sequence_number,
            self.content
        )
    }
}
