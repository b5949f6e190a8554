use std::path::{Path, PathBuf};
use log::trace;

use crate::file_utils::FileManager;

// @module: Media association lookup between videos, subtitles and notes

/// Video extensions probed when resolving a subtitle or note to its video,
/// in priority order
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "avi", "m4v", "wmv", "flv"];

/// Subtitle extensions probed when resolving a video to its subtitles,
/// in priority order
pub const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "ass", "ssa", "vtt", "webvtt"];

/// Note extensions probed when resolving a video to its notes,
/// in priority order
pub const NOTE_EXTENSIONS: &[&str] = &["md", "txt", "markdown"];

/// Find the first sibling of `path` (same directory, same base name) that
/// exists with one of the candidate extensions.
///
/// Pure filesystem predicate with no caching; callers must re-invoke after
/// any filesystem change.
pub fn find_sibling<P: AsRef<Path>>(path: P, extensions: &[&str]) -> Option<PathBuf> {
    let path = path.as_ref();

    for ext in extensions {
        let candidate = path.with_extension(ext);
        trace!("Probing sibling candidate: {:?}", candidate);
        if FileManager::file_exists(&candidate) {
            return Some(candidate);
        }
    }

    None
}

/// Find all existing siblings of `path` with the candidate extensions,
/// in priority order.
pub fn find_siblings<P: AsRef<Path>>(path: P, extensions: &[&str]) -> Vec<PathBuf> {
    let path = path.as_ref();

    extensions
        .iter()
        .map(|ext| path.with_extension(ext))
        .filter(|candidate| FileManager::file_exists(candidate))
        .collect()
}

/// Sibling video file for a subtitle or note file
pub fn associated_video<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    find_sibling(path, VIDEO_EXTENSIONS)
}

/// First sibling subtitle file for a video file
pub fn associated_subtitle<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    find_sibling(path, SUBTITLE_EXTENSIONS)
}

/// Sibling note file for a video file
pub fn associated_note<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    find_sibling(path, NOTE_EXTENSIONS)
}
