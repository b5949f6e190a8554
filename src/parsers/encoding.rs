use std::path::Path;
use log::debug;

use crate::errors::SubtitleError;
use crate::file_utils::FileManager;

// @module: Shared encoding-fallback decode for subtitle files

/// Read a subtitle file and decode it to a string.
///
/// Decode order: UTF-8 first (self-validating, rejects invalid byte
/// sequences), then GB18030 for legacy CJK files, then Latin-1 as the
/// byte-preserving last resort.
pub fn read_subtitle_text(path: &Path) -> Result<String, SubtitleError> {
    if !FileManager::file_exists(path) {
        return Err(SubtitleError::FileNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;

    decode_bytes(&bytes, path)
}

/// Decode raw subtitle bytes using the fallback ladder
pub fn decode_bytes(bytes: &[u8], path: &Path) -> Result<String, SubtitleError> {
    if let Ok(content) = std::str::from_utf8(bytes) {
        return Ok(content.to_string());
    }

    let (content, _, had_errors) = encoding_rs::GB18030.decode(bytes);
    if !had_errors {
        debug!("Decoded {:?} as GB18030", path);
        return Ok(content.into_owned());
    }

    // Latin-1 maps every byte to a code point, so this cannot fail
    let (content, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
    if !had_errors {
        debug!("Decoded {:?} as Latin-1", path);
        return Ok(content.into_owned());
    }

    Err(SubtitleError::EncodingError(path.to_path_buf()))
}
