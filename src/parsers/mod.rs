/*!
 * Subtitle format parsers.
 *
 * This module contains one parser per supported subtitle format:
 * - SRT: SubRip blocks separated by blank lines
 * - ASS/SSA: Advanced SubStation Alpha event sections
 * - VTT: WebVTT cue blocks
 *
 * All parsers share the same encoding-fallback policy (UTF-8, then GB18030,
 * then Latin-1) and return entries sorted by start time.
 */

use std::path::Path;
use log::debug;

use crate::errors::SubtitleError;
use crate::subtitle::SubtitleEntry;

mod encoding;
pub mod srt;
pub mod ass;
pub mod vtt;

pub use srt::SrtParser;
pub use ass::AssParser;
pub use vtt::VttParser;

/// Common contract for all subtitle format parsers
pub trait SubtitleParser: Send + Sync {
    /// File extensions this parser handles, lowercase
    fn extensions(&self) -> &'static [&'static str];

    /// Whether this parser handles the file, judged by extension alone
    fn can_parse(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy().to_lowercase();
                self.extensions().contains(&ext.as_str())
            }
            None => false,
        }
    }

    /// Parse the file into entries sorted ascending by start time
    fn parse(&self, path: &Path) -> Result<Vec<SubtitleEntry>, SubtitleError>;
}

/// Ordered list of the supported format parsers
pub struct ParserRegistry {
    parsers: Vec<Box<dyn SubtitleParser>>,
}

impl ParserRegistry {
    // @creates: Registry with the fixed SRT, ASS, VTT parser set
    pub fn new() -> Self {
        ParserRegistry {
            parsers: vec![
                Box::new(SrtParser),
                Box::new(AssParser),
                Box::new(VttParser),
            ],
        }
    }

    /// Extensions handled by any registered parser
    pub fn supported_extensions(&self) -> Vec<&'static str> {
        self.parsers
            .iter()
            .flat_map(|parser| parser.extensions().iter().copied())
            .collect()
    }

    /// First parser whose extension set contains the file's extension
    pub fn resolve(&self, path: &Path) -> Option<&dyn SubtitleParser> {
        self.parsers
            .iter()
            .find(|parser| parser.can_parse(path))
            .map(|parser| parser.as_ref())
    }

    /// Resolve a parser for the file and delegate to it
    pub fn parse(&self, path: &Path) -> Result<Vec<SubtitleEntry>, SubtitleError> {
        debug!("Resolving parser for: {:?}", path);

        let parser = self.resolve(path).ok_or_else(|| {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_string())
                .unwrap_or_default();
            SubtitleError::UnsupportedFormat(ext)
        })?;

        parser.parse(path)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort entries ascending by start time, keeping relative order for ties
pub(crate) fn sort_by_start_time(entries: &mut [SubtitleEntry]) {
    entries.sort_by(|a, b| {
        a.start_time
            .partial_cmp(&b.start_time)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
