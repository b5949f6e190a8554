use crate::errors::SubtitleError;

// @module: Timecode parsing and display formatting

/// Parse a subtitle timecode string into seconds.
///
/// Accepts the clock layouts used across SRT, ASS and WebVTT:
/// `HH:MM:SS,mmm` (comma decimal), `HH:MM:SS.mmm`, and the short
/// `MM:SS.mmm` form. The comma decimal separator is normalized to a
/// period before parsing.
pub fn parse(timecode: &str) -> Result<f64, SubtitleError> {
    let normalized = timecode.trim().replace(',', ".");
    let fields: Vec<&str> = normalized.split(':').collect();

    let (hours, minutes, seconds) = match fields.len() {
        2 => ("0", fields[0], fields[1]),
        3 => (fields[0], fields[1], fields[2]),
        _ => {
            return Err(SubtitleError::InvalidFormat(format!(
                "Unrecognized timecode layout: {}",
                timecode
            )))
        }
    };

    let hours: f64 = hours
        .parse()
        .map_err(|_| SubtitleError::InvalidFormat(format!("Bad hours field in: {}", timecode)))?;
    let minutes: f64 = minutes
        .parse()
        .map_err(|_| SubtitleError::InvalidFormat(format!("Bad minutes field in: {}", timecode)))?;
    let seconds: f64 = seconds
        .parse()
        .map_err(|_| SubtitleError::InvalidFormat(format!("Bad seconds field in: {}", timecode)))?;

    Ok(hours * 3600.0 + minutes * 60.0 + seconds)
}

/// Format a seconds value as `HH:MM:SS` for display.
///
/// Sub-second precision is dropped here; it stays intact on the entry itself.
pub fn format(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
