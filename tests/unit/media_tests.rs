/*!
 * Tests for sibling-file media association
 */

use anyhow::Result;
use vidsearch::media;
use crate::common;

/// Test that the first existing extension in priority order wins
#[test]
fn test_find_sibling_withTwoCandidates_shouldReturnHighestPriority() -> Result<()> {
    let dir = common::create_temp_dir()?;
    common::create_test_file(dir.path(), "lecture.mkv", "")?;
    common::create_test_file(dir.path(), "lecture.mp4", "")?;
    let subtitle = common::create_test_srt(dir.path(), "lecture.srt")?;

    // mp4 precedes mkv in the priority list
    let video = media::find_sibling(&subtitle, media::VIDEO_EXTENSIONS);
    assert_eq!(video, Some(dir.path().join("lecture.mp4")));
    Ok(())
}

/// Test the miss case
#[test]
fn test_find_sibling_withNoCandidates_shouldReturnNone() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let subtitle = common::create_test_srt(dir.path(), "orphan.srt")?;

    assert!(media::find_sibling(&subtitle, media::VIDEO_EXTENSIONS).is_none());
    Ok(())
}

/// Test collecting all existing siblings in priority order
#[test]
fn test_find_siblings_withSeveralSubtitles_shouldReturnAllInOrder() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let video = common::create_test_file(dir.path(), "movie.mp4", "")?;
    common::create_test_file(dir.path(), "movie.vtt", "WEBVTT\n")?;
    common::create_test_srt(dir.path(), "movie.srt")?;

    let subtitles = media::find_siblings(&video, media::SUBTITLE_EXTENSIONS);
    assert_eq!(
        subtitles,
        vec![dir.path().join("movie.srt"), dir.path().join("movie.vtt")]
    );
    Ok(())
}

/// Test the symmetric lookup from video to subtitle
#[test]
fn test_associated_subtitle_withSiblingSrt_shouldFindIt() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let video = common::create_test_file(dir.path(), "clip.mp4", "")?;
    common::create_test_srt(dir.path(), "clip.srt")?;

    assert_eq!(media::associated_subtitle(&video), Some(dir.path().join("clip.srt")));
    Ok(())
}

/// Test the note lookup used for video annotations
#[test]
fn test_associated_note_withSiblingMarkdown_shouldFindIt() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let video = common::create_test_file(dir.path(), "talk.mp4", "")?;
    common::create_test_file(dir.path(), "talk.md", "# Notes\n")?;

    assert_eq!(media::associated_note(&video), Some(dir.path().join("talk.md")));
    Ok(())
}

/// Test the entry-level association helper
#[test]
fn test_entry_associated_video_withSibling_shouldResolve() -> Result<()> {
    let dir = common::create_temp_dir()?;
    common::create_test_file(dir.path(), "episode.mkv", "")?;
    let subtitle = common::create_test_srt(dir.path(), "episode.srt")?;

    let entry = common::make_entry(1.0, "content", subtitle.to_str().unwrap());
    assert_eq!(entry.associated_video_path(), Some(dir.path().join("episode.mkv")));
    Ok(())
}
