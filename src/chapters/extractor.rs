use super::patterns::{chapter_block_regex, title_block_regex};
use super::types::{ChapterFormat, ChapterOptions, ChapterRecord};
use crate::errors::{ChapterError, VttChapterResult};
use crate::timestamps::parse_timestamp;
use log::{debug, info, warn};
use regex::{Captures, Regex};

/// Extract chapters from a transcript laid out as `format` describes.
///
/// Fails fast: the first malformed timestamp aborts the whole call and no
/// partial list is returned.
pub fn extract_chapters(
    transcript: &str,
    format: ChapterFormat,
) -> VttChapterResult<Vec<ChapterRecord>> {
    info!(
        "Chapter extraction ({} layout, {} bytes)...",
        format,
        transcript.len()
    );

    let chapters = match format {
        ChapterFormat::Titles => extract_from_titles(transcript)?,
        ChapterFormat::Blocks => extract_from_chapter_blocks(transcript)?,
    };

    info!("Extracted {} chapters", chapters.len());
    Ok(chapters)
}

pub fn extract_chapters_with_options(
    transcript: &str,
    options: &ChapterOptions,
) -> VttChapterResult<Vec<ChapterRecord>> {
    extract_chapters(transcript, options.format)
}

/// Chapters whose title line sits directly above the timing line.
///
/// ```text
/// Chapter 1
/// 00:00:00.000 --> 00:00:05.000
/// ```
pub fn extract_from_titles(transcript: &str) -> VttChapterResult<Vec<ChapterRecord>> {
    collect_chapters(title_block_regex(), transcript)
}

/// Chapters whose title line sits directly below the timing line, as in a
/// dedicated WebVTT chapter file.
///
/// ```text
/// 00:00:00.000 --> 00:00:05.000
/// Chapter 1
/// ```
pub fn extract_from_chapter_blocks(transcript: &str) -> VttChapterResult<Vec<ChapterRecord>> {
    collect_chapters(chapter_block_regex(), transcript)
}

fn collect_chapters(pattern: &Regex, transcript: &str) -> VttChapterResult<Vec<ChapterRecord>> {
    let transcript = transcript.trim_start_matches('\u{FEFF}');
    let mut chapters = Vec::new();

    for caps in pattern.captures_iter(transcript) {
        let text = group(&caps, "text");
        let start = parse_timestamp(group(&caps, "start"))?;
        let end = parse_timestamp(group(&caps, "end"))?;

        if end < start {
            warn!(
                "Chapter '{}' ends ({}s) before it starts ({}s)",
                text, end, start
            );
        }
        debug!(
            "  Chapter #{}: '{}' [{}s - {}s]",
            chapters.len() + 1,
            text,
            start,
            end
        );

        chapters.push(ChapterRecord::new(text, start, end));
    }

    if chapters.is_empty() {
        warn!("No chapter blocks found in transcript");
        return Err(ChapterError::no_chapters_found().into());
    }

    Ok(chapters)
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}
