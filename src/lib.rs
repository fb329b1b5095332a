pub mod timestamps;
pub use timestamps::{format_timestamp, parse_timestamp};

pub mod chapters;
pub use chapters::{
    extract_chapters, extract_chapters_with_options, extract_from_chapter_blocks,
    extract_from_titles, ChapterFormat, ChapterOptions, ChapterRecord,
};

pub mod errors;
pub use errors::{ChapterError, FormatError, TimestampError, VttChapterError, VttChapterResult};
