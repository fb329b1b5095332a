mod extractor;
mod patterns;
mod types;

pub use extractor::{
    extract_chapters, extract_chapters_with_options, extract_from_chapter_blocks,
    extract_from_titles,
};
pub use types::{ChapterFormat, ChapterOptions, ChapterRecord};
