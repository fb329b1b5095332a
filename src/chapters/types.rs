use crate::errors::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single chapter heading with its time range in whole seconds
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChapterRecord {
    pub text: String,
    pub start: u64,
    pub end: u64,
}

impl ChapterRecord {
    pub fn new(text: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Which side of the timing line carries the chapter title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterFormat {
    /// Title line, then timing line (titles embedded in a transcript)
    Titles,
    /// Timing line, then title line (dedicated chapter file)
    #[default]
    #[serde(alias = "chapters")]
    Blocks,
}

impl ChapterFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ChapterFormat::Titles => "titles",
            ChapterFormat::Blocks => "blocks",
        }
    }
}

impl fmt::Display for ChapterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChapterFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "titles" => Ok(ChapterFormat::Titles),
            "blocks" | "chapters" => Ok(ChapterFormat::Blocks),
            other => Err(FormatError::new(format!(
                "Unknown chapter format: '{}' (expected 'titles' or 'blocks')",
                other
            ))),
        }
    }
}

/// Caller options for chapter extraction; missing keys take their defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChapterOptions {
    pub format: ChapterFormat,
}
