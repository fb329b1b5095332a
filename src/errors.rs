use std::error::Error;
use std::fmt;

/// Enumeration of all possible errors that can occur while extracting chapters
#[derive(Debug, Clone, PartialEq)]
pub enum VttChapterError {
    Timestamp(TimestampError),
    Chapters(ChapterError),
    Format(FormatError),
}

/// A timestamp did not match `hh:mm:ss.mmm` or `mm:ss.mmm`
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampError {
    pub timestamp: String,
    pub message: String,
}

impl TimestampError {
    /// Create a new error for the offending timestamp text.
    pub fn new(timestamp: impl Into<String>) -> Self {
        let timestamp = timestamp.into();
        Self {
            message: format!("Badly formatted timestamp: {}", timestamp),
            timestamp,
        }
    }
}

/// Chapter extraction specific errors
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterError {
    pub message: String,
}

impl ChapterError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The transcript held no block in the requested layout.
    pub fn no_chapters_found() -> Self {
        Self::new("Transcript does not contain properly formatted chapters")
    }
}

/// Unrecognized chapter format name
#[derive(Debug, Clone, PartialEq)]
pub struct FormatError {
    pub message: String,
}

impl FormatError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl VttChapterError {
    pub fn is_malformed_timestamp(&self) -> bool {
        matches!(self, VttChapterError::Timestamp(_))
    }

    pub fn is_no_chapters_found(&self) -> bool {
        matches!(self, VttChapterError::Chapters(_))
    }
}

impl fmt::Display for VttChapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VttChapterError::Timestamp(err) => write!(f, "Timestamp error: {}", err),
            VttChapterError::Chapters(err) => write!(f, "Chapter error: {}", err),
            VttChapterError::Format(err) => write!(f, "Format error: {}", err),
        }
    }
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ChapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for VttChapterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VttChapterError::Timestamp(err) => Some(err),
            VttChapterError::Chapters(err) => Some(err),
            VttChapterError::Format(err) => Some(err),
        }
    }
}
impl Error for TimestampError {}
impl Error for ChapterError {}
impl Error for FormatError {}

// Conversion implementations
impl From<TimestampError> for VttChapterError {
    fn from(err: TimestampError) -> Self {
        VttChapterError::Timestamp(err)
    }
}

impl From<ChapterError> for VttChapterError {
    fn from(err: ChapterError) -> Self {
        VttChapterError::Chapters(err)
    }
}

impl From<FormatError> for VttChapterError {
    fn from(err: FormatError) -> Self {
        VttChapterError::Format(err)
    }
}

// Type alias for Result with VttChapterError
pub type VttChapterResult<T> = Result<T, VttChapterError>;
