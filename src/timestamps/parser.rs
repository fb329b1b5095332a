use crate::errors::{TimestampError, VttChapterResult};
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// `[hh:]mm:ss.mmm`, anchored at both ends. The hour group is either exactly
/// two digits or absent.
fn timestamp_regex() -> &'static Regex {
    static TIMESTAMP_REGEX: OnceLock<Regex> = OnceLock::new();
    TIMESTAMP_REGEX.get_or_init(|| {
        Regex::new(r"^(?:([0-9]{2}):)?([0-9]{2}):([0-9]{2})\.([0-9]{3})$")
            .expect("Failed to compile timestamp regex")
    })
}

/// Convert a WebVTT timestamp (`hh:mm:ss.mmm` or `mm:ss.mmm`) to whole seconds.
///
/// Milliseconds are dropped, not rounded. Fields are not range checked, so
/// `00:75.000` is 75 seconds.
pub fn parse_timestamp(timestamp: &str) -> VttChapterResult<u64> {
    let caps = timestamp_regex()
        .captures(timestamp)
        .ok_or_else(|| TimestampError::new(timestamp))?;

    // Every group is ASCII digits of fixed width, so the parses cannot fail.
    let field = |index: usize| {
        caps.get(index)
            .map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(0))
    };
    let total = field(3) + field(2) * 60 + field(1) * 3600;

    debug!("Parsed timestamp '{}' as {}s", timestamp, total);
    Ok(total)
}
