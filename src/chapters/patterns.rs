use regex::Regex;
use std::sync::OnceLock;

// Tokens only need to look like a timestamp here. Digit counts are left to
// the timestamp parser, so `1:00:00.000` still aborts extraction while prose
// such as `1 --> 2` is never a timing line. Cue settings after the end token
// are skipped.
const TIMING_LINE: &str = r"(?P<start>[0-9]+(?::[0-9]+){1,2}\.[0-9]+)[ \t]+-->[ \t]+(?P<end>[0-9]+(?::[0-9]+){1,2}\.[0-9]+)(?:[ \t][^\r\n]*)?";

/// `<title>\n<start> --> <end>`
///
/// Not anchored with `^` and the timing line's terminator is left unconsumed:
/// a timing line directly after another one gets the empty text between the
/// first line's end and its line break as its title.
pub(crate) fn title_block_regex() -> &'static Regex {
    static TITLE_BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
    TITLE_BLOCK_REGEX.get_or_init(|| {
        Regex::new(&format!(r"(?mR)(?P<text>[^\r\n]*)\r?\n{}$", TIMING_LINE))
            .expect("Failed to compile title block regex")
    })
}

/// `<start> --> <end>\n<title>`
pub(crate) fn chapter_block_regex() -> &'static Regex {
    static CHAPTER_BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
    CHAPTER_BLOCK_REGEX.get_or_init(|| {
        Regex::new(&format!(r"(?m)^{}\r?\n(?P<text>[^\r\n]*)", TIMING_LINE))
            .expect("Failed to compile chapter block regex")
    })
}
