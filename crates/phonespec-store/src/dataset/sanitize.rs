//! Line-terminator sanitizer
//!
//! Scraped exports carry Unicode line and paragraph separators and stray
//! control characters that break naive JSON tooling. They are replaced with
//! a space and CRLF/CR are normalized to LF.

/// Characters replaced by a single space
const REPLACED: &[char] = &[
    '\u{2028}', // LINE SEPARATOR
    '\u{2029}', // PARAGRAPH SEPARATOR
    '\u{0085}', // NEXT LINE
    '\u{000C}', // FORM FEED
    '\u{000B}', // VERTICAL TAB
    '\u{001C}', // FILE SEPARATOR
    '\u{001D}', // GROUP SEPARATOR
    '\u{001E}', // RECORD SEPARATOR
    '\u{001F}', // UNIT SEPARATOR
];

/// Only these count toward the reported total
const COUNTED: &[char] = &['\u{2028}', '\u{2029}', '\u{0085}'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeOutcome {
    pub text: String,
    pub unusual_terminators: usize,
}

/// Replace unusual terminators and normalize line endings
pub fn sanitize_terminators(input: &str) -> SanitizeOutcome {
    let mut text = String::with_capacity(input.len());
    let mut unusual_terminators = 0;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if COUNTED.contains(&ch) {
            unusual_terminators += 1;
        }
        match ch {
            c if REPLACED.contains(&c) => text.push(' '),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                text.push('\n');
            }
            c => text.push(c),
        }
    }

    SanitizeOutcome {
        text,
        unusual_terminators,
    }
}
