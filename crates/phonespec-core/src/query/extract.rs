//! Numeric extraction from free-form spec strings
//!
//! None of these fail: a string without a match yields zero and filtering
//! carries on. Only ASCII digits count; `\d` in `regex` is Unicode-aware and
//! would accept digits that `str::parse` then rejects.

use regex::Regex;
use std::sync::LazyLock;

static GB_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)GB").expect("GB pattern is valid"));
static MAH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*mAh").expect("mAh pattern is valid"));
static INCHES_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9.]+)\s*inches").expect("inches pattern is valid"));

/// Storage and RAM read from a `Memory.Internal` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryCapacity {
    pub storage_gb: u64,
    pub ram_gb: u64,
}

/// Read storage and RAM from a memory spec string
///
/// The first `<digits>GB` token is storage and the second is RAM. This is
/// positional: a string that lists RAM first is read backwards. Known
/// limitation, kept as is.
///
/// `"128GB 8GB RAM"` gives storage 128, RAM 8; a single token gives RAM 0.
pub fn extract_memory(internal: &str) -> MemoryCapacity {
    let mut tokens = GB_TOKEN
        .captures_iter(internal)
        .map(|caps| parse_integer(&caps[1]));
    let storage_gb = tokens.next().unwrap_or(0);
    let ram_gb = tokens.next().unwrap_or(0);
    MemoryCapacity { storage_gb, ram_gb }
}

/// First `<digits> mAh` figure in a battery spec string, or 0
pub fn extract_battery_mah(battery_type: &str) -> u64 {
    MAH_TOKEN
        .captures(battery_type)
        .map(|caps| parse_integer(&caps[1]))
        .unwrap_or(0)
}

/// First `<decimal> inches` figure in a display-size spec string, or 0.0
///
/// The captured run of digits and dots is read up to its first invalid
/// character (`"6.5.1"` reads as 6.5); a run with no digits before that
/// point reads as 0.0.
pub fn extract_screen_inches(display_size: &str) -> f64 {
    INCHES_TOKEN
        .captures(display_size)
        .and_then(|caps| parse_decimal_prefix(&caps[1]))
        .unwrap_or(0.0)
}

/// Digits too long for u64 saturate instead of reading as zero
fn parse_integer(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

fn parse_decimal_prefix(run: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in run.char_indices() {
        match ch {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    let prefix = run[..end].trim_end_matches('.');
    if prefix.is_empty() {
        return None;
    }
    prefix.parse().ok()
}
