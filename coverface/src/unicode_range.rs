// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The CSS `unicode-range` descriptor.

use crate::codepoints::{CodepointSet, MAX_CODEPOINT};
use alloc::format;
use alloc::string::String;

/// Renders `codepoints` as a compact `unicode-range` value.
///
/// Each maximal run of consecutive codepoints becomes `U+<low>-<high>`, and
/// a lone codepoint becomes `U+<hex>`. An empty set yields an empty string,
/// which is not a valid descriptor, so callers skip emission in that case.
///
/// ```
/// use coverface::{build_unicode_range, CodepointSet};
///
/// let set: CodepointSet = [0x41, 0x42, 0x44].into_iter().collect();
/// assert_eq!(build_unicode_range(&set), "U+41-42, U+44");
/// ```
pub fn build_unicode_range(codepoints: &CodepointSet) -> String {
    let mut out = String::new();
    for (i, run) in codepoints.runs().enumerate() {
        if i != 0 {
            out.push_str(", ");
        }
        let (start, end) = (*run.start(), *run.end());
        if start == end {
            out.push_str(&format!("U+{start:X}"));
        } else {
            out.push_str(&format!("U+{start:X}-{end:X}"));
        }
    }
    out
}

/// Parses a `unicode-range` value made of comma separated `U+<hex>` and
/// `U+<hex>-<hex>` entries.
///
/// Returns `None` if an entry is malformed, reversed, or beyond
/// `U+10FFFF`. Wildcard entries such as `U+4??` are not supported.
///
/// ```
/// use coverface::parse_unicode_range;
///
/// let set = parse_unicode_range("U+41-43, U+45").unwrap();
/// assert_eq!(set.len(), 4);
/// assert!(parse_unicode_range("U+43-41").is_none());
/// ```
pub fn parse_unicode_range(s: &str) -> Option<CodepointSet> {
    let mut set = CodepointSet::new();
    if s.trim().is_empty() {
        return Some(set);
    }
    for entry in s.split(',') {
        let entry = entry.trim();
        let hex = entry
            .strip_prefix("U+")
            .or_else(|| entry.strip_prefix("u+"))?;
        let (start, end) = match hex.split_once('-') {
            Some((start, end)) => (parse_hex(start)?, parse_hex(end)?),
            None => {
                let cp = parse_hex(hex)?;
                (cp, cp)
            }
        };
        if start > end {
            return None;
        }
        set.insert_range(start..=end);
    }
    Some(set)
}

fn parse_hex(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 6 {
        return None;
    }
    u32::from_str_radix(s, 16)
        .ok()
        .filter(|cp| *cp <= MAX_CODEPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(codepoints: &[u32]) -> CodepointSet {
        codepoints.iter().copied().collect()
    }

    #[test]
    fn singleton() {
        assert_eq!(build_unicode_range(&set(&[0x41])), "U+41", "singleton");
    }

    #[test]
    fn run() {
        assert_eq!(
            build_unicode_range(&set(&[0x41, 0x42, 0x43])),
            "U+41-43",
            "run"
        );
    }

    #[test]
    fn empty_set_is_empty_string() {
        assert_eq!(build_unicode_range(&CodepointSet::new()), "", "empty");
    }

    #[test]
    fn hex_is_uppercase_and_unpadded() {
        assert_eq!(
            build_unicode_range(&set(&[0xA, 0xB, 0x1F600])),
            "U+A-B, U+1F600",
            "formatting"
        );
    }

    #[test]
    fn rendered_ranges_decode_to_the_same_set() {
        for codepoints in [
            &[0x41][..],
            &[0x41, 0x42, 0x43],
            &[0x41, 0x42, 0x44],
            &[0, 0x300, 0x301, 0x302, 0xFFFF, 0x10000, MAX_CODEPOINT],
        ] {
            let original = set(codepoints);
            let rendered = build_unicode_range(&original);
            assert_eq!(
                parse_unicode_range(&rendered),
                Some(original),
                "decoding {rendered}"
            );
        }
    }

    #[test]
    fn malformed_entries_are_rejected() {
        for input in ["41", "U+", "U+XYZ", "U+110000", "U+41-", "U+41,,U+42"] {
            assert!(parse_unicode_range(input).is_none(), "accepted {input:?}");
        }
    }
}
