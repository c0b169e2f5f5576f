// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Codepoints that cannot stand alone visually.

use crate::codepoints::{CodepointSet, MAX_CODEPOINT};
use icu_properties::{props::GraphemeClusterBreak, CodePointMapData};

/// Returns every codepoint whose `Grapheme_Cluster_Break` value is `Extend`,
/// `ZWJ`, `SpacingMark` or `Prepend`.
///
/// These attach to a neighboring base character, so a family is granted
/// every one of them it can render even when a higher priority family
/// already claims the codepoint.
///
/// ```
/// use coverface::exclusion_set;
///
/// let exclusions = exclusion_set();
/// assert!(exclusions.contains(0x0301)); // COMBINING ACUTE ACCENT
/// assert!(exclusions.contains(0x200D)); // ZERO WIDTH JOINER
/// assert!(!exclusions.contains(0x0041)); // LATIN CAPITAL LETTER A
/// ```
pub fn exclusion_set() -> CodepointSet {
    let gcb = CodePointMapData::<GraphemeClusterBreak>::new();
    (0..=MAX_CODEPOINT)
        .filter(|&cp| {
            matches!(
                gcb.get32(cp),
                GraphemeClusterBreak::Extend
                    | GraphemeClusterBreak::ZWJ
                    | GraphemeClusterBreak::SpacingMark
                    | GraphemeClusterBreak::Prepend
            )
        })
        .collect()
}
