// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corrections for family names that are inconsistent in font metadata.

/// Family names as found in the `name` table, paired with the family the
/// font actually belongs to.
///
/// Sorted by the first element.
const CORRECTIONS: &[(&str, &str)] = &[
    ("Noto Color Emoji Compat", "Noto Color Emoji"),
    ("Noto Nastaliq Urdu Draft", "Noto Nastaliq Urdu"),
    ("Noto Sans Kufi Arabic", "Noto Kufi Arabic"),
    ("Noto Sans Myanmar UI", "Noto Sans Myanmar"),
    ("Noto Sans Symbols2", "Noto Sans Symbols 2"),
    ("Noto Serif Hmong Nyiakeng", "Noto Serif Nyiakeng Puachue Hmong"),
];

/// Returns the corrected family name for `name`, or `name` itself when it
/// needs no correction.
///
/// ```
/// use coverface::corrected_family_name;
///
/// assert_eq!(corrected_family_name("Noto Sans Symbols2"), "Noto Sans Symbols 2");
/// assert_eq!(corrected_family_name("Noto Sans"), "Noto Sans");
/// ```
pub fn corrected_family_name(name: &str) -> &str {
    CORRECTIONS
        .binary_search_by(|(from, _)| from.cmp(&name))
        .map_or(name, |index| CORRECTIONS[index].1)
}
