// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coverage aggregated per family.

use crate::codepoints::CodepointSet;
use crate::font::FontRecord;
use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use alloc::vec::Vec;
use hashbrown::HashMap;

/// Maps each family name to the union of the coverage of its fonts.
///
/// Built once per run and read-only afterwards.
#[derive(Clone, Default, Debug)]
pub struct FamilyCoverage {
    families: HashMap<Arc<str>, CodepointSet>,
}

impl FamilyCoverage {
    /// Unions the codepoints of every font, per family.
    pub fn new<'a>(fonts: impl IntoIterator<Item = &'a FontRecord>) -> Self {
        let mut families: HashMap<Arc<str>, CodepointSet> = HashMap::new();
        for font in fonts {
            families
                .entry_ref(font.family())
                .or_default()
                .extend_from(font.codepoints());
        }
        Self { families }
    }

    /// Returns the coverage of `family`.
    pub fn get(&self, family: &str) -> Option<&CodepointSet> {
        self.families.get(family)
    }

    /// Returns the number of families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Returns `true` if there are no families.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Returns an iterator over the families and their coverage, in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CodepointSet)> + '_ {
        self.families
            .iter()
            .map(|(family, coverage)| (&**family, coverage))
    }

    /// Returns every codepoint rendered by at least one family.
    pub fn all_codepoints(&self) -> CodepointSet {
        let mut all = CodepointSet::new();
        for coverage in self.families.values() {
            all.extend_from(coverage);
        }
        all
    }
}

/// A codepoint that more than one family can render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContestedCodepoint {
    /// The contested codepoint.
    pub codepoint: u32,
    /// The families covering it, sorted by name.
    pub families: Vec<Arc<str>>,
}

/// Lists every codepoint covered by more than one family, in ascending
/// order.
///
/// Used to audit a priority list: every entry is a conflict that the order
/// of the list decides.
pub fn contested_codepoints(coverage: &FamilyCoverage) -> Vec<ContestedCodepoint> {
    let mut claims: BTreeMap<u32, Vec<Arc<str>>> = BTreeMap::new();
    for (family, codepoints) in coverage.iter() {
        let family: Arc<str> = family.into();
        for &cp in codepoints {
            claims.entry(cp).or_default().push(family.clone());
        }
    }
    claims
        .into_iter()
        .filter(|(_, families)| families.len() > 1)
        .map(|(codepoint, mut families)| {
            families.sort_unstable();
            ContestedCodepoint {
                codepoint,
                families,
            }
        })
        .collect()
}
