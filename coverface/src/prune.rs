// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of contested codepoints between families.

use crate::codepoints::{CodepointSet, MAX_CODEPOINT};
use crate::coverage::FamilyCoverage;
use crate::font::FontRecord;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::RangeInclusive;
use hashbrown::{HashMap, HashSet};

/// Selects which fonts of the catalog take part in a pruning run.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct PruneOptions {
    /// Prefer variable files: static instances of a family that has a
    /// variable file are dropped. When unset, variable files are dropped.
    pub variable: bool,
    /// Keep only the regular instance of each family. Upright variable files
    /// are kept as well when `variable` is set.
    pub minimal: bool,
}

/// A font paired with the codepoints it is responsible for.
///
/// All fonts of one family share the same pruned set.
#[derive(Clone, Debug)]
pub struct PrunedFont<'a> {
    font: &'a FontRecord,
    codepoints: Arc<CodepointSet>,
}

impl<'a> PrunedFont<'a> {
    /// Returns the underlying catalog entry.
    pub fn font(&self) -> &'a FontRecord {
        self.font
    }

    /// Returns the pruned codepoints.
    pub fn codepoints(&self) -> &CodepointSet {
        &self.codepoints
    }
}

/// The result of a pruning run.
#[derive(Clone, Default, Debug)]
pub struct Partition<'a> {
    /// The surviving fonts, in priority order.
    pub fonts: Vec<PrunedFont<'a>>,
    /// The pruned set of every family that took part, in priority order.
    ///
    /// Families that were pruned away entirely are listed with an empty set.
    pub families: Vec<(Arc<str>, Arc<CodepointSet>)>,
}

/// Assigns each codepoint to a single family, following priority order.
///
/// The pruner holds the read-only inputs shared by every run: the family
/// coverage, the exclusion set and the codepoints no font covers at all.
/// Each call to [`Pruner::prune`] starts from fresh state.
#[derive(Clone, Debug)]
pub struct Pruner<'a> {
    coverage: &'a FamilyCoverage,
    exclusions: &'a CodepointSet,
    uncovered: Vec<RangeInclusive<u32>>,
}

impl<'a> Pruner<'a> {
    /// Creates a pruner over `coverage`, which must aggregate the complete
    /// catalog.
    pub fn new(coverage: &'a FamilyCoverage, exclusions: &'a CodepointSet) -> Self {
        Self {
            coverage,
            exclusions,
            uncovered: coverage.all_codepoints().complement_runs(),
        }
    }

    /// Prunes `fonts`, which must be sorted by priority, most preferred
    /// first.
    ///
    /// Once any font of a family has been processed, the full coverage of
    /// that family counts as claimed for every later family. Fonts whose
    /// pruned set is empty are left out.
    pub fn prune<'f>(&self, fonts: &[&'f FontRecord], options: PruneOptions) -> Partition<'f> {
        let variable_families: HashSet<&str> = if options.variable {
            fonts
                .iter()
                .filter(|font| font.is_variable())
                .map(|font| font.family())
                .collect()
        } else {
            HashSet::new()
        };
        let mut covered = CodepointSet::new();
        let mut uncovered = self.uncovered.clone();
        let mut cache: HashMap<&'f str, Arc<CodepointSet>> = HashMap::new();
        let mut partition = Partition::default();
        for &font in fonts {
            let family = font.family();
            if !options.variable && font.is_variable() {
                log::trace!("{}: variable file in a static build", font.id());
                continue;
            }
            if options.variable && !font.is_variable() && variable_families.contains(family) {
                log::trace!("{}: static instance of a variable family", font.id());
                continue;
            }
            if options.minimal && !is_minimal(font, options.variable) {
                log::trace!("{}: not a default instance", font.id());
                continue;
            }
            let codepoints = match cache.get(family) {
                Some(codepoints) => codepoints.clone(),
                None => {
                    let codepoints = Arc::new(self.claim(family, &covered, &mut uncovered));
                    if let Some(coverage) = self.coverage.get(family) {
                        covered.extend_from(coverage);
                    }
                    cache.insert(family, codepoints.clone());
                    partition
                        .families
                        .push((font.family_arc().clone(), codepoints.clone()));
                    codepoints
                }
            };
            if codepoints.is_empty() {
                continue;
            }
            partition.fonts.push(PrunedFont { font, codepoints });
        }
        partition
    }

    /// Computes the codepoints `family` is responsible for, given the
    /// codepoints claimed by the families before it.
    fn claim(
        &self,
        family: &str,
        covered: &CodepointSet,
        uncovered: &mut Vec<RangeInclusive<u32>>,
    ) -> CodepointSet {
        let Some(coverage) = self.coverage.get(family) else {
            return CodepointSet::new();
        };
        let mut pruned = coverage.difference(covered);
        if pruned.is_empty() {
            log::debug!("{family}: fully covered by higher priority families");
            return pruned;
        }
        // Runs that nobody covers are absorbed when the family owns both
        // neighbors, so the emitted range has no holes.
        uncovered.retain(|run| {
            let (start, end) = (*run.start(), *run.end());
            let enclosed = start > 0
                && end < MAX_CODEPOINT
                && pruned.contains(start - 1)
                && pruned.contains(end + 1);
            if enclosed {
                log::debug!("{family}: absorbing uncovered U+{start:X}-{end:X}");
                pruned.insert_range(run.clone());
            }
            !enclosed
        });
        pruned.extend_from(&coverage.intersection(self.exclusions));
        pruned
    }
}

/// Returns `true` if `font` survives the minimal filter.
fn is_minimal(font: &FontRecord, variable: bool) -> bool {
    // A variable file already spans the weight and width axes.
    font.is_default_instance() || (variable && font.is_variable() && !font.is_italic())
}
