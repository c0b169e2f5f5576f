// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coverage partitioning for web font stylesheets.
//!
//! Given a catalog of fonts and a fallback order over their families, this
//! crate assigns every font a pruned set of codepoints so that each codepoint
//! is claimed by exactly one family, then renders the result as a series of
//! CSS `@font-face` rules with `unicode-range` descriptors.
//!
//! The pipeline is:
//!
//! 1. [`scan_font`] / [`FontRecord::from_metadata`] build the catalog.
//! 2. [`FamilyCoverage::new`] unions coverage per family.
//! 3. [`PriorityList::sort`] orders the catalog by fallback priority.
//! 4. [`Pruner::prune`] resolves contested codepoints.
//! 5. [`build_css`] renders the stylesheet.
//!
//! [`generate`] runs steps 2 to 5 for every [`Variant`].

extern crate alloc;

mod attributes;
mod catalog;
mod codepoints;
mod coverage;
mod css;
mod error;
mod exclusion;
mod family_name;
mod font;
mod priority;
mod prune;
mod scan;
mod unicode_range;
mod variant;

#[cfg(test)]
mod tests;

pub use attributes::{FontWeight, FontWidth};
pub use catalog::FontMetadata;
pub use codepoints::{CodepointSet, Runs, MAX_CODEPOINT};
pub use coverage::{contested_codepoints, ContestedCodepoint, FamilyCoverage};
pub use css::{build_css, build_font_face, build_range_variables, StylesheetOptions};
pub use error::{Error, ErrorKind};
pub use exclusion::exclusion_set;
pub use family_name::corrected_family_name;
pub use font::{FontRecord, SourceFormat};
pub use priority::PriorityList;
pub use prune::{Partition, PruneOptions, PrunedFont, Pruner};
pub use scan::scan_font;
pub use unicode_range::{build_unicode_range, parse_unicode_range};
pub use variant::{generate, Stylesheet, Variant};
