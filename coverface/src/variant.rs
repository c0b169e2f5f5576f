// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build variants and the driver that produces one stylesheet per variant.

use crate::coverage::FamilyCoverage;
use crate::css::{build_css, StylesheetOptions};
use crate::error::Error;
use crate::exclusion::exclusion_set;
use crate::font::FontRecord;
use crate::priority::PriorityList;
use crate::prune::{PruneOptions, Pruner};
use alloc::string::String;
use alloc::vec::Vec;

/// One combination of build flags.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Variant {
    /// Prefer variable files over static instances.
    pub variable: bool,
    /// Keep only the default instance of each family.
    pub minimal: bool,
    /// List WOFF and the original source format after WOFF2.
    pub multi_format: bool,
}

impl Variant {
    /// Every combination of flags.
    pub const ALL: [Self; 8] = [
        Self::new(false, false, true),
        Self::new(true, false, true),
        Self::new(false, true, true),
        Self::new(true, true, true),
        Self::new(false, false, false),
        Self::new(true, false, false),
        Self::new(false, true, false),
        Self::new(true, true, false),
    ];

    /// Creates a variant from its flags.
    pub const fn new(variable: bool, minimal: bool, multi_format: bool) -> Self {
        Self {
            variable,
            minimal,
            multi_format,
        }
    }

    /// Returns the options for the pruning run of this variant.
    pub fn prune_options(self) -> PruneOptions {
        PruneOptions {
            variable: self.variable,
            minimal: self.minimal,
        }
    }

    /// Returns the file name of the stylesheet for this variant.
    ///
    /// ```
    /// use coverface::Variant;
    ///
    /// let variant = Variant::new(true, false, false);
    /// assert_eq!(
    ///     variant.file_name("noto", Some("sans"), None),
    ///     "noto-sans-variable-no_woff.css"
    /// );
    /// ```
    pub fn file_name(self, prefix: &str, style: Option<&str>, script: Option<&str>) -> String {
        let mut name = String::from(prefix);
        for part in [style, script].into_iter().flatten() {
            name.push('-');
            name.push_str(part);
        }
        if self.variable {
            name.push_str("-variable");
        }
        if self.minimal {
            name.push_str("-minimal");
        }
        if !self.multi_format {
            name.push_str("-no_woff");
        }
        name.push_str(".css");
        name
    }
}

/// A generated stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stylesheet {
    /// The variant the stylesheet was built for.
    pub variant: Variant,
    /// The CSS text.
    pub css: String,
}

/// Builds the stylesheet of every [`Variant`] from one catalog.
///
/// The catalog is sorted and aggregated once; every variant then runs the
/// pruner from the same read-only inputs. Fails without producing any
/// stylesheet if a family is missing from `priority`.
pub fn generate(
    fonts: &[FontRecord],
    priority: &PriorityList,
    options: &StylesheetOptions,
) -> Result<Vec<Stylesheet>, Error> {
    let sorted = priority.sort(fonts)?;
    let coverage = FamilyCoverage::new(fonts);
    let exclusions = exclusion_set();
    let pruner = Pruner::new(&coverage, &exclusions);
    log::debug!(
        "{} fonts in {} families, {} combining codepoints",
        fonts.len(),
        coverage.len(),
        exclusions.len()
    );
    let stylesheets = Variant::ALL
        .into_iter()
        .map(|variant| {
            let partition = pruner.prune(&sorted, variant.prune_options());
            log::info!(
                "{variant:?}: {} rules from {} families",
                partition.fonts.len(),
                partition
                    .families
                    .iter()
                    .filter(|(_, codepoints)| !codepoints.is_empty())
                    .count()
            );
            Stylesheet {
                variant,
                css: build_css(&partition, options, variant.multi_format),
            }
        })
        .collect();
    Ok(stylesheets)
}
