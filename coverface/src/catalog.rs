// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction of catalog entries from raw font metadata.

use crate::attributes::{FontWeight, FontWidth};
use crate::codepoints::CodepointSet;
use crate::error::Error;
use crate::family_name::corrected_family_name;
use crate::font::{FontRecord, SourceFormat};
use alloc::string::String;

/// Raw metadata of one font file, as read from its tables.
///
/// Produced by [`scan_font`](crate::scan_font), or by any other reader, and
/// turned into a [`FontRecord`] with [`FontRecord::from_metadata`].
#[derive(Clone, Debug)]
pub struct FontMetadata {
    /// Stable identifier of the file, usually its name without extension.
    pub id: String,
    /// Binary format of the file.
    pub format: SourceFormat,
    /// Typographic family name (name ID 16).
    pub typographic_family: Option<String>,
    /// Legacy family name (name ID 1).
    pub family: Option<String>,
    /// Typographic subfamily name (name ID 17).
    pub typographic_subfamily: Option<String>,
    /// Legacy subfamily name (name ID 2).
    pub subfamily: Option<String>,
    /// Whether the file has variation axes.
    pub is_variable: bool,
    /// OS/2 `usWeightClass`.
    pub weight_class: u16,
    /// OS/2 `usWidthClass`.
    pub width_class: u16,
    /// Whether the italic selection flag is set.
    pub is_italic: bool,
    /// Every codepoint mapped to a glyph.
    pub codepoints: CodepointSet,
}

impl FontRecord {
    /// Builds a catalog entry from raw metadata.
    ///
    /// The typographic names are preferred over the legacy ones, and the
    /// family name is passed through the static correction table exactly
    /// once. Fails if no family name is available.
    pub fn from_metadata(metadata: FontMetadata) -> Result<Self, Error> {
        let FontMetadata {
            id,
            format,
            typographic_family,
            family,
            typographic_subfamily,
            subfamily,
            is_variable,
            weight_class,
            width_class,
            is_italic,
            codepoints,
        } = metadata;
        let Some(family) = preferred(typographic_family, family) else {
            return Err(Error::missing_family_name(&id));
        };
        let style = preferred(typographic_subfamily, subfamily).unwrap_or_default();
        Ok(Self {
            family: corrected_family_name(&family).into(),
            id: id.into(),
            format,
            style: style.into(),
            is_variable,
            weight: FontWeight::new(weight_class),
            width: FontWidth::from_width_class(width_class),
            is_italic,
            codepoints,
        })
    }
}

fn preferred(primary: Option<String>, secondary: Option<String>) -> Option<String> {
    primary
        .filter(|name| !name.is_empty())
        .or(secondary)
        .filter(|name| !name.is_empty())
}
