// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for a font file in the catalog.

use crate::attributes::{FontWeight, FontWidth};
use crate::codepoints::CodepointSet;
use alloc::sync::Arc;

/// Binary format of the source font file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// TrueType outlines, usually a `.ttf` file.
    TrueType,
    /// CFF outlines, usually an `.otf` file.
    OpenType,
}

impl SourceFormat {
    /// Determines the format from a file extension, without the leading dot.
    ///
    /// ```
    /// use coverface::SourceFormat;
    ///
    /// assert_eq!(SourceFormat::from_extension("otf"), Some(SourceFormat::OpenType));
    /// assert_eq!(SourceFormat::from_extension("TTF"), Some(SourceFormat::TrueType));
    /// assert_eq!(SourceFormat::from_extension("woff2"), None);
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("ttf") {
            Some(Self::TrueType)
        } else if extension.eq_ignore_ascii_case("otf") {
            Some(Self::OpenType)
        } else {
            None
        }
    }

    /// Returns the canonical file extension, without the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::TrueType => "ttf",
            Self::OpenType => "otf",
        }
    }

    /// Returns the hint used in the CSS `format()` function.
    pub const fn css_format(self) -> &'static str {
        match self {
            Self::TrueType => "truetype",
            Self::OpenType => "opentype",
        }
    }
}

/// A single physical font file.
///
/// Records are built by [`FontRecord::from_metadata`] and never modified
/// afterwards; pruning produces a [`PrunedFont`](crate::PrunedFont) view
/// instead.
#[derive(Clone, Debug, PartialEq)]
pub struct FontRecord {
    pub(crate) id: Arc<str>,
    pub(crate) format: SourceFormat,
    pub(crate) family: Arc<str>,
    pub(crate) style: Arc<str>,
    pub(crate) is_variable: bool,
    pub(crate) weight: FontWeight,
    pub(crate) width: FontWidth,
    pub(crate) is_italic: bool,
    pub(crate) codepoints: CodepointSet,
}

impl FontRecord {
    /// Returns the stable identifier of the file, its name without extension.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the binary format of the file.
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Returns the display family name, after name correction.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the subfamily name. Informational only.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Returns `true` if the file covers a range of instances along its
    /// variation axes.
    pub fn is_variable(&self) -> bool {
        self.is_variable
    }

    /// Returns the weight class of the default instance.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Returns the width of the default instance.
    pub fn width(&self) -> FontWidth {
        self.width
    }

    /// Returns `true` if the font is italic.
    pub fn is_italic(&self) -> bool {
        self.is_italic
    }

    /// Returns the codepoints the font can render.
    pub fn codepoints(&self) -> &CodepointSet {
        &self.codepoints
    }

    /// Returns `true` for the regular instance: weight 400, normal width and
    /// upright.
    pub fn is_default_instance(&self) -> bool {
        self.weight.is_normal() && self.width.is_normal() && !self.is_italic
    }

    pub(crate) fn family_arc(&self) -> &Arc<str> {
        &self.family
    }
}
