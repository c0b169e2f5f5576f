// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weight and width of a single font instance.

use core::fmt;

/// Visual weight class of a font on the CSS scale from 1 to 1000.
///
/// In CSS, this corresponds to the `font-weight` descriptor of a
/// `@font-face` rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700);

    /// Creates a new weight value.
    ///
    /// The value is not clamped; the OS/2 table of a variable font may hold
    /// a value outside of the CSS range.
    pub const fn new(weight: u16) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns the weight clamped to the CSS range of 1 to 1000.
    ///
    /// ```
    /// use coverface::FontWeight;
    ///
    /// assert_eq!(FontWeight::new(0).to_css().value(), 1);
    /// assert_eq!(FontWeight::new(1200).to_css().value(), 1000);
    /// assert_eq!(FontWeight::BOLD.to_css(), FontWeight::BOLD);
    /// ```
    pub fn to_css(self) -> Self {
        Self(self.0.clamp(1, 1000))
    }

    /// Returns `true` for the default weight of 400.
    pub fn is_normal(self) -> bool {
        self == Self::NORMAL
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual width of a font, as one of the nine CSS `font-stretch` keywords.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontWidth {
    /// 50% of normal.
    UltraCondensed,
    /// 62.5% of normal.
    ExtraCondensed,
    /// 75% of normal.
    Condensed,
    /// 87.5% of normal.
    SemiCondensed,
    /// The default width.
    #[default]
    Normal,
    /// 112.5% of normal.
    SemiExpanded,
    /// 125% of normal.
    Expanded,
    /// 150% of normal.
    ExtraExpanded,
    /// 200% of normal.
    UltraExpanded,
}

impl FontWidth {
    /// Every width, indexed by `usWidthClass - 1`.
    pub const ALL: [Self; 9] = [
        Self::UltraCondensed,
        Self::ExtraCondensed,
        Self::Condensed,
        Self::SemiCondensed,
        Self::Normal,
        Self::SemiExpanded,
        Self::Expanded,
        Self::ExtraExpanded,
        Self::UltraExpanded,
    ];

    /// Converts an OS/2 `usWidthClass` value.
    ///
    /// Values below 1 are treated as ultra-condensed and values above 9 as
    /// ultra-expanded.
    ///
    /// ```
    /// use coverface::FontWidth;
    ///
    /// assert_eq!(FontWidth::from_width_class(5), FontWidth::Normal);
    /// assert_eq!(FontWidth::from_width_class(3), FontWidth::Condensed);
    /// assert_eq!(FontWidth::from_width_class(0), FontWidth::UltraCondensed);
    /// ```
    pub fn from_width_class(width_class: u16) -> Self {
        let index = usize::from(width_class.clamp(1, 9) - 1);
        Self::ALL[index]
    }

    /// Returns the CSS keyword for this width.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::UltraCondensed => "ultra-condensed",
            Self::ExtraCondensed => "extra-condensed",
            Self::Condensed => "condensed",
            Self::SemiCondensed => "semi-condensed",
            Self::Normal => "normal",
            Self::SemiExpanded => "semi-expanded",
            Self::Expanded => "expanded",
            Self::ExtraExpanded => "extra-expanded",
            Self::UltraExpanded => "ultra-expanded",
        }
    }

    /// Returns `true` if the width is normal.
    pub fn is_normal(self) -> bool {
        self == Self::Normal
    }
}

impl fmt::Display for FontWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
