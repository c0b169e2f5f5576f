// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

/// Error type for catalog construction and stylesheet generation.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the name of the font or
/// family that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    subject: Box<str>,
    detail: Option<Box<str>>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The family name or font identifier the error is about.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Extra detail reported by the font parser, if any.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub(crate) fn unranked_family(family: &str) -> Self {
        Self {
            kind: ErrorKind::UnrankedFamily,
            subject: family.into(),
            detail: None,
        }
    }

    pub(crate) fn missing_family_name(id: &str) -> Self {
        Self {
            kind: ErrorKind::MissingFamilyName,
            subject: id.into(),
            detail: None,
        }
    }

    pub(crate) fn malformed_font(id: &str, detail: impl fmt::Display) -> Self {
        Self {
            kind: ErrorKind::MalformedFont,
            subject: id.into(),
            detail: Some(alloc::format!("{detail}").into()),
        }
    }

    pub(crate) fn missing_table(id: &str, table: &'static str) -> Self {
        Self {
            kind: ErrorKind::MissingTable,
            subject: id.into(),
            detail: Some(table.into()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::UnrankedFamily => write!(
                f,
                "family \"{}\" does not appear in the priority list",
                self.subject
            ),
            ErrorKind::MissingFamilyName => {
                write!(f, "font {} has no family name", self.subject)
            }
            ErrorKind::MalformedFont => match &self.detail {
                Some(detail) => write!(f, "font {} is malformed: {detail}", self.subject),
                None => write!(f, "font {} is malformed", self.subject),
            },
            ErrorKind::MissingTable => write!(
                f,
                "font {} has no usable {} table",
                self.subject,
                self.detail.as_deref().unwrap_or("required")
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A font belongs to a family that has no position in the priority list.
    ///
    /// Aborts the run: such a family has no defined place in conflict
    /// resolution.
    UnrankedFamily,

    /// Neither the typographic nor the legacy family name is present.
    MissingFamilyName,

    /// The font data could not be parsed.
    MalformedFont,

    /// A table needed to build the catalog entry is absent.
    MissingTable,
}
