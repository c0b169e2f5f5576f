// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog builders shared by the tests.

use crate::{CodepointSet, FontMetadata, FontRecord, PriorityList, SourceFormat};
use alloc::string::String;
use alloc::vec::Vec;

/// Metadata for a regular static TrueType font.
pub(crate) fn metadata(
    id: &str,
    family: &str,
    codepoints: impl IntoIterator<Item = u32>,
) -> FontMetadata {
    FontMetadata {
        id: id.into(),
        format: SourceFormat::TrueType,
        typographic_family: Some(family.into()),
        family: None,
        typographic_subfamily: Some("Regular".into()),
        subfamily: None,
        is_variable: false,
        weight_class: 400,
        width_class: 5,
        is_italic: false,
        codepoints: codepoints.into_iter().collect(),
    }
}

pub(crate) fn record(metadata: FontMetadata) -> FontRecord {
    FontRecord::from_metadata(metadata).unwrap()
}

/// A regular static font.
pub(crate) fn regular(
    id: &str,
    family: &str,
    codepoints: impl IntoIterator<Item = u32>,
) -> FontRecord {
    record(metadata(id, family, codepoints))
}

/// A static font with the given weight class and italic flag.
pub(crate) fn instance(
    id: &str,
    family: &str,
    weight_class: u16,
    is_italic: bool,
    codepoints: impl IntoIterator<Item = u32>,
) -> FontRecord {
    record(FontMetadata {
        weight_class,
        is_italic,
        ..metadata(id, family, codepoints)
    })
}

/// A variable font file.
pub(crate) fn variable(
    id: &str,
    family: &str,
    is_italic: bool,
    codepoints: impl IntoIterator<Item = u32>,
) -> FontRecord {
    record(FontMetadata {
        is_variable: true,
        is_italic,
        // Variable files commonly report the minimum of their weight axis.
        weight_class: 100,
        ..metadata(id, family, codepoints)
    })
}

pub(crate) fn priority(families: &[&str]) -> PriorityList {
    families.iter().copied().collect()
}

pub(crate) fn set(codepoints: impl IntoIterator<Item = u32>) -> CodepointSet {
    codepoints.into_iter().collect()
}

/// Returns the ids of `fonts`, in order.
pub(crate) fn ids<'a>(fonts: impl IntoIterator<Item = &'a FontRecord>) -> Vec<String> {
    fonts.into_iter().map(|font| font.id().into()).collect()
}
