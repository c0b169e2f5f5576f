// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading catalog metadata from font data.

use crate::catalog::FontMetadata;
use crate::codepoints::CodepointSet;
use crate::error::Error;
use crate::font::SourceFormat;
use alloc::string::String;
use read_fonts::{
    tables::{cmap::CmapSubtable, head::MacStyle, name::Name, os2::SelectionFlags},
    types::{GlyphId, NameId},
    FontRef, TableProvider,
};

/// Reads the metadata of the font in `data`.
///
/// `id` identifies the font in errors and becomes [`FontMetadata::id`].
pub fn scan_font(id: &str, format: SourceFormat, data: &[u8]) -> Result<FontMetadata, Error> {
    let font = FontRef::new(data).map_err(|err| Error::malformed_font(id, err))?;
    let (typographic_family, family, typographic_subfamily, subfamily) = match font.name() {
        Ok(name) => (
            english_or_first_name(&name, NameId::TYPOGRAPHIC_FAMILY_NAME),
            english_or_first_name(&name, NameId::FAMILY_NAME),
            english_or_first_name(&name, NameId::TYPOGRAPHIC_SUBFAMILY_NAME),
            english_or_first_name(&name, NameId::SUBFAMILY_NAME),
        ),
        Err(_) => return Err(Error::missing_table(id, "name")),
    };
    let (weight_class, width_class, is_italic) = read_attributes(&font);
    let is_variable = font
        .fvar()
        .map(|fvar| fvar.axis_count() > 0)
        .unwrap_or(false);
    let codepoints = read_codepoints(id, &font)?;
    log::trace!(
        "scanned {id}: {} codepoints, weight {weight_class}, width class {width_class}",
        codepoints.len()
    );
    Ok(FontMetadata {
        id: id.into(),
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
    })
}

/// Returns the English entry for `name_id`, or the first decodable one.
fn english_or_first_name(name: &Name<'_>, name_id: NameId) -> Option<String> {
    const WINDOWS: u16 = 3;
    const MACINTOSH: u16 = 1;
    const WINDOWS_EN_US: u16 = 0x409;
    const MACINTOSH_ENGLISH: u16 = 0;

    let data = name.string_data();
    let mut first = None;
    for record in name.name_record() {
        if record.name_id() != name_id {
            continue;
        }
        let Ok(string) = record.string(data) else {
            continue;
        };
        let is_english = matches!(
            (record.platform_id(), record.language_id()),
            (WINDOWS, WINDOWS_EN_US) | (MACINTOSH, MACINTOSH_ENGLISH)
        );
        if is_english {
            return Some(string.chars().collect());
        }
        if first.is_none() {
            first = Some(string.chars().collect());
        }
    }
    first
}

/// Returns the weight class, width class and italic flag.
fn read_attributes(font: &FontRef<'_>) -> (u16, u16, bool) {
    const NORMAL_WIDTH_CLASS: u16 = 5;

    if let Ok(os2) = font.os2() {
        let is_italic = os2.fs_selection().contains(SelectionFlags::ITALIC);
        (os2.us_weight_class(), os2.us_width_class(), is_italic)
    } else if let Ok(head) = font.head() {
        // Without OS/2, macStyle is all we have.
        let mac_style = head.mac_style();
        let weight = if mac_style.contains(MacStyle::BOLD) {
            700
        } else {
            400
        };
        (
            weight,
            NORMAL_WIDTH_CLASS,
            mac_style.contains(MacStyle::ITALIC),
        )
    } else {
        (400, NORMAL_WIDTH_CLASS, false)
    }
}

/// Collects every codepoint mapped to a glyph other than `.notdef` by the
/// preferred cmap subtable.
fn read_codepoints(id: &str, font: &FontRef<'_>) -> Result<CodepointSet, Error> {
    let cmap = font.cmap().map_err(|_| Error::missing_table(id, "cmap"))?;
    let Some((_, _, subtable)) = cmap.best_subtable() else {
        return Err(Error::missing_table(id, "cmap"));
    };
    let is_mapped = |gid: GlyphId| gid.to_u32() != 0;
    let codepoints = match subtable {
        CmapSubtable::Format4(table) => table
            .iter()
            .filter(|(_, gid)| is_mapped(*gid))
            .map(|(cp, _)| cp)
            .collect(),
        CmapSubtable::Format12(table) => table
            .iter()
            .filter(|(_, gid)| is_mapped(*gid))
            .map(|(cp, _)| cp)
            .collect(),
        CmapSubtable::Format0(table) => (0_u32..=0xFF)
            .filter(|cp| table.map_codepoint(*cp).is_some_and(is_mapped))
            .collect(),
        CmapSubtable::Format6(table) => (0_u32..=0xFFFF)
            .filter(|cp| table.map_codepoint(*cp).is_some_and(is_mapped))
            .collect(),
        _ => return Err(Error::malformed_font(id, "unsupported cmap subtable format")),
    };
    Ok(codepoints)
}
