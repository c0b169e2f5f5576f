// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering of `@font-face` stylesheets.

use crate::codepoints::CodepointSet;
use crate::prune::{Partition, PrunedFont};
use crate::unicode_range::build_unicode_range;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// Options shared by every rule of a stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StylesheetOptions {
    /// The `font-family` value of every rule. Pages select the whole
    /// partition through this one name.
    pub family_name: String,
    /// Prefix of every font URL; the file name is appended to it.
    pub url_base: String,
    /// Expose each family's range as a custom property on `:root` and refer
    /// to it from the rules, instead of repeating the range inline.
    pub range_variables: bool,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self {
            family_name: "Noto".into(),
            url_base: "https://archive.org/cors/NotoFonts/".into(),
            range_variables: false,
        }
    }
}

/// Renders one `@font-face` rule.
///
/// The `src` list always starts with the WOFF2 file. With `multi_format`,
/// the WOFF file and the original source file follow for older clients.
/// Weight and width are only declared for static fonts that differ from the
/// default, since a variable file spans a range of both.
pub fn build_font_face(
    pruned: &PrunedFont<'_>,
    options: &StylesheetOptions,
    multi_format: bool,
) -> String {
    let font = pruned.font();
    let source = |extension: &str, format: &str| {
        let url = format!("{}{}.{extension}", options.url_base, font.id());
        format!("url({}) format(\"{format}\")", quoted(&url))
    };
    let mut sources = Vec::with_capacity(3);
    sources.push(source("woff2", "woff2"));
    if multi_format {
        sources.push(source("woff", "woff"));
        sources.push(source(
            font.format().extension(),
            font.format().css_format(),
        ));
    }
    let unicode_range = if options.range_variables {
        format!("var(--{})", property_name(font.family()))
    } else {
        build_unicode_range(pruned.codepoints())
    };

    let mut lines = Vec::with_capacity(6);
    lines.push(format!("  font-family: {};", quoted(&options.family_name)));
    lines.push(format!("  src: {};", sources.join(",\n       ")));
    lines.push(format!("  unicode-range: {unicode_range};"));
    if font.is_italic() {
        lines.push("  font-style: italic;".into());
    }
    if !font.is_variable() {
        if !font.weight().is_normal() {
            lines.push(format!("  font-weight: {};", font.weight().to_css()));
        }
        if !font.width().is_normal() {
            lines.push(format!("  font-stretch: {};", font.width()));
        }
    }
    format!("@font-face {{\n{}\n}}", lines.join("\n"))
}

/// Renders the `:root` block that defines one `--FamilyName` custom property
/// per family with a non-empty pruned set.
pub fn build_range_variables(families: &[(Arc<str>, Arc<CodepointSet>)]) -> String {
    let mut out = String::from(":root {\n");
    for (family, codepoints) in families {
        if codepoints.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "  --{}: {};\n",
            property_name(family),
            build_unicode_range(codepoints)
        ));
    }
    out.push('}');
    out
}

/// Renders a complete stylesheet for `partition`.
///
/// Rules are emitted in reverse priority order: when two rules match the
/// same character, the later one in the text wins the cascade, so the most
/// preferred family comes last.
pub fn build_css(
    partition: &Partition<'_>,
    options: &StylesheetOptions,
    multi_format: bool,
) -> String {
    let mut blocks = Vec::with_capacity(partition.fonts.len() + 1);
    if options.range_variables {
        blocks.push(build_range_variables(&partition.families));
    }
    blocks.extend(
        partition
            .fonts
            .iter()
            .rev()
            .filter(|pruned| !pruned.codepoints().is_empty())
            .map(|pruned| build_font_face(pruned, options, multi_format)),
    );
    blocks.join("\n\n")
}

fn property_name(family: &str) -> String {
    family.chars().filter(|c| *c != ' ').collect()
}

/// Quotes `value` as a CSS string.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\A "),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
