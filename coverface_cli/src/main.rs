// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writes one `@font-face` stylesheet per build variant for a set of fonts.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use coverface::{
    contested_codepoints, generate, scan_font, FamilyCoverage, FontRecord, PriorityList,
    SourceFormat, StylesheetOptions,
};

#[derive(Parser, Debug)]
#[command(name = "coverface")]
#[command(about = "Partition font coverage into unicode-range @font-face stylesheets")]
struct Args {
    /// Font files (.ttf or .otf) making up the catalog
    #[arg(required = true)]
    fonts: Vec<PathBuf>,

    /// Family fallback order, one family name per line, most preferred first
    #[arg(long, short = 'p')]
    priority: PathBuf,

    /// Style selector baked into the file names, e.g. `sans` or `serif`
    #[arg(long)]
    style: Option<String>,

    /// Script selector baked into the file names
    #[arg(long)]
    script: Option<String>,

    /// Directory the stylesheets are written to
    #[arg(long, short = 'o', default_value = ".")]
    out_dir: PathBuf,

    /// First component of every file name
    #[arg(long, default_value = "noto")]
    prefix: String,

    /// `font-family` value of every rule [default: derived from the style]
    #[arg(long)]
    family_name: Option<String>,

    /// Prefix of every font URL
    #[arg(long)]
    url_base: Option<String>,

    /// Define each family's range as a custom property on `:root`
    #[arg(long)]
    range_variables: bool,

    /// Also write every codepoint claimed by more than one family to this file
    #[arg(long)]
    contested_report: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let priority_text = fs::read_to_string(&args.priority)
        .with_context(|| format!("reading priority list {}", args.priority.display()))?;
    let priority = PriorityList::parse(&priority_text);
    if priority.is_empty() {
        bail!("{} lists no families", args.priority.display());
    }
    log::info!(
        "{} families in {}",
        priority.len(),
        args.priority.display()
    );

    let fonts = load_catalog(&args.fonts)?;
    log::info!("{} fonts in the catalog", fonts.len());

    let mut options = StylesheetOptions {
        family_name: args
            .family_name
            .clone()
            .unwrap_or_else(|| default_family_name(args.style.as_deref())),
        range_variables: args.range_variables,
        ..StylesheetOptions::default()
    };
    if let Some(url_base) = &args.url_base {
        options.url_base.clone_from(url_base);
    }

    // Everything is generated before anything is written, so a failing run
    // leaves no partial output behind.
    let stylesheets = generate(&fonts, &priority, &options)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    for stylesheet in &stylesheets {
        let file_name = stylesheet.variant.file_name(
            &args.prefix,
            args.style.as_deref(),
            args.script.as_deref(),
        );
        let path = args.out_dir.join(file_name);
        fs::write(&path, format!("{}\n", stylesheet.css))
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    if let Some(path) = &args.contested_report {
        write_contested_report(&fonts, path)?;
    }
    Ok(())
}

/// Reads every font file into a catalog entry, in the order given.
///
/// A file whose name was already seen is skipped, so the same font found in
/// two source trees is only listed once.
fn load_catalog(paths: &[PathBuf]) -> Result<Vec<FontRecord>> {
    let mut seen = HashSet::new();
    let mut fonts = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(file_name) = path.file_name() else {
            bail!("{} is not a file", path.display());
        };
        if !seen.insert(file_name.to_owned()) {
            log::warn!("skipping duplicate {}", path.display());
            continue;
        }
        fonts.push(load_font(path)?);
    }
    Ok(fonts)
}

fn load_font(path: &Path) -> Result<FontRecord> {
    let id = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?;
    let format = path
        .extension()
        .and_then(|extension| extension.to_str())
        .and_then(SourceFormat::from_extension)
        .with_context(|| format!("{} is neither .ttf nor .otf", path.display()))?;
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let metadata =
        scan_font(id, format, &data).with_context(|| format!("scanning {}", path.display()))?;
    let font = FontRecord::from_metadata(metadata)
        .with_context(|| format!("cataloging {}", path.display()))?;
    log::debug!(
        "{}: {} ({}), {} codepoints",
        font.id(),
        font.family(),
        font.style(),
        font.codepoints().len()
    );
    Ok(font)
}

fn default_family_name(style: Option<&str>) -> String {
    match style {
        Some("sans") => "Noto Sans".into(),
        Some("serif") => "Noto Serif".into(),
        _ => StylesheetOptions::default().family_name,
    }
}

fn write_contested_report(fonts: &[FontRecord], path: &Path) -> Result<()> {
    let contested = contested_codepoints(&FamilyCoverage::new(fonts));
    let mut report = String::new();
    for entry in &contested {
        let families: Vec<&str> = entry.families.iter().map(|family| &**family).collect();
        writeln!(report, "U+{:04X}\t{}", entry.codepoint, families.join(", "))?;
    }
    fs::write(path, report).with_context(|| format!("writing {}", path.display()))?;
    log::info!(
        "{} contested codepoints written to {}",
        contested.len(),
        path.display()
    );
    Ok(())
}
