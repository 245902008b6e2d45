//! Palette sources
//!
//! Turns delimited text (one `code,r,g,b` row per entry) or a JSON array
//! into a [`ReferencePalette`]. Source order is kept exactly, since it
//! decides tie-breaks downstream.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::config::{PaletteFormat, PaletteSourceConfig};
use crate::error::{MatchError, Result};
use crate::reference::{PaletteEntry, ReferencePalette};

/// Layout of a delimited palette file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimitedFormat {
    /// Field separator
    pub delimiter: char,

    /// First non-blank row may be a header; it is skipped only when it
    /// does not parse as an entry
    pub has_header: bool,
}

/// Comma-separated with an optional header row
impl Default for DelimitedFormat {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
        }
    }
}

/// JSON palette row before channel validation
#[derive(Debug, Deserialize)]
struct RawEntry {
    code: String,
    r: i64,
    g: i64,
    b: i64,
}

/// Parse delimited text into a palette
///
/// Each row is exactly `code<delim>r<delim>g<delim>b`. Fields are trimmed
/// and blank lines are ignored. With `has_header`, a first row that fails
/// to parse is taken as the header and dropped; one that parses is kept.
///
/// # Errors
///
/// Returns [`MatchError::PaletteParse`] with the 1-based line number of the
/// first malformed row.
pub fn parse_delimited(text: &str, format: &DelimitedFormat) -> Result<ReferencePalette> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut header_pending = format.has_header;
    let mut entries = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_row(index + 1, line, format.delimiter);
        if std::mem::take(&mut header_pending) {
            match row {
                Ok(entry) => entries.push(entry),
                Err(_) => log::debug!("skipping header row {:?}", line.trim()),
            }
            continue;
        }
        entries.push(row?);
    }

    Ok(finish(entries))
}

fn parse_row(line_no: usize, line: &str, delimiter: char) -> Result<PaletteEntry> {
    let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
    let [code, r, g, b] = fields[..] else {
        return Err(MatchError::palette_parse(
            line_no,
            format!("expected 4 fields, found {}", fields.len()),
        ));
    };
    if code.is_empty() {
        return Err(MatchError::palette_parse(line_no, "empty color code"));
    }

    let channel = |name: &str, value: &str| {
        value.parse::<i64>().map_err(|e| {
            MatchError::palette_parse(line_no, format!("invalid {name} value {value:?}: {e}"))
        })
    };
    let rgb = Rgb::try_from_channels(channel("red", r)?, channel("green", g)?, channel("blue", b)?)
        .map_err(|e| MatchError::palette_parse(line_no, e.to_string()))?;

    Ok(PaletteEntry::new(code, rgb))
}

/// Parse a JSON array of `{"code", "r", "g", "b"}` objects into a palette
///
/// # Errors
///
/// Returns [`MatchError::PaletteLoad`] for malformed JSON and
/// [`MatchError::PaletteParse`] for an out-of-range channel, where `line`
/// is the 1-based position of the entry in the array.
pub fn parse_json(text: &str) -> Result<ReferencePalette> {
    let raw: Vec<RawEntry> = serde_json::from_str(text)
        .map_err(|e| MatchError::palette_load("invalid JSON palette", e))?;

    let entries = raw
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            Rgb::try_from_channels(entry.r, entry.g, entry.b)
                .map(|rgb| PaletteEntry::new(entry.code, rgb))
                .map_err(|e| MatchError::palette_parse(index + 1, e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(finish(entries))
}

/// Load a palette from the file named in `source`
///
/// # Errors
///
/// Returns [`MatchError::PaletteLoad`] if the file cannot be read, or any
/// parse error from the selected format.
pub fn load_palette(source: &PaletteSourceConfig) -> Result<ReferencePalette> {
    let text = read_source(&source.path)?;
    let palette = match &source.format {
        PaletteFormat::Delimited(format) => parse_delimited(&text, format)?,
        PaletteFormat::Json => parse_json(&text)?,
    };

    log::debug!(
        "loaded {} palette entries from {}",
        palette.len(),
        source.path.display()
    );
    Ok(palette)
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| MatchError::palette_load(format!("cannot read {}", path.display()), e))
}

fn finish(entries: Vec<PaletteEntry>) -> ReferencePalette {
    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(entry.code()) {
            log::warn!(
                "duplicate palette code {:?}; lookups resolve to its first occurrence",
                entry.code()
            );
        }
    }
    entries.into_iter().collect()
}
