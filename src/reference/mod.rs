//! Reference palette of named colors
//!
//! A [`ReferencePalette`] is the ordered, immutable table every match is
//! made against. Order is significant: the first entry wins both distance
//! ties and code lookups. Each entry's Lab coordinates are computed once
//! at construction.

pub mod loader;

use serde::Serialize;

use crate::color::{rgb_to_lab, LabColor, Rgb};

pub use loader::{load_palette, parse_delimited, parse_json, DelimitedFormat};

/// One named reference color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    code: String,
    rgb: Rgb,
    #[serde(skip)]
    lab: LabColor,
}

impl PaletteEntry {
    /// Create an entry, computing its Lab coordinates
    pub fn new(code: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            code: code.into(),
            rgb,
            lab: rgb_to_lab(rgb),
        }
    }

    /// Opaque color code (e.g. a Munsell notation)
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Reference sRGB value
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn lab(&self) -> &LabColor {
        &self.lab
    }
}

/// Ordered, read-only sequence of reference colors
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReferencePalette {
    entries: Vec<PaletteEntry>,
}

impl ReferencePalette {
    /// Build a palette from `(code, rgb)` pairs, keeping their order
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Rgb)>,
        S: Into<String>,
    {
        entries
            .into_iter()
            .map(|(code, rgb)| PaletteEntry::new(code, rgb))
            .collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in load order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Entry at `index` in load order
    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Iterate entries in load order
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// First entry carrying `code`, in load order
    pub fn entry_for_code(&self, code: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// RGB of the first entry carrying `code`; `None` when the code is unknown
    pub fn rgb_for_code(&self, code: &str) -> Option<Rgb> {
        self.entry_for_code(code).map(PaletteEntry::rgb)
    }
}

impl FromIterator<PaletteEntry> for ReferencePalette {
    fn from_iter<T: IntoIterator<Item = PaletteEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ReferencePalette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReferencePalette {
        ReferencePalette::new([
            ("N 5/", Rgb::new(119, 119, 119)),
            ("5R 4/14", Rgb::new(186, 34, 51)),
            ("N 5/", Rgb::new(120, 120, 120)),
        ])
    }

    #[test]
    fn test_entry_precomputes_lab() {
        let entry = PaletteEntry::new("N 9.5/", Rgb::new(255, 255, 255));
        assert!((entry.lab().l() - 100.0).abs() < 1e-3);
        assert_eq!(entry.lab(), &rgb_to_lab(entry.rgb()));
    }

    #[test]
    fn test_order_is_preserved() {
        let palette = sample();
        let codes: Vec<&str> = palette.iter().map(PaletteEntry::code).collect();
        assert_eq!(codes, ["N 5/", "5R 4/14", "N 5/"]);
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_rgb_for_code_first_match() {
        let palette = sample();
        assert_eq!(palette.rgb_for_code("N 5/"), Some(Rgb::new(119, 119, 119)));
        assert_eq!(palette.rgb_for_code("5R 4/14"), Some(Rgb::new(186, 34, 51)));
    }

    #[test]
    fn test_rgb_for_code_miss() {
        assert_eq!(sample().rgb_for_code("ZZZZ"), None);
        assert_eq!(ReferencePalette::default().rgb_for_code("N 5/"), None);
        // Codes are compared exactly
        assert_eq!(sample().rgb_for_code("n 5/"), None);
    }

    #[test]
    fn test_serializes_as_entry_list() {
        let palette = ReferencePalette::new([("A", Rgb::new(1, 2, 3))]);
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r#"[{"code":"A","rgb":{"r":1,"g":2,"b":3}}]"#);
    }
}
