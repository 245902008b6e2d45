//! Nearest reference color search
//!
//! Minimizes CIE76 distance over the palette in its fixed order. The first
//! entry attaining the minimum wins; later entries at exactly the same
//! distance never replace it.

pub mod index;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::{delta_e, rgb_to_lab, LabColor, Rgb};
use crate::error::{MatchError, Result};
use crate::reference::{PaletteEntry, ReferencePalette};

pub use index::LabTree;

/// Palette size from which [`SearchStrategy::Auto`] switches to the k-d tree
pub const DEFAULT_TREE_THRESHOLD: usize = 512;

/// The winning palette entry for a query color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorMatch<'a> {
    /// Position of the entry in the palette
    pub index: usize,
    pub code: &'a str,
    pub rgb: Rgb,
    pub lab: LabColor,
    /// ΔE76 between the query and the entry
    pub distance: f64,
}

impl<'a> ColorMatch<'a> {
    fn new(index: usize, entry: &'a PaletteEntry, distance: f64) -> Self {
        Self {
            index,
            code: entry.code(),
            rgb: entry.rgb(),
            lab: *entry.lab(),
            distance,
        }
    }
}

/// How [`NearestMatcher`] walks the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Front-to-back scan
    Linear,
    /// k-d tree built once at construction
    Tree,
    /// Tree when the palette has at least `tree_threshold` entries
    Auto { tree_threshold: usize },
}

impl Default for SearchStrategy {
    fn default() -> Self {
        Self::Auto {
            tree_threshold: DEFAULT_TREE_THRESHOLD,
        }
    }
}

/// Find the code of the palette entry closest to `rgb`
///
/// # Errors
///
/// Returns [`MatchError::EmptyPalette`] if `palette` has no entries.
pub fn find_closest(rgb: Rgb, palette: &ReferencePalette) -> Result<&str> {
    find_closest_match(rgb, palette).map(|m| m.code)
}

/// Find the palette entry closest to `rgb` with its distance
///
/// # Errors
///
/// Returns [`MatchError::EmptyPalette`] if `palette` has no entries.
pub fn find_closest_match(rgb: Rgb, palette: &ReferencePalette) -> Result<ColorMatch<'_>> {
    linear_scan(&rgb_to_lab(rgb), palette)
}

fn linear_scan<'a>(query: &LabColor, palette: &'a ReferencePalette) -> Result<ColorMatch<'a>> {
    let mut best: Option<(usize, f64)> = None;
    for (index, entry) in palette.iter().enumerate() {
        let distance = delta_e(query, entry.lab());
        if best.map_or(true, |(_, min)| distance < min) {
            best = Some((index, distance));
        }
    }

    let (index, distance) = best.ok_or(MatchError::EmptyPalette)?;
    Ok(ColorMatch::new(index, &palette.entries()[index], distance))
}

/// Matcher owning a shared palette and, optionally, a spatial index over it
#[derive(Debug, Clone)]
pub struct NearestMatcher {
    palette: Arc<ReferencePalette>,
    tree: Option<LabTree>,
}

impl NearestMatcher {
    /// Create a matcher with the default strategy
    pub fn new(palette: impl Into<Arc<ReferencePalette>>) -> Self {
        Self::with_strategy(palette, SearchStrategy::default())
    }

    /// Create a matcher, building the k-d tree now if the strategy calls for it
    pub fn with_strategy(palette: impl Into<Arc<ReferencePalette>>, strategy: SearchStrategy) -> Self {
        let palette = palette.into();
        let use_tree = match strategy {
            SearchStrategy::Linear => false,
            SearchStrategy::Tree => true,
            SearchStrategy::Auto { tree_threshold } => palette.len() >= tree_threshold,
        };

        let tree = use_tree.then(|| {
            let points: Vec<LabColor> = palette.iter().map(|entry| *entry.lab()).collect();
            log::debug!("building Lab k-d tree over {} palette entries", points.len());
            LabTree::build(&points)
        });

        Self { palette, tree }
    }

    /// Palette this matcher searches
    pub fn palette(&self) -> &ReferencePalette {
        &self.palette
    }

    /// Whether queries go through the k-d tree
    pub fn is_indexed(&self) -> bool {
        self.tree.is_some()
    }

    /// Code of the entry closest to `rgb`
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPalette`] if the palette has no entries.
    pub fn find_closest(&self, rgb: Rgb) -> Result<&str> {
        self.find_closest_match(rgb).map(|m| m.code)
    }

    /// Entry closest to `rgb` with its distance
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPalette`] if the palette has no entries.
    pub fn find_closest_match(&self, rgb: Rgb) -> Result<ColorMatch<'_>> {
        let query = rgb_to_lab(rgb);
        match &self.tree {
            Some(tree) => {
                let (index, distance) = tree.nearest(&query).ok_or(MatchError::EmptyPalette)?;
                Ok(ColorMatch::new(index, &self.palette.entries()[index], distance))
            }
            None => linear_scan(&query, &self.palette),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primaries() -> ReferencePalette {
        ReferencePalette::new([
            ("black", Rgb::new(0, 0, 0)),
            ("red", Rgb::new(255, 0, 0)),
            ("green", Rgb::new(0, 255, 0)),
            ("blue", Rgb::new(0, 0, 255)),
            ("white", Rgb::new(255, 255, 255)),
        ])
    }

    #[test]
    fn test_find_closest() {
        let palette = primaries();
        assert_eq!(find_closest(Rgb::new(230, 20, 10), &palette).unwrap(), "red");
        assert_eq!(find_closest(Rgb::new(10, 10, 40), &palette).unwrap(), "black");
        assert_eq!(find_closest(Rgb::new(250, 250, 245), &palette).unwrap(), "white");
    }

    #[test]
    fn test_exact_hit_has_zero_distance() {
        let palette = primaries();
        let m = find_closest_match(Rgb::new(0, 0, 255), &palette).unwrap();
        assert_eq!(m.code, "blue");
        assert_eq!(m.index, 3);
        assert_eq!(m.rgb, Rgb::new(0, 0, 255));
        assert_eq!(m.distance, 0.0);
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        let palette = ReferencePalette::new([
            ("A", Rgb::new(10, 10, 10)),
            ("B", Rgb::new(10, 10, 10)),
        ]);
        for rgb in [Rgb::new(0, 0, 0), Rgb::new(10, 10, 10), Rgb::new(200, 0, 90)] {
            assert_eq!(find_closest(rgb, &palette).unwrap(), "A");
            for strategy in [SearchStrategy::Linear, SearchStrategy::Tree] {
                let matcher = NearestMatcher::with_strategy(palette.clone(), strategy);
                assert_eq!(matcher.find_closest(rgb).unwrap(), "A");
            }
        }
    }

    #[test]
    fn test_empty_palette() {
        let palette = ReferencePalette::default();
        assert!(matches!(
            find_closest(Rgb::new(1, 2, 3), &palette),
            Err(MatchError::EmptyPalette)
        ));

        let matcher = NearestMatcher::with_strategy(palette, SearchStrategy::Tree);
        assert!(matches!(
            matcher.find_closest(Rgb::new(1, 2, 3)),
            Err(MatchError::EmptyPalette)
        ));
    }

    #[test]
    fn test_auto_strategy_threshold() {
        let small = NearestMatcher::new(primaries());
        assert!(!small.is_indexed());

        let indexed = NearestMatcher::with_strategy(primaries(), SearchStrategy::Auto { tree_threshold: 5 });
        assert!(indexed.is_indexed());
    }

    #[test]
    fn test_tree_agrees_with_linear() {
        let mut entries = Vec::new();
        for r in (0..=255u8).step_by(32) {
            for g in (0..=255u8).step_by(40) {
                for b in (0..=255u8).step_by(48) {
                    entries.push((format!("{r}-{g}-{b}"), Rgb::new(r, g, b)));
                }
            }
        }
        // Duplicate RGB under a later code must never win
        entries.push(("dup".to_string(), Rgb::new(32, 40, 48)));
        let palette = Arc::new(ReferencePalette::new(entries));

        let linear = NearestMatcher::with_strategy(Arc::clone(&palette), SearchStrategy::Linear);
        let tree = NearestMatcher::with_strategy(Arc::clone(&palette), SearchStrategy::Tree);
        for r in (3..=255u8).step_by(21) {
            for g in (7..=255u8).step_by(19) {
                for b in (0..=255u8).step_by(25) {
                    let rgb = Rgb::new(r, g, b);
                    let expected = linear.find_closest_match(rgb).unwrap();
                    let got = tree.find_closest_match(rgb).unwrap();
                    assert_eq!(got, expected, "query {rgb}");
                    assert_ne!(got.code, "dup");
                }
            }
        }
    }
}
