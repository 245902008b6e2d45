//! Configuration for building a [`ColorIdentifier`](crate::ColorIdentifier)
//!
//! Names the palette source and the search strategy. Configuration can be
//! loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use munsell_match::IdentifierConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = IdentifierConfig::from_json_file(Path::new("identifier.json"))?;
//!
//! // Or use defaults
//! let config = IdentifierConfig::default();
//! # Ok::<(), munsell_match::MatchError>(())
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::matching::SearchStrategy;
use crate::reference::DelimitedFormat;

/// Complete configuration for a color identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifierConfig {
    /// Where the reference palette comes from
    pub palette: PaletteSourceConfig,

    /// Nearest-match search strategy
    #[serde(default)]
    pub search: SearchStrategy,
}

/// Reference palette file and its layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteSourceConfig {
    /// Palette file path
    pub path: PathBuf,

    /// File layout
    #[serde(default)]
    pub format: PaletteFormat,
}

/// Supported palette file layouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaletteFormat {
    /// One `code,r,g,b` row per entry
    Delimited(DelimitedFormat),
    /// Array of `{"code", "r", "g", "b"}` objects
    Json,
}

impl Default for PaletteFormat {
    fn default() -> Self {
        Self::Delimited(DelimitedFormat::default())
    }
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            palette: PaletteSourceConfig {
                path: PathBuf::from("data/munsell_colors.csv"),
                format: PaletteFormat::default(),
            },
            search: SearchStrategy::default(),
        }
    }
}

impl IdentifierConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MatchError::config(format!("cannot read {}", path.display()), e))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| MatchError::config("invalid configuration JSON", e))
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MatchError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| MatchError::config(format!("cannot write {}", path.display()), e))
    }
}
