//! Battlefield configuration
//!
//! Symbols used to read and render ASCII maps, and targeting defaults.
//! Every field has a default so a config file only needs to name what it
//! overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::battlefield::terrain::GroundTile;
use crate::core::error::{BattlefieldError, Result};
use crate::core::types::Team;

/// Single-character symbols for each kind of cell content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    pub grass: char,
    pub rock: char,
    pub champion: char,
    pub blue_nexus: char,
    pub red_nexus: char,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            grass: '~',
            rock: '*',
            champion: 'C',
            blue_nexus: 'B',
            red_nexus: 'R',
        }
    }
}

impl SymbolConfig {
    /// Symbol drawn for a ground tile
    pub fn ground(&self, tile: GroundTile) -> char {
        match tile {
            GroundTile::Grass => self.grass,
            GroundTile::Rock => self.rock,
        }
    }

    /// Ground tile represented by `symbol`, if any
    pub fn ground_from(&self, symbol: char) -> Option<GroundTile> {
        GroundTile::all()
            .into_iter()
            .find(|tile| self.ground(*tile) == symbol)
    }

    /// Symbol drawn for a team's nexus
    pub fn nexus(&self, team: Team) -> char {
        match team {
            Team::Blue => self.blue_nexus,
            Team::Red => self.red_nexus,
        }
    }

    fn all(&self) -> [char; 5] {
        [
            self.grass,
            self.rock,
            self.champion,
            self.blue_nexus,
            self.red_nexus,
        ]
    }
}

/// Defaults for ring-scan based targeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    /// Ring radius used when the caller does not supply one
    pub default_radius: u32,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self { default_radius: 1 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattlefieldConfig {
    pub symbols: SymbolConfig,
    pub targeting: TargetingConfig,
}

impl BattlefieldConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        let symbols = self.symbols.all();

        if let Some(c) = symbols.iter().find(|c| c.is_whitespace()) {
            return Err(format!("symbol {:?} is whitespace", c));
        }

        for (i, a) in symbols.iter().enumerate() {
            if symbols[i + 1..].contains(a) {
                return Err(format!("symbol '{}' is used for more than one cell kind", a));
            }
        }

        if self.targeting.default_radius == 0 {
            return Err("targeting.default_radius must be at least 1".into());
        }

        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BattlefieldConfig = toml::from_str(content)?;
        config.validate().map_err(BattlefieldError::InvalidConfig)?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded battlefield config from {:?}", path);
        Ok(config)
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<BattlefieldConfig> = OnceLock::new();

/// Get the global battlefield config (initializes with defaults if not set)
pub fn config() -> &'static BattlefieldConfig {
    CONFIG.get_or_init(BattlefieldConfig::default)
}

/// Set the global battlefield config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: BattlefieldConfig) -> std::result::Result<(), BattlefieldConfig> {
    CONFIG.set(config)
}
