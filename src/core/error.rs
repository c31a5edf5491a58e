use thiserror::Error;

#[derive(Error, Debug)]
pub enum BattlefieldError {
    #[error("No ground tile with the representation `{symbol}` (line {line}, column {column})")]
    UnknownGroundSymbol {
        symbol: char,
        line: usize,
        column: usize,
    },

    #[error("Terrain row {row} has {found} tiles, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Terrain must be at least 1x1")]
    EmptyTerrain,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BattlefieldError>;
