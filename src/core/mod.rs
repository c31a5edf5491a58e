pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, BattlefieldConfig, SymbolConfig, TargetingConfig};
pub use error::{BattlefieldError, Result};
pub use types::{ChampionId, OccupantId, Position, Team};
