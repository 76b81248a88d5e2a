use bevy::prelude::*;
use thiserror::Error;

/// Data-integrity failures that abort the running tick. Per-entity
/// problems (a missing perception set, a despawned dialog target) are
/// logged and skipped instead; only malformed world data lands here.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid terrain height data (empty grid)")]
    InvalidTerrain,
    #[error("town {0} has no market, but it should")]
    MissingMarket(Entity),
    #[error("market references missing item {0}")]
    InvalidItem(Entity),
}
