use bevy::ecs::error::Result;
use bevy::prelude::*;

use crate::{
    components::town::{Item, Market, Town},
    error::SimError,
};

/// Validates town data once per tick: every town must own a market and
/// every market entry must resolve to an item. Broken world data here
/// is unrecoverable, so the tick aborts.
pub fn check_markets(
    q_towns: Query<(Entity, Option<&Market>), With<Town>>,
    q_items: Query<&Item>,
) -> Result {
    for (ent, market) in &q_towns {
        let Some(market) = market else {
            error!("town {} doesn't own a market, but it should", ent);
            return Err(SimError::MissingMarket(ent).into());
        };
        for &item_ent in &market.items {
            if q_items.get(item_ent).is_err() {
                error!("invalid item id {}", item_ent);
                return Err(SimError::InvalidItem(item_ent).into());
            }
        }
    }
    Ok(())
}
