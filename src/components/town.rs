use bevy::prelude::*;

/// A settlement on the campaign map. Towns must own a `Market`; the
/// integrity pass treats a marketless town as corrupt world data.
#[derive(Clone, Component, Copy, Default)]
pub struct Town;

/// Goods for sale in a town, as entities carrying `Item`.
#[derive(Clone, Component, Debug, Default)]
pub struct Market {
    pub items: Vec<Entity>,
}

/// Basically, everything tradeable in the game is an item.
#[derive(Clone, Component, Debug)]
pub struct Item {
    pub name: String,
    pub price: f32,
}
