use bevy::prelude::*;

/// Fired once per newly-detected, non-suppressed collision involving
/// the local player. Detection only writes the event; handling happens
/// in a separate dispatch pass after the scan completes, so handlers
/// never re-enter the collision scan.
///
/// `player` is always the local player regardless of scan order.
#[derive(Clone, Copy, Debug, Event)]
pub struct Collision {
    pub player: Entity,
    pub other: Entity,
}

/// A UI layer (or test) picked option `option` of the dialog entity.
#[derive(Clone, Copy, Debug, Event)]
pub struct DialogChoice {
    pub dialog: Entity,
    pub option: usize,
}
