use bevy::prelude::*;

/// Where an entity wants to go: a fixed point in the world, or another
/// entity it keeps tracking as the target moves.
///
/// Assigned by the AI decision pass (or player input); removed by the
/// pathing pass on arrival or when a tracked target drops out of view.
#[derive(Clone, Component, Copy, Debug, PartialEq)]
pub enum Pathing {
    Point(Vec3),
    Track(Entity),
}
