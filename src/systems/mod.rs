pub mod ai;
pub mod collision;
pub mod dialog;
pub mod movement;
pub mod pathing;
pub mod perception;
pub mod town;

use bevy::prelude::*;

/// Planar distance, ignoring the vertical axis. Perception and arrival
/// checks use this so hill height never hides a neighbor.
pub fn xz_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x, a.z).distance(Vec2::new(b.x, b.z))
}
