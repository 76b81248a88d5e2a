use bevy::prelude::*;

use crate::{
    components::{Collidable, LocalPlayer, Position},
    events::Collision,
    resources::RecentCollisions,
};

const COLLISION_RADIUS: f32 = 1.0;
const SUPPRESSION_WINDOW: f32 = 1.0;

/// Pairwise collision scan over collidable entities.
///
/// Ages the suppression map first, then walks every canonical pair
/// (lower entity id first) not currently suppressed. A detected pair
/// is suppressed for `SUPPRESSION_WINDOW` seconds; an event fires only
/// when the local player is involved, and only the dispatch pass later
/// in the tick acts on it. Quadratic over the collidable count.
pub fn tick(
    time: Res<Time>,
    mut recent: ResMut<RecentCollisions>,
    mut writer: EventWriter<Collision>,
    query: Query<(Entity, &Position, Has<LocalPlayer>), With<Collidable>>,
) {
    recent.tick(time.delta_secs());

    let mut bodies: Vec<(Entity, Vec3, bool)> = query
        .iter()
        .map(|(ent, pos, is_player)| (ent, **pos, is_player))
        .collect();
    bodies.sort_unstable_by_key(|&(ent, ..)| ent);

    for (i, &(first, first_pos, first_is_player)) in bodies.iter().enumerate() {
        for &(second, second_pos, second_is_player) in &bodies[i + 1..] {
            if recent.suppressed(first, second) {
                continue;
            }
            if first_pos.distance(second_pos) > COLLISION_RADIUS {
                continue;
            }
            debug!("collision detected: {} with {}", first, second);
            recent.suppress(first, second, SUPPRESSION_WINDOW);

            if first_is_player || second_is_player {
                let (player, other) = if second_is_player {
                    (second, first)
                } else {
                    (first, second)
                };
                writer.write(Collision { player, other });
            }
        }
    }
}
