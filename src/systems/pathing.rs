use bevy::prelude::*;

use crate::{
    components::{
        army::Army, pathing::Pathing, perception::Perception, Position, Velocity,
    },
    systems::xz_distance,
};

const ARRIVAL_EPSILON: f32 = 0.5;

/// Grants velocity to entities that have the will to path somewhere,
/// and clears the goal for the arrived and for those losing sight of a
/// tracked target.
///
/// Arrival and goal removal always go together: a cleared goal leaves
/// the direction zeroed, never a stale heading.
pub fn tick(
    mut commands: Commands,
    mut query: Query<
        (
            Entity,
            Option<&Perception>,
            &Pathing,
            &Position,
            &mut Velocity,
        ),
        With<Army>,
    >,
    q_target: Query<&Position>,
) {
    for (ent, perception, pathing, pos, mut vel) in &mut query {
        let dest = match *pathing {
            Pathing::Track(target) => {
                let seen = perception.is_some_and(|perception| perception.sees(target));
                if !seen {
                    info!("{} lost view of {}, stop pathing", ent, target);
                    vel.dir = Vec3::ZERO;
                    commands.entity(ent).remove::<Pathing>();
                    continue;
                }
                let Ok(target_pos) = q_target.get(target) else {
                    info!("{} target {} is gone, stop pathing", ent, target);
                    vel.dir = Vec3::ZERO;
                    commands.entity(ent).remove::<Pathing>();
                    continue;
                };
                **target_pos
            }
            Pathing::Point(dest) => dest,
        };

        if xz_distance(dest, **pos) > ARRIVAL_EPSILON {
            // Full 3-D direction so agents path up and down slopes.
            match (dest - **pos).try_normalize() {
                Some(dir) => {
                    debug!("pathing: {} -> ({:.1}, {:.1}, {:.1})", ent, dest.x, dest.y, dest.z);
                    vel.dir = dir;
                }
                None => {
                    // Destination coincides with the position; counts
                    // as arrived rather than producing a NaN heading.
                    vel.dir = Vec3::ZERO;
                    commands.entity(ent).remove::<Pathing>();
                }
            }
        } else {
            debug!("pathing: {} arrived ({:.1}, {:.1}, {:.1})", ent, pos.x, pos.y, pos.z);
            vel.dir = Vec3::ZERO;
            commands.entity(ent).remove::<Pathing>();
        }
    }
}
