use bevy::prelude::*;
use rand::Rng;

use crate::{
    components::{
        army::Army, cooldown::AiCooldown, pathing::Pathing, perception::Perception, AiControlled,
        Position,
    },
    resources::SimRng,
};

const DECISION_PERIOD: f32 = 1.0;
const WANDER_CHANCE: f32 = 0.3;
const WANDER_RANGE: f32 = 100.0;

/// Per-agent decision pass.
///
/// A visible rival wins over everything: the chase goal is re-latched
/// onto the front of the visible-set every frame, bypassing the
/// cooldown. Otherwise the cooldown runs down, and an idle agent that
/// comes off it rolls for a wander destination.
pub fn tick(
    mut commands: Commands,
    time: Res<Time>,
    mut rng: ResMut<SimRng>,
    mut query: Query<
        (
            Entity,
            Option<&Perception>,
            Option<&mut AiCooldown>,
            Has<Pathing>,
        ),
        (With<AiControlled>, With<Army>, With<Position>),
    >,
) {
    let dt = time.delta_secs();
    for (ent, perception, cooldown, has_pathing) in &mut query {
        let Some(perception) = perception else {
            error!("agent {} has no perception this frame, skipping", ent);
            continue;
        };

        if let Some(&rival) = perception.visible.first() {
            commands.entity(ent).insert(Pathing::Track(rival));
            continue;
        }

        let fired = match cooldown {
            Some(mut cooldown) => cooldown.tick(dt),
            None => {
                // First decision tick: the timer starts at zero and
                // fires straight away.
                let mut cooldown = AiCooldown::new(DECISION_PERIOD);
                let fired = cooldown.tick(dt);
                commands.entity(ent).insert(cooldown);
                fired
            }
        };
        if !fired || has_pathing {
            continue;
        }

        if rng.chance(WANDER_CHANCE) {
            let dest = Vec3::new(
                rng.random_range(0.0..WANDER_RANGE),
                0.0,
                rng.random_range(0.0..WANDER_RANGE),
            );
            commands.entity(ent).insert(Pathing::Point(dest));
            info!("{} randomly wandering toward ({:.1}, {:.1})", ent, dest.x, dest.z);
        }
    }
}
