use bevy::prelude::*;

use crate::{
    components::{army::Army, perception::Perception, Position},
    systems::xz_distance,
};

const VIEW_DISTANCE: f32 = 10.0;

/// Rebuilds every agent's visible-set from scratch: all other agents
/// within `VIEW_DISTANCE` on the XZ plane, in scan order. Quadratic
/// over the agent count; fine for campaign-map army counts.
pub fn tick(
    mut commands: Commands,
    mut q_agents: Query<(Entity, &Position, Option<&mut Perception>), With<Army>>,
    q_armies: Query<(Entity, &Position), With<Army>>,
) {
    for (ent, pos, perception) in &mut q_agents {
        let mut visible = Vec::new();
        for (other, other_pos) in &q_armies {
            if other == ent {
                continue;
            }
            if xz_distance(**pos, **other_pos) < VIEW_DISTANCE {
                visible.push(other);
            }
        }

        match perception {
            Some(mut perception) => perception.visible = visible,
            None => {
                commands.entity(ent).insert(Perception { visible });
            }
        }
    }
}
