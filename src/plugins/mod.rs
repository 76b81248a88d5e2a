use bevy::prelude::*;

use crate::{
    events::{Collision, DialogChoice},
    resources::{terrain::Terrain, ActiveViewMode, GameState, RecentCollisions, SimRng},
    systems::{ai, collision, dialog, movement, pathing, perception, town},
};

/// Wires the whole campaign tick into the `Update` schedule.
///
/// The order is fixed and sequential; command buffers flush between
/// stages, so a goal assigned by the AI pass steers movement within
/// the same tick, and collision events are dispatched after the scan
/// finishes.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameState>()
            .init_resource::<ActiveViewMode>()
            .init_resource::<SimRng>()
            .init_resource::<RecentCollisions>()
            .init_resource::<Terrain>()
            .add_event::<Collision>()
            .add_event::<DialogChoice>()
            .add_systems(
                Update,
                (
                    perception::tick,
                    ai::tick,
                    pathing::tick,
                    movement::animate_sun,
                    movement::integrate,
                    movement::follow_camera,
                    collision::tick,
                    dialog::open_dialogs,
                    dialog::resolve_choices,
                    town::check_markets,
                )
                    .chain(),
            );
    }
}
