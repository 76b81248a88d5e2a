use bevy::prelude::*;

/// The set of rival agents currently visible to an agent.
///
/// Fully recomputed by the perception pass every frame; `visible` holds
/// entities in rival-scan order and must never be read across a frame
/// boundary.
#[derive(Clone, Component, Debug, Default)]
pub struct Perception {
    pub visible: Vec<Entity>,
}

impl Perception {
    pub fn sees(&self, ent: Entity) -> bool {
        self.visible.contains(&ent)
    }
}
