pub mod terrain;

use std::collections::BTreeMap;

use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::components::camera::ViewMode;

/// Top-level mode of the running game.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Resource)]
pub enum GameState {
    #[default]
    Normal,
    InDialog,
}

/// Which camera view the player is currently driving.
#[derive(Clone, Copy, Debug, Default, Deref, Eq, PartialEq, Resource)]
pub struct ActiveViewMode(pub ViewMode);

/// Process-wide random source for AI decisions.
///
/// Seeded from the OS at startup; tests replace it with `seeded` to get
/// a deterministic stream.
#[derive(Deref, DerefMut, Resource)]
pub struct SimRng(StdRng);

impl Default for SimRng {
    fn default() -> Self {
        SimRng(StdRng::from_os_rng())
    }
}

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        SimRng(StdRng::seed_from_u64(seed))
    }

    /// One Bernoulli trial with success probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.0.random_bool(f64::from(p))
    }
}

/// Pairs in this map won't collide again for the remaining time.
///
/// Keys are canonical: the lower entity id always comes first, so
/// (a, b) and (b, a) share one entry. Owned by the simulation driver
/// and injected into the collision pass; `clear` resets it between
/// test runs.
#[derive(Default, Resource)]
pub struct RecentCollisions(BTreeMap<(Entity, Entity), f32>);

impl RecentCollisions {
    fn key(a: Entity, b: Entity) -> (Entity, Entity) {
        if a < b { (a, b) } else { (b, a) }
    }

    /// Age every entry by `dt` seconds and drop the ones whose window
    /// has elapsed.
    pub fn tick(&mut self, dt: f32) {
        self.0.retain(|&(a, b), remaining| {
            *remaining -= dt;
            if *remaining <= 0.0 {
                debug!("collision pair <{} {}> eligible again", a, b);
                return false;
            }
            true
        });
    }

    pub fn suppressed(&self, a: Entity, b: Entity) -> bool {
        self.0.contains_key(&Self::key(a, b))
    }

    pub fn suppress(&mut self, a: Entity, b: Entity, window: f32) {
        self.0.insert(Self::key(a, b), window);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
