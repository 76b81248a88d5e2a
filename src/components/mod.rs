pub mod army;
pub mod camera;
pub mod cooldown;
pub mod dialog;
pub mod lights;
pub mod pathing;
pub mod perception;
pub mod town;

use bevy::prelude::*;

/// World-space position of an entity, in world units.
#[derive(Clone, Component, Copy, Debug, Default, Deref, DerefMut, PartialEq)]
pub struct Position(pub Vec3);

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Position(Vec3::new(x, y, z))
    }
}

/// Movement state: a direction (unit or zero) and a scalar speed.
///
/// `speed` shouldn't be tweaked except when an entity's moving speed has
/// actually changed. To stop an entity, set `dir` to zero instead.
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct Velocity {
    pub dir: Vec3,
    pub speed: f32,
}

impl Velocity {
    pub fn still(speed: f32) -> Self {
        Velocity { dir: Vec3::ZERO, speed }
    }
}

/// Marks an entity as driven by the AI decision system.
#[derive(Clone, Component, Copy, Default)]
pub struct AiControlled;

/// Marks the entity controlled by the local player.
#[derive(Clone, Component, Copy, Default)]
pub struct LocalPlayer;

/// Participates in pairwise collision checks.
#[derive(Clone, Component, Copy, Default)]
pub struct Collidable;
