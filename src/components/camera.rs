use bevy::prelude::*;

/// Which camera an entity's view represents.
#[derive(Clone, Component, Copy, Debug, Default, Eq, PartialEq)]
pub enum ViewMode {
    #[default]
    God,
    FirstPerson,
}

/// Marks the camera that walks the terrain in first-person mode.
#[derive(Clone, Component, Copy, Default)]
pub struct FpsCamera;

/// Free-look camera orientation. Position lives in the entity's
/// `Position` component.
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    /// Forward direction derived from yaw/pitch. Positive yaw turns
    /// toward -z.
    pub fn front(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.sin(),
            -self.pitch.cos() * self.yaw.sin(),
        )
    }
}
