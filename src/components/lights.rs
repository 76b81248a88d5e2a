use bevy::prelude::*;

/// Phong terms shared by every light kind. The renderer reads these;
/// the simulation only moves the emitters around.
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct Light {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

/// Directional light standing in for the sun; `dir` is animated over
/// the day by the movement pass.
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct SunLight {
    pub dir: Vec3,
}

/// Point light attenuation. Owns no position of its own; pair it with
/// a `Position` component.
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct PointLight {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

/// Flashlight-style cone. While first-person mode is active it is
/// re-parented onto the first-person camera every frame.
#[derive(Clone, Component, Copy, Debug, Default)]
pub struct SpotLight {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
    pub dir: Vec3,
    pub cut_off: f32,
    pub outer_cut_off: f32,
}
