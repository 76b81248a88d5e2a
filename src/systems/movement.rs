use bevy::ecs::error::Result;
use bevy::prelude::*;

use crate::{
    components::{
        army::Army,
        camera::{Camera, FpsCamera, ViewMode},
        lights::{Light, SpotLight, SunLight},
        Position, Velocity,
    },
    error::SimError,
    resources::{terrain::Terrain, ActiveViewMode},
};

const STILL_EPSILON: f32 = 1e-5;
const GROUND_CLEARANCE: f32 = 2.0;
const SUN_SPEED: f32 = 0.5;

/// Swings the sun along a circular arc as in-game time passes.
pub fn animate_sun(time: Res<Time>, mut query: Query<&mut SunLight>) {
    let angle = time.elapsed_secs() * SUN_SPEED;
    for mut sun in &mut query {
        sun.dir = Vec3::new(angle.cos(), -angle.sin(), angle.sin() * 0.5).normalize();
    }
}

/// Moves everything that has velocity along its direction, snapping
/// grounded entities (armies and the first-person camera) onto the
/// terrain afterwards.
pub fn integrate(
    time: Res<Time>,
    terrain: Res<Terrain>,
    mut query: Query<(Entity, &mut Position, &Velocity, Has<Army>, Has<FpsCamera>)>,
) -> Result {
    if terrain.is_empty() {
        return Err(SimError::InvalidTerrain.into());
    }

    let dt = time.delta_secs();
    for (ent, mut pos, vel, is_army, is_fps_camera) in &mut query {
        if vel.dir.length() < STILL_EPSILON {
            // Regarded as still.
            continue;
        }
        let Some(dir) = vel.dir.try_normalize() else {
            continue;
        };
        **pos += dir * vel.speed * dt;

        if is_army || is_fps_camera {
            pos.y = terrain.height_at(pos.x, pos.z) + GROUND_CLEARANCE;
        }

        debug!("entity {} pos={},{},{}", ent, pos.x, pos.y, pos.z);
    }
    Ok(())
}

/// Re-parents every camera-tracking spotlight onto the first-person
/// camera while that view is active.
pub fn follow_camera(
    active: Res<ActiveViewMode>,
    mut q_spots: Query<(&mut SpotLight, &mut Position), With<Light>>,
    q_cameras: Query<(&Camera, &ViewMode, &Position), Without<SpotLight>>,
) {
    if **active != ViewMode::FirstPerson {
        return;
    }
    for (mut spot, mut pos) in &mut q_spots {
        for (camera, view_mode, camera_pos) in &q_cameras {
            if *view_mode != ViewMode::FirstPerson {
                continue;
            }
            **pos = **camera_pos;
            spot.dir = camera.front();
        }
    }
}
