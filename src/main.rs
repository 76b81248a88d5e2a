use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use rand::Rng;

use overland::{
    components::{
        army::Army,
        camera::{Camera, FpsCamera, ViewMode},
        lights::{Light, PointLight, SpotLight, SunLight},
        town::{Item, Market, Town},
        AiControlled, Collidable, LocalPlayer, Position, Velocity,
    },
    plugins::SimulationPlugin,
    resources::{terrain::Terrain, SimRng},
};

const TICK_RATE: f64 = 1.0 / 60.0;

fn main() {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            TICK_RATE,
        ))),
        LogPlugin {
            level: bevy::log::Level::INFO,
            filter: "overland=debug".to_owned(),
            ..default()
        },
        SimulationPlugin,
    ));

    app.insert_resource(Terrain::generate(100, 100, 0.05, rand::random()));
    app.add_systems(Startup, init_world);

    app.run();
}

fn init_world(mut commands: Commands, mut rng: ResMut<SimRng>) {
    // Cameras
    commands.spawn((
        Camera { yaw: FRAC_PI_2, pitch: -FRAC_PI_3 },
        Position::new(45.0, 80.0, 100.0),
        Velocity::still(30.0),
        ViewMode::God,
    ));
    let fps_camera = Camera { yaw: FRAC_PI_2, pitch: 0.0 };
    commands.spawn((
        FpsCamera,
        fps_camera,
        Position::new(29.0, 18.0, 50.0),
        Velocity::still(5.0),
        ViewMode::FirstPerson,
    ));

    // Sun
    commands.spawn((
        SunLight { dir: Vec3::new(-1.0, -3.0, 2.0) },
        Light {
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.5),
            specular: Vec3::splat(0.5),
        },
    ));

    // Flashlight following the first-person camera
    commands.spawn((
        SpotLight {
            constant: 1.0,
            linear: 0.045,
            quadratic: 0.0075,
            dir: fps_camera.front(),
            cut_off: 12.0_f32.to_radians().cos(),
            outer_cut_off: 20.0_f32.to_radians().cos(),
        },
        Position::new(29.0, 18.0, 50.0),
        Light {
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::splat(1.0),
        },
    ));

    // The player's warband
    let mut warband = Army::with_stack(1);
    warband.money = 100.0;
    commands.spawn((
        LocalPlayer,
        Collidable,
        warband,
        Position::new(28.0, 17.0, 47.0),
        Velocity::still(25.0),
        PointLight { constant: 1.0, linear: 0.09, quadratic: 0.032 },
        Light {
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.5),
            specular: Vec3::splat(1.0),
        },
    ));

    // Rival armies roaming the map
    for _ in 0..5 {
        let pos = Vec3::new(
            rng.random_range(0.0..100.0),
            0.0,
            rng.random_range(0.0..100.0),
        );
        let army = Army::with_stack(rng.random_range(1..=5));
        info!("spawning a {}-troop army at ({:.1}, {:.1})", army.troop_count(), pos.x, pos.z);
        commands.spawn((
            AiControlled,
            Collidable,
            army,
            Position(pos),
            Velocity::still(20.0),
        ));
    }

    // A market town
    let bread = commands
        .spawn(Item { name: "bread".to_owned(), price: 5.0 })
        .id();
    let horse = commands
        .spawn(Item { name: "sumpter horse".to_owned(), price: 40.0 })
        .id();
    commands.spawn((
        Town,
        Collidable,
        Market { items: vec![bread, horse] },
        Position::new(60.0, 0.0, 60.0),
    ));

    info!("world initialized");
}
