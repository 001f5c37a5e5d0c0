use bevy::log::LogPlugin;
use bevy::math::primitives::{Circle, Triangle2d};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::simulation::scene::BodyHandle;
use crate::simulation::states::{NVec2, Rgba};

#[derive(Resource)]
struct Sim(Scenario);

#[derive(Component)]
struct BodyIndex(BodyHandle);

/// Body currently held by the mouse
#[derive(Resource, Default)]
struct Grab(Option<BodyHandle>);

const BACKGROUND: Color = Color::srgb(0.2, 0.3, 0.3);

/// Static decoration: a unit triangle scaled up and placed in world space
const MARKER_ORIGIN: [f64; 2] = [100.0, 100.0];
const MARKER_SCALE: f64 = 200.0;
const MARKER_COLOR: Rgba = Rgba::new(0.5, 1.0, 0.3, 1.0);

pub fn run_2d(scenario: Scenario) {
    log::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.scene.len());

    let window = Window {
        title: "Physics".into(),
        resolution: (scenario.engine.width as f32, scenario.engine.height as f32).into(),
        resizable: false,
        ..default()
    };

    App::new()
        .insert_resource(ClearColor(BACKGROUND))
        .insert_resource(Sim(scenario))
        .init_resource::<Grab>()
        // env_logger already owns the global logger
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                pause_toggle_system,
                drag_body_system,
                physics_step_system,
                sync_transforms_system,
                draw_obstacles_system,
            )
                .chain(),
        )
        .run();
}

fn to_color(c: Rgba) -> Color {
    Color::srgba(c.r, c.g, c.b, c.a)
}

/// World space has its origin at the bottom-left corner, Bevy's 2D camera
/// looks at the window center
fn to_screen(p: NVec2, sim: &Scenario) -> Vec2 {
    Vec2::new(
        (p.x - 0.5 * sim.engine.width) as f32,
        (p.y - 0.5 * sim.engine.height) as f32,
    )
}

/// World-space corners of the unit triangle (-0.5,-0.5) (0.5,-0.5) (0,0.5)
/// scaled by `scale` around `origin`
fn marker_vertices(origin: NVec2, scale: f64) -> [NVec2; 3] {
    [
        NVec2::new(-0.5, -0.5),
        NVec2::new(0.5, -0.5),
        NVec2::new(0.0, 0.5),
    ]
    .map(|v| origin + v * scale)
}

fn setup_bodies_system(mut commands: Commands, sim: Res<Sim>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    let [a, b, c] = marker_vertices(MARKER_ORIGIN.into(), MARKER_SCALE).map(|v| to_screen(v, &sim.0));
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Triangle2d::new(a, b, c))),
        material: materials.add(ColorMaterial::from(to_color(MARKER_COLOR))),
        // behind the bodies
        transform: Transform::from_xyz(0.0, 0.0, -1.0),
        ..Default::default()
    });

    for handle in sim.0.scene.handles() {
        let Some(body) = sim.0.scene.body(handle) else {
            continue;
        };
        let pos = to_screen(body.x, &sim.0);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius() as f32))),
                material: materials.add(ColorMaterial::from(to_color(body.color))),
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            BodyIndex(handle),
        ));
    }
}

fn pause_toggle_system(keys: Res<ButtonInput<KeyCode>>, mut sim: ResMut<Sim>) {
    if keys.just_pressed(KeyCode::Space) {
        sim.0.toggle_pause();
    }
}

/// Left mouse drags a body; position only, velocity is left as it was
fn drag_body_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut grab: ResMut<Grab>,
    mut sim: ResMut<Sim>,
) {
    if buttons.just_released(MouseButton::Left) {
        grab.0 = None;
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    // cursor is relative to the top-left corner, y down
    let (w, h) = (sim.0.engine.width, sim.0.engine.height);
    let p = NVec2::new(
        (cursor.x as f64).clamp(0.0, w),
        (h - cursor.y as f64).clamp(0.0, h),
    );

    if buttons.just_pressed(MouseButton::Left) {
        grab.0 = sim.0.scene.pick(p);
    }
    if let Some(handle) = grab.0 {
        if let Some(body) = sim.0.scene.body_mut(handle) {
            body.x = p;
        }
    }
}

fn physics_step_system(time: Res<Time>, mut sim: ResMut<Sim>) {
    sim.0.advance(time.delta_seconds_f64());
}

fn sync_transforms_system(sim: Res<Sim>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(handle), mut transform) in &mut query {
        if let Some(b) = sim.0.scene.body(*handle) {
            let pos = to_screen(b.x, &sim.0);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn draw_obstacles_system(mut gizmos: Gizmos, sim: Res<Sim>) {
    for o in sim.0.scene.obstacles() {
        gizmos.line_2d(to_screen(o.a, &sim.0), to_screen(o.b, &sim.0), to_color(o.color));
    }
}
