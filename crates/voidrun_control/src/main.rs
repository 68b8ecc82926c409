//! Headless control демо VOIDRUN
//!
//! FPS игрок падает на плоский пол, идёт вперёд до стены, прыгает, крутит камеру.
//! Probe коллайдеры считает упрощённая система ниже (пол y=0, стена z=-6).
//!
//! Опционально: `voidrun_control <settings.json> [fps_tuning.json]`: ControlSettings
//! и FpsTuning игрока из файлов.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use voidrun_control::*;

const FRAMES: u32 = 300;
const WALL_Z: f32 = -6.0;
const PROBE_REACH: f32 = 0.5;

fn main() {
    let mut app = create_headless_app();

    let mut tuning = FpsTuning::default();
    if let Some(path) = std::env::args().nth(2) {
        match load_fps_tuning(&path) {
            Ok(loaded) => {
                log_info(&format!("Loaded FPS tuning from {}: {:?}", path, loaded));
                tuning = loaded;
            }
            Err(err) => {
                log_error(&format!("{}, using default tuning", err));
            }
        }
    }

    if let Some(path) = std::env::args().nth(1) {
        match load_settings(&path) {
            Ok(settings) => {
                log_info(&format!("Loaded settings from {}: {:?}", path, settings));
                app.insert_resource(settings);
            }
            Err(err) => {
                log_error(&format!("{}, using defaults", err));
            }
        }
    }

    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(1.0 / 60.0)))
        .add_systems(
            Update,
            (scripted_input, flat_world_probes)
                .chain()
                .before(ControlSet::Step),
        );

    let (player, _) = spawn_fps_player(
        &mut app.world_mut().commands(),
        Vec3::new(0.0, 4.0, 0.0),
        CameraId::PLAYER,
        tuning,
    );
    spawn_free_camera(
        &mut app.world_mut().commands(),
        Vec3::new(0.0, 10.0, 10.0),
        CameraId::DEBUG,
        8.0,
    );
    app.world_mut().flush();

    log_info(&format!("Starting headless control demo ({} frames)", FRAMES));

    for frame in 0..FRAMES {
        app.update();

        if frame % 30 == 0 {
            let world = app.world();
            if let Some(transform) = world.get::<Transform>(player) {
                log_info(&format!(
                    "Frame {}: player at {:.2?}, active camera {:?}",
                    frame,
                    transform.translation,
                    world.resource::<CameraRegistry>().active
                ));
            }
        }
    }

    log_info("Demo complete!");
}

/// Скрипт input'а: пауза → вперёд → прыжок → поворот мышью → debug камера
fn scripted_input(mut frame: Local<u32>, mut events: EventWriter<RawInputEvent>) {
    match *frame {
        60 => {
            events.write(RawInputEvent::press(InputCode::W));
        }
        120 => {
            events.write(RawInputEvent::press(InputCode::Space));
        }
        125 => {
            events.write(RawInputEvent::release(InputCode::Space));
        }
        200 => {
            events.write(RawInputEvent::release(InputCode::W));
            events.write(RawInputEvent::press(InputCode::MouseLeft));
        }
        201..=230 => {
            let step = (*frame - 200) as f32;
            events.write(RawInputEvent::MouseMoved { x: step * 4.0, y: 0.0 });
        }
        231 => {
            events.write(RawInputEvent::release(InputCode::MouseLeft));
        }
        270 => {
            events.write(RawInputEvent::press(InputCode::O));
        }
        271 => {
            events.write(RawInputEvent::release(InputCode::O));
        }
        _ => {}
    }
    *frame += 1;
}

/// Упрощённые probes: пол на y=0 всегда под игроком, стена на z=WALL_Z
fn flat_world_probes(
    players: Query<(&Control, &Transform)>,
    mut probes: Query<&mut Collider>,
) {
    for (control, transform) in players.iter() {
        let Some(fps) = control.as_fps() else {
            continue;
        };
        let position = transform.translation;

        if let Ok(mut down) = probes.get_mut(fps.colliders.down) {
            *down = Collider::hit(Vec3::new(position.x, 0.0, position.z));
        }
        if let Ok(mut forward) = probes.get_mut(fps.colliders.forward) {
            *forward = if position.z - PROBE_REACH <= WALL_Z {
                Collider::hit(Vec3::new(position.x, position.y, WALL_Z))
            } else {
                Collider::miss()
            };
        }
    }
}
