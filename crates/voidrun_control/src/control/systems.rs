//! Control update step (ECS)

use bevy::prelude::*;

use crate::components::{CameraRegistry, Collider, Control, ControlKind, ViewCamera};
use crate::config::ControlSettings;
use crate::input::InputState;
use crate::logger::{log, log_error, log_info};

use super::fps::{camera_switch_request, update_fps, ControlSpeeds, FpsProbes};
use super::free::update_free;

/// Система: один frame control step для всех Control entity
///
/// # Архитектура
/// - Читает: InputState, ControlSettings, Time (dt), Collider (probe результаты)
/// - Пишет: Control (FPS состояние), Transform, ViewCamera, CameraRegistry
/// - Run condition: ControlContext::InGame (см. `ControlPlugin`)
///
/// Entity обновляются независимо, порядок не гарантирован.
/// FPS entity со сломанными collider handles пропускается (log_error).
pub fn update_controls(
    time: Res<Time>,
    input: Res<InputState>,
    settings: Res<ControlSettings>,
    mut registry: ResMut<CameraRegistry>,
    mut controls: Query<(Entity, &mut Control, &mut Transform, &mut ViewCamera)>,
    colliders: Query<&Collider>,
) {
    let dt = time.delta_secs();

    for (entity, mut control, mut transform, mut camera) in controls.iter_mut() {
        let speeds = ControlSpeeds {
            move_speed: control.move_speed,
            turn_speed: control.turn_speed,
        };

        match &mut control.kind {
            ControlKind::Free => {
                update_free(
                    speeds.move_speed,
                    &mut transform,
                    &mut camera,
                    &input,
                    &settings,
                    dt,
                );
            }
            ControlKind::Fps(fps) => {
                let probes = match FpsProbes::resolve(entity, &fps.colliders, |collider| {
                    colliders.get(collider).ok().copied()
                }) {
                    Ok(probes) => probes,
                    Err(err) => {
                        log_error(&format!("update_controls: {}", err));
                        continue;
                    }
                };

                let report = update_fps(
                    fps,
                    speeds,
                    &mut transform,
                    &mut camera,
                    &probes,
                    &input,
                    &settings,
                    dt,
                );

                if report.landed {
                    log(&format!("{:?} landed at y={:.3}", entity, transform.translation.y));
                }
                if report.jumped {
                    log(&format!("{:?} jump (force {:.2})", entity, fps.jump_force));
                }

                if let Some(id) = camera_switch_request(&input, &settings, &camera) {
                    if registry.activate(id) {
                        log_info(&format!("{:?} switched active camera to {:?}", entity, id));
                    }
                }
            }
        }
    }
}
