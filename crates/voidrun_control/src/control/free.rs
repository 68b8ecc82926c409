//! Free-fly policy: полёт без коллизий и гравитации

use bevy::prelude::*;

use crate::components::ViewCamera;
use crate::config::ControlSettings;
use crate::input::{bindings, InputState};

use super::look::{move_directions, rotate_forward};

/// Один frame free-fly движения
///
/// - LMB зажата → mouse look (`free_look_sensitivity`, без dt)
/// - W/S вдоль ±forward, A/D вдоль ∓strafe
/// - camera.position = transform.translation
pub fn update_free(
    move_speed: f32,
    transform: &mut Transform,
    camera: &mut ViewCamera,
    input: &InputState,
    settings: &ControlSettings,
    dt: f32,
) {
    if input.get_button(bindings::LOOK) {
        let delta = input.mouse_delta() * settings.free_look_sensitivity;
        camera.forward = rotate_forward(camera.forward, delta.x, delta.y);
    }

    let (forward_dir, strafe_dir) = move_directions(camera.forward, move_speed * dt);

    if input.get_key(bindings::MOVE_FORWARD) {
        transform.translation += forward_dir;
    }
    if input.get_key(bindings::MOVE_BACK) {
        transform.translation -= forward_dir;
    }
    if input.get_key(bindings::STRAFE_LEFT) {
        transform.translation -= strafe_dir;
    }
    if input.get_key(bindings::STRAFE_RIGHT) {
        transform.translation += strafe_dir;
    }

    camera.position = transform.translation;
}
