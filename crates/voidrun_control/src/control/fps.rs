//! FPS policy: земля, гравитация, прыжок, блокировка направлений коллайдерами
//!
//! Ground/jump state machine (каждый frame):
//!
//! ```text
//! ground test #1 ──true──► Grounded: snap y, can_jump = true
//!       │
//!     false
//!       ▼
//! Airborne: jump_force затухает (floor 0), y += (jump_force − gravity) * dt
//!       │
//! ground test #2 (после air move) ──true──► snap y
//!       ▼
//! jump (can_jump && Space) ──► can_jump = false, jump_force = initial, y += jump_force * dt
//! ```
//!
//! Обе проверки земли нужны: за один frame падение может уйти ниже точки коллизии.

use bevy::prelude::*;

use crate::components::{CameraId, Collider, FpsColliders, FpsControl, GroundState, ViewCamera};
use crate::config::ControlSettings;
use crate::error::ControlError;
use crate::input::{bindings, InputState};

use super::look::{move_directions, rotate_forward};

/// Снимок пяти probe коллайдеров на этот frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FpsProbes {
    pub down: Collider,
    pub forward: Collider,
    pub back: Collider,
    pub left: Collider,
    pub right: Collider,
}

impl FpsProbes {
    /// Разрешить handles через lookup ECS (обычно `Query<&Collider>::get`)
    pub fn resolve(
        owner: Entity,
        colliders: &FpsColliders,
        lookup: impl Fn(Entity) -> Option<Collider>,
    ) -> Result<Self, ControlError> {
        let fetch = |probe: &'static str, collider: Entity| {
            lookup(collider).ok_or(ControlError::MissingCollider {
                owner,
                probe,
                collider,
            })
        };

        Ok(Self {
            down: fetch("down", colliders.down)?,
            forward: fetch("forward", colliders.forward)?,
            back: fetch("back", colliders.back)?,
            left: fetch("left", colliders.left)?,
            right: fetch("right", colliders.right)?,
        })
    }
}

/// Что произошло за frame (для логов и тестов)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FpsStepReport {
    pub jumped: bool,
    pub landed: bool,
}

/// Скорости entity (копия из Control на время шага)
#[derive(Debug, Clone, Copy)]
pub struct ControlSpeeds {
    pub move_speed: f32,
    pub turn_speed: f32,
}

/// На земле: down probe коллайдит и distance до точки < height + epsilon
pub fn is_grounded(position: Vec3, down: &Collider, height: f32, epsilon: f32) -> bool {
    down.colliding && (position - down.collision_point).length() < height + epsilon
}

/// Один frame FPS движения
#[allow(clippy::too_many_arguments)]
pub fn update_fps(
    fps: &mut FpsControl,
    speeds: ControlSpeeds,
    transform: &mut Transform,
    camera: &mut ViewCamera,
    probes: &FpsProbes,
    input: &InputState,
    settings: &ControlSettings,
    dt: f32,
) -> FpsStepReport {
    let was_grounded = fps.ground == GroundState::Grounded;
    let move_speed = speeds.move_speed * dt;
    let turn_speed = speeds.turn_speed * dt;

    // Mouse look: как free-fly, но turn_speed * dt, и yaw поворачивает тело
    if input.get_button(bindings::LOOK) {
        let delta = input.mouse_delta() * turn_speed;
        camera.forward = rotate_forward(camera.forward, delta.x, delta.y);
        transform.rotate_local_y(delta.x);
    }

    // Collision test #1
    let tuning = fps.tuning;
    if is_grounded(transform.translation, &probes.down, tuning.height, settings.ground_epsilon) {
        fps.can_jump = true;
        fps.ground = GroundState::Grounded;
        transform.translation.y = probes.down.collision_point.y + tuning.height;
    } else {
        fps.ground = GroundState::Airborne;
        fps.jump_force = (fps.jump_force - tuning.jump_force_slowdown * dt).max(0.0);
        transform.translation.y += (fps.jump_force - tuning.gravity) * dt;

        // Collision test #2: air move мог опустить ниже земли
        if is_grounded(transform.translation, &probes.down, tuning.height, settings.ground_epsilon) {
            fps.ground = GroundState::Grounded;
            transform.translation.y = probes.down.collision_point.y + tuning.height;
        }
    }

    let mut report = FpsStepReport {
        jumped: false,
        landed: !was_grounded && fps.ground == GroundState::Grounded,
    };

    if fps.can_jump && input.get_key(bindings::JUMP) {
        fps.can_jump = false;
        fps.jump_force = tuning.jump_initial_force;
        fps.ground = GroundState::Airborne;
        transform.translation.y += fps.jump_force * dt;
        report.jumped = true;
    }

    // Горизонталь: y обнуляем, по земле не летаем
    let (mut forward_dir, mut strafe_dir) = move_directions(camera.forward, move_speed);
    forward_dir.y = 0.0;
    strafe_dir.y = 0.0;

    if input.get_key(bindings::MOVE_FORWARD) && !probes.forward.colliding {
        transform.translation += forward_dir;
    }
    if input.get_key(bindings::MOVE_BACK) && !probes.back.colliding {
        transform.translation -= forward_dir;
    }
    if input.get_key(bindings::STRAFE_LEFT) && !probes.left.colliding {
        transform.translation -= strafe_dir;
    }
    if input.get_key(bindings::STRAFE_RIGHT) && !probes.right.colliding {
        transform.translation += strafe_dir;
    }

    camera.position = transform.translation;

    report
}

/// Запрос смены активной камеры: O → debug, P → камера entity (P проверяется последней)
pub fn camera_switch_request(
    input: &InputState,
    settings: &ControlSettings,
    camera: &ViewCamera,
) -> Option<CameraId> {
    let mut request = None;
    if input.get_key(bindings::DEBUG_CAMERA) {
        request = Some(settings.debug_camera);
    }
    if input.get_key(bindings::PLAYER_CAMERA) {
        request = Some(camera.id);
    }
    request
}
