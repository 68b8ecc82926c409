//! Mouse look: yaw вокруг world up, затем pitch вокруг strafe оси камеры

use bevy::prelude::*;

/// Ось pitch вырождена когда forward параллелен world up
const DEGENERATE_AXIS_EPSILON: f32 = 1e-6;

/// Повернуть forward: yaw (вокруг +Y), затем pitch (вокруг normalize(forward) × up)
///
/// Длина forward сохраняется. Если после yaw forward смотрит строго вверх/вниз,
/// pitch пропускается (ось не определена).
pub fn rotate_forward(forward: Vec3, yaw: f32, pitch: f32) -> Vec3 {
    let forward = Quat::from_axis_angle(Vec3::Y, yaw) * forward;

    let pitch_axis = forward.normalize_or_zero().cross(Vec3::Y);
    if pitch_axis.length_squared() < DEGENERATE_AXIS_EPSILON {
        return forward;
    }

    Quat::from_axis_angle(pitch_axis.normalize(), pitch) * forward
}

/// Forward и strafe смещения за frame: normalize(forward) * speed и (forward × up) * speed
///
/// Strafe не нормализуется: при взгляде вверх/вниз он короче.
pub fn move_directions(forward: Vec3, speed: f32) -> (Vec3, Vec3) {
    let forward_dir = forward.normalize_or_zero() * speed;
    let strafe_dir = forward.cross(Vec3::Y) * speed;
    (forward_dir, strafe_dir)
}
