//! Фиксированные привязки клавиш control step (remapping не поддерживается)

use super::codes::InputCode;

pub const MOVE_FORWARD: InputCode = InputCode::W;
pub const MOVE_BACK: InputCode = InputCode::S;
pub const STRAFE_LEFT: InputCode = InputCode::A;
pub const STRAFE_RIGHT: InputCode = InputCode::D;
pub const JUMP: InputCode = InputCode::Space;
pub const LOOK: InputCode = InputCode::MouseLeft;

/// Камера debug (free-fly наблюдатель)
pub const DEBUG_CAMERA: InputCode = InputCode::O;
/// Камера управляемого entity
pub const PLAYER_CAMERA: InputCode = InputCode::P;
