//! Input systems (ECS)

use bevy::prelude::*;

use super::events::RawInputEvent;
use super::state::InputState;

/// Система: RawInputEvent → InputState
///
/// Работает в PreUpdate, до control step.
/// Несколько MouseMoved за frame: delta = сумма шагов (последняя позиция минус позиция на начало frame).
pub fn apply_raw_input(
    mut events: EventReader<RawInputEvent>,
    mut input: ResMut<InputState>,
) {
    let mut frame_delta: Option<Vec2> = None;

    for event in events.read() {
        match *event {
            RawInputEvent::Key { code, action } => input.key_mouse_callback(code, action),
            RawInputEvent::MouseMoved { x, y } => {
                input.update_mouse_position(x, y);
                *frame_delta.get_or_insert(Vec2::ZERO) += input.mouse_delta();
            }
            RawInputEvent::FocusLost => input.release_all(),
        }
    }

    if let Some(delta) = frame_delta {
        input.mouse.delta = delta;
    }
}

/// Система: обнулить mouse delta в конце frame
///
/// Без этого последняя delta продолжала бы крутить камеру, пока курсор стоит.
pub fn reset_mouse_delta(mut input: ResMut<InputState>) {
    input.clear_mouse_delta();
}
