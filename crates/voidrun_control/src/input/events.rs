//! Raw input events от оконной системы

use bevy::prelude::*;

use super::codes::{InputCode, KeyAction};

/// Event: сырое событие клавиатуры/мыши
///
/// Генерируется:
/// - Host window layer (Godot bridge, winit loop, headless script)
///
/// Обрабатывается:
/// - apply_raw_input (PreUpdate): переводит в вызовы callback'ов `InputState`, в порядке прихода
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum RawInputEvent {
    /// Переход клавиши или кнопки мыши
    Key { code: InputCode, action: KeyAction },
    /// Новая абсолютная позиция курсора
    MouseMoved { x: f32, y: f32 },
    /// Окно потеряло фокус, Release для зажатых клавиш не придут
    FocusLost,
}

impl RawInputEvent {
    pub fn press(code: InputCode) -> Self {
        Self::Key { code, action: KeyAction::Press }
    }

    pub fn release(code: InputCode) -> Self {
        Self::Key { code, action: KeyAction::Release }
    }
}
