//! InputState: snapshot клавиатуры и мыши
//!
//! Мутируется только callback'ами оконной системы (или `apply_raw_input`),
//! control step читает его read-only.

use std::collections::HashSet;

use bevy::prelude::*;

use super::codes::{InputCode, KeyAction};

/// Состояние мыши: абсолютная позиция + delta за текущий frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mouse {
    pub position: Vec2,
    pub delta: Vec2,
}

/// Таблица зажатых клавиш/кнопок + мышь
///
/// Lifetime: app-wide resource. `reset()` явная инициализация.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<InputCode>,
    pub mouse: Mouse,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Всё отпущено, мышь в (0, 0)
    pub fn reset(&mut self) {
        self.held.clear();
        self.mouse = Mouse::default();
    }

    /// Callback оконной системы: переход клавиши/кнопки
    ///
    /// `Repeat` игнорируется: клавиша уже зажата с момента `Press`.
    pub fn key_mouse_callback(&mut self, code: InputCode, action: KeyAction) {
        match action {
            KeyAction::Press => {
                self.held.insert(code);
            }
            KeyAction::Release => {
                self.held.remove(&code);
            }
            KeyAction::Repeat => {}
        }
    }

    /// Callback оконной системы: новая абсолютная позиция курсора
    pub fn update_mouse_position(&mut self, x: f32, y: f32) {
        let new_position = Vec2::new(x, y);
        self.mouse.delta = new_position - self.mouse.position;
        self.mouse.position = new_position;
    }

    pub fn get_key(&self, code: InputCode) -> bool {
        self.held.contains(&code)
    }

    pub fn get_button(&self, code: InputCode) -> bool {
        self.held.contains(&code)
    }

    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse.delta
    }

    /// Delta покрывает ровно один frame, обнуляется после control step
    pub fn clear_mouse_delta(&mut self) {
        self.mouse.delta = Vec2::ZERO;
    }

    /// Focus loss: окно не пришлёт Release для зажатых клавиш
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Сколько кодов зажато сейчас (диагностика хоста: залипшие клавиши после потери фокуса)
    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}
