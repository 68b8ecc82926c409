//! Абстрактные коды клавиш/кнопок мыши
//!
//! Не привязаны к константам конкретной оконной библиотеки (GLFW, winit, Godot Key).
//! Хост переводит свои коды в `InputCode` перед отправкой в `InputState`.

/// Клавиша клавиатуры или кнопка мыши
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputCode {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    Space,
    Escape,
    Enter,
    Tab,
    Backspace,
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    MouseLeft,
    MouseRight,
    MouseMiddle,
}

impl InputCode {
    /// Все коды (для тестов и для хостов, которым нужна полная таблица)
    pub const ALL: [InputCode; 54] = [
        InputCode::A, InputCode::B, InputCode::C, InputCode::D, InputCode::E,
        InputCode::F, InputCode::G, InputCode::H, InputCode::I, InputCode::J,
        InputCode::K, InputCode::L, InputCode::M, InputCode::N, InputCode::O,
        InputCode::P, InputCode::Q, InputCode::R, InputCode::S, InputCode::T,
        InputCode::U, InputCode::V, InputCode::W, InputCode::X, InputCode::Y,
        InputCode::Z,
        InputCode::Digit0, InputCode::Digit1, InputCode::Digit2, InputCode::Digit3,
        InputCode::Digit4, InputCode::Digit5, InputCode::Digit6, InputCode::Digit7,
        InputCode::Digit8, InputCode::Digit9,
        InputCode::Space,
        InputCode::Escape,
        InputCode::Enter,
        InputCode::Tab,
        InputCode::Backspace,
        InputCode::LeftShift,
        InputCode::RightShift,
        InputCode::LeftControl,
        InputCode::RightControl,
        InputCode::LeftAlt,
        InputCode::RightAlt,
        InputCode::ArrowUp,
        InputCode::ArrowDown,
        InputCode::ArrowLeft,
        InputCode::ArrowRight,
        InputCode::MouseLeft,
        InputCode::MouseRight,
        InputCode::MouseMiddle,
    ];

    pub fn is_mouse_button(&self) -> bool {
        matches!(
            self,
            InputCode::MouseLeft | InputCode::MouseRight | InputCode::MouseMiddle
        )
    }
}

/// Переход клавиши/кнопки, как его сообщает оконная система
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
    /// Автоповтор при зажатой клавише, состояние не меняет
    Repeat,
}
