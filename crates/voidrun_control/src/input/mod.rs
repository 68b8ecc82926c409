//! Input module
//!
//! # Архитектура
//!
//! ```text
//! Host window callbacks (keyboard/mouse)
//!     ↓
//! RawInputEvent (ECS event) - events.rs
//!     ↓
//! apply_raw_input (PreUpdate) - systems.rs
//!     ↓
//! InputState (Resource) - state.rs
//!     ↓
//! update_controls (Update) читает read-only
//! ```
//!
//! Хост может и не использовать events: `InputState::key_mouse_callback` /
//! `update_mouse_position` вызываются напрямую через `ResMut<InputState>`.

pub mod bindings;
pub mod codes;
pub mod events;
pub mod state;
pub mod systems;

pub use codes::{InputCode, KeyAction};
pub use events::RawInputEvent;
pub use state::{InputState, Mouse};
pub use systems::{apply_raw_input, reset_mouse_delta};
