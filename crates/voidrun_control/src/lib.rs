//! VOIDRUN Control Core
//!
//! Per-frame input → movement для player-controlled entity (Bevy 0.16 ECS).
//!
//! Что здесь:
//! - input: InputState (клавиши + мышь), RawInputEvent от оконной системы
//! - control: free-fly и FPS policy, ControlPlugin
//! - components: Control, ViewCamera, Collider (probe результаты)
//! - config: ControlSettings / FpsTuning из JSON
//!
//! Что НЕ здесь (внешние системы хоста):
//! - расчёт коллизий/raycast (пишут `Collider`)
//! - рендер, окно, выбор камеры для рендера (читают `CameraRegistry`)

use bevy::prelude::*;

pub mod components;
pub mod config;
pub mod control;
pub mod error;
pub mod input;
pub mod logger;

pub use components::*;
pub use config::{load_fps_tuning, load_settings, ControlSettings};
pub use control::{in_game, update_controls, ControlContext, ControlPlugin, ControlSet};
pub use error::{ConfigError, ControlError};
pub use input::{InputCode, InputState, KeyAction, Mouse, RawInputEvent};
pub use logger::{init_logger, log, log_error, log_info, log_warning};

/// Создаёт minimal Bevy App для headless control симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((MinimalPlugins, ControlPlugin));

    app
}

/// Spawn helper для FPS игрока
///
/// Создаёт пять probe entity (Collider::miss до первого probe update хоста)
/// и entity игрока: Control(FPS) + Transform + ViewCamera.
pub fn spawn_fps_player(
    commands: &mut Commands,
    position: Vec3,
    camera_id: CameraId,
    tuning: FpsTuning,
) -> (Entity, FpsColliders) {
    let mut probe = || commands.spawn(Collider::miss()).id();
    let colliders = FpsColliders {
        down: probe(),
        forward: probe(),
        back: probe(),
        left: probe(),
        right: probe(),
    };

    let player = commands
        .spawn((
            Transform::from_translation(position),
            ViewCamera {
                id: camera_id,
                position,
                forward: Vec3::NEG_Z,
            },
            Control::fps(5.0, 0.3, FpsControl::new(colliders, tuning)),
        ))
        .id();

    (player, colliders)
}

/// Spawn helper для free-fly (debug) камеры
pub fn spawn_free_camera(
    commands: &mut Commands,
    position: Vec3,
    camera_id: CameraId,
    move_speed: f32,
) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            ViewCamera {
                id: camera_id,
                position,
                forward: Vec3::NEG_Z,
            },
            Control::free(move_speed),
        ))
        .id()
}
