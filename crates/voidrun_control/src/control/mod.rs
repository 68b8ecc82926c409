//! Control module: per-frame input → movement
//!
//! Две movement policy:
//! - free: полёт без коллизий (debug камера, редактор)
//! - fps: земля + гравитация + прыжок + блокировка коллайдерами
//!
//! Порядок выполнения (ControlPlugin):
//! 1. PreUpdate: apply_raw_input, RawInputEvent → InputState
//! 2. Update (ControlSet::Step): update_controls, только в ControlContext::InGame
//! 3. Last: reset_mouse_delta
//!
//! Collider probes должны быть записаны до ControlSet::Step
//! (хост ставит свои системы `.before(ControlSet::Step)`).

use bevy::prelude::*;

use crate::components::{
    CameraId, CameraRegistry, Collider, Control, ControlKind, FpsColliders, FpsControl, FpsTuning,
    GroundState, ViewCamera,
};
use crate::config::ControlSettings;
use crate::input::{apply_raw_input, reset_mouse_delta, InputState, RawInputEvent};

pub mod fps;
pub mod free;
pub mod look;
pub mod systems;


pub use fps::{camera_switch_request, is_grounded, update_fps, ControlSpeeds, FpsProbes, FpsStepReport};
pub use free::update_free;
pub use systems::update_controls;

/// Режим приложения: control step работает только в игре
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Resource)]
pub enum ControlContext {
    #[default]
    InGame,
    /// Меню/пауза: control step не выполняется
    Menu,
}

/// System set control step'а (для ordering с collision probe системами хоста)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlSet {
    Step,
}

/// Run condition: ControlContext::InGame
pub fn in_game(context: Res<ControlContext>) -> bool {
    *context == ControlContext::InGame
}

/// Control Plugin
///
/// Регистрирует resources (InputState, ControlSettings, CameraRegistry, ControlContext),
/// RawInputEvent и системы. Уже вставленные хостом resources не перезаписываются.
pub struct ControlPlugin;

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>()
            .init_resource::<ControlSettings>()
            .init_resource::<CameraRegistry>()
            .init_resource::<ControlContext>()
            .add_event::<RawInputEvent>();

        app.register_type::<Control>()
            .register_type::<ControlKind>()
            .register_type::<FpsControl>()
            .register_type::<FpsColliders>()
            .register_type::<FpsTuning>()
            .register_type::<GroundState>()
            .register_type::<ViewCamera>()
            .register_type::<CameraId>()
            .register_type::<CameraRegistry>()
            .register_type::<Collider>()
            .register_type::<ControlSettings>()
            .register_type::<ControlContext>();

        app.add_systems(PreUpdate, apply_raw_input)
            .add_systems(
                Update,
                update_controls.run_if(in_game).in_set(ControlSet::Step),
            )
            .add_systems(Last, reset_mouse_delta);
    }
}
