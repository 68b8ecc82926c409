//! Camera компоненты: ориентация view-камеры и выбор активной камеры

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Stable ID камеры (для выбора активной в CameraRegistry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub struct CameraId(pub u32);

impl CameraId {
    /// Debug камера (free-fly наблюдатель)
    pub const DEBUG: CameraId = CameraId(0);
    /// Камера игрока по умолчанию
    pub const PLAYER: CameraId = CameraId(1);
}

/// View-камера entity: позиция + направление взгляда
///
/// `forward` не обязан быть нормализован, control step нормализует при расчёте движения.
/// `position` синхронизируется с Transform.translation в конце control step.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ViewCamera {
    pub id: CameraId,
    pub position: Vec3,
    pub forward: Vec3,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            id: CameraId::PLAYER,
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
        }
    }
}

impl ViewCamera {
    pub fn new(id: CameraId, forward: Vec3) -> Self {
        Self {
            id,
            forward,
            ..default()
        }
    }
}

/// Активная камера (какая рендерится)
///
/// Меняется FPS control step'ом по клавишам O/P.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct CameraRegistry {
    pub active: CameraId,
}

impl Default for CameraRegistry {
    fn default() -> Self {
        Self {
            active: CameraId::PLAYER,
        }
    }
}

impl CameraRegistry {
    /// Переключить активную камеру. Возвращает true если камера реально сменилась.
    pub fn activate(&mut self, id: CameraId) -> bool {
        if self.active == id {
            return false;
        }
        self.active = id;
        true
    }
}
