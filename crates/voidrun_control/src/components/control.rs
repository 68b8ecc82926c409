//! Control компоненты: movement policy + параметры

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::camera::ViewCamera;

/// Control компонент: entity управляется input'ом игрока
///
/// # Precondition
/// - Owner entity имеет `Transform` и `ViewCamera` (добавляются через Required Components)
/// - FPS: все пять `FpsColliders` указывают на живые entity с `Collider`
///
/// Нарушение precondition = ошибка сборки сцены: control step логирует error
/// и пропускает entity в этом frame.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(Transform, ViewCamera)]
pub struct Control {
    pub kind: ControlKind,
    /// Скорость перемещения (units/sec)
    pub move_speed: f32,
    /// Скорость поворота FPS камеры (rad per mouse unit per sec)
    pub turn_speed: f32,
}

impl Control {
    pub fn free(move_speed: f32) -> Self {
        Self {
            kind: ControlKind::Free,
            move_speed,
            turn_speed: 0.0,
        }
    }

    pub fn fps(move_speed: f32, turn_speed: f32, fps: FpsControl) -> Self {
        Self {
            kind: ControlKind::Fps(fps),
            move_speed,
            turn_speed,
        }
    }

    pub fn as_fps(&self) -> Option<&FpsControl> {
        match &self.kind {
            ControlKind::Fps(fps) => Some(fps),
            ControlKind::Free => None,
        }
    }
}

/// Movement policy
#[derive(Debug, Clone, Reflect)]
pub enum ControlKind {
    /// Free-fly: без коллизий и гравитации
    Free,
    /// FPS: земля, гравитация, прыжок, блокировка направлений коллайдерами
    Fps(FpsControl),
}

/// Пять probe коллайдеров FPS контроллера (обычно на child entity игрока)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct FpsColliders {
    pub down: Entity,
    pub forward: Entity,
    pub back: Entity,
    pub left: Entity,
    pub right: Entity,
}

/// Состояние земли по итогам последнего frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum GroundState {
    Grounded,
    #[default]
    Airborne,
}

/// Тюнинг FPS физики (загружается из JSON, см. config)
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct FpsTuning {
    /// Высота камеры над точкой down-коллизии
    pub height: f32,
    /// Скорость падения (units/sec), вычитается из jump_force
    pub gravity: f32,
    /// jump_force в момент прыжка
    pub jump_initial_force: f32,
    /// Затухание jump_force (units/sec²)
    pub jump_force_slowdown: f32,
}

impl Default for FpsTuning {
    fn default() -> Self {
        Self {
            height: 1.7,
            gravity: 9.8,
            jump_initial_force: 15.0,
            jump_force_slowdown: 20.0,
        }
    }
}

/// FPS состояние entity
///
/// Инвариант: jump_force ≥ 0
#[derive(Debug, Clone, Reflect)]
pub struct FpsControl {
    pub colliders: FpsColliders,
    pub tuning: FpsTuning,
    pub jump_force: f32,
    pub can_jump: bool,
    pub ground: GroundState,
}

impl FpsControl {
    pub fn new(colliders: FpsColliders, tuning: FpsTuning) -> Self {
        Self {
            colliders,
            tuning,
            jump_force: 0.0,
            can_jump: false,
            ground: GroundState::Airborne,
        }
    }
}
