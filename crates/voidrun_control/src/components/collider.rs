//! Collider probe component
//!
//! Control step НЕ считает коллизии: внешняя система (raycast/shape cast)
//! пишет сюда результат каждый frame, мы только читаем.

use bevy::prelude::*;

/// Результат probe коллайдера (например down-ray под игроком)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Collider {
    /// Probe сейчас пересекает геометрию
    pub colliding: bool,
    /// Точка пересечения (world coordinates), валидна только если colliding
    pub collision_point: Vec3,
}

impl Collider {
    pub fn hit(point: Vec3) -> Self {
        Self {
            colliding: true,
            collision_point: point,
        }
    }

    pub fn miss() -> Self {
        Self::default()
    }
}
