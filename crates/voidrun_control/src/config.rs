//! Control settings + загрузка tuning из JSON
//!
//! Отсутствующие поля берутся из Default (`#[serde(default)]`),
//! значения валидируются после парсинга.

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{CameraId, FpsTuning};
use crate::error::ConfigError;

/// Глобальные настройки control step
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct ControlSettings {
    /// Free-fly mouse look (rad per mouse unit, НЕ умножается на dt)
    pub free_look_sensitivity: f32,
    /// Допуск ground test: distance < height + ground_epsilon
    pub ground_epsilon: f32,
    /// Камера, которую включает клавиша O
    pub debug_camera: CameraId,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            free_look_sensitivity: 0.005,
            ground_epsilon: 0.01,
            debug_camera: CameraId::DEBUG,
        }
    }
}

impl ControlSettings {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let settings: ControlSettings = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("free_look_sensitivity", self.free_look_sensitivity)?;
        ensure_non_negative("ground_epsilon", self.ground_epsilon)?;
        Ok(())
    }
}

impl FpsTuning {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let tuning: FpsTuning = serde_json::from_str(s)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "height must be > 0, got {}",
                self.height
            )));
        }
        ensure_non_negative("gravity", self.gravity)?;
        ensure_non_negative("jump_initial_force", self.jump_initial_force)?;
        ensure_non_negative("jump_force_slowdown", self.jump_force_slowdown)?;
        Ok(())
    }
}

/// Загрузить ControlSettings из JSON файла
pub fn load_settings(path: impl AsRef<Path>) -> Result<ControlSettings, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ControlSettings::from_json_str(&text)
}

/// Загрузить FpsTuning из JSON файла
pub fn load_fps_tuning(path: impl AsRef<Path>) -> Result<FpsTuning, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    FpsTuning::from_json_str(&text)
}

fn ensure_non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::Invalid(format!(
            "{} must be finite and >= 0, got {}",
            name, value
        )));
    }
    Ok(())
}
