//! ECS Components для control слоя
//!
//! Организация:
//! - control: Control (policy + скорости), FpsControl, FpsTuning, GroundState
//! - camera: ViewCamera, CameraId, CameraRegistry (active camera)
//! - collider: Collider (результат probe/raycast, пишется внешней системой)

pub mod camera;
pub mod collider;
pub mod control;

pub use camera::*;
pub use collider::*;
pub use control::*;
