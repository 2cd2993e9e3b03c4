//! Core types: math re-exports, Transform, Camera, animators, scene.

pub use glam::{EulerRot, Mat4, Quat, Vec3, Vec4, vec3, vec4};

pub mod camera;
pub mod scene;
pub mod seek;
pub mod transform;
pub mod wave;
