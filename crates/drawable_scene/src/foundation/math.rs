//! Math utilities and types
//!
//! Matrix and vector aliases used for drawable transforms and tints.

pub use nalgebra::{Matrix4, Vector4};

/// 4D vector type, used for RGBA tints
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Number of floats in a [`Mat4`] uniform payload
pub const MAT4_FLOATS: usize = 16;

/// Number of floats in a [`Vec4`] uniform payload
pub const VEC4_FLOATS: usize = 4;

/// Fully opaque white, the neutral tint
pub fn opaque_white() -> Vec4 {
    Vec4::new(1.0, 1.0, 1.0, 1.0)
}

/// Exact comparison against the identity matrix, no epsilon
pub fn is_identity(matrix: &Mat4) -> bool {
    *matrix == Mat4::identity()
}

/// Exact comparison against [`opaque_white`]
pub fn is_opaque_white(color: &Vec4) -> bool {
    *color == opaque_white()
}
