//! Geometry and draw-source identifiers
//!
//! Vertex data is built and owned by the model subsystem; these are the opaque
//! identifiers that get forwarded to the submission surface.

pub use crate::foundation::collections::GeometryKey;

/// Identifier of a precompiled display list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayListId(pub u32);

/// GPU vertex array object together with the number of elements to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayObject {
    /// GPU array-object name
    pub handle: u32,
    /// Number of indices/vertices drawn from the array
    pub element_count: u32,
}

impl VertexArrayObject {
    /// Create a new vertex array object reference
    pub fn new(handle: u32, element_count: u32) -> Self {
        Self { handle, element_count }
    }
}
