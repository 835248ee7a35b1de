//! Model descriptors
//!
//! Loaded models may carry a display list, a vertex array object, or both.
//! [`Drawable::apply_model_binding`](crate::render::Drawable::apply_model_binding)
//! registers whichever the model provides.

use crate::render::geometry::{DisplayListId, VertexArrayObject};

/// Read-only view of a loaded model's draw sources
pub trait ModelSource {
    /// Display list compiled for this model, if any
    fn display_list(&self) -> Option<DisplayListId>;
    
    /// Vertex array object built for this model, if any
    fn vertex_array(&self) -> Option<VertexArrayObject>;
}

/// Plain model descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Display list compiled for the model
    pub display_list: Option<DisplayListId>,
    /// Vertex array object built for the model
    pub vertex_array: Option<VertexArrayObject>,
}

impl ModelDescriptor {
    /// Descriptor for a model drawn through a display list
    pub fn with_display_list(list: DisplayListId) -> Self {
        Self {
            display_list: Some(list),
            vertex_array: None,
        }
    }
    
    /// Descriptor for a model drawn from a vertex array object
    pub fn with_vertex_array(vao: VertexArrayObject) -> Self {
        Self {
            display_list: None,
            vertex_array: Some(vao),
        }
    }
}

impl ModelSource for ModelDescriptor {
    fn display_list(&self) -> Option<DisplayListId> {
        self.display_list
    }
    
    fn vertex_array(&self) -> Option<VertexArrayObject> {
        self.vertex_array
    }
}
