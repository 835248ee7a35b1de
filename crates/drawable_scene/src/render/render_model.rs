//! Render model: the GPU-facing binding set of one drawable
//!
//! A render model is derived data. It is rebuilt by
//! [`Drawable::materialize_render_model`](crate::render::Drawable::materialize_render_model)
//! and never edited directly by callers.

use crate::render::binding::BindingId;
use crate::render::geometry::{DisplayListId, GeometryKey, VertexArrayObject};
use crate::render::submission::SubmissionSurface;
use crate::render::texture::{TextureId, TextureKind};

/// One texture binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureEntry {
    /// Sampler slot the texture is bound to
    pub binding: BindingId,
    /// GPU texture id
    pub texture: TextureId,
    /// Binding target
    pub kind: TextureKind,
}

impl TextureEntry {
    /// Create a new texture entry
    pub fn new(binding: BindingId, texture: TextureId, kind: TextureKind) -> Self {
        Self { binding, texture, kind }
    }
}

/// One uniform binding with its float payload
#[derive(Debug, Clone, PartialEq)]
pub struct UniformEntry {
    /// Uniform slot
    pub binding: BindingId,
    values: Vec<f32>,
}

impl UniformEntry {
    /// Create a uniform entry, copying the payload
    pub fn new(binding: BindingId, values: &[f32]) -> Self {
        Self {
            binding,
            values: values.to_vec(),
        }
    }
    
    /// Float payload, column-major for matrices
    pub fn values(&self) -> &[f32] {
        &self.values
    }
    
    /// Payload as raw bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }
}

/// Minimal set of bindings and draw sources needed to submit a drawable
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderModel {
    pub(crate) textures: Vec<TextureEntry>,
    pub(crate) uniforms: Vec<UniformEntry>,
    pub(crate) vertex_source: Option<GeometryKey>,
    pub(crate) draw_lists: Vec<DisplayListId>,
    pub(crate) vertex_array: Option<VertexArrayObject>,
}

impl RenderModel {
    /// Texture bindings
    pub fn textures(&self) -> &[TextureEntry] {
        &self.textures
    }
    
    /// Uniform bindings; default-valued state is omitted
    pub fn uniforms(&self) -> &[UniformEntry] {
        &self.uniforms
    }
    
    /// Vertex data the drawable was pointed at
    pub fn vertex_source(&self) -> Option<GeometryKey> {
        self.vertex_source
    }
    
    /// Display lists registered for list-based submission
    pub fn draw_lists(&self) -> &[DisplayListId] {
        &self.draw_lists
    }
    
    /// Vertex array object registered for array-based submission
    pub fn vertex_array(&self) -> Option<VertexArrayObject> {
        self.vertex_array
    }
    
    /// Look up a uniform by binding id
    pub fn uniform(&self, binding: BindingId) -> Option<&UniformEntry> {
        self.uniforms.iter().find(|entry| entry.binding == binding)
    }
    
    /// Forward bindings and draw sources to a submission surface
    ///
    /// Bindings go first, then every display list, then the vertex array object.
    /// The raw vertex source is only drawn when no array object is registered.
    pub fn submit_to(&self, surface: &mut impl SubmissionSurface) {
        surface.bind_textures(&self.textures);
        surface.bind_uniforms(&self.uniforms);
        
        for list in &self.draw_lists {
            surface.draw_display_list(*list);
        }
        
        match (self.vertex_array, self.vertex_source) {
            (Some(vao), _) => surface.draw_vertex_array(vao),
            (None, Some(geometry)) => surface.draw_geometry(geometry),
            (None, None) => {}
        }
    }
}
