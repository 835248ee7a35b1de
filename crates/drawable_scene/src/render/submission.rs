//! GPU submission surface
//!
//! The actual draw call sequence belongs to the backend. This module defines the
//! narrow surface a render model is handed to, plus a recorder that captures the
//! calls as commands for deferred playback or inspection.

use crate::render::geometry::{DisplayListId, GeometryKey, VertexArrayObject};
use crate::render::render_model::{TextureEntry, UniformEntry};

/// Receiver of materialized bindings and draw sources
pub trait SubmissionSurface {
    /// Bind textures before the next draw
    fn bind_textures(&mut self, textures: &[TextureEntry]);
    
    /// Upload uniforms before the next draw
    fn bind_uniforms(&mut self, uniforms: &[UniformEntry]);
    
    /// Draw a precompiled display list
    fn draw_display_list(&mut self, list: DisplayListId);
    
    /// Draw `element_count` elements from a vertex array object
    fn draw_vertex_array(&mut self, vao: VertexArrayObject);
    
    /// Draw raw vertex data owned by the geometry store
    fn draw_geometry(&mut self, geometry: GeometryKey);
}

/// A single recorded submission call
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitCommand {
    /// Texture bound to a sampler slot
    BindTexture(TextureEntry),
    /// Uniform payload uploaded
    SetUniform(UniformEntry),
    /// Display list drawn
    DrawList(DisplayListId),
    /// Vertex array object drawn
    DrawArray(VertexArrayObject),
    /// Raw geometry drawn
    DrawGeometry(GeometryKey),
}

/// Submission surface that records every call in order
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<SubmitCommand>,
}

impl CommandRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Recorded commands, oldest first
    pub fn commands(&self) -> &[SubmitCommand] {
        &self.commands
    }
    
    /// Number of draw commands recorded so far
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(
                cmd,
                SubmitCommand::DrawList(_) | SubmitCommand::DrawArray(_) | SubmitCommand::DrawGeometry(_)
            ))
            .count()
    }
    
    /// Take the recorded commands, leaving the recorder empty
    pub fn drain(&mut self) -> Vec<SubmitCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl SubmissionSurface for CommandRecorder {
    fn bind_textures(&mut self, textures: &[TextureEntry]) {
        self.commands.extend(textures.iter().copied().map(SubmitCommand::BindTexture));
    }
    
    fn bind_uniforms(&mut self, uniforms: &[UniformEntry]) {
        self.commands.extend(uniforms.iter().cloned().map(SubmitCommand::SetUniform));
    }
    
    fn draw_display_list(&mut self, list: DisplayListId) {
        self.commands.push(SubmitCommand::DrawList(list));
    }
    
    fn draw_vertex_array(&mut self, vao: VertexArrayObject) {
        self.commands.push(SubmitCommand::DrawArray(vao));
    }
    
    fn draw_geometry(&mut self, geometry: GeometryKey) {
        self.commands.push(SubmitCommand::DrawGeometry(geometry));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::GeometryMap;

    #[test]
    fn test_recorder_counts_draws() {
        let mut geometry: GeometryMap<()> = GeometryMap::with_key();
        let key = geometry.insert(());
        
        let mut recorder = CommandRecorder::new();
        recorder.bind_uniforms(&[]);
        recorder.draw_display_list(DisplayListId(1));
        recorder.draw_geometry(key);
        
        assert_eq!(recorder.draw_count(), 2);
        assert_eq!(recorder.drain().len(), 2);
        assert!(recorder.commands().is_empty());
    }
}
