//! Cached drawable state
//!
//! A [`Drawable`] holds the logical state of one renderable (transform, tint,
//! textures, enable flag, geometry) and lazily derives its [`RenderModel`].
//!
//! Two independent dirty flags gate the rebuild:
//!
//! ```text
//! TEXTURES: set_*_texture  -> dirty -> materialize_render_model -> clean
//! STATE:    set_transform/set_tint/set_alpha -> dirty -> materialize_render_model -> clean
//! ```
//!
//! A texture change never invalidates uniforms and vice versa. Identity transforms
//! and opaque white tints are left out of the uniform list entirely; most drawables
//! use both, so skipping them keeps per-frame uploads small.
//!
//! Materializing must not run concurrently with mutation of the same drawable.

use bitflags::bitflags;

use crate::foundation::math::{self, Mat4, Vec4};
use crate::render::binding::BindingIds;
use crate::render::geometry::{DisplayListId, GeometryKey, VertexArrayObject};
use crate::render::model::ModelSource;
use crate::render::render_model::{RenderModel, TextureEntry, UniformEntry};
use crate::render::texture::{TextureHandle, TextureKind};

bitflags! {
    /// Attribute groups whose render model entries are stale
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// Texture bindings need rebuilding
        const TEXTURES = 1 << 0;
        /// Transform/tint uniforms need rebuilding
        const STATE = 1 << 1;
    }
}

/// One renderable unit with its cached GPU binding set
#[derive(Debug, Clone)]
pub struct Drawable {
    transform: Mat4,
    tint: Vec4,
    enabled: bool,
    
    diffuse_map: Option<TextureHandle>,
    misc_map1: Option<TextureHandle>,
    misc_map2: Option<TextureHandle>,
    geometry: Option<GeometryKey>,
    
    dirty: DirtyFlags,
    render_model: RenderModel,
}

impl Default for Drawable {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable {
    /// Create an enabled drawable with identity transform and opaque white tint
    pub fn new() -> Self {
        Self {
            transform: Mat4::identity(),
            tint: math::opaque_white(),
            enabled: true,
            diffuse_map: None,
            misc_map1: None,
            misc_map2: None,
            geometry: None,
            dirty: DirtyFlags::all(), // Start dirty to force initial build
            render_model: RenderModel::default(),
        }
    }
    
    // --- textures ---
    
    /// Set or clear the diffuse map
    pub fn set_diffuse_texture(&mut self, texture: impl Into<Option<TextureHandle>>) {
        self.diffuse_map = texture.into();
        self.dirty.insert(DirtyFlags::TEXTURES);
    }
    
    /// Set or clear the first auxiliary map
    pub fn set_misc_texture1(&mut self, texture: impl Into<Option<TextureHandle>>) {
        self.misc_map1 = texture.into();
        self.dirty.insert(DirtyFlags::TEXTURES);
    }
    
    /// Set or clear the second auxiliary map
    pub fn set_misc_texture2(&mut self, texture: impl Into<Option<TextureHandle>>) {
        self.misc_map2 = texture.into();
        self.dirty.insert(DirtyFlags::TEXTURES);
    }
    
    /// Current diffuse map
    pub fn diffuse_texture(&self) -> Option<TextureHandle> {
        self.diffuse_map
    }
    
    /// Current first auxiliary map
    pub fn misc_texture1(&self) -> Option<TextureHandle> {
        self.misc_map1
    }
    
    /// Current second auxiliary map
    pub fn misc_texture2(&self) -> Option<TextureHandle> {
        self.misc_map2
    }
    
    // --- geometry ---
    
    /// Point the drawable at vertex data
    ///
    /// Applied to the render model immediately, not through the dirty flags.
    pub fn set_geometry(&mut self, geometry: impl Into<Option<GeometryKey>>) {
        self.geometry = geometry.into();
        self.render_model.vertex_source = self.geometry;
    }
    
    /// Current vertex data
    pub fn geometry(&self) -> Option<GeometryKey> {
        self.geometry
    }
    
    /// Register a vertex array object for array-based submission
    pub fn set_vertex_array_object(&mut self, vao: VertexArrayObject) {
        self.render_model.vertex_array = Some(vao);
    }
    
    /// Register a display list for list-based submission
    pub fn add_draw_list(&mut self, list: DisplayListId) {
        self.render_model.draw_lists.push(list);
    }
    
    /// Register the draw sources a model provides
    ///
    /// A model may carry both a display list and a vertex array object; each one
    /// present is registered.
    pub fn apply_model_binding(&mut self, model: &impl ModelSource) {
        if let Some(list) = model.display_list() {
            self.add_draw_list(list);
        }
        
        if let Some(vao) = model.vertex_array() {
            self.set_vertex_array_object(vao);
        }
        
        log::debug!(
            "Applied model binding (display list: {:?}, vertex array: {:?})",
            model.display_list(),
            model.vertex_array()
        );
    }
    
    // --- uniform state ---
    
    /// Set the model transform
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
        self.dirty.insert(DirtyFlags::STATE);
    }
    
    /// Current model transform
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }
    
    /// Set all four tint components
    pub fn set_tint(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.tint = Vec4::new(r, g, b, a);
        self.dirty.insert(DirtyFlags::STATE);
    }
    
    /// Set the tint color, keeping the current alpha
    pub fn set_tint_rgb(&mut self, r: f32, g: f32, b: f32) {
        self.tint.x = r;
        self.tint.y = g;
        self.tint.z = b;
        self.dirty.insert(DirtyFlags::STATE);
    }
    
    /// Set the tint alpha
    pub fn set_alpha(&mut self, a: f32) {
        self.tint.w = a;
        self.dirty.insert(DirtyFlags::STATE);
    }
    
    /// Current RGBA tint
    pub fn tint(&self) -> &Vec4 {
        &self.tint
    }
    
    // --- visibility ---
    
    /// Include or exclude this drawable from visible subsets
    ///
    /// Does not touch the render model.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
    
    /// Whether this drawable is part of visible subsets
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
    
    // --- render model ---
    
    /// Whether texture bindings are stale
    pub fn textures_dirty(&self) -> bool {
        self.dirty.contains(DirtyFlags::TEXTURES)
    }
    
    /// Whether transform/tint uniforms are stale
    pub fn state_dirty(&self) -> bool {
        self.dirty.contains(DirtyFlags::STATE)
    }
    
    /// Both dirty flags
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }
    
    /// Render model as of the last rebuild, possibly stale
    pub fn render_model(&self) -> &RenderModel {
        &self.render_model
    }
    
    /// Rebuild the stale parts of the render model and return it
    ///
    /// Only the dirty groups are rebuilt; callers must not assume a full rebuild.
    /// The diffuse slot is bound only for 2D textures, cubemaps are left out.
    pub fn materialize_render_model(&mut self, bindings: &BindingIds) -> &RenderModel {
        if self.dirty.contains(DirtyFlags::TEXTURES) {
            let textures = &mut self.render_model.textures;
            textures.clear();
            
            if let Some(diffuse) = self.diffuse_map.filter(|texture| !texture.is_cube()) {
                textures.push(TextureEntry::new(
                    bindings.diffuse_texture,
                    diffuse.id(),
                    TextureKind::Texture2D,
                ));
            }
            
            self.dirty.remove(DirtyFlags::TEXTURES);
            log::trace!("Rebuilt {} texture binding(s)", textures.len());
        }
        
        if self.dirty.contains(DirtyFlags::STATE) {
            let uniforms = &mut self.render_model.uniforms;
            uniforms.clear();
            
            if !math::is_identity(&self.transform) {
                uniforms.push(UniformEntry::new(bindings.model_matrix, self.transform.as_slice()));
            }
            if !math::is_opaque_white(&self.tint) {
                uniforms.push(UniformEntry::new(bindings.color_tint, self.tint.as_slice()));
            }
            
            self.dirty.remove(DirtyFlags::STATE);
            log::trace!("Rebuilt {} uniform binding(s)", uniforms.len());
        }
        
        &self.render_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::GeometryMap;
    use crate::foundation::math::{MAT4_FLOATS, VEC4_FLOATS};
    use crate::render::binding::{BindingNames, StringIdMap};
    use crate::render::geometry::DisplayListId;
    use crate::render::model::ModelDescriptor;
    use crate::render::texture::TextureId;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    
    fn bindings() -> BindingIds {
        BindingIds::resolve(&mut StringIdMap::new(), &BindingNames::default())
    }
    
    #[test]
    fn test_new_drawable_defaults() {
        let drawable = Drawable::new();
        
        assert!(drawable.is_enabled());
        assert_eq!(*drawable.transform(), Mat4::identity());
        assert_eq!(*drawable.tint(), Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert!(drawable.textures_dirty());
        assert!(drawable.state_dirty());
    }
    
    #[test]
    fn test_default_state_materializes_empty() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        let model = drawable.materialize_render_model(&ids);
        
        assert!(model.uniforms().is_empty());
        assert!(model.textures().is_empty());
        assert!(!drawable.textures_dirty());
        assert!(!drawable.state_dirty());
    }
    
    #[test]
    fn test_alpha_only_emits_tint() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        drawable.set_alpha(0.5);
        
        let model = drawable.materialize_render_model(&ids);
        assert_eq!(model.uniforms().len(), 1);
        
        let tint = &model.uniforms()[0];
        assert_eq!(tint.binding, ids.color_tint);
        assert_eq!(tint.values().len(), VEC4_FLOATS);
        assert_relative_eq!(tint.values()[0], 1.0);
        assert_relative_eq!(tint.values()[1], 1.0);
        assert_relative_eq!(tint.values()[2], 1.0);
        assert_relative_eq!(tint.values()[3], 0.5);
    }
    
    #[test]
    fn test_transform_emits_column_major_matrix() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        let transform = Mat4::new_translation(&Vector3::new(1.0, 2.0, 3.0));
        drawable.set_transform(transform);
        
        let model = drawable.materialize_render_model(&ids);
        let entry = model.uniform(ids.model_matrix).unwrap();
        
        assert_eq!(entry.values().len(), MAT4_FLOATS);
        assert_eq!(&entry.values()[12..15], &[1.0f32, 2.0, 3.0]);
        assert!(model.uniform(ids.color_tint).is_none());
    }
    
    #[test]
    fn test_materialize_is_idempotent() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        drawable.set_tint(0.2, 0.4, 0.6, 0.8);
        drawable.set_diffuse_texture(TextureHandle::new_2d(TextureId(5)));
        
        let first = drawable.materialize_render_model(&ids).clone();
        let flags = drawable.dirty_flags();
        let second = drawable.materialize_render_model(&ids).clone();
        
        assert_eq!(first, second);
        assert_eq!(flags, drawable.dirty_flags());
        assert!(drawable.dirty_flags().is_empty());
    }
    
    #[test]
    fn test_reverting_to_defaults_drops_entries() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        drawable.set_tint_rgb(0.0, 0.0, 0.0);
        assert_eq!(drawable.materialize_render_model(&ids).uniforms().len(), 1);
        
        drawable.set_tint(1.0, 1.0, 1.0, 1.0);
        assert!(drawable.materialize_render_model(&ids).uniforms().is_empty());
    }
    
    #[test]
    fn test_tint_rgb_keeps_alpha() {
        let mut drawable = Drawable::new();
        drawable.set_alpha(0.25);
        drawable.set_tint_rgb(0.1, 0.2, 0.3);
        
        assert_relative_eq!(*drawable.tint(), Vec4::new(0.1, 0.2, 0.3, 0.25));
    }
    
    #[test]
    fn test_diffuse_binding() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        drawable.set_diffuse_texture(TextureHandle::new_2d(TextureId(42)));
        
        let model = drawable.materialize_render_model(&ids);
        assert_eq!(
            model.textures(),
            &[TextureEntry::new(ids.diffuse_texture, TextureId(42), TextureKind::Texture2D)]
        );
    }
    
    #[test]
    fn test_cubemap_diffuse_is_not_bound() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        drawable.set_diffuse_texture(TextureHandle::new_cube(TextureId(7)));
        
        assert!(drawable.materialize_render_model(&ids).textures().is_empty());
        assert_eq!(drawable.diffuse_texture().map(|t| t.id()), Some(TextureId(7)));
    }
    
    #[test]
    fn test_clearing_diffuse_unbinds() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        drawable.set_diffuse_texture(TextureHandle::new_2d(TextureId(1)));
        drawable.materialize_render_model(&ids);
        
        drawable.set_diffuse_texture(None);
        assert!(drawable.textures_dirty());
        assert!(drawable.materialize_render_model(&ids).textures().is_empty());
    }
    
    #[test]
    fn test_misc_textures_mark_textures_dirty_only() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        drawable.materialize_render_model(&ids);
        
        drawable.set_misc_texture1(TextureHandle::new_2d(TextureId(2)));
        drawable.set_misc_texture2(TextureHandle::new_cube(TextureId(3)));
        
        assert!(drawable.textures_dirty());
        assert!(!drawable.state_dirty());
        assert_eq!(drawable.misc_texture1(), Some(TextureHandle::new_2d(TextureId(2))));
        assert!(drawable.misc_texture2().unwrap().is_cube());
    }
    
    #[test]
    fn test_dirty_flags_are_independent() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        drawable.set_alpha(0.5);
        drawable.materialize_render_model(&ids);
        let uniforms = drawable.render_model().uniforms().to_vec();
        
        drawable.set_diffuse_texture(TextureHandle::new_2d(TextureId(8)));
        assert!(drawable.textures_dirty());
        assert!(!drawable.state_dirty());
        
        drawable.materialize_render_model(&ids);
        assert_eq!(drawable.render_model().uniforms(), uniforms.as_slice());
        
        drawable.set_transform(Mat4::new_scaling(2.0));
        assert!(drawable.state_dirty());
        assert!(!drawable.textures_dirty());
    }
    
    #[test]
    fn test_stale_model_until_materialized() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        drawable.materialize_render_model(&ids);
        
        drawable.set_alpha(0.0);
        assert!(drawable.render_model().uniforms().is_empty());
        assert_eq!(drawable.materialize_render_model(&ids).uniforms().len(), 1);
    }
    
    #[test]
    fn test_geometry_applies_immediately() {
        let mut storage: GeometryMap<Vec<f32>> = GeometryMap::with_key();
        let key = storage.insert(vec![0.0; 9]);
        let mut drawable = Drawable::new();
        
        drawable.set_geometry(key);
        assert_eq!(drawable.geometry(), Some(key));
        assert_eq!(drawable.render_model().vertex_source(), Some(key));
        assert!(drawable.dirty_flags().is_all());
        
        drawable.set_geometry(None);
        assert_eq!(drawable.render_model().vertex_source(), None);
    }
    
    #[test]
    fn test_visibility_does_not_dirty() {
        let ids = bindings();
        let mut drawable = Drawable::new();
        drawable.materialize_render_model(&ids);
        
        drawable.set_enabled(false);
        assert!(!drawable.is_enabled());
        assert!(drawable.dirty_flags().is_empty());
    }
    
    #[test]
    fn test_apply_model_binding_registers_both_sources() {
        let mut drawable = Drawable::new();
        let model = ModelDescriptor {
            display_list: Some(DisplayListId(11)),
            vertex_array: Some(VertexArrayObject::new(3, 120)),
        };
        
        drawable.apply_model_binding(&model);
        
        assert_eq!(drawable.render_model().draw_lists(), &[DisplayListId(11)]);
        assert_eq!(drawable.render_model().vertex_array(), Some(VertexArrayObject::new(3, 120)));
    }
    
    #[test]
    fn test_apply_model_binding_single_source() {
        let mut drawable = Drawable::new();
        drawable.apply_model_binding(&ModelDescriptor::with_vertex_array(VertexArrayObject::new(9, 6)));
        assert!(drawable.render_model().draw_lists().is_empty());
        
        drawable.apply_model_binding(&ModelDescriptor::with_display_list(DisplayListId(2)));
        assert_eq!(drawable.render_model().draw_lists(), &[DisplayListId(2)]);
        assert_eq!(drawable.render_model().vertex_array(), Some(VertexArrayObject::new(9, 6)));
        
        drawable.apply_model_binding(&ModelDescriptor::default());
        assert_eq!(drawable.render_model().draw_lists().len(), 1);
    }
}
