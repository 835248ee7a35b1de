//! # Drawable Scene
//!
//! Drawable aggregation and render-state caching for the renderer.
//!
//! ## Features
//!
//! - **Layered Registry**: One ordered container per render pass (opaque, blended,
//!   skybox, particles, text, lights, 2D), with bulk visibility/alpha/clear operations
//! - **Render Drafts**: Per-pass reference lists built from the visible subset of a
//!   master scene, optionally stamping a shared transform
//! - **Cached Drawable State**: Lazy, dirty-flag gated rebuild of the minimal set of
//!   texture and uniform bindings a drawable needs this frame
//!
//! ## Quick Start
//!
//! ```rust
//! use drawable_scene::prelude::*;
//!
//! let mut interner = StringIdMap::new();
//! let bindings = BindingIds::resolve(&mut interner, &BindingNames::default());
//!
//! let mut scene = SceneDrawables::new();
//! let mut drawable = Drawable::new();
//! drawable.set_alpha(0.5);
//! scene.push(LayerId::NormalBlend, drawable);
//!
//! let mut draft = DrawableDraft::new();
//! scene.append_visible_to(&mut draft, None);
//!
//! draft.for_each_drawable(|drawable| {
//!     let model = drawable.materialize_render_model(&bindings);
//!     assert_eq!(model.uniforms().len(), 1);
//! });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SceneConfig},
        foundation::math::{Mat4, Vec4},
        render::{
            BindingId, BindingIds, BindingInterner, BindingNames, StringIdMap,
            Drawable, RenderModel, TextureEntry, UniformEntry,
            TextureHandle, TextureId, TextureKind,
            GeometryKey, DisplayListId, VertexArrayObject,
            ModelSource, ModelDescriptor,
            SubmissionSurface, CommandRecorder, SubmitCommand,
        },
        scene::{DrawableRegistry, DrawableSlot, DrawableDraft, SceneDrawables, LayerId, SceneError},
    };
}
