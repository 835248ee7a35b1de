//! Render-facing drawable state
//!
//! Everything between a drawable's logical attributes and the GPU submission
//! surface: texture and geometry handles, binding-name interning, the derived
//! render model, and the drawable itself.

pub mod binding;
pub mod drawable;
pub mod geometry;
pub mod model;
pub mod render_model;
pub mod submission;
pub mod texture;

pub use binding::{BindingId, BindingIds, BindingInterner, BindingNames, StringIdMap};
pub use drawable::{DirtyFlags, Drawable};
pub use geometry::{DisplayListId, GeometryKey, VertexArrayObject};
pub use model::{ModelDescriptor, ModelSource};
pub use render_model::{RenderModel, TextureEntry, UniformEntry};
pub use submission::{CommandRecorder, SubmissionSurface, SubmitCommand};
pub use texture::{TextureHandle, TextureId, TextureKind};
