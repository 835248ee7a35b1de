//! Scene drawable aggregation
//!
//! Classifies drawables into ordered render passes and builds per-pass drafts.
//!
//! ## Architecture
//!
//! ```text
//! Game code (mutates Drawables)
//!      ↓
//! SceneDrawables (owning, one Vec per LayerId)
//!      ↓  append_visible_to
//! DrawableDraft (borrowed, enabled drawables only)
//!      ↓  materialize_render_model + submit_to
//! Submission surface
//! ```

mod layer;
mod registry;


pub use layer::{LayerId, SceneError};
pub use registry::{DrawableRegistry, DrawableSlot, DrawableDraft, SceneDrawables};
