//! Layered drawable registry
//!
//! Holds one container per [`LayerId`] and applies bulk operations uniformly
//! across all of them. The registry is generic over its element type, which picks
//! the container strategy:
//!
//! - [`SceneDrawables`] owns its drawables (`Vec<Drawable>` per layer)
//! - [`DrawableDraft`] borrows drawables owned elsewhere (`Vec<&mut Drawable>` per layer)
//!
//! A draft is typically rebuilt every frame from the visible subset of the master
//! scene with [`DrawableRegistry::append_visible_to`].
//!
//! Bulk operations are not atomic across layers. If an element update panics
//! (an allocation failure while appending, say) layers already visited keep their
//! new state and the rest keep the old one.

use crate::foundation::math::Mat4;
use crate::render::Drawable;
use crate::scene::layer::LayerId;

/// Element of a registry layer that resolves to a drawable
pub trait DrawableSlot {
    /// Shared access to the drawable
    fn drawable(&self) -> &Drawable;
    
    /// Exclusive access to the drawable
    fn drawable_mut(&mut self) -> &mut Drawable;
}

impl DrawableSlot for Drawable {
    fn drawable(&self) -> &Drawable {
        self
    }
    
    fn drawable_mut(&mut self) -> &mut Drawable {
        self
    }
}

impl DrawableSlot for &mut Drawable {
    fn drawable(&self) -> &Drawable {
        &**self
    }
    
    fn drawable_mut(&mut self) -> &mut Drawable {
        &mut **self
    }
}

/// Fixed set of render layers, each an ordered sequence of `T`
#[derive(Debug, Clone)]
pub struct DrawableRegistry<T> {
    layers: [Vec<T>; LayerId::COUNT],
}

/// Registry owning its drawables, used for the authoritative scene
pub type SceneDrawables = DrawableRegistry<Drawable>;

/// Registry of borrowed drawables, used for per-pass submission lists
pub type DrawableDraft<'a> = DrawableRegistry<&'a mut Drawable>;

impl<T> Default for DrawableRegistry<T> {
    fn default() -> Self {
        Self {
            layers: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl<T> DrawableRegistry<T> {
    /// Create a registry with every layer empty
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Contents of one layer
    pub fn layer(&self, id: LayerId) -> &Vec<T> {
        &self.layers[id.index()]
    }
    
    /// Mutable contents of one layer
    pub fn layer_mut(&mut self, id: LayerId) -> &mut Vec<T> {
        &mut self.layers[id.index()]
    }
    
    /// Append to the end of a layer
    pub fn push(&mut self, id: LayerId, item: T) {
        self.layers[id.index()].push(item);
    }
    
    /// Every layer with its id, in fixed order
    pub fn layers(&self) -> impl Iterator<Item = (LayerId, &Vec<T>)> {
        LayerId::ALL.into_iter().zip(self.layers.iter())
    }
    
    /// Apply `f` to every layer container, in fixed order
    pub fn for_each_layer<F>(&mut self, mut f: F)
    where
        F: FnMut(LayerId, &mut Vec<T>),
    {
        for (id, layer) in LayerId::ALL.into_iter().zip(self.layers.iter_mut()) {
            f(id, layer);
        }
    }
    
    /// Find a layer by its literal name
    ///
    /// Linear in the number of layers. Intended for setup and tooling, not per-frame use.
    pub fn lookup_layer(&mut self, name: &str) -> Option<&mut Vec<T>> {
        match LayerId::from_name(name) {
            Some(id) => Some(self.layer_mut(id)),
            None => {
                log::debug!("No layer named '{}'", name);
                None
            }
        }
    }
    
    /// Empty every layer
    ///
    /// For a draft this only drops the references; the drawables stay in their owner.
    pub fn clear(&mut self) {
        self.for_each_layer(|_, layer| layer.clear());
        log::debug!("Cleared all {} layers", LayerId::COUNT);
    }
    
    /// Total number of entries across all layers
    pub fn len(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }
    
    /// Whether every layer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: DrawableSlot> DrawableRegistry<T> {
    /// Apply `f` to every drawable across all layers
    pub fn for_each_drawable<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Drawable),
    {
        self.for_each_layer(|_, layer| {
            for slot in layer.iter_mut() {
                f(slot.drawable_mut());
            }
        });
    }
    
    /// Every drawable across all layers, in layer order
    pub fn drawables(&self) -> impl Iterator<Item = &Drawable> {
        self.layers.iter().flatten().map(DrawableSlot::drawable)
    }
    
    /// Enable or disable every drawable
    ///
    /// Disabled drawables stay in their layer; they are only skipped by
    /// [`append_visible_to`](Self::append_visible_to).
    pub fn set_visibility(&mut self, visible: bool) {
        self.for_each_drawable(|drawable| drawable.set_enabled(visible));
    }
    
    /// Set the tint alpha of every drawable
    pub fn set_alpha(&mut self, alpha: f32) {
        self.for_each_drawable(|drawable| drawable.set_alpha(alpha));
    }
    
    /// Append references to every enabled drawable into the matching layer of `dest`
    ///
    /// Relative order within each layer is preserved. With `Some(transform)` the
    /// transform is written to the source drawable itself before it is appended, so
    /// the change outlives the draft.
    pub fn append_visible_to<'a>(&'a mut self, dest: &mut DrawableDraft<'a>, transform: Option<&Mat4>) {
        let before = dest.len();
        
        for (source, target) in self.layers.iter_mut().zip(dest.layers.iter_mut()) {
            for slot in source {
                let drawable = slot.drawable_mut();
                if !drawable.is_enabled() {
                    continue;
                }
                
                if let Some(transform) = transform {
                    drawable.set_transform(*transform);
                }
                target.push(drawable);
            }
        }
        
        log::trace!("Appended {} visible drawable(s) to draft", dest.len() - before);
    }
}
