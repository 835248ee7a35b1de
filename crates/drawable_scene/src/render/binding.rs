//! Binding-name interning
//!
//! Shader binding names ("diffuseTexture", "modelMatrix", ...) are mapped to small
//! integer ids once, up front. The render model only ever carries the ids.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Stable small integer identifying an interned binding name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(pub u32);

/// Maps binding names to stable ids
///
/// Interning the same name twice must return the same id.
pub trait BindingInterner {
    /// Return the id for `name`, allocating one on first use
    fn intern(&mut self, name: &str) -> BindingId;
}

/// Simple in-memory interner
#[derive(Debug, Default, Clone)]
pub struct StringIdMap {
    ids: HashMap<String, BindingId>,
    names: Vec<String>,
}

impl StringIdMap {
    /// Create an empty interner
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Look up an already interned name without allocating
    pub fn get(&self, name: &str) -> Option<BindingId> {
        self.ids.get(name).copied()
    }
    
    /// Reverse lookup, mostly for diagnostics
    pub fn name(&self, id: BindingId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }
    
    /// Number of interned names
    pub fn len(&self) -> usize {
        self.names.len()
    }
    
    /// Whether nothing has been interned yet
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl BindingInterner for StringIdMap {
    fn intern(&mut self, name: &str) -> BindingId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        
        #[allow(clippy::cast_possible_truncation)]
        let id = BindingId(self.names.len() as u32);
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        log::trace!("Interned binding '{}' as {:?}", name, id);
        id
    }
}

/// Shader binding names used by the render model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingNames {
    /// Sampler receiving the diffuse map
    pub diffuse_texture: String,
    /// Uniform receiving the model matrix
    pub model_matrix: String,
    /// Uniform receiving the RGBA tint
    pub color_tint: String,
}

impl Default for BindingNames {
    fn default() -> Self {
        Self {
            diffuse_texture: "diffuseTexture".to_string(),
            model_matrix: "modelMatrix".to_string(),
            color_tint: "colorTint".to_string(),
        }
    }
}

/// Binding ids resolved once and reused every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingIds {
    /// Id of the diffuse texture sampler
    pub diffuse_texture: BindingId,
    /// Id of the model matrix uniform
    pub model_matrix: BindingId,
    /// Id of the tint uniform
    pub color_tint: BindingId,
}

impl BindingIds {
    /// Intern every configured binding name
    pub fn resolve(interner: &mut impl BindingInterner, names: &BindingNames) -> Self {
        Self {
            diffuse_texture: interner.intern(&names.diffuse_texture),
            model_matrix: interner.intern(&names.model_matrix),
            color_tint: interner.intern(&names.color_tint),
        }
    }
}
