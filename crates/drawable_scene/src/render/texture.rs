//! Texture handles
//!
//! Texture loading and id management live in the asset subsystem. Drawables only
//! see copyable handles that expose the GPU id and whether the texture is a cubemap.

/// GPU texture name as issued by the texture provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Binding target of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    /// Plain 2D texture
    Texture2D,
    /// Six-faced cubemap
    Cubemap,
}

/// Non-owning handle to a texture resource
///
/// The provider keeps the underlying resource alive for as long as any handle is
/// in use. Handing a drawable a handle whose texture was released is a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    id: TextureId,
    kind: TextureKind,
}

impl TextureHandle {
    /// Create a handle for a 2D texture
    pub fn new_2d(id: TextureId) -> Self {
        Self { id, kind: TextureKind::Texture2D }
    }
    
    /// Create a handle for a cubemap
    pub fn new_cube(id: TextureId) -> Self {
        Self { id, kind: TextureKind::Cubemap }
    }
    
    /// GPU id used for binding
    pub fn id(&self) -> TextureId {
        self.id
    }
    
    /// Binding target of the texture
    pub fn kind(&self) -> TextureKind {
        self.kind
    }
    
    /// Whether the texture is a cubemap
    pub fn is_cube(&self) -> bool {
        self.kind == TextureKind::Cubemap
    }
}
