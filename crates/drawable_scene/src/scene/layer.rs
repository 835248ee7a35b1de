//! Render layer identifiers
//!
//! The layer set is closed and its order is fixed. Every operation that walks
//! layers walks them in [`LayerId::ALL`] order, which is also the order passes are
//! submitted in.

use std::str::FromStr;

use thiserror::Error;

/// One rendering pass bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerId {
    /// 2D overlay elements
    TwoDim,
    /// Opaque lit geometry
    NormalNoBlend,
    /// Opaque geometry without lighting
    NormalNoBlendNoLighting,
    /// Opaque car bodies
    CarNoBlend,
    /// Alpha blended geometry
    NormalBlend,
    /// Blended skybox elements
    SkyboxBlend,
    /// Opaque skybox elements
    SkyboxNoBlend,
    /// Text
    Text,
    /// Particles
    Particle,
    /// Blended geometry drawn without the camera transform
    NoCamTransBlend,
    /// Opaque geometry drawn without the camera transform
    NoCamTransNoBlend,
    /// Emissive light sources
    LightsEmissive,
    /// Omnidirectional light volumes
    LightsOmni,
}

impl LayerId {
    /// Number of layers
    pub const COUNT: usize = 13;
    
    /// Every layer, in iteration order
    pub const ALL: [LayerId; Self::COUNT] = [
        LayerId::TwoDim,
        LayerId::NormalNoBlend,
        LayerId::NormalNoBlendNoLighting,
        LayerId::CarNoBlend,
        LayerId::NormalBlend,
        LayerId::SkyboxBlend,
        LayerId::SkyboxNoBlend,
        LayerId::Text,
        LayerId::Particle,
        LayerId::NoCamTransBlend,
        LayerId::NoCamTransNoBlend,
        LayerId::LightsEmissive,
        LayerId::LightsOmni,
    ];
    
    /// Position of this layer in [`LayerId::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
    
    /// Literal name used by scene files and lookups
    pub const fn name(self) -> &'static str {
        match self {
            LayerId::TwoDim => "twodim",
            LayerId::NormalNoBlend => "normal_noblend",
            LayerId::NormalNoBlendNoLighting => "normal_noblend_nolighting",
            LayerId::CarNoBlend => "car_noblend",
            LayerId::NormalBlend => "normal_blend",
            LayerId::SkyboxBlend => "skybox_blend",
            LayerId::SkyboxNoBlend => "skybox_noblend",
            LayerId::Text => "text",
            LayerId::Particle => "particle",
            LayerId::NoCamTransBlend => "nocamtrans_blend",
            LayerId::NoCamTransNoBlend => "nocamtrans_noblend",
            LayerId::LightsEmissive => "lights_emissive",
            LayerId::LightsOmni => "lights_omni",
        }
    }
    
    /// Find a layer by its literal name
    ///
    /// Linear scan over the layer set; fine for setup code, not meant for per-frame use.
    pub fn from_name(name: &str) -> Option<LayerId> {
        Self::ALL.iter().copied().find(|layer| layer.name() == name)
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LayerId {
    type Err = SceneError;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SceneError::UnknownLayer(s.to_string()))
    }
}

/// Scene errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// No layer with the given name
    #[error("Unknown layer: {0}")]
    UnknownLayer(String),
}
