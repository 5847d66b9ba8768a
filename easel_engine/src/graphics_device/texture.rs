/// Texture trait, texture descriptor, and the display image handle

use crate::error::Result;

/// Texture pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    R8G8B8A8_UNORM,
    R8G8B8A8_SRGB,
    D24_UNORM_S8_UINT,
}

impl TextureFormat {
    /// Returns true for depth/stencil formats
    pub fn is_depth_stencil(&self) -> bool {
        matches!(self, TextureFormat::D24_UNORM_S8_UINT)
    }
}

/// Texture usage flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureUsage {
    /// Texture can be sampled in shaders
    Sampled,
    /// Texture can be used as render target
    RenderTarget,
    /// Texture can be used for both
    SampledAndRenderTarget,
    /// Texture can be used as depth/stencil attachment
    DepthStencil,
}

/// Descriptor for creating a texture
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
}

/// Read-only properties of a created texture.
///
/// Returned by `Texture::info()` to query texture properties
/// without exposing backend-specific details.
#[derive(Debug, Clone)]
pub struct TextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
}

/// Foreign image handle for display layers
///
/// Wraps the backend's native color-image identifier so display layers can
/// sample the image (e.g., draw it into a GUI) without seeing the raw
/// integer. The handle is owned by the graphics collaborator and is valid
/// only while the texture that produced it is alive; display layers must
/// not retain it past the owning render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayImage(u64);

impl DisplayImage {
    /// Wrap a backend-native image identifier
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The backend-native identifier
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Texture resource trait
///
/// Implemented by backend-specific texture types (e.g., GlTexture).
/// The texture is automatically destroyed when dropped.
pub trait Texture {
    /// Get the current properties of this texture
    fn info(&self) -> TextureInfo;

    /// Re-specify the texture's storage at a new size, in place
    ///
    /// The resource handle stays the same; only the backing storage is
    /// re-allocated. Existing contents are discarded. Backends whose API
    /// cannot re-specify storage on a live object must destroy and recreate
    /// the storage behind the same handle.
    fn reallocate(&self, width: u32, height: u32) -> Result<()>;

    /// The display handle for this texture's color image
    ///
    /// Returns `None` for storage that cannot be sampled (e.g., a
    /// depth/stencil renderbuffer).
    fn display_image(&self) -> Option<DisplayImage>;
}
