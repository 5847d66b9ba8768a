/// Framebuffer trait - groups attachments into one draw destination
///
/// A framebuffer binds together a color image and a depth/stencil image
/// that drawing commands can be directed into instead of the visible
/// screen. Created once and reused each frame; when the attachments'
/// storage is re-specified at a new size, `revalidate()` re-checks the
/// container instead of recreating it.

use std::sync::Arc;
use crate::error::Result;
use crate::graphics_device::Texture;

/// Framebuffer — a color attachment plus optional depth/stencil attachment
///
/// Created via `GraphicsDevice::create_framebuffer()`.
pub trait Framebuffer {
    /// Re-check the container after attachment storage changed
    ///
    /// Binds the container, re-attaches its images, verifies completeness,
    /// and restores the prior draw destination (the default on-screen
    /// surface) before returning. An incomplete container is reported
    /// through the engine diagnostic channel and returned as an error.
    fn revalidate(&self) -> Result<()>;
}

/// Descriptor for creating a framebuffer
pub struct FramebufferDesc {
    /// Color attachment (must be a render-target-capable texture)
    pub color_attachment: Arc<dyn Texture>,
    /// Optional depth/stencil attachment
    pub depth_stencil_attachment: Option<Arc<dyn Texture>>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}
