/// Render target — one off-screen square drawing surface.
///
/// A render target combines a color image, a depth/stencil image, and the
/// container that binds them together as a draw destination. Render
/// targets can only be created via `TargetCache::ensure()`; a value of
/// this type is always fully allocated, with both images sized
/// `side x side` and attached to the container.

use std::sync::Arc;

use crate::graphics_device::{Texture, Framebuffer, DisplayImage};

/// One allocated square drawing surface
///
/// The color image, depth/stencil image, and container are created
/// together and stay mutually consistent: growing the surface re-specifies
/// the storage of both images behind the same handles and revalidates the
/// container, so a reference obtained from the cache never observes a
/// half-resized target.
pub struct RenderTarget {
    /// Current edge length in pixels
    pub(crate) side: u32,
    /// Color image, sampleable for display
    pub(crate) color: Arc<dyn Texture>,
    /// Combined depth/stencil image
    pub(crate) depth: Arc<dyn Texture>,
    /// Draw destination binding color + depth together
    pub(crate) container: Arc<dyn Framebuffer>,
    /// Display handle of the color image, resolved at allocation
    pub(crate) image: DisplayImage,
}

impl RenderTarget {
    /// Internal only — created via TargetCache::ensure()
    pub(crate) fn new(
        side: u32,
        color: Arc<dyn Texture>,
        depth: Arc<dyn Texture>,
        container: Arc<dyn Framebuffer>,
        image: DisplayImage,
    ) -> Self {
        Self {
            side,
            color,
            depth,
            container,
            image,
        }
    }

    /// Current edge length in pixels
    pub fn side(&self) -> u32 {
        self.side
    }

    /// The color image
    pub fn color(&self) -> &Arc<dyn Texture> {
        &self.color
    }

    /// The depth/stencil image
    pub fn depth(&self) -> &Arc<dyn Texture> {
        &self.depth
    }

    /// The draw-destination container
    pub fn container(&self) -> &Arc<dyn Framebuffer> {
        &self.container
    }

    /// Display handle for the color image
    ///
    /// Valid only while this render target is alive; display layers must
    /// not retain it past the owning cache.
    pub fn display_image(&self) -> DisplayImage {
        self.image
    }
}
