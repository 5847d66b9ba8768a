/// Square render-target cache with high-water-mark growth.
///
/// Owns at most one off-screen square surface and keeps it just large
/// enough for the biggest side ever requested. The surface only grows,
/// never shrinks, across the cache's lifetime, trading peak memory for
/// avoided reallocation churn.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::{engine_debug, engine_error, engine_trace};
use crate::graphics_device::{
    GraphicsDevice, TextureDesc, TextureFormat, TextureUsage, FramebufferDesc,
};
use super::render_target::RenderTarget;

/// On-demand cache for one square render target
///
/// Two states: empty (initial) and allocated at some side length. The
/// first `ensure` allocates; a request covered by the current surface is a
/// no-op; a larger request re-specifies the storage of the existing color
/// and depth images in place. Destruction of the cache is the only way
/// back to empty.
///
/// A cache must be exclusively owned by the one call site that draws into
/// it. Two logically independent callers sharing a cache would drive each
/// other's high-water mark; give each its own instance instead.
pub struct TargetCache {
    target: Option<RenderTarget>,
}

impl TargetCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self { target: None }
    }

    /// Side the surface is currently allocated at, or None while empty
    pub fn side(&self) -> Option<u32> {
        self.target.as_ref().map(|t| t.side)
    }

    /// The allocated surface, or None while empty
    pub fn target(&self) -> Option<&RenderTarget> {
        self.target.as_ref()
    }

    /// Make the surface ready to draw into at `side x side` or larger
    ///
    /// Allocates on first use, reuses the existing surface when it already
    /// covers the request, and grows the storage in place otherwise. After
    /// a successful call the stored side is >= `side`.
    ///
    /// # Errors
    ///
    /// Returns an error for `side == 0` (no zero-size surface is ever
    /// allocated) and for device failures while allocating or growing.
    /// Every failure is also reported through the engine diagnostic
    /// channel; a failed grow leaves the previous side recorded, so the
    /// next `ensure` retries the reallocation.
    pub fn ensure(
        &mut self,
        device: &mut dyn GraphicsDevice,
        side: u32,
    ) -> Result<&RenderTarget> {
        if side == 0 {
            engine_error!("easel::TargetCache", "ensure(0): a surface must be at least 1x1");
            return Err(Error::InvalidResource(
                "requested side must be at least 1".to_string(),
            ));
        }

        match &mut self.target {
            None => {
                self.target = Some(Self::allocate(device, side)?);
                engine_debug!("easel::TargetCache", "allocated {}x{} target", side, side);
            }
            Some(target) if side <= target.side => {
                engine_trace!("easel::TargetCache", "ensure({}) is a no-op", side);
            }
            Some(target) => {
                // Grow in place: the handles stay the same, only the
                // backing storage is re-specified, then the container is
                // re-checked. The stored side is updated last so a failed
                // grow is retried by the next ensure.
                target.color.reallocate(side, side)?;
                target.depth.reallocate(side, side)?;
                target.container.revalidate()?;
                engine_debug!("easel::TargetCache",
                    "grew target from {0}x{0} to {1}x{1}", target.side, side);
                target.side = side;
            }
        }

        Ok(self.target.as_ref().unwrap())
    }

    fn allocate(device: &mut dyn GraphicsDevice, side: u32) -> Result<RenderTarget> {
        let color = device.create_texture(TextureDesc {
            width: side,
            height: side,
            format: TextureFormat::R8G8B8A8_UNORM,
            usage: TextureUsage::SampledAndRenderTarget,
        })?;
        let depth = device.create_texture(TextureDesc {
            width: side,
            height: side,
            format: TextureFormat::D24_UNORM_S8_UINT,
            usage: TextureUsage::DepthStencil,
        })?;
        let container = device.create_framebuffer(&FramebufferDesc {
            color_attachment: Arc::clone(&color),
            depth_stencil_attachment: Some(Arc::clone(&depth)),
            width: side,
            height: side,
        })?;
        let image = color.display_image().ok_or_else(|| {
            Error::InvalidResource("color attachment exposes no display image".to_string())
        })?;

        Ok(RenderTarget::new(side, color, depth, container, image))
    }
}

impl Default for TargetCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "target_cache_tests.rs"]
mod tests;
