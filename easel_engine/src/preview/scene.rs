/// Preview scene strategy trait and panel size bounds

use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, CommandList, ClearValue};

/// Strategy for what a preview panel draws
///
/// A scene owns its GPU-side build products (shaders, pipeline, vertex
/// data) and records drawing commands into whatever square target the
/// panel provides. Scenes build lazily on first use; a failed build is
/// reported once through the diagnostic channel, after which the scene
/// stays not-ready and the panel keeps presenting a cleared surface
/// instead of crashing the frame loop.
pub trait PreviewScene {
    /// Build GPU resources on first use
    ///
    /// Idempotent: once built (or once failed), later calls return `Ok`
    /// without touching the device.
    fn prepare(&mut self, device: &mut dyn GraphicsDevice) -> Result<()>;

    /// True once `prepare` has built the scene's pipeline
    fn is_ready(&self) -> bool;

    /// Clear values applied when the panel begins the render pass
    fn clear_values(&self) -> Vec<ClearValue>;

    /// Record drawing commands for a `side x side` viewport
    ///
    /// Called inside an active render pass, only when `is_ready()`.
    fn record(&self, cmd: &mut dyn CommandList, side: u32) -> Result<()>;
}

/// Caller-supplied clamp range for a panel's requested side
///
/// Bounds differ per call site (one caller may want 64-512, another
/// 96-512); they are panel configuration, not a global constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    min: u32,
    max: u32,
}

impl SizeBounds {
    /// Create a bounds range; `min` is raised to at least 1 and `max` to
    /// at least `min`
    pub fn new(min: u32, max: u32) -> Self {
        let min = min.max(1);
        Self { min, max: max.max(min) }
    }

    /// Smallest allowed side
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Largest allowed side
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Clamp a requested side into the range
    pub fn clamp(&self, side: u32) -> u32 {
        side.clamp(self.min, self.max)
    }
}
