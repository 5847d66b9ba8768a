/// PreviewPanel - owns one cache + one scene + one bounds configuration

use std::sync::Arc;

use crate::error::Result;
use crate::engine_warn;
use crate::graphics_device::{GraphicsDevice, DisplayImage, Viewport, Rect2D};
use crate::target::TargetCache;
use crate::preview::{PreviewScene, SizeBounds};

/// One rendered preview, ready for display
///
/// The image handle is valid while the producing panel's target is alive;
/// display it at `side x side` pixels, typically centered in the panel's
/// layout region via [`placement_in_region`].
#[derive(Debug, Clone, Copy)]
pub struct PreviewFrame {
    /// Color image of the preview surface
    pub image: DisplayImage,
    /// Edge length the preview was rendered at
    pub side: u32,
}

/// A self-contained preview: one scene drawn into one cached square target
///
/// The panel owns its [`TargetCache`] outright, so the one-cache-per-call-
/// site rule is enforced by construction: two panels can request different
/// sizes in the same frame without one panel's growth inflating the
/// other's surface. Panels are plain values owned and passed around by the
/// caller; there is no global registry.
pub struct PreviewPanel<S: PreviewScene> {
    cache: TargetCache,
    scene: S,
    bounds: SizeBounds,
}

impl<S: PreviewScene> PreviewPanel<S> {
    /// Create a panel with its scene and clamp bounds
    pub fn new(scene: S, bounds: SizeBounds) -> Self {
        Self {
            cache: TargetCache::new(),
            scene,
            bounds,
        }
    }

    /// The panel's clamp bounds
    pub fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    /// The panel's scene (for per-frame parameters such as rotation angle)
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Side the panel's surface is currently allocated at, if any
    pub fn allocated_side(&self) -> Option<u32> {
        self.cache.side()
    }

    /// Render one preview frame at (clamped) `requested_side`
    ///
    /// Frame order: clamp, ensure the cached surface, begin recording, bind
    /// the container, draw, restore the default destination, submit, return
    /// the color image. Must complete before the frame's present so the
    /// image holds fully-drawn content when it is sampled for display.
    ///
    /// A scene whose build failed declines to draw: the panel logs the
    /// failure and presents the cleared surface instead of halting the
    /// frame loop.
    pub fn render(
        &mut self,
        device: &mut dyn GraphicsDevice,
        requested_side: u32,
    ) -> Result<PreviewFrame> {
        let side = self.bounds.clamp(requested_side);

        if let Err(err) = self.scene.prepare(device) {
            engine_warn!("easel::PreviewPanel", "scene declined to draw: {}", err);
        }

        let (container, image) = {
            let target = self.cache.ensure(device, side)?;
            (Arc::clone(target.container()), target.display_image())
        };

        let mut cmd = device.create_command_list()?;
        cmd.begin()?;
        cmd.begin_render_pass(&container, &self.scene.clear_values())?;
        cmd.set_viewport(Viewport {
            x: 0.0,
            y: 0.0,
            width: side as f32,
            height: side as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        })?;
        if self.scene.is_ready() {
            self.scene.record(cmd.as_mut(), side)?;
        }
        cmd.end_render_pass()?;
        cmd.end()?;
        device.submit(&[cmd.as_ref()])?;

        Ok(PreviewFrame { image, side })
    }
}

/// Center a square image inside an available layout region
///
/// The region keeps its footprint; the caller fills the remaining margin
/// with an inert placeholder so surrounding layout does not shift when the
/// preview size changes frame-to-frame.
pub fn placement_in_region(region: Rect2D, side: u32) -> Rect2D {
    let dx = (region.width as i64 - side as i64) / 2;
    let dy = (region.height as i64 - side as i64) / 2;
    Rect2D {
        x: region.x + dx as i32,
        y: region.y + dy as i32,
        width: side,
        height: side,
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
