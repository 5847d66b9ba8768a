/// CommandList trait - for recording drawing commands

use std::sync::Arc;
use glam::Mat4;
use crate::error::Result;
use crate::graphics_device::{Framebuffer, Pipeline, Buffer};

/// Command list for recording drawing commands
///
/// Commands are recorded between `begin()` and `end()` and executed via
/// `GraphicsDevice::submit()`. Backends without deferred command lists
/// (OpenGL) may execute each command immediately; the recording surface is
/// the same either way.
pub trait CommandList {
    /// Begin recording commands
    fn begin(&mut self) -> Result<()>;

    /// End recording commands
    fn end(&mut self) -> Result<()>;

    /// Begin a render pass targeting the given framebuffer
    ///
    /// Binds the framebuffer as the active draw destination and clears its
    /// attachments with the given values.
    ///
    /// # Arguments
    ///
    /// * `framebuffer` - The draw destination
    /// * `clear_values` - Clear values for the attachments
    fn begin_render_pass(
        &mut self,
        framebuffer: &Arc<dyn Framebuffer>,
        clear_values: &[ClearValue],
    ) -> Result<()>;

    /// End the current render pass
    ///
    /// Restores the default on-screen surface as the active draw
    /// destination. Must be called before the frame's present so the
    /// rendered image can be sampled for display.
    fn end_render_pass(&mut self) -> Result<()>;

    /// Set the viewport
    ///
    /// # Arguments
    ///
    /// * `viewport` - Viewport dimensions and depth range
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Bind a graphics pipeline
    ///
    /// # Arguments
    ///
    /// * `pipeline` - Pipeline to bind
    fn bind_pipeline(&mut self, pipeline: &Arc<dyn Pipeline>) -> Result<()>;

    /// Bind a vertex buffer to the bound pipeline's vertex layout
    ///
    /// # Arguments
    ///
    /// * `buffer` - Buffer to bind
    /// * `offset` - Offset into the buffer in bytes
    fn bind_vertex_buffer(&mut self, buffer: &Arc<dyn Buffer>, offset: u64) -> Result<()>;

    /// Set a float uniform on the bound pipeline
    ///
    /// Unknown uniform names are ignored, matching the underlying graphics
    /// APIs' behavior for inactive uniforms.
    fn set_uniform_f32(&mut self, name: &str, value: f32) -> Result<()>;

    /// Set a 4x4 matrix uniform on the bound pipeline
    fn set_uniform_mat4(&mut self, name: &str, value: Mat4) -> Result<()>;

    /// Draw vertices
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Number of vertices to draw
    /// * `first_vertex` - Index of first vertex
    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<()>;
}

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

/// 2D rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect2D {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Clear value for an attachment
#[derive(Debug, Clone, Copy)]
pub enum ClearValue {
    /// Color clear value (RGBA)
    Color([f32; 4]),
    /// Depth/stencil clear value
    DepthStencil { depth: f32, stencil: u32 },
}
