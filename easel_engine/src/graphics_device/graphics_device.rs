/// GraphicsDevice trait - main resource factory interface

use std::sync::Arc;
use crate::error::Result;
use crate::graphics_device::{
    Texture, Buffer, Shader, Pipeline, Framebuffer, CommandList,
    TextureDesc, BufferDesc, ShaderDesc, PipelineDesc, FramebufferDesc,
};

/// Main graphics device trait
///
/// This is the central factory interface for creating GPU resources.
/// Implemented by backend-specific devices (e.g., GlGraphicsDevice).
///
/// The device and every resource it creates are confined to the single
/// thread that owns the underlying graphics context. The traits therefore
/// carry no `Send`/`Sync` bounds; callers on other threads must marshal
/// their requests onto the owning thread instead of sharing the device
/// behind a lock.
pub trait GraphicsDevice {
    /// Create a texture
    ///
    /// # Arguments
    ///
    /// * `desc` - Texture descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created texture
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Create a buffer
    ///
    /// # Arguments
    ///
    /// * `desc` - Buffer descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created buffer
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>>;

    /// Create a shader
    ///
    /// A compile failure is reported through the engine diagnostic channel
    /// and returned as an error; it must not abort the frame loop.
    ///
    /// # Arguments
    ///
    /// * `desc` - Shader descriptor
    fn create_shader(&mut self, desc: ShaderDesc) -> Result<Arc<dyn Shader>>;

    /// Create a graphics pipeline from compiled shaders
    ///
    /// # Arguments
    ///
    /// * `desc` - Pipeline descriptor
    fn create_pipeline(&mut self, desc: PipelineDesc) -> Result<Arc<dyn Pipeline>>;

    /// Create a framebuffer that groups a color attachment and an optional
    /// depth/stencil attachment as one draw destination
    ///
    /// # Arguments
    ///
    /// * `desc` - Framebuffer descriptor
    fn create_framebuffer(&mut self, desc: &FramebufferDesc) -> Result<Arc<dyn Framebuffer>>;

    /// Create a command list for recording drawing commands
    fn create_command_list(&mut self) -> Result<Box<dyn CommandList>>;

    /// Submit recorded command lists for execution
    ///
    /// # Arguments
    ///
    /// * `commands` - Command lists to execute, in order
    fn submit(&mut self, commands: &[&dyn CommandList]) -> Result<()>;
}
