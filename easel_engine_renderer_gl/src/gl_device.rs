/// GraphicsDevice - OpenGL implementation of the engine factory trait

use std::sync::Arc;

use glow::HasContext;

use easel_engine::engine_info;
use easel_engine::easel::Result;
use easel_engine::easel::device::{
    GraphicsDevice, Texture, Buffer, Shader, Pipeline, Framebuffer, CommandList,
    TextureDesc, BufferDesc, ShaderDesc, PipelineDesc, FramebufferDesc,
};

use crate::gl_texture::GlTexture;
use crate::gl_buffer::GlBuffer;
use crate::gl_shader::GlShader;
use crate::gl_pipeline::GlPipeline;
use crate::gl_frame_buffer::GlFramebuffer;
use crate::gl_command_list::GlCommandList;

/// OpenGL graphics device
///
/// Wraps an OpenGL 3.3 core context created and owned by the windowing
/// collaborator. The context must be current on the calling thread and
/// stay current for the device's whole lifetime; the device and every
/// resource it creates are confined to that thread.
pub struct GlGraphicsDevice {
    gl: Arc<glow::Context>,
}

impl GlGraphicsDevice {
    /// Wrap an existing OpenGL context
    pub fn new(gl: Arc<glow::Context>) -> Self {
        engine_info!("easel::gl", "OpenGL graphics device initialized");
        Self { gl }
    }
}

impl GraphicsDevice for GlGraphicsDevice {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        Ok(Arc::new(GlTexture::new(Arc::clone(&self.gl), &desc)?))
    }

    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        Ok(Arc::new(GlBuffer::new(Arc::clone(&self.gl), &desc)?))
    }

    fn create_shader(&mut self, desc: ShaderDesc) -> Result<Arc<dyn Shader>> {
        Ok(Arc::new(GlShader::new(Arc::clone(&self.gl), &desc)?))
    }

    fn create_pipeline(&mut self, desc: PipelineDesc) -> Result<Arc<dyn Pipeline>> {
        Ok(Arc::new(GlPipeline::new(Arc::clone(&self.gl), &desc)?))
    }

    fn create_framebuffer(&mut self, desc: &FramebufferDesc) -> Result<Arc<dyn Framebuffer>> {
        Ok(Arc::new(GlFramebuffer::new(Arc::clone(&self.gl), desc)?))
    }

    fn create_command_list(&mut self) -> Result<Box<dyn CommandList>> {
        Ok(Box::new(GlCommandList::new(Arc::clone(&self.gl))))
    }

    fn submit(&mut self, _commands: &[&dyn CommandList]) -> Result<()> {
        // Commands executed eagerly during recording; flush so the work is
        // handed to the driver before the frame's present.
        unsafe {
            self.gl.flush();
        }
        Ok(())
    }
}
