/// Framebuffer - OpenGL implementation of the engine Framebuffer trait

use std::sync::Arc;

use glow::HasContext;

use easel_engine::easel::{Error, Result};
use easel_engine::engine_bail;
use easel_engine::easel::device::{
    Texture, Framebuffer as EngineFramebuffer, FramebufferDesc,
};

use crate::gl_texture::{GlTexture, GlStorage};

/// OpenGL framebuffer implementation
///
/// Attachments are made once at creation. Growing a render target
/// re-specifies the attachments' storage behind the same GL objects, so
/// the attachment points stay valid and only completeness needs to be
/// re-checked afterwards.
pub struct GlFramebuffer {
    /// GL framebuffer object
    pub(crate) fbo: glow::Framebuffer,
    /// OpenGL context (for binds and cleanup)
    gl: Arc<glow::Context>,
}

impl GlFramebuffer {
    /// Create the framebuffer and attach the descriptor's images
    ///
    /// The default on-screen framebuffer is restored before returning,
    /// whether the container is complete or not.
    pub(crate) fn new(gl: Arc<glow::Context>, desc: &FramebufferDesc) -> Result<Self> {
        let fbo = unsafe { gl.create_framebuffer() }.map_err(Error::BackendError)?;
        unsafe {
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(fbo));
        }

        if let Err(err) = Self::attach(&gl, desc) {
            unsafe {
                gl.bind_framebuffer(glow::FRAMEBUFFER, None);
                gl.delete_framebuffer(fbo);
            }
            return Err(err);
        }

        let status = unsafe {
            let status = gl.check_framebuffer_status(glow::FRAMEBUFFER);
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);
            status
        };
        if status != glow::FRAMEBUFFER_COMPLETE {
            unsafe { gl.delete_framebuffer(fbo) };
            engine_bail!("easel::gl", "framebuffer incomplete: status {:#x}", status);
        }

        Ok(Self { fbo, gl })
    }

    /// Attach color and depth/stencil images to the bound framebuffer
    fn attach(gl: &glow::Context, desc: &FramebufferDesc) -> Result<()> {
        // Downcast to OpenGL types
        let color = desc.color_attachment.as_ref() as *const dyn Texture as *const GlTexture;
        let color = unsafe { &*color };

        match &color.storage {
            GlStorage::Texture(texture) => unsafe {
                gl.framebuffer_texture_2d(
                    glow::FRAMEBUFFER,
                    glow::COLOR_ATTACHMENT0,
                    glow::TEXTURE_2D,
                    Some(*texture),
                    0,
                );
            },
            GlStorage::Renderbuffer(_) => {
                engine_bail!("easel::gl",
                    "color attachment must be a sampleable texture");
            }
        }

        if let Some(depth_stencil) = &desc.depth_stencil_attachment {
            let depth = depth_stencil.as_ref() as *const dyn Texture as *const GlTexture;
            let depth = unsafe { &*depth };

            match &depth.storage {
                GlStorage::Renderbuffer(renderbuffer) => unsafe {
                    gl.framebuffer_renderbuffer(
                        glow::FRAMEBUFFER,
                        glow::DEPTH_STENCIL_ATTACHMENT,
                        glow::RENDERBUFFER,
                        Some(*renderbuffer),
                    );
                },
                GlStorage::Texture(texture) => unsafe {
                    gl.framebuffer_texture_2d(
                        glow::FRAMEBUFFER,
                        glow::DEPTH_STENCIL_ATTACHMENT,
                        glow::TEXTURE_2D,
                        Some(*texture),
                        0,
                    );
                },
            }
        }

        Ok(())
    }
}

impl EngineFramebuffer for GlFramebuffer {
    fn revalidate(&self) -> Result<()> {
        let gl = &self.gl;
        let status = unsafe {
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(self.fbo));
            let status = gl.check_framebuffer_status(glow::FRAMEBUFFER);
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);
            status
        };
        if status != glow::FRAMEBUFFER_COMPLETE {
            engine_bail!("easel::gl",
                "framebuffer incomplete after resize: status {:#x}", status);
        }
        Ok(())
    }
}

impl Drop for GlFramebuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_framebuffer(self.fbo);
        }
    }
}
