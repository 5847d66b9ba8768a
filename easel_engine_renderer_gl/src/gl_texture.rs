/// Texture - OpenGL implementation of the engine Texture trait

use std::cell::Cell;
use std::sync::Arc;

use glow::{HasContext, PixelUnpackData};

use easel_engine::easel::{Error, Result};
use easel_engine::easel::device::{
    Texture as EngineTexture, TextureDesc, TextureFormat, TextureUsage,
    TextureInfo, DisplayImage,
};

use crate::gl_format;

/// Backing GL object for a texture resource
///
/// Color images live in texture objects so they can be sampled for
/// display; depth/stencil storage lives in renderbuffer objects, which is
/// all the off-screen draw path needs.
pub(crate) enum GlStorage {
    Texture(glow::Texture),
    Renderbuffer(glow::Renderbuffer),
}

/// OpenGL texture implementation
///
/// Storage can be re-specified in place: GL allows `tex_image_2d` and
/// `renderbuffer_storage` on a live object, so growing a render target
/// never recreates the handle.
pub struct GlTexture {
    /// Backing GL object
    pub(crate) storage: GlStorage,
    /// Current size, updated by `reallocate`
    size: Cell<(u32, u32)>,
    format: TextureFormat,
    usage: TextureUsage,
    /// OpenGL context (for storage calls and cleanup)
    gl: Arc<glow::Context>,
}

impl GlTexture {
    /// Create the texture and allocate its initial storage
    pub(crate) fn new(gl: Arc<glow::Context>, desc: &TextureDesc) -> Result<Self> {
        let storage = if gl_format::is_renderbuffer_backed(desc.format) {
            let renderbuffer = unsafe { gl.create_renderbuffer() }
                .map_err(Error::BackendError)?;
            unsafe {
                gl.bind_renderbuffer(glow::RENDERBUFFER, Some(renderbuffer));
                gl.renderbuffer_storage(
                    glow::RENDERBUFFER,
                    gl_format::internal_format(desc.format),
                    desc.width as i32,
                    desc.height as i32,
                );
                gl.bind_renderbuffer(glow::RENDERBUFFER, None);
            }
            GlStorage::Renderbuffer(renderbuffer)
        } else {
            let texture = unsafe { gl.create_texture() }
                .map_err(Error::BackendError)?;
            unsafe {
                gl.bind_texture(glow::TEXTURE_2D, Some(texture));
                Self::specify_image(&gl, desc.format, desc.width, desc.height);
                gl.tex_parameter_i32(
                    glow::TEXTURE_2D,
                    glow::TEXTURE_MIN_FILTER,
                    glow::LINEAR as i32,
                );
                gl.tex_parameter_i32(
                    glow::TEXTURE_2D,
                    glow::TEXTURE_MAG_FILTER,
                    glow::LINEAR as i32,
                );
                gl.tex_parameter_i32(
                    glow::TEXTURE_2D,
                    glow::TEXTURE_WRAP_S,
                    glow::CLAMP_TO_EDGE as i32,
                );
                gl.tex_parameter_i32(
                    glow::TEXTURE_2D,
                    glow::TEXTURE_WRAP_T,
                    glow::CLAMP_TO_EDGE as i32,
                );
                gl.bind_texture(glow::TEXTURE_2D, None);
            }
            GlStorage::Texture(texture)
        };

        Ok(Self {
            storage,
            size: Cell::new((desc.width, desc.height)),
            format: desc.format,
            usage: desc.usage,
            gl,
        })
    }

    /// Issue the storage allocation for the currently bound 2D texture
    fn specify_image(gl: &glow::Context, format: TextureFormat, width: u32, height: u32) {
        unsafe {
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                gl_format::internal_format(format) as i32,
                width as i32,
                height as i32,
                0,
                gl_format::pixel_format(format),
                gl_format::pixel_type(format),
                PixelUnpackData::Slice(None),
            );
        }
    }
}

impl EngineTexture for GlTexture {
    fn info(&self) -> TextureInfo {
        let (width, height) = self.size.get();
        TextureInfo {
            width,
            height,
            format: self.format,
            usage: self.usage,
        }
    }

    fn reallocate(&self, width: u32, height: u32) -> Result<()> {
        let gl = &self.gl;
        match &self.storage {
            GlStorage::Texture(texture) => unsafe {
                gl.bind_texture(glow::TEXTURE_2D, Some(*texture));
                Self::specify_image(gl, self.format, width, height);
                gl.bind_texture(glow::TEXTURE_2D, None);
            },
            GlStorage::Renderbuffer(renderbuffer) => unsafe {
                gl.bind_renderbuffer(glow::RENDERBUFFER, Some(*renderbuffer));
                gl.renderbuffer_storage(
                    glow::RENDERBUFFER,
                    gl_format::internal_format(self.format),
                    width as i32,
                    height as i32,
                );
                gl.bind_renderbuffer(glow::RENDERBUFFER, None);
            },
        }
        self.size.set((width, height));
        Ok(())
    }

    fn display_image(&self) -> Option<DisplayImage> {
        match &self.storage {
            GlStorage::Texture(texture) => Some(DisplayImage::new(texture.0.get() as u64)),
            GlStorage::Renderbuffer(_) => None,
        }
    }
}

impl Drop for GlTexture {
    fn drop(&mut self) {
        unsafe {
            match self.storage {
                GlStorage::Texture(texture) => self.gl.delete_texture(texture),
                GlStorage::Renderbuffer(renderbuffer) => {
                    self.gl.delete_renderbuffer(renderbuffer)
                }
            }
        }
    }
}
