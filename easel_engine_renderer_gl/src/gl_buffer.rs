/// Buffer - OpenGL implementation of the engine Buffer trait

use std::sync::Arc;

use glow::HasContext;

use easel_engine::easel::{Error, Result};
use easel_engine::engine_bail;
use easel_engine::easel::device::{Buffer as EngineBuffer, BufferDesc};

use crate::gl_format;

/// OpenGL buffer implementation
pub struct GlBuffer {
    /// GL buffer object
    pub(crate) buffer: glow::Buffer,
    /// Bind target derived from the buffer usage
    target: u32,
    /// Size in bytes
    size: u64,
    /// OpenGL context (for updates and cleanup)
    gl: Arc<glow::Context>,
}

impl GlBuffer {
    /// Create the buffer and allocate `desc.size` bytes of storage
    pub(crate) fn new(gl: Arc<glow::Context>, desc: &BufferDesc) -> Result<Self> {
        let target = gl_format::buffer_target(desc.usage);
        let buffer = unsafe { gl.create_buffer() }.map_err(Error::BackendError)?;
        unsafe {
            gl.bind_buffer(target, Some(buffer));
            gl.buffer_data_size(target, desc.size as i32, glow::STATIC_DRAW);
            gl.bind_buffer(target, None);
        }

        Ok(Self {
            buffer,
            target,
            size: desc.size,
            gl,
        })
    }
}

impl EngineBuffer for GlBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        if offset + data.len() as u64 > self.size {
            engine_bail!("easel::gl",
                "buffer update out of range: offset {} + {} bytes > size {}",
                offset, data.len(), self.size);
        }

        unsafe {
            self.gl.bind_buffer(self.target, Some(self.buffer));
            self.gl.buffer_sub_data_u8_slice(self.target, offset as i32, data);
            self.gl.bind_buffer(self.target, None);
        }
        Ok(())
    }
}

impl Drop for GlBuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.buffer);
        }
    }
}
