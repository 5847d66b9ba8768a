/// Shader - OpenGL implementation of the engine Shader trait

use std::sync::Arc;

use glow::HasContext;

use easel_engine::easel::{Error, Result};
use easel_engine::engine_bail;
use easel_engine::easel::device::{Shader as EngineShader, ShaderDesc};

use crate::gl_format;

/// OpenGL shader implementation
///
/// Holds one compiled shader object; programs are linked by the pipeline.
pub struct GlShader {
    /// GL shader object
    pub(crate) shader: glow::Shader,
    /// OpenGL context (for cleanup)
    gl: Arc<glow::Context>,
}

impl GlShader {
    /// Compile a shader from source
    ///
    /// A compile failure is reported through the engine diagnostic channel
    /// with the GL info log and returned as an error.
    pub(crate) fn new(gl: Arc<glow::Context>, desc: &ShaderDesc) -> Result<Self> {
        let shader = unsafe { gl.create_shader(gl_format::shader_type(desc.stage)) }
            .map_err(Error::BackendError)?;

        unsafe {
            gl.shader_source(shader, desc.source);
            gl.compile_shader(shader);
            if !gl.get_shader_compile_status(shader) {
                let info_log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                engine_bail!("easel::gl",
                    "shader compilation failed ({:?}): {}",
                    desc.stage, info_log.trim());
            }
        }

        Ok(Self { shader, gl })
    }
}

impl EngineShader for GlShader {}

impl Drop for GlShader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.shader);
        }
    }
}
