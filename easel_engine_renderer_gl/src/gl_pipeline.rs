/// Pipeline - OpenGL implementation of the engine Pipeline trait

use std::cell::RefCell;
use std::sync::Arc;

use glow::HasContext;
use rustc_hash::FxHashMap;

use easel_engine::easel::{Error, Result};
use easel_engine::engine_bail;
use easel_engine::easel::device::{
    Shader, Pipeline as EnginePipeline, PipelineDesc,
    VertexLayout, DepthStencilState,
};

use crate::gl_format;
use crate::gl_shader::GlShader;

/// OpenGL pipeline implementation
///
/// A linked program plus the fixed-function state the command list applies
/// when the pipeline is bound: vertex layout, draw mode, and depth
/// testing. Uniform locations are looked up lazily and cached per name.
pub struct GlPipeline {
    /// Linked GL program
    pub(crate) program: glow::Program,
    /// Vertex array object carrying the pipeline's attribute setup
    pub(crate) vao: glow::VertexArray,
    /// Vertex input layout applied when a vertex buffer is bound
    pub(crate) vertex_layout: VertexLayout,
    /// GL draw mode derived from the primitive topology
    pub(crate) mode: u32,
    /// Depth testing state applied on bind
    pub(crate) depth_stencil: DepthStencilState,
    /// Cached uniform locations, keyed by uniform name
    uniform_locations: RefCell<FxHashMap<String, Option<glow::UniformLocation>>>,
    /// OpenGL context (for uniform queries and cleanup)
    gl: Arc<glow::Context>,
}

impl GlPipeline {
    /// Link a program from the descriptor's compiled shaders
    ///
    /// A link failure is reported through the engine diagnostic channel
    /// with the GL info log and returned as an error.
    pub(crate) fn new(gl: Arc<glow::Context>, desc: &PipelineDesc) -> Result<Self> {
        // Downcast to OpenGL types
        let vertex_shader = desc.vertex_shader.as_ref() as *const dyn Shader as *const GlShader;
        let vertex_shader = unsafe { &*vertex_shader };
        let fragment_shader =
            desc.fragment_shader.as_ref() as *const dyn Shader as *const GlShader;
        let fragment_shader = unsafe { &*fragment_shader };

        let program = unsafe { gl.create_program() }.map_err(Error::BackendError)?;
        unsafe {
            gl.attach_shader(program, vertex_shader.shader);
            gl.attach_shader(program, fragment_shader.shader);
            gl.link_program(program);
            gl.detach_shader(program, vertex_shader.shader);
            gl.detach_shader(program, fragment_shader.shader);
            if !gl.get_program_link_status(program) {
                let info_log = gl.get_program_info_log(program);
                gl.delete_program(program);
                engine_bail!("easel::gl", "program link failed: {}", info_log.trim());
            }
        }

        let vao = match unsafe { gl.create_vertex_array() } {
            Ok(vao) => vao,
            Err(message) => {
                unsafe { gl.delete_program(program) };
                return Err(Error::BackendError(message));
            }
        };

        Ok(Self {
            program,
            vao,
            vertex_layout: desc.vertex_layout.clone(),
            mode: gl_format::primitive_mode(desc.topology),
            depth_stencil: desc.depth_stencil,
            uniform_locations: RefCell::new(FxHashMap::default()),
            gl,
        })
    }

    /// Cached uniform location lookup
    ///
    /// Returns None for uniforms the linker optimized out or that do not
    /// exist; the command list silently ignores those, matching GL's own
    /// treatment of inactive uniforms.
    pub(crate) fn uniform_location(&self, name: &str) -> Option<glow::UniformLocation> {
        let mut cache = self.uniform_locations.borrow_mut();
        if let Some(location) = cache.get(name) {
            return location.clone();
        }
        let location = unsafe { self.gl.get_uniform_location(self.program, name) };
        cache.insert(name.to_string(), location.clone());
        location
    }
}

impl EnginePipeline for GlPipeline {}

impl Drop for GlPipeline {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_program(self.program);
        }
    }
}
