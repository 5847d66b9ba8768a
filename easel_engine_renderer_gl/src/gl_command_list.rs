/// CommandList - OpenGL implementation of the engine CommandList trait

use std::sync::Arc;

use glow::HasContext;

use easel_engine::glam::Mat4;
use easel_engine::easel::{Error, Result};
use easel_engine::easel::device::{
    CommandList as EngineCommandList, Framebuffer, Pipeline, Buffer,
    Viewport, ClearValue,
};

use crate::gl_format;
use crate::gl_buffer::GlBuffer;
use crate::gl_pipeline::GlPipeline;
use crate::gl_frame_buffer::GlFramebuffer;

/// OpenGL command list implementation
///
/// OpenGL has no deferred command lists, so every recorded command
/// executes immediately against the context; `submit` on the device has
/// nothing left to replay. The recording/render-pass flags still guard
/// the call order so misuse fails the same way on every backend.
pub struct GlCommandList {
    /// OpenGL context
    gl: Arc<glow::Context>,
    is_recording: bool,
    in_render_pass: bool,
    /// Pipeline bound in the current pass, kept alive for uniform lookups
    bound_pipeline: Option<Arc<dyn Pipeline>>,
}

impl GlCommandList {
    pub(crate) fn new(gl: Arc<glow::Context>) -> Self {
        Self {
            gl,
            is_recording: false,
            in_render_pass: false,
            bound_pipeline: None,
        }
    }

    /// The bound pipeline, downcast to the OpenGL type
    fn bound_pipeline(&self) -> Result<&GlPipeline> {
        match &self.bound_pipeline {
            Some(pipeline) => {
                // Downcast to OpenGL type
                let gl_pipeline = pipeline.as_ref() as *const dyn Pipeline as *const GlPipeline;
                Ok(unsafe { &*gl_pipeline })
            }
            None => Err(Error::BackendError("No pipeline bound".to_string())),
        }
    }
}

impl EngineCommandList for GlCommandList {
    fn begin(&mut self) -> Result<()> {
        if self.is_recording {
            return Err(Error::BackendError("Command list already recording".to_string()));
        }
        self.is_recording = true;
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }
        if self.in_render_pass {
            return Err(Error::BackendError("Render pass still open".to_string()));
        }
        self.is_recording = false;
        self.bound_pipeline = None;
        Ok(())
    }

    fn begin_render_pass(
        &mut self,
        framebuffer: &Arc<dyn Framebuffer>,
        clear_values: &[ClearValue],
    ) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }
        if self.in_render_pass {
            return Err(Error::BackendError("Render pass already open".to_string()));
        }

        // Downcast to OpenGL type
        let gl_framebuffer =
            framebuffer.as_ref() as *const dyn Framebuffer as *const GlFramebuffer;
        let gl_framebuffer = unsafe { &*gl_framebuffer };

        let gl = &self.gl;
        unsafe {
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(gl_framebuffer.fbo));

            let mut mask = 0;
            for clear in clear_values {
                match clear {
                    ClearValue::Color([r, g, b, a]) => {
                        gl.clear_color(*r, *g, *b, *a);
                        mask |= glow::COLOR_BUFFER_BIT;
                    }
                    ClearValue::DepthStencil { depth, stencil } => {
                        gl.clear_depth_f32(*depth);
                        gl.clear_stencil(*stencil as i32);
                        mask |= glow::DEPTH_BUFFER_BIT | glow::STENCIL_BUFFER_BIT;
                    }
                }
            }
            // Depth writes must be on for the depth clear to land.
            gl.depth_mask(true);
            gl.clear(mask);
        }

        self.in_render_pass = true;
        Ok(())
    }

    fn end_render_pass(&mut self) -> Result<()> {
        if !self.in_render_pass {
            return Err(Error::BackendError("Not inside a render pass".to_string()));
        }
        unsafe {
            // Restore the default on-screen surface as the draw destination.
            self.gl.bind_framebuffer(glow::FRAMEBUFFER, None);
        }
        self.in_render_pass = false;
        self.bound_pipeline = None;
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }
        unsafe {
            self.gl.viewport(
                viewport.x as i32,
                viewport.y as i32,
                viewport.width as i32,
                viewport.height as i32,
            );
            self.gl.depth_range_f32(viewport.min_depth, viewport.max_depth);
        }
        Ok(())
    }

    fn bind_pipeline(&mut self, pipeline: &Arc<dyn Pipeline>) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }

        // Downcast to OpenGL type
        let gl_pipeline = pipeline.as_ref() as *const dyn Pipeline as *const GlPipeline;
        let gl_pipeline = unsafe { &*gl_pipeline };

        let gl = &self.gl;
        unsafe {
            gl.use_program(Some(gl_pipeline.program));
            gl.bind_vertex_array(Some(gl_pipeline.vao));

            let depth = gl_pipeline.depth_stencil;
            if depth.depth_test_enable {
                gl.enable(glow::DEPTH_TEST);
                gl.depth_func(gl_format::depth_func(depth.depth_compare_op));
            } else {
                gl.disable(glow::DEPTH_TEST);
            }
            gl.depth_mask(depth.depth_write_enable);
        }

        self.bound_pipeline = Some(Arc::clone(pipeline));
        Ok(())
    }

    fn bind_vertex_buffer(&mut self, buffer: &Arc<dyn Buffer>, offset: u64) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }
        let pipeline = self.bound_pipeline()?;

        // Downcast to OpenGL type
        let gl_buffer = buffer.as_ref() as *const dyn Buffer as *const GlBuffer;
        let gl_buffer = unsafe { &*gl_buffer };

        let gl = &self.gl;
        let layout = &pipeline.vertex_layout;
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(gl_buffer.buffer));
            for attribute in &layout.attributes {
                gl.enable_vertex_attrib_array(attribute.location);
                gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.format.component_count() as i32,
                    glow::FLOAT,
                    false,
                    layout.stride as i32,
                    offset as i32 + attribute.offset as i32,
                );
            }
        }
        Ok(())
    }

    fn set_uniform_f32(&mut self, name: &str, value: f32) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }
        let pipeline = self.bound_pipeline()?;
        if let Some(location) = pipeline.uniform_location(name) {
            unsafe {
                self.gl.uniform_1_f32(Some(&location), value);
            }
        }
        Ok(())
    }

    fn set_uniform_mat4(&mut self, name: &str, value: Mat4) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }
        let pipeline = self.bound_pipeline()?;
        if let Some(location) = pipeline.uniform_location(name) {
            unsafe {
                self.gl.uniform_matrix_4_f32_slice(
                    Some(&location),
                    false,
                    &value.to_cols_array(),
                );
            }
        }
        Ok(())
    }

    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError("Command list not recording".to_string()));
        }
        if !self.in_render_pass {
            return Err(Error::BackendError("Not inside a render pass".to_string()));
        }
        let pipeline = self.bound_pipeline()?;
        unsafe {
            self.gl.draw_arrays(pipeline.mode, first_vertex as i32, vertex_count as i32);
        }
        Ok(())
    }
}
