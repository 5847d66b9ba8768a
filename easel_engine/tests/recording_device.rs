//! Shared test utility: a recording graphics device
//!
//! Implements the engine's graphics-device traits from outside the crate,
//! the way a backend plugin would, so integration tests can drive the
//! preview stack without a GPU. Counts storage allocations so tests can
//! observe the cache's reuse behavior through the public API alone.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use easel_engine::glam::Mat4;
use easel_engine::easel::Result;
use easel_engine::easel::device::{
    GraphicsDevice, Texture, Buffer, Shader, Pipeline, Framebuffer, CommandList,
    TextureDesc, BufferDesc, ShaderDesc, PipelineDesc, FramebufferDesc,
    TextureInfo, TextureUsage, DisplayImage, Viewport, ClearValue,
};

/// Call counters shared between the device and its resources
#[derive(Debug, Default)]
pub struct Counters {
    pub storage_allocations: Cell<u32>,
    pub reallocations: Cell<u32>,
    pub framebuffers_created: Cell<u32>,
    pub submits: Cell<u32>,
}

pub struct RecordingTexture {
    info: RefCell<TextureInfo>,
    image_id: u64,
    counters: Rc<Counters>,
}

impl Texture for RecordingTexture {
    fn info(&self) -> TextureInfo {
        self.info.borrow().clone()
    }

    fn reallocate(&self, width: u32, height: u32) -> Result<()> {
        self.counters.storage_allocations.set(self.counters.storage_allocations.get() + 1);
        self.counters.reallocations.set(self.counters.reallocations.get() + 1);
        let mut info = self.info.borrow_mut();
        info.width = width;
        info.height = height;
        Ok(())
    }

    fn display_image(&self) -> Option<DisplayImage> {
        match self.info.borrow().usage {
            TextureUsage::DepthStencil => None,
            _ => Some(DisplayImage::new(self.image_id)),
        }
    }
}

pub struct RecordingBuffer;

impl Buffer for RecordingBuffer {
    fn update(&self, _offset: u64, _data: &[u8]) -> Result<()> {
        Ok(())
    }
}

pub struct RecordingShader;

impl Shader for RecordingShader {}

pub struct RecordingPipeline;

impl Pipeline for RecordingPipeline {}

pub struct RecordingFramebuffer;

impl Framebuffer for RecordingFramebuffer {
    fn revalidate(&self) -> Result<()> {
        Ok(())
    }
}

pub struct RecordingCommandList;

impl CommandList for RecordingCommandList {
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        Ok(())
    }

    fn begin_render_pass(
        &mut self,
        _framebuffer: &Arc<dyn Framebuffer>,
        _clear_values: &[ClearValue],
    ) -> Result<()> {
        Ok(())
    }

    fn end_render_pass(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_viewport(&mut self, _viewport: Viewport) -> Result<()> {
        Ok(())
    }

    fn bind_pipeline(&mut self, _pipeline: &Arc<dyn Pipeline>) -> Result<()> {
        Ok(())
    }

    fn bind_vertex_buffer(&mut self, _buffer: &Arc<dyn Buffer>, _offset: u64) -> Result<()> {
        Ok(())
    }

    fn set_uniform_f32(&mut self, _name: &str, _value: f32) -> Result<()> {
        Ok(())
    }

    fn set_uniform_mat4(&mut self, _name: &str, _value: Mat4) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, _vertex_count: u32, _first_vertex: u32) -> Result<()> {
        Ok(())
    }
}

/// GPU-free device for integration tests
pub struct RecordingDevice {
    counters: Rc<Counters>,
    next_image_id: Cell<u64>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self {
            counters: Rc::new(Counters::default()),
            next_image_id: Cell::new(1),
        }
    }

    pub fn counters(&self) -> Rc<Counters> {
        Rc::clone(&self.counters)
    }
}

impl GraphicsDevice for RecordingDevice {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        self.counters.storage_allocations.set(self.counters.storage_allocations.get() + 1);
        let image_id = self.next_image_id.get();
        self.next_image_id.set(image_id + 1);
        Ok(Arc::new(RecordingTexture {
            info: RefCell::new(TextureInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                usage: desc.usage,
            }),
            image_id,
            counters: Rc::clone(&self.counters),
        }))
    }

    fn create_buffer(&mut self, _desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        Ok(Arc::new(RecordingBuffer))
    }

    fn create_shader(&mut self, _desc: ShaderDesc) -> Result<Arc<dyn Shader>> {
        Ok(Arc::new(RecordingShader))
    }

    fn create_pipeline(&mut self, _desc: PipelineDesc) -> Result<Arc<dyn Pipeline>> {
        Ok(Arc::new(RecordingPipeline))
    }

    fn create_framebuffer(&mut self, _desc: &FramebufferDesc) -> Result<Arc<dyn Framebuffer>> {
        self.counters.framebuffers_created.set(self.counters.framebuffers_created.get() + 1);
        Ok(Arc::new(RecordingFramebuffer))
    }

    fn create_command_list(&mut self) -> Result<Box<dyn CommandList>> {
        Ok(Box::new(RecordingCommandList))
    }

    fn submit(&mut self, _commands: &[&dyn CommandList]) -> Result<()> {
        self.counters.submits.set(self.counters.submits.get() + 1);
        Ok(())
    }
}
