/// Mock graphics device for unit tests (no GPU required)
///
/// Counts resource creations, storage allocations, and framebuffer
/// revalidations so tests can assert exactly what the render-target cache
/// and preview panels asked the device to do. All counters live in one
/// `Rc<MockCounters>` shared between the device and the resources it hands
/// out; command lists append into a single chronological event log so tests
/// can also assert ordering across resource creation, recording, and
/// submission. Plain `Rc`/`Cell` storage is enough because the device is
/// confined to the test thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use glam::Mat4;

use crate::graphics_device::{
    GraphicsDevice, Texture, Buffer, Shader, Pipeline, Framebuffer, CommandList,
    TextureDesc, BufferDesc, ShaderDesc, PipelineDesc, FramebufferDesc,
    TextureInfo, TextureUsage, DisplayImage, Viewport, ClearValue,
};
use crate::error::Result;
use crate::engine_bail;

// ============================================================================
// Counters
// ============================================================================

/// Call counters shared between the mock device and its resources
#[derive(Debug, Default)]
pub struct MockCounters {
    /// Texture objects created
    pub textures_created: Cell<u32>,
    /// Storage-allocation calls: one per texture creation, one per reallocate
    pub storage_allocations: Cell<u32>,
    /// In-place reallocations (subset of storage_allocations)
    pub reallocations: Cell<u32>,
    /// Buffers created
    pub buffers_created: Cell<u32>,
    /// Shaders created
    pub shaders_created: Cell<u32>,
    /// Pipelines created
    pub pipelines_created: Cell<u32>,
    /// Framebuffers created
    pub framebuffers_created: Cell<u32>,
    /// Framebuffer completeness re-checks
    pub revalidations: Cell<u32>,
    /// Command-list submissions
    pub submits: Cell<u32>,
}

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    info: RefCell<TextureInfo>,
    image_id: u64,
    counters: Rc<MockCounters>,
}

impl Texture for MockTexture {
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

// ============================================================================
// Mock Buffer
// ============================================================================

#[derive(Debug)]
pub struct MockBuffer {
    pub size: u64,
}

impl Buffer for MockBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        if offset + data.len() as u64 > self.size {
            engine_bail!("easel::mock",
                "buffer update out of range: offset {} + {} bytes > size {}",
                offset, data.len(), self.size);
        }
        Ok(())
    }
}

// ============================================================================
// Mock Shader / Pipeline
// ============================================================================

#[derive(Debug)]
pub struct MockShader;

impl Shader for MockShader {}

#[derive(Debug)]
pub struct MockPipeline;

impl Pipeline for MockPipeline {}

// ============================================================================
// Mock Framebuffer
// ============================================================================

pub struct MockFramebuffer {
    counters: Rc<MockCounters>,
}

impl Framebuffer for MockFramebuffer {
    fn revalidate(&self) -> Result<()> {
        self.counters.revalidations.set(self.counters.revalidations.get() + 1);
        Ok(())
    }
}

// ============================================================================
// Mock CommandList
// ============================================================================

/// Records command names into the device's shared event log
pub struct MockCommandList {
    events: Rc<RefCell<Vec<String>>>,
}

impl CommandList for MockCommandList {
    fn begin(&mut self) -> Result<()> {
        self.events.borrow_mut().push("begin".to_string());
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.events.borrow_mut().push("end".to_string());
        Ok(())
    }

    fn begin_render_pass(
        &mut self,
        _framebuffer: &Arc<dyn Framebuffer>,
        _clear_values: &[ClearValue],
    ) -> Result<()> {
        self.events.borrow_mut().push("begin_render_pass".to_string());
        Ok(())
    }

    fn end_render_pass(&mut self) -> Result<()> {
        self.events.borrow_mut().push("end_render_pass".to_string());
        Ok(())
    }

    fn set_viewport(&mut self, _viewport: Viewport) -> Result<()> {
        self.events.borrow_mut().push("set_viewport".to_string());
        Ok(())
    }

    fn bind_pipeline(&mut self, _pipeline: &Arc<dyn Pipeline>) -> Result<()> {
        self.events.borrow_mut().push("bind_pipeline".to_string());
        Ok(())
    }

    fn bind_vertex_buffer(&mut self, _buffer: &Arc<dyn Buffer>, _offset: u64) -> Result<()> {
        self.events.borrow_mut().push("bind_vertex_buffer".to_string());
        Ok(())
    }

    fn set_uniform_f32(&mut self, name: &str, _value: f32) -> Result<()> {
        self.events.borrow_mut().push(format!("set_uniform_f32 {}", name));
        Ok(())
    }

    fn set_uniform_mat4(&mut self, name: &str, _value: Mat4) -> Result<()> {
        self.events.borrow_mut().push(format!("set_uniform_mat4 {}", name));
        Ok(())
    }

    fn draw(&mut self, _vertex_count: u32, _first_vertex: u32) -> Result<()> {
        self.events.borrow_mut().push("draw".to_string());
        Ok(())
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device that tracks resource creation without a GPU
pub struct MockGraphicsDevice {
    counters: Rc<MockCounters>,
    events: Rc<RefCell<Vec<String>>>,
    next_image_id: Cell<u64>,
    /// When set, texture creation fails with a backend error
    pub fail_textures: Cell<bool>,
    /// When set, shader creation fails with a backend error
    pub fail_shaders: Cell<bool>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            counters: Rc::new(MockCounters::default()),
            events: Rc::new(RefCell::new(Vec::new())),
            next_image_id: Cell::new(1),
            fail_textures: Cell::new(false),
            fail_shaders: Cell::new(false),
        }
    }

    /// Shared call counters
    pub fn counters(&self) -> Rc<MockCounters> {
        Rc::clone(&self.counters)
    }

    /// Chronological log of device and command-list events
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        if self.fail_textures.get() {
            engine_bail!("easel::mock", "texture creation failed (injected)");
        }
        self.counters.textures_created.set(self.counters.textures_created.get() + 1);
        self.counters.storage_allocations.set(self.counters.storage_allocations.get() + 1);
        self.events.borrow_mut().push("create_texture".to_string());
        let image_id = self.next_image_id.get();
        self.next_image_id.set(image_id + 1);
        Ok(Arc::new(MockTexture {
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

    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        self.counters.buffers_created.set(self.counters.buffers_created.get() + 1);
        self.events.borrow_mut().push("create_buffer".to_string());
        Ok(Arc::new(MockBuffer { size: desc.size }))
    }

    fn create_shader(&mut self, _desc: ShaderDesc) -> Result<Arc<dyn Shader>> {
        if self.fail_shaders.get() {
            engine_bail!("easel::mock", "shader compilation failed (injected)");
        }
        self.counters.shaders_created.set(self.counters.shaders_created.get() + 1);
        self.events.borrow_mut().push("create_shader".to_string());
        Ok(Arc::new(MockShader))
    }

    fn create_pipeline(&mut self, _desc: PipelineDesc) -> Result<Arc<dyn Pipeline>> {
        self.counters.pipelines_created.set(self.counters.pipelines_created.get() + 1);
        self.events.borrow_mut().push("create_pipeline".to_string());
        Ok(Arc::new(MockPipeline))
    }

    fn create_framebuffer(&mut self, _desc: &FramebufferDesc) -> Result<Arc<dyn Framebuffer>> {
        self.counters.framebuffers_created.set(self.counters.framebuffers_created.get() + 1);
        self.events.borrow_mut().push("create_framebuffer".to_string());
        Ok(Arc::new(MockFramebuffer {
            counters: Rc::clone(&self.counters),
        }))
    }

    fn create_command_list(&mut self) -> Result<Box<dyn CommandList>> {
        Ok(Box::new(MockCommandList {
            events: Rc::clone(&self.events),
        }))
    }

    fn submit(&mut self, _commands: &[&dyn CommandList]) -> Result<()> {
        self.counters.submits.set(self.counters.submits.get() + 1);
        self.events.borrow_mut().push("submit".to_string());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
