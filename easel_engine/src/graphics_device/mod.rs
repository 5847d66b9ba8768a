/// Graphics device module - the trait seam between the engine and GPU backends
///
/// Everything the render-target cache and the preview layer need from the
/// GPU goes through these traits. Backend crates (OpenGL, etc.) provide the
/// concrete types; the engine core never touches a native handle directly.

// Module declarations
pub mod graphics_device;
pub mod texture;
pub mod buffer;
pub mod shader;
pub mod pipeline;
pub mod frame_buffer;
pub mod command_list;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use texture::*;
pub use buffer::*;
pub use shader::*;
pub use pipeline::*;
pub use frame_buffer::*;
pub use command_list::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
