/*!
# Easel Engine - OpenGL Renderer Backend

OpenGL implementation of the Easel preview engine.

This crate implements the easel_engine graphics-device traits over an
OpenGL 3.3 core context using the glow bindings. The context is created
and owned by the windowing collaborator; the device borrows it through an
`Arc<glow::Context>` that must stay current on the calling thread for the
device's whole lifetime.

OpenGL can re-specify the storage of a live texture or renderbuffer
object, so the engine's resize-in-place contract maps directly onto
`tex_image_2d` / `renderbuffer_storage` calls on the existing objects; no
handle is ever recreated when a render target grows.
*/

// OpenGL implementation modules
mod gl_device;
mod gl_format;
mod gl_texture;
mod gl_buffer;
mod gl_shader;
mod gl_pipeline;
mod gl_frame_buffer;
mod gl_command_list;

pub use gl_device::GlGraphicsDevice;
pub use gl_texture::GlTexture;
pub use gl_buffer::GlBuffer;
pub use gl_shader::GlShader;
pub use gl_pipeline::GlPipeline;
pub use gl_frame_buffer::GlFramebuffer;
pub use gl_command_list::GlCommandList;
