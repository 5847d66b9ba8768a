/// Format conversion - engine enums to OpenGL constants
///
/// Pure mapping functions between the engine's format/usage descriptors
/// and the GL enum values the backend feeds to glow. Depth/stencil
/// formats are backed by renderbuffer objects rather than textures, so
/// the mapping also decides which kind of GL object a texture descriptor
/// produces.

use easel_engine::easel::device::{
    TextureFormat, BufferUsage, ShaderStage, PrimitiveTopology, CompareOp,
};

/// True when the format is stored in a renderbuffer object
///
/// Depth/stencil storage is never sampled by the preview layer, so it
/// lives in a renderbuffer the way the classic FBO setup does; color
/// formats become texture objects that can be sampled for display.
pub(crate) fn is_renderbuffer_backed(format: TextureFormat) -> bool {
    format.is_depth_stencil()
}

/// GL internal format for storage allocation
pub(crate) fn internal_format(format: TextureFormat) -> u32 {
    match format {
        TextureFormat::R8G8B8A8_UNORM => glow::RGBA8,
        TextureFormat::R8G8B8A8_SRGB => glow::SRGB8_ALPHA8,
        TextureFormat::D24_UNORM_S8_UINT => glow::DEPTH24_STENCIL8,
    }
}

/// GL pixel format for `tex_image_2d` uploads
pub(crate) fn pixel_format(format: TextureFormat) -> u32 {
    match format {
        TextureFormat::R8G8B8A8_UNORM | TextureFormat::R8G8B8A8_SRGB => glow::RGBA,
        TextureFormat::D24_UNORM_S8_UINT => glow::DEPTH_STENCIL,
    }
}

/// GL pixel component type for `tex_image_2d` uploads
pub(crate) fn pixel_type(format: TextureFormat) -> u32 {
    match format {
        TextureFormat::R8G8B8A8_UNORM | TextureFormat::R8G8B8A8_SRGB => glow::UNSIGNED_BYTE,
        TextureFormat::D24_UNORM_S8_UINT => glow::UNSIGNED_INT_24_8,
    }
}

/// GL bind target for a buffer usage
pub(crate) fn buffer_target(usage: BufferUsage) -> u32 {
    match usage {
        BufferUsage::Vertex => glow::ARRAY_BUFFER,
        BufferUsage::Index => glow::ELEMENT_ARRAY_BUFFER,
        BufferUsage::Uniform => glow::UNIFORM_BUFFER,
    }
}

/// GL shader type for a shader stage
pub(crate) fn shader_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

/// GL draw mode for a primitive topology
pub(crate) fn primitive_mode(topology: PrimitiveTopology) -> u32 {
    match topology {
        PrimitiveTopology::TriangleList => glow::TRIANGLES,
        PrimitiveTopology::TriangleStrip => glow::TRIANGLE_STRIP,
        PrimitiveTopology::LineList => glow::LINES,
        PrimitiveTopology::PointList => glow::POINTS,
    }
}

/// GL depth function for a comparison operator
pub(crate) fn depth_func(op: CompareOp) -> u32 {
    match op {
        CompareOp::Never => glow::NEVER,
        CompareOp::Less => glow::LESS,
        CompareOp::Equal => glow::EQUAL,
        CompareOp::LessOrEqual => glow::LEQUAL,
        CompareOp::Greater => glow::GREATER,
        CompareOp::NotEqual => glow::NOTEQUAL,
        CompareOp::GreaterOrEqual => glow::GEQUAL,
        CompareOp::Always => glow::ALWAYS,
    }
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
