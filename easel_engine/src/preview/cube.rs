/// CubeScene - rotating cube preview with depth testing

use std::sync::Arc;

use glam::{Mat4, Vec3};

use crate::error::Result;
use crate::engine_error;
use crate::graphics_device::{
    GraphicsDevice, CommandList, Pipeline, Buffer,
    ShaderDesc, ShaderStage, PipelineDesc, PrimitiveTopology,
    VertexLayout, VertexAttribute, VertexFormat, DepthStencilState,
    BufferDesc, BufferUsage, ClearValue,
};
use crate::preview::PreviewScene;

const VERTEX_SHADER: &str = r#"
#version 330 core
layout(location = 0) in vec3 position;
uniform mat4 mvp;
void main() { gl_Position = mvp * vec4(position, 1.0); }
"#;

const FRAGMENT_SHADER: &str = r#"
#version 330 core
out vec4 o;
void main() { o = vec4(0.7, 0.8, 1.0, 1.0); }
"#;

/// 12 triangles, 36 vertices, positions only.
#[rustfmt::skip]
const CUBE_POSITIONS: [[f32; 3]; 36] = [
    // front (z = 1)
    [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0],
    [-1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0],
    // back (z = -1)
    [ 1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0],
    [ 1.0, -1.0, -1.0], [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0],
    // left (x = -1)
    [-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0],
    [-1.0, -1.0, -1.0], [-1.0,  1.0,  1.0], [-1.0,  1.0, -1.0],
    // right (x = 1)
    [ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0],
    [ 1.0, -1.0,  1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0],
    // top (y = 1)
    [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0],
    [-1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0],
    // bottom (y = -1)
    [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0],
    [-1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0],
];

struct CubeResources {
    pipeline: Arc<dyn Pipeline>,
    vertex_buffer: Arc<dyn Buffer>,
}

/// A rotating cube with depth testing
///
/// The rotation angle is the one per-frame numeric parameter; the caller
/// sets it before rendering the panel. Camera constants are fixed: 60
/// degree vertical field of view at aspect 1, camera 3 units back, cube
/// scaled to 0.6.
pub struct CubeScene {
    angle: f32,
    resources: Option<CubeResources>,
    build_failed: bool,
}

impl CubeScene {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            resources: None,
            build_failed: false,
        }
    }

    /// Set the rotation angle in radians for the next frame
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Current rotation angle in radians
    pub fn angle(&self) -> f32 {
        self.angle
    }

    fn model_view_projection(angle: f32) -> Mat4 {
        let projection = Mat4::perspective_rh_gl(60f32.to_radians(), 1.0, 0.1, 10.0);
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0));
        let model = Mat4::from_rotation_y(angle) * Mat4::from_scale(Vec3::splat(0.6));
        projection * view * model
    }

    fn build(device: &mut dyn GraphicsDevice) -> Result<CubeResources> {
        let vertex_shader = device.create_shader(ShaderDesc {
            source: VERTEX_SHADER,
            stage: ShaderStage::Vertex,
        })?;
        let fragment_shader = device.create_shader(ShaderDesc {
            source: FRAGMENT_SHADER,
            stage: ShaderStage::Fragment,
        })?;

        let pipeline = device.create_pipeline(PipelineDesc {
            vertex_shader,
            fragment_shader,
            vertex_layout: VertexLayout {
                stride: VertexFormat::R32G32B32_SFLOAT.size_bytes(),
                attributes: vec![VertexAttribute {
                    location: 0,
                    format: VertexFormat::R32G32B32_SFLOAT,
                    offset: 0,
                }],
            },
            topology: PrimitiveTopology::TriangleList,
            depth_stencil: DepthStencilState::default(),
        })?;

        let data: &[u8] = bytemuck::cast_slice(&CUBE_POSITIONS);
        let vertex_buffer = device.create_buffer(BufferDesc {
            size: data.len() as u64,
            usage: BufferUsage::Vertex,
        })?;
        vertex_buffer.update(0, data)?;

        Ok(CubeResources {
            pipeline,
            vertex_buffer,
        })
    }
}

impl Default for CubeScene {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewScene for CubeScene {
    fn prepare(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        if self.resources.is_some() || self.build_failed {
            return Ok(());
        }
        match Self::build(device) {
            Ok(resources) => {
                self.resources = Some(resources);
                Ok(())
            }
            Err(err) => {
                self.build_failed = true;
                engine_error!("easel::CubeScene", "pipeline build failed: {}", err);
                Err(err)
            }
        }
    }

    fn is_ready(&self) -> bool {
        self.resources.is_some()
    }

    fn clear_values(&self) -> Vec<ClearValue> {
        vec![
            ClearValue::Color([0.10, 0.12, 0.16, 1.0]),
            ClearValue::DepthStencil { depth: 1.0, stencil: 0 },
        ]
    }

    fn record(&self, cmd: &mut dyn CommandList, _side: u32) -> Result<()> {
        if let Some(resources) = &self.resources {
            cmd.bind_pipeline(&resources.pipeline)?;
            cmd.bind_vertex_buffer(&resources.vertex_buffer, 0)?;
            cmd.set_uniform_mat4("mvp", Self::model_view_projection(self.angle))?;
            cmd.draw(CUBE_POSITIONS.len() as u32, 0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "cube_tests.rs"]
mod tests;
