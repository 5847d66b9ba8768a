/// TriangleScene - flat orange triangle preview

use std::sync::Arc;

use crate::error::Result;
use crate::engine_error;
use crate::graphics_device::{
    GraphicsDevice, CommandList, Pipeline,
    ShaderDesc, ShaderStage, PipelineDesc, PrimitiveTopology,
    VertexLayout, DepthStencilState, ClearValue,
};
use crate::preview::PreviewScene;

/// Vertex positions are synthesized from `gl_VertexID`; no vertex buffer.
const VERTEX_SHADER: &str = r#"
#version 330 core
const vec2 pts[3] = vec2[3](vec2(0.0, 0.8), vec2(-0.8, -0.8), vec2(0.8, -0.8));
void main() { gl_Position = vec4(pts[gl_VertexID], 0.0, 1.0); }
"#;

const FRAGMENT_SHADER: &str = r#"
#version 330 core
out vec4 o;
void main() { o = vec4(1.0, 0.5, 0.2, 1.0); }
"#;

/// A flat orange triangle on a dark background
///
/// The simplest preview scene: no vertex data, no depth testing, one
/// pipeline built on first use.
pub struct TriangleScene {
    pipeline: Option<Arc<dyn Pipeline>>,
    build_failed: bool,
}

impl TriangleScene {
    pub fn new() -> Self {
        Self {
            pipeline: None,
            build_failed: false,
        }
    }

    fn build(device: &mut dyn GraphicsDevice) -> Result<Arc<dyn Pipeline>> {
        let vertex_shader = device.create_shader(ShaderDesc {
            source: VERTEX_SHADER,
            stage: ShaderStage::Vertex,
        })?;
        let fragment_shader = device.create_shader(ShaderDesc {
            source: FRAGMENT_SHADER,
            stage: ShaderStage::Fragment,
        })?;
        device.create_pipeline(PipelineDesc {
            vertex_shader,
            fragment_shader,
            vertex_layout: VertexLayout::default(),
            topology: PrimitiveTopology::TriangleList,
            depth_stencil: DepthStencilState::disabled(),
        })
    }
}

impl Default for TriangleScene {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewScene for TriangleScene {
    fn prepare(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        if self.pipeline.is_some() || self.build_failed {
            return Ok(());
        }
        match Self::build(device) {
            Ok(pipeline) => {
                self.pipeline = Some(pipeline);
                Ok(())
            }
            Err(err) => {
                self.build_failed = true;
                engine_error!("easel::TriangleScene", "pipeline build failed: {}", err);
                Err(err)
            }
        }
    }

    fn is_ready(&self) -> bool {
        self.pipeline.is_some()
    }

    fn clear_values(&self) -> Vec<ClearValue> {
        vec![ClearValue::Color([0.10, 0.12, 0.15, 1.0])]
    }

    fn record(&self, cmd: &mut dyn CommandList, _side: u32) -> Result<()> {
        if let Some(pipeline) = &self.pipeline {
            cmd.bind_pipeline(pipeline)?;
            cmd.draw(3, 0)?;
        }
        Ok(())
    }
}
