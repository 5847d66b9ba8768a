/*!
# Easel Engine

Core traits and types for the Easel off-screen preview engine.

Easel hosts small live previews (a shape, a spinning model) inside GUI
panels by rendering them into cached square off-screen surfaces. The heart
of the crate is [`target::TargetCache`], a high-water-mark cache for one
square render target: it allocates on first use, reuses the existing
surface for any request that fits, and grows storage in place when a larger
side length is requested. Everything the cache and the preview layer need
from the GPU goes through the trait seam in [`graphics_device`], so backend
implementations (OpenGL, etc.) live in separate plugin crates.

## Architecture

- **GraphicsDevice**: factory trait for creating GPU resources
- **Texture / Buffer / Shader / Pipeline / Framebuffer**: resource traits
- **CommandList**: recording trait for per-frame drawing commands
- **TargetCache / RenderTarget**: the grow-only square surface cache
- **PreviewPanel / PreviewScene**: the draw-into composition layer

Backend implementations provide concrete types that implement these traits.
All graphics traits are confined to the single thread that owns the
underlying context; cross-thread callers must marshal requests onto that
thread rather than share the device behind a lock.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod graphics_device;
pub mod target;
pub mod preview;

// Main easel namespace module
pub mod easel {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine services (logging)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Graphics device seam with all resource types
    pub mod device {
        pub use crate::graphics_device::*;
    }

    // Render-target cache sub-module
    pub mod target {
        pub use crate::target::*;
    }

    // Preview panel sub-module
    pub mod preview {
        pub use crate::preview::*;
    }
}

// Re-export math library at crate root
pub use glam;
