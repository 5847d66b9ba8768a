//! Preview panels - the draw-into composition layer
//!
//! A [`PreviewPanel`] owns one [`TargetCache`](crate::target::TargetCache),
//! one [`PreviewScene`] strategy, and one caller-supplied [`SizeBounds`].
//! Each frame it clamps the requested side, ensures the cached surface,
//! records the scene into it, restores the default draw destination, and
//! hands the color image back for display. One panel per independent
//! visual element; the panel's exclusive ownership of its cache is what
//! keeps unrelated callers from driving each other's surface growth.

mod scene;
mod triangle;
mod cube;
mod panel;

pub use scene::{PreviewScene, SizeBounds};
pub use triangle::TriangleScene;
pub use cube::CubeScene;
pub use panel::{PreviewPanel, PreviewFrame, placement_in_region};
