//! Square render-target cache module
//!
//! Provides the cached off-screen square surface previews are drawn into.
//! A [`TargetCache`] owns at most one [`RenderTarget`] and grows it on
//! demand: the surface allocates on first use, is reused as-is for any
//! request it already covers, and has its storage re-specified in place
//! when a larger side length is requested.

mod render_target;
mod target_cache;

pub use render_target::RenderTarget;
pub use target_cache::TargetCache;
