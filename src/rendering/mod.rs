//! The image-to-surface compiler: projection, diffing and batching.

pub mod batcher;
pub mod diff;
pub mod projector;

pub use batcher::batch;
pub use diff::diff;
pub use projector::SurfaceProjector;
