pub mod assignment;
pub mod config;
pub mod fill;
pub mod surface;

pub use assignment::BlockAssignment;
pub use config::{AppConfig, RenderConfig, ScreenSize, DEFAULT_SIZE};
pub use fill::{qualify_block, FillCommand, DEFAULT_NAMESPACE};
pub use surface::{BlockPos, Facing, SurfaceIdentity};
