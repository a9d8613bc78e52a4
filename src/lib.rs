//! Blockwall - images as walls of blocks
//!
//! Quantizes images to a fixed palette of concrete and terracotta blocks,
//! projects them onto a vertical surface in a remote voxel world and sends
//! only what changed since the last render, batched into fill commands.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
