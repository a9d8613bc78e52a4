//! Orchestration of surface renders and clears.

use std::path::Path;
use std::sync::Arc;

use voxel_dither::{DitherOptions, Palette, Quantizer, Raster, DEFAULT_CONTRAST};

use super::image_source::ImageSource;
use super::state_store::SurfaceStateStore;
use super::transport::Transport;
use crate::error::{RenderError, TransportError};
use crate::models::{BlockAssignment, FillCommand, RenderConfig, SurfaceIdentity};
use crate::rendering::{batch, diff, SurfaceProjector};

/// Block written over a surface when it is cleared
pub const CLEAR_BLOCK: &str = "air";

/// Per-render knobs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub dither: DitherOptions,
    /// Contrast applied to decoded images
    pub contrast: f32,
    /// Diff against the previous render instead of redrawing everything
    pub smart_diff: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dither: DitherOptions::default(),
            contrast: DEFAULT_CONTRAST,
            smart_diff: true,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            dither: config.dither_options(),
            contrast: config.contrast,
            smart_diff: config.smart_diff,
        }
    }
}

/// Outcome of a successful render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    /// Fill commands sent to the transport
    pub commands_sent: usize,
    /// Blocks that differed from the previous render
    pub blocks_changed: usize,
    /// Blocks on the whole surface
    pub blocks_total: usize,
    /// Whether a previous render was diffed against
    pub diffed: bool,
}

impl RenderReport {
    /// True when nothing had to be sent
    pub fn is_noop(&self) -> bool {
        self.commands_sent == 0
    }
}

/// Renders images onto surfaces through a transport, remembering what
/// each surface currently shows.
pub struct ScreenService {
    transport: Arc<dyn Transport>,
    store: Arc<dyn SurfaceStateStore>,
    palette: Palette,
}

impl ScreenService {
    pub fn new(transport: Arc<dyn Transport>, store: Arc<dyn SurfaceStateStore>) -> Self {
        Self {
            transport,
            store,
            palette: Palette::concrete(),
        }
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Decode, resize and render an image file.
    ///
    /// Source failures are reported before anything is sent.
    pub fn render_image(
        &self,
        identity: &SurfaceIdentity,
        path: &Path,
        options: &RenderOptions,
    ) -> Result<RenderReport, RenderError> {
        let raster = ImageSource::new(identity.width, identity.height)?
            .contrast(options.contrast)
            .load_path(path)?;
        self.render_raster(identity, &raster, options)
    }

    /// Render a raster that already has the surface's dimensions.
    ///
    /// On transport failure the previous state is kept, so the next render
    /// re-sends whatever did not land.
    pub fn render_raster(
        &self,
        identity: &SurfaceIdentity,
        raster: &Raster,
        options: &RenderOptions,
    ) -> Result<RenderReport, RenderError> {
        if raster.width() != identity.width as usize || raster.height() != identity.height as usize
        {
            return Err(RenderError::InvalidSurface(format!(
                "raster is {}x{}, surface is {}x{}",
                raster.width(),
                raster.height(),
                identity.width,
                identity.height
            )));
        }
        ensure_area(identity)?;

        tracing::info!(
            surface = %identity,
            dithering = options.dither.dithering,
            smart_diff = options.smart_diff,
            "Rendering surface"
        );

        let quantized = Quantizer::new(self.palette)
            .options(options.dither)
            .quantize(raster);
        let projector = SurfaceProjector::new(identity);
        let blocks = projector.assign(&quantized);

        let previous = if options.smart_diff {
            self.load_previous(identity)
        } else {
            None
        };
        let diffed = previous.is_some();
        let changed = diff(&blocks, previous.as_ref());

        tracing::info!(
            changed = changed.len(),
            total = blocks.len(),
            diffed,
            "Computed surface diff"
        );

        if changed.is_empty() {
            tracing::info!(surface = %identity, "Surface already up to date");
            return Ok(RenderReport {
                commands_sent: 0,
                blocks_changed: 0,
                blocks_total: blocks.len(),
                diffed,
            });
        }

        let commands = batch(&changed, &projector);
        self.send_all(&commands)
            .map_err(|(applied, source)| RenderError::Transport {
                applied,
                total: commands.len(),
                source,
            })?;

        if let Err(e) = self.store.save(identity, &blocks) {
            tracing::warn!(%e, surface = %identity, "Failed to save surface state");
        }

        tracing::info!(
            surface = %identity,
            commands = commands.len(),
            blocks = changed.len(),
            "Surface rendered"
        );

        Ok(RenderReport {
            commands_sent: commands.len(),
            blocks_changed: changed.len(),
            blocks_total: blocks.len(),
            diffed,
        })
    }

    /// Replace the whole surface with air and forget its state.
    ///
    /// The state is deleted even when the fill fails: a fill whose reply
    /// was lost may still have landed, and a stale state would turn the
    /// next render into a no-op over an empty wall.
    pub fn clear(&self, identity: &SurfaceIdentity) -> Result<(), RenderError> {
        ensure_area(identity)?;

        let (from, to) = SurfaceProjector::new(identity).bounds();
        tracing::info!(surface = %identity, "Clearing surface");
        let filled = self.transport.fill(&FillCommand::new(from, to, CLEAR_BLOCK));

        if let Err(e) = self.store.delete(identity) {
            tracing::warn!(%e, surface = %identity, "Failed to delete surface state");
        }

        filled.map(|_| ()).map_err(|source| {
            tracing::warn!(e = %source, surface = %identity, "Clear failed");
            RenderError::Transport {
                applied: 0,
                total: 1,
                source,
            }
        })
    }

    fn load_previous(&self, identity: &SurfaceIdentity) -> Option<BlockAssignment> {
        match self.store.load(identity) {
            Ok(previous) => previous,
            Err(e) => {
                tracing::warn!(%e, surface = %identity, "Failed to load surface state, rendering in full");
                None
            }
        }
    }

    /// Send commands in order, stopping at the first failure.
    fn send_all(&self, commands: &[FillCommand]) -> Result<(), (usize, TransportError)> {
        for (applied, command) in commands.iter().enumerate() {
            if let Err(e) = self.transport.fill(command) {
                tracing::warn!(
                    %e,
                    applied,
                    total = commands.len(),
                    command = %command,
                    "Transport failed, aborting render"
                );
                return Err((applied, e));
            }
        }
        Ok(())
    }
}

fn ensure_area(identity: &SurfaceIdentity) -> Result<(), RenderError> {
    if identity.width == 0 || identity.height == 0 {
        return Err(RenderError::InvalidSurface(format!(
            "surface {identity} has no area"
        )));
    }
    Ok(())
}
