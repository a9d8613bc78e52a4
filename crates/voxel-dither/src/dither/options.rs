//! Dithering options and configuration.

/// Max per-channel deviation (out of 255) for a neighborhood to count as flat.
pub const DEFAULT_UNIFORM_THRESHOLD: u8 = 10;

/// Configuration options for quantization.
///
/// # Defaults
///
/// - Dithering: enabled
/// - Skip uniform regions: enabled
/// - Uniform threshold: 10
///
/// # Example
///
/// ```
/// use voxel_dither::DitherOptions;
///
/// let options = DitherOptions::new()
///     .skip_uniform(false)
///     .uniform_threshold(4);
/// assert!(options.dithering);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DitherOptions {
    /// Use Floyd-Steinberg error diffusion.
    ///
    /// When disabled every pixel is mapped straight to its nearest palette
    /// entry.
    ///
    /// Default: `true`
    pub dithering: bool,

    /// Skip error diffusion for pixels whose 3x3 neighborhood is flat.
    ///
    /// Flat pixels are still quantized, but neither emit error nor get
    /// special treatment for the error they received.
    ///
    /// Default: `true`
    pub skip_uniform: bool,

    /// Largest per-channel deviation from the center pixel that still
    /// counts as flat.
    ///
    /// Default: `10`
    pub uniform_threshold: u8,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            dithering: true,
            skip_uniform: true,
            uniform_threshold: DEFAULT_UNIFORM_THRESHOLD,
        }
    }
}

impl DitherOptions {
    /// Create new options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn dithering(mut self, enabled: bool) -> Self {
        self.dithering = enabled;
        self
    }

    #[inline]
    pub fn skip_uniform(mut self, enabled: bool) -> Self {
        self.skip_uniform = enabled;
        self
    }

    #[inline]
    pub fn uniform_threshold(mut self, threshold: u8) -> Self {
        self.uniform_threshold = threshold;
        self
    }
}
