use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use voxel_dither::{DitherOptions, DEFAULT_CONTRAST};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the GDMC HTTP interface
    pub gdmc_url: String,

    /// Per-request timeout for the transport
    pub timeout_secs: u64,

    /// Directory holding persisted surface state
    pub state_dir: PathBuf,

    /// Announce renders in-game via tellraw
    pub announce: bool,

    /// Quantization and diffing defaults
    pub render: RenderConfig,

    /// Named surface sizes (width, height)
    pub sizes: HashMap<String, ScreenSize>,
}

/// Quantization and diffing defaults
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub dithering: bool,
    pub skip_uniform: bool,
    pub uniform_threshold: u8,
    pub contrast: f32,
    /// Diff against the last render of the same surface
    pub smart_diff: bool,
}

/// Surface dimensions in blocks
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub const SMALL: Self = Self {
        width: 128,
        height: 72,
    };

    pub const MEDIUM: Self = Self {
        width: 192,
        height: 108,
    };

    pub const LARGE: Self = Self {
        width: 256,
        height: 144,
    };
}

/// Size name used when a requested preset is unknown
pub const DEFAULT_SIZE: &str = "medium";

fn default_sizes() -> HashMap<String, ScreenSize> {
    HashMap::from([
        ("small".to_string(), ScreenSize::SMALL),
        ("medium".to_string(), ScreenSize::MEDIUM),
        ("large".to_string(), ScreenSize::LARGE),
    ])
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gdmc_url: "http://localhost:9000".to_string(),
            timeout_secs: 5,
            state_dir: PathBuf::from(".blockwall/state"),
            announce: true,
            render: RenderConfig::default(),
            sizes: default_sizes(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        let dither = DitherOptions::default();
        Self {
            dithering: dither.dithering,
            skip_uniform: dither.skip_uniform,
            uniform_threshold: dither.uniform_threshold,
            contrast: DEFAULT_CONTRAST,
            smart_diff: true,
        }
    }
}

impl RenderConfig {
    pub fn dither_options(&self) -> DitherOptions {
        DitherOptions::new()
            .dithering(self.dithering)
            .skip_uniform(self.skip_uniform)
            .uniform_threshold(self.uniform_threshold)
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut config: Self = serde_yaml::from_str(content)?;
        // Presets missing from the file keep their defaults.
        for (name, size) in default_sizes() {
            config.sizes.entry(name).or_insert(size);
        }
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults.
    ///
    /// Environment overrides (`GDMC_URL`, `STATE_DIR`) are applied on top.
    pub fn load(path: Option<&Path>) -> Self {
        let mut config = match path {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(content) => match Self::from_yaml(&content) {
                    Ok(config) => {
                        tracing::info!(
                            path = %path.display(),
                            sizes = config.sizes.len(),
                            "Loaded configuration"
                        );
                        config
                    }
                    Err(e) => {
                        tracing::warn!(%e, "Failed to parse config, using defaults");
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply environment overrides using the given lookup
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("GDMC_URL") {
            self.gdmc_url = url;
        }
        if let Some(dir) = lookup("STATE_DIR") {
            self.state_dir = PathBuf::from(dir);
        }
    }

    /// Resolve a named size, falling back to the default preset
    pub fn size(&self, name: &str) -> ScreenSize {
        match self.sizes.get(name) {
            Some(size) => *size,
            None => {
                tracing::warn!(size = name, "Unknown size, using {DEFAULT_SIZE}");
                self.sizes
                    .get(DEFAULT_SIZE)
                    .copied()
                    .unwrap_or(ScreenSize::MEDIUM)
            }
        }
    }
}
