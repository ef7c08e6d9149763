//! Window manager configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{WindowBounds, DEFAULT_BASE_Z_INDEX};

/// Highest accepted base z-index; the upper half of `u32` is reserved for raising windows.
pub const MAX_BASE_Z_INDEX: u32 = u32::MAX / 2;

#[derive(Debug, Error)]
/// Errors produced while loading a [`WindowManagerConfig`].
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse window manager config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The base z-index leaves no room to raise focused windows above it.
    #[error("base z-index {base_z_index} exceeds the maximum of {max}")]
    BaseZIndexTooHigh {
        /// Configured base z-index.
        base_z_index: u32,
        /// Highest accepted value.
        max: u32,
    },
    /// The default window size is not positive.
    #[error("default window bounds must be positive, found {width}x{height}")]
    InvalidBounds {
        /// Configured width.
        width: i32,
        /// Configured height.
        height: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Shared constants applied when windows are registered and focused.
pub struct WindowManagerConfig {
    /// Z-index every window starts at; focus always raises above it.
    pub base_z_index: u32,
    /// Geometry assigned to newly registered windows.
    pub default_bounds: WindowBounds,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            base_z_index: DEFAULT_BASE_Z_INDEX,
            default_bounds: WindowBounds::default(),
        }
    }
}

impl WindowManagerConfig {
    /// Parses a config document. Missing keys fall back to [`WindowManagerConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, [`ConfigError::BaseZIndexTooHigh`] when
    /// the base exceeds [`MAX_BASE_Z_INDEX`], and [`ConfigError::InvalidBounds`] when the default
    /// width or height is zero or negative.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        if config.base_z_index > MAX_BASE_Z_INDEX {
            return Err(ConfigError::BaseZIndexTooHigh {
                base_z_index: config.base_z_index,
                max: MAX_BASE_Z_INDEX,
            });
        }
        let bounds = config.default_bounds;
        if bounds.width <= 0 || bounds.height <= 0 {
            return Err(ConfigError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        Ok(config)
    }
}
