//! Viewport-width device classification.

use serde::{Deserialize, Serialize};

pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn from_viewport_width(width: f64) -> Self {
        if width < TABLET_MIN_WIDTH {
            Self::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }

    pub fn is_tablet(self) -> bool {
        matches!(self, Self::Tablet)
    }

    pub fn is_desktop(self) -> bool {
        matches!(self, Self::Desktop)
    }
}

/// Classifies the browser viewport.
///
/// On non-WASM targets this returns `None`.
pub fn current_device_class() -> Option<DeviceClass> {
    #[cfg(target_arch = "wasm32")]
    {
        let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
        Some(DeviceClass::from_viewport_width(width))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
