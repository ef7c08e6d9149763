//! Window management state machine for the portfolio desktop shell.
//!
//! The registry tracks every application window, its open/minimized/maximized lifecycle, its
//! stacking order, and which window holds focus. [`WindowManager`] is the plain-Rust entry point;
//! [`WindowManagerProvider`] exposes the same state to Leptos components.

pub mod catalog;
pub mod config;
pub mod device;
pub mod manager;
pub mod model;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
mod stacking;

pub use catalog::{builtin_catalog, AppCatalogEntry, CatalogError};
pub use config::{ConfigError, WindowManagerConfig, MAX_BASE_Z_INDEX};
pub use device::{current_device_class, DeviceClass};
pub use manager::{ObserverId, WindowManager};
pub use model::*;
pub use reducer::{reduce_windows, WindowAction, WindowEffect, WindowError};
pub use registry::WindowRegistration;
pub use runtime_context::{
    use_window_runtime, LaunchProps, WindowManagerProvider, WindowRuntimeContext,
};
