use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_Z_INDEX: u32 = 10;
pub const DEFAULT_WINDOW_X: i32 = 100;
pub const DEFAULT_WINDOW_Y: i32 = 50;
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

/// Stable identity of a registered application window.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty or whitespace only. Blank ids are never registered.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&WindowId> for WindowId {
    fn from(value: &WindowId) -> Self {
        value.clone()
    }
}

/// Opaque handle naming the content renderer for a window. Never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(pub String);

impl ComponentRef {
    pub fn new(component: impl Into<String>) -> Self {
        Self(component.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ComponentRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowBounds {
    fn default() -> Self {
        Self {
            x: DEFAULT_WINDOW_X,
            y: DEFAULT_WINDOW_Y,
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Per-application window state. `P` is the caller's launch payload, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord<P> {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub component: ComponentRef,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    pub bounds: Option<WindowBounds>,
    pub previous_bounds: Option<WindowBounds>,
    pub props: Option<P>,
}

impl<P> WindowRecord<P> {
    /// Whether the window is on screen and allowed to hold focus.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

/// Registry of every known window plus the current focus holder.
///
/// Fields are crate-visible only; outside the crate records change through
/// [`crate::reduce_windows`]. A deserialized state is trusted as-is and is not re-checked against
/// the registry invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowManagerState<P> {
    pub(crate) windows: Vec<WindowRecord<P>>,
    pub(crate) active_window_id: Option<WindowId>,
}

impl<P> Default for WindowManagerState<P> {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            active_window_id: None,
        }
    }
}

impl<P> WindowManagerState<P> {
    /// All registered windows in registration order.
    pub fn windows(&self) -> &[WindowRecord<P>] {
        &self.windows
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord<P>> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.active_window_id.as_ref()
    }

    pub fn active_window(&self) -> Option<&WindowRecord<P>> {
        self.active_window_id
            .as_ref()
            .and_then(|window_id| self.window(window_id))
    }

    pub fn open_windows(&self) -> impl Iterator<Item = &WindowRecord<P>> {
        self.windows.iter().filter(|w| w.is_open)
    }

    /// Open windows ordered back-to-front for rendering.
    pub fn open_windows_by_stack(&self) -> Vec<&WindowRecord<P>> {
        let mut open: Vec<&WindowRecord<P>> = self.open_windows().collect();
        // Stable sort keeps registry order for equal z-indexes.
        open.sort_by_key(|w| w.z_index);
        open
    }

    pub fn max_z_index(&self) -> Option<u32> {
        self.windows.iter().map(|w| w.z_index).max()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(id: &str, z_index: u32, is_open: bool) -> WindowRecord<()> {
        WindowRecord {
            id: WindowId::from(id),
            title: id.to_string(),
            icon: "icon".to_string(),
            component: ComponentRef::from("View"),
            is_open,
            is_minimized: false,
            is_maximized: false,
            z_index,
            bounds: Some(WindowBounds::default()),
            previous_bounds: None,
            props: None,
        }
    }

    #[test]
    fn open_windows_by_stack_sorts_back_to_front_and_skips_closed() {
        let state = WindowManagerState {
            windows: vec![
                record("a", 14, true),
                record("b", 11, true),
                record("c", 20, false),
                record("d", 11, true),
            ],
            active_window_id: None,
        };

        let ids: Vec<&str> = state
            .open_windows_by_stack()
            .into_iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "d", "a"]);
        assert_eq!(state.max_z_index(), Some(20));
    }

    #[test]
    fn default_bounds_match_registration_defaults() {
        assert_eq!(
            WindowBounds::default(),
            WindowBounds {
                x: 100,
                y: 50,
                width: 800,
                height: 600,
            }
        );
    }

    #[test]
    fn window_id_serializes_as_plain_string() {
        let raw = serde_json::to_string(&WindowId::from("files")).unwrap();
        assert_eq!(raw, "\"files\"");
    }
}
