//! Window registration and id lookup over [`WindowManagerState`].

use crate::{
    config::WindowManagerConfig,
    model::{ComponentRef, WindowId, WindowManagerState, WindowRecord},
};

/// Display metadata supplied when an application registers its window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistration {
    pub id: WindowId,
    pub title: String,
    pub component: ComponentRef,
    pub icon: String,
}

impl WindowRegistration {
    pub fn new(
        id: impl Into<WindowId>,
        title: impl Into<String>,
        component: impl Into<ComponentRef>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            component: component.into(),
            icon: icon.into(),
        }
    }
}

/// Appends a closed record for `registration` unless its id is already known.
///
/// Returns `true` when a record was added.
pub(crate) fn register_window<P>(
    state: &mut WindowManagerState<P>,
    config: &WindowManagerConfig,
    registration: WindowRegistration,
) -> bool {
    if contains_window(state, &registration.id) {
        return false;
    }

    state.windows.push(WindowRecord {
        id: registration.id,
        title: registration.title,
        icon: registration.icon,
        component: registration.component,
        is_open: false,
        is_minimized: false,
        is_maximized: false,
        z_index: config.base_z_index,
        bounds: Some(config.default_bounds),
        previous_bounds: None,
        props: None,
    });
    true
}

pub(crate) fn contains_window<P>(state: &WindowManagerState<P>, window_id: &WindowId) -> bool {
    state.windows.iter().any(|w| &w.id == window_id)
}

pub(crate) fn find_window_mut<'a, P>(
    state: &'a mut WindowManagerState<P>,
    window_id: &WindowId,
) -> Option<&'a mut WindowRecord<P>> {
    state.windows.iter_mut().find(|w| &w.id == window_id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowBounds;

    #[test]
    fn registration_appends_closed_record_at_base_z_index() {
        let mut state = WindowManagerState::<()>::default();
        let config = WindowManagerConfig::default();

        let added = register_window(
            &mut state,
            &config,
            WindowRegistration::new("files", "Files", "FileExplorer", "folder"),
        );

        assert!(added);
        let record = state.window(&WindowId::from("files")).expect("record");
        assert_eq!(record.title, "Files");
        assert_eq!(record.component, ComponentRef::from("FileExplorer"));
        assert!(!record.is_open);
        assert!(!record.is_minimized);
        assert!(!record.is_maximized);
        assert_eq!(record.z_index, 10);
        assert_eq!(record.bounds, Some(WindowBounds::default()));
        assert_eq!(record.previous_bounds, None);
    }

    #[test]
    fn re_registering_known_id_leaves_record_untouched() {
        let mut state = WindowManagerState::<()>::default();
        let config = WindowManagerConfig::default();
        register_window(
            &mut state,
            &config,
            WindowRegistration::new("notes", "Notes", "NotesApp", "note"),
        );
        let before = state.clone();

        let added = register_window(
            &mut state,
            &config,
            WindowRegistration::new("notes", "Other", "OtherApp", "other"),
        );

        assert!(!added);
        assert_eq!(state, before);
    }

    #[test]
    fn registration_uses_configured_base_and_bounds() {
        let mut state = WindowManagerState::<()>::default();
        let config = WindowManagerConfig {
            base_z_index: 500,
            default_bounds: WindowBounds {
                x: 0,
                y: 0,
                width: 320,
                height: 240,
            },
        };

        register_window(
            &mut state,
            &config,
            WindowRegistration::new("about", "About", "AboutApp", "info"),
        );

        let record = &state.windows()[0];
        assert_eq!(record.z_index, 500);
        assert_eq!(record.bounds.map(|b| b.width), Some(320));
    }
}
