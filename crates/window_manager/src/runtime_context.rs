//! Leptos provider and context wiring for the window manager.
//!
//! The provider owns the reactive registry signal and a reducer dispatch callback. Components read
//! the signal (or the derived memos) and mutate it only through [`WindowRuntimeContext`] methods.
#![allow(clippy::clone_on_copy)]

use leptos::*;
use serde_json::Value;

use crate::{
    catalog::builtin_catalog,
    config::WindowManagerConfig,
    device::{current_device_class, DeviceClass},
    model::{WindowBounds, WindowId, WindowManagerState, WindowRecord},
    reducer::{reduce_windows, WindowAction, WindowEffect},
    registry::WindowRegistration,
};

/// Launch payload carried by windows managed through the Leptos context.
pub type LaunchProps = Value;

#[derive(Clone, Copy)]
/// Leptos context for reading window state and dispatching [`WindowAction`] values.
pub struct WindowRuntimeContext {
    /// Configuration shared by every dispatched action.
    pub config: StoredValue<WindowManagerConfig>,
    /// Reactive window registry signal.
    pub state: RwSignal<WindowManagerState<LaunchProps>>,
    /// Effects produced by the most recent state-changing action.
    pub last_effects: RwSignal<Vec<WindowEffect>>,
    /// Open windows in registry order.
    pub open_windows: Memo<Vec<WindowRecord<LaunchProps>>>,
    /// Currently focused window, if any.
    pub active_window_id: Memo<Option<WindowId>>,
    /// Viewport class of the hosting browser window.
    pub device: RwSignal<Option<DeviceClass>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<WindowAction<LaunchProps>>,
}

impl WindowRuntimeContext {
    /// Creates the signals and dispatcher, optionally pre-registering the built-in catalog.
    ///
    /// Must run inside a reactive owner.
    pub fn new(config: WindowManagerConfig, register_builtin_apps: bool) -> Self {
        let mut initial = WindowManagerState::default();
        if register_builtin_apps {
            match builtin_catalog() {
                Ok(catalog) => {
                    for entry in &catalog {
                        let action = WindowAction::RegisterWindow(entry.registration());
                        if let Err(err) = reduce_windows(&mut initial, &config, action) {
                            logging::warn!("builtin app registration failed: {err}");
                        }
                    }
                }
                Err(err) => logging::warn!("builtin app catalog load failed: {err}"),
            }
        }

        let config = store_value(config);
        let state = create_rw_signal(initial);
        let last_effects = create_rw_signal(Vec::<WindowEffect>::new());
        let open_windows = create_memo(move |_| {
            state.with(|state| state.open_windows().cloned().collect::<Vec<_>>())
        });
        let active_window_id =
            create_memo(move |_| state.with(|state| state.active_window_id().cloned()));
        let device = create_rw_signal(current_device_class());

        let dispatch = Callback::new(move |action: WindowAction<LaunchProps>| {
            let mut next = state.get_untracked();
            let result = config.with_value(|config| reduce_windows(&mut next, config, action));
            match result {
                Ok(effects) => {
                    if !effects.is_empty() {
                        state.set(next);
                        last_effects.set(effects);
                    }
                }
                Err(err) => logging::debug_warn!("window action ignored: {err}"),
            }
        });

        Self {
            config,
            state,
            last_effects,
            open_windows,
            active_window_id,
            device,
            dispatch,
        }
    }

    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: WindowAction<LaunchProps>) {
        self.dispatch.call(action);
    }

    pub fn register_window(&self, registration: WindowRegistration) {
        self.dispatch_action(WindowAction::RegisterWindow(registration));
    }

    pub fn open_window(&self, window_id: impl Into<WindowId>, props: Option<LaunchProps>) {
        self.dispatch_action(WindowAction::OpenWindow {
            window_id: window_id.into(),
            props,
        });
    }

    pub fn close_window(&self, window_id: impl Into<WindowId>) {
        self.dispatch_action(WindowAction::CloseWindow {
            window_id: window_id.into(),
        });
    }

    pub fn toggle_minimize(&self, window_id: impl Into<WindowId>) {
        self.dispatch_action(WindowAction::ToggleMinimize {
            window_id: window_id.into(),
        });
    }

    pub fn toggle_maximize(&self, window_id: impl Into<WindowId>) {
        self.dispatch_action(WindowAction::ToggleMaximize {
            window_id: window_id.into(),
        });
    }

    pub fn focus_window(&self, window_id: impl Into<WindowId>) {
        self.dispatch_action(WindowAction::FocusWindow {
            window_id: window_id.into(),
        });
    }

    /// Records geometry reported by the drag/resize layer.
    pub fn set_bounds(&self, window_id: impl Into<WindowId>, bounds: Option<WindowBounds>) {
        self.dispatch_action(WindowAction::SetBounds {
            window_id: window_id.into(),
            bounds,
        });
    }

    pub fn set_previous_bounds(
        &self,
        window_id: impl Into<WindowId>,
        previous_bounds: Option<WindowBounds>,
    ) {
        self.dispatch_action(WindowAction::SetPreviousBounds {
            window_id: window_id.into(),
            previous_bounds,
        });
    }
}

#[component]
/// Provides [`WindowRuntimeContext`] to descendant components.
pub fn WindowManagerProvider(
    /// Overrides the default base z-index and window bounds.
    #[prop(optional)]
    config: Option<WindowManagerConfig>,
    /// Registers the built-in app catalog before children render.
    #[prop(default = true)]
    register_builtin_apps: bool,
    children: Children,
) -> impl IntoView {
    let runtime = WindowRuntimeContext::new(config.unwrap_or_default(), register_builtin_apps);

    #[cfg(target_arch = "wasm32")]
    {
        let device = runtime.device;
        let handle = window_event_listener(ev::resize, move |_| {
            device.set(current_device_class());
        });
        on_cleanup(move || handle.remove());
    }

    provide_context(runtime.clone());

    children().into_view()
}

/// Returns the current [`WindowRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`WindowManagerProvider`].
pub fn use_window_runtime() -> WindowRuntimeContext {
    use_context::<WindowRuntimeContext>().expect("WindowRuntimeContext not provided")
}
