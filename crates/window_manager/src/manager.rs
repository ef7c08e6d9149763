//! Owned window manager with synchronous change observers.
//!
//! [`WindowManager`] is the object a shell's root context owns and hands to UI code. Every
//! operation is total: unknown ids and illegal transitions are dropped after a debug warning so
//! the UI never has to handle a failure.

use leptos::logging;

use crate::{
    catalog::AppCatalogEntry,
    config::WindowManagerConfig,
    model::{ComponentRef, WindowBounds, WindowId, WindowManagerState},
    reducer::{reduce_windows, WindowAction, WindowEffect},
    registry::WindowRegistration,
};

/// Handle returned by [`WindowManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer<P> = Box<dyn FnMut(&WindowManagerState<P>, &[WindowEffect])>;

/// Owned window registry plus the observers notified after each state change.
///
/// `P` is the launch payload type passed through [`WindowManager::open_window`].
pub struct WindowManager<P> {
    config: WindowManagerConfig,
    state: WindowManagerState<P>,
    observers: Vec<(ObserverId, Observer<P>)>,
    next_observer_id: u64,
}

impl<P> Default for WindowManager<P> {
    fn default() -> Self {
        Self::new(WindowManagerConfig::default())
    }
}

impl<P> WindowManager<P> {
    pub fn new(config: WindowManagerConfig) -> Self {
        Self {
            config,
            state: WindowManagerState::default(),
            observers: Vec::new(),
            next_observer_id: 1,
        }
    }

    pub fn config(&self) -> &WindowManagerConfig {
        &self.config
    }

    /// Read-only view of the registry.
    pub fn state(&self) -> &WindowManagerState<P> {
        &self.state
    }

    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.state.active_window_id()
    }

    /// Registers `observer` to run after every operation that changed state.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&WindowManagerState<P>, &[WindowEffect]) + 'static,
    {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id = self.next_observer_id.saturating_add(1);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Applies `action`, notifies observers, and returns the resulting effects.
    ///
    /// Rejected actions return an empty list and leave the registry untouched.
    pub fn dispatch(&mut self, action: WindowAction<P>) -> Vec<WindowEffect> {
        match reduce_windows(&mut self.state, &self.config, action) {
            Ok(effects) => {
                if !effects.is_empty() {
                    for (_, observer) in &mut self.observers {
                        observer(&self.state, &effects);
                    }
                }
                effects
            }
            Err(err) => {
                logging::debug_warn!("window action ignored: {err}");
                Vec::new()
            }
        }
    }

    pub fn register_window(
        &mut self,
        id: impl Into<WindowId>,
        title: impl Into<String>,
        component: impl Into<ComponentRef>,
        icon: impl Into<String>,
    ) {
        self.dispatch(WindowAction::RegisterWindow(WindowRegistration::new(
            id, title, component, icon,
        )));
    }

    /// Registers every catalog entry in order; known ids are skipped.
    pub fn register_catalog(&mut self, entries: &[AppCatalogEntry]) {
        for entry in entries {
            self.dispatch(WindowAction::RegisterWindow(entry.registration()));
        }
    }

    pub fn open_window(&mut self, window_id: impl Into<WindowId>, props: Option<P>) {
        self.dispatch(WindowAction::OpenWindow {
            window_id: window_id.into(),
            props,
        });
    }

    pub fn close_window(&mut self, window_id: impl Into<WindowId>) {
        self.dispatch(WindowAction::CloseWindow {
            window_id: window_id.into(),
        });
    }

    pub fn toggle_minimize(&mut self, window_id: impl Into<WindowId>) {
        self.dispatch(WindowAction::ToggleMinimize {
            window_id: window_id.into(),
        });
    }

    pub fn toggle_maximize(&mut self, window_id: impl Into<WindowId>) {
        self.dispatch(WindowAction::ToggleMaximize {
            window_id: window_id.into(),
        });
    }

    pub fn focus_window(&mut self, window_id: impl Into<WindowId>) {
        self.dispatch(WindowAction::FocusWindow {
            window_id: window_id.into(),
        });
    }

    pub fn set_bounds(&mut self, window_id: impl Into<WindowId>, bounds: Option<WindowBounds>) {
        self.dispatch(WindowAction::SetBounds {
            window_id: window_id.into(),
            bounds,
        });
    }

    pub fn set_previous_bounds(
        &mut self,
        window_id: impl Into<WindowId>,
        previous_bounds: Option<WindowBounds>,
    ) {
        self.dispatch(WindowAction::SetPreviousBounds {
            window_id: window_id.into(),
            previous_bounds,
        });
    }

    pub fn renormalize_stack(&mut self) {
        self.dispatch(WindowAction::RenormalizeStack);
    }
}
