//! Reducer actions, change notifications, and lifecycle transition logic for managed windows.

use thiserror::Error;

use crate::{
    config::WindowManagerConfig,
    model::{WindowBounds, WindowId, WindowManagerState, WindowRecord},
    registry::{find_window_mut, register_window, WindowRegistration},
    stacking::{focus_window_internal, renormalize_stack, top_visible_window},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_windows`] to mutate [`WindowManagerState`].
pub enum WindowAction<P> {
    /// Register an application window; known ids are left untouched.
    RegisterWindow(WindowRegistration),
    /// Open (or restore) a window and bring it to the front.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
        /// Replacement launch payload, if any.
        props: Option<P>,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Flip the minimized flag of a window.
    ToggleMinimize {
        /// Window to minimize or restore.
        window_id: WindowId,
    },
    /// Flip the maximized flag of a window and bring it to the front.
    ToggleMaximize {
        /// Window to maximize or un-maximize.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Store geometry reported by the drag/resize layer.
    SetBounds {
        /// Window whose bounds changed.
        window_id: WindowId,
        /// New on-screen bounds.
        bounds: Option<WindowBounds>,
    },
    /// Store the pre-maximize geometry snapshot kept by the drag/resize layer.
    SetPreviousBounds {
        /// Window whose snapshot changed.
        window_id: WindowId,
        /// Snapshot to keep, or `None` to drop it.
        previous_bounds: Option<WindowBounds>,
    },
    /// Compact z-indexes without changing stacking order.
    RenormalizeStack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Change notifications emitted by [`reduce_windows`] for observers.
pub enum WindowEffect {
    /// A new window record was added.
    Registered(WindowId),
    /// A closed window became open.
    Opened(WindowId),
    /// An open window was closed.
    Closed(WindowId),
    /// The minimized flag changed.
    MinimizedChanged {
        /// Affected window.
        window_id: WindowId,
        /// New flag value.
        minimized: bool,
    },
    /// The maximized flag changed.
    MaximizedChanged {
        /// Affected window.
        window_id: WindowId,
        /// New flag value.
        maximized: bool,
    },
    /// The window's launch payload was replaced.
    PropsReplaced(WindowId),
    /// The window took focus and was raised to the top of the stack.
    Focused(WindowId),
    /// No window holds focus any more.
    FocusCleared,
    /// Bounds or the pre-maximize snapshot changed.
    BoundsChanged(WindowId),
    /// Z-indexes were compacted.
    StackRenormalized,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an action left the state untouched.
///
/// These never reach UI callers: the public entry points treat them as no-ops.
pub enum WindowError {
    /// Registration was attempted with an empty or whitespace-only id.
    #[error("window id must not be blank")]
    BlankWindowId,
    /// The target window id was never registered.
    #[error("window not found: {0}")]
    WindowNotFound(WindowId),
    /// A minimized window cannot take focus.
    #[error("window is minimized and cannot take focus: {0}")]
    FocusWhileMinimized(WindowId),
    /// A closed window cannot take focus.
    #[error("window is closed and cannot take focus: {0}")]
    FocusWhileClosed(WindowId),
}

/// Applies a [`WindowAction`] to the window registry and collects the resulting change effects.
///
/// An empty effect list means the action was legal but changed nothing.
///
/// # Errors
///
/// Returns a [`WindowError`] when the action targets an unknown window, registers an empty id,
/// or asks a hidden window to take focus. The state is untouched in every error case.
pub fn reduce_windows<P>(
    state: &mut WindowManagerState<P>,
    config: &WindowManagerConfig,
    action: WindowAction<P>,
) -> Result<Vec<WindowEffect>, WindowError> {
    let mut effects = Vec::new();
    match action {
        WindowAction::RegisterWindow(registration) => {
            if registration.id.is_blank() {
                return Err(WindowError::BlankWindowId);
            }
            let window_id = registration.id.clone();
            if register_window(state, config, registration) {
                effects.push(WindowEffect::Registered(window_id));
            }
        }
        WindowAction::OpenWindow { window_id, props } => {
            let window = find_window(state, &window_id)?;
            if !window.is_open {
                window.is_open = true;
                window.is_minimized = false;
                effects.push(WindowEffect::Opened(window_id.clone()));
            } else if window.is_minimized {
                window.is_minimized = false;
                effects.push(WindowEffect::MinimizedChanged {
                    window_id: window_id.clone(),
                    minimized: false,
                });
            }
            if let Some(props) = props {
                window.props = Some(props);
                effects.push(WindowEffect::PropsReplaced(window_id.clone()));
            }
            focus_window_internal(state, config, &window_id)?;
            effects.push(WindowEffect::Focused(window_id));
        }
        WindowAction::CloseWindow { window_id } => {
            let window = find_window(state, &window_id)?;
            let was_open = window.is_open;
            let was_maximized = window.is_maximized;
            window.is_open = false;
            window.is_maximized = false;
            if was_open {
                effects.push(WindowEffect::Closed(window_id.clone()));
            }
            if was_maximized {
                effects.push(WindowEffect::MaximizedChanged {
                    window_id: window_id.clone(),
                    maximized: false,
                });
            }
            if state.active_window_id.as_ref() == Some(&window_id) {
                state.active_window_id = None;
                effects.push(WindowEffect::FocusCleared);
                if let Some(next) = top_visible_window(state) {
                    focus_window_internal(state, config, &next)?;
                    effects.push(WindowEffect::Focused(next));
                }
            }
        }
        WindowAction::ToggleMinimize { window_id } => {
            let window = find_window(state, &window_id)?;
            window.is_minimized = !window.is_minimized;
            let minimized = window.is_minimized;
            effects.push(WindowEffect::MinimizedChanged {
                window_id: window_id.clone(),
                minimized,
            });
            if !minimized {
                // A closed window may be un-minimized but still cannot take focus.
                if focus_window_internal(state, config, &window_id).is_ok() {
                    effects.push(WindowEffect::Focused(window_id));
                }
            } else if state.active_window_id.as_ref() == Some(&window_id) {
                state.active_window_id = None;
                effects.push(WindowEffect::FocusCleared);
            }
        }
        WindowAction::ToggleMaximize { window_id } => {
            let window = find_window(state, &window_id)?;
            window.is_maximized = !window.is_maximized;
            effects.push(WindowEffect::MaximizedChanged {
                window_id: window_id.clone(),
                maximized: window.is_maximized,
            });
            if focus_window_internal(state, config, &window_id).is_ok() {
                effects.push(WindowEffect::Focused(window_id));
            }
        }
        WindowAction::FocusWindow { window_id } => {
            focus_window_internal(state, config, &window_id)?;
            effects.push(WindowEffect::Focused(window_id));
        }
        WindowAction::SetBounds { window_id, bounds } => {
            let window = find_window(state, &window_id)?;
            if window.bounds != bounds {
                window.bounds = bounds;
                effects.push(WindowEffect::BoundsChanged(window_id));
            }
        }
        WindowAction::SetPreviousBounds {
            window_id,
            previous_bounds,
        } => {
            let window = find_window(state, &window_id)?;
            if window.previous_bounds != previous_bounds {
                window.previous_bounds = previous_bounds;
                effects.push(WindowEffect::BoundsChanged(window_id));
            }
        }
        WindowAction::RenormalizeStack => {
            if renormalize_stack(state, config) {
                effects.push(WindowEffect::StackRenormalized);
            }
        }
    }

    Ok(effects)
}

fn find_window<'a, P>(
    state: &'a mut WindowManagerState<P>,
    window_id: &WindowId,
) -> Result<&'a mut WindowRecord<P>, WindowError> {
    find_window_mut(state, window_id).ok_or_else(|| WindowError::WindowNotFound(window_id.clone()))
}
