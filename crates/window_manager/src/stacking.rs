//! Focus and stacking policy shared by the lifecycle reducer.

use std::collections::BTreeSet;

use crate::{
    config::WindowManagerConfig,
    model::{WindowId, WindowManagerState},
    reducer::WindowError,
};

/// Focuses and raises `window_id` above every registered window, open or not.
///
/// Focusing the current top window still raises it again; z-indexes only grow until
/// [`renormalize_stack`] compacts them.
///
/// # Errors
///
/// Rejects unknown, minimized, and closed windows without touching state.
pub(crate) fn focus_window_internal<P>(
    state: &mut WindowManagerState<P>,
    config: &WindowManagerConfig,
    window_id: &WindowId,
) -> Result<(), WindowError> {
    let index = state
        .windows
        .iter()
        .position(|w| &w.id == window_id)
        .ok_or_else(|| WindowError::WindowNotFound(window_id.clone()))?;
    let window = &state.windows[index];
    if window.is_minimized {
        return Err(WindowError::FocusWhileMinimized(window_id.clone()));
    }
    if !window.is_open {
        return Err(WindowError::FocusWhileClosed(window_id.clone()));
    }

    let z_index = match next_top_z_index(state, config) {
        Some(z_index) => z_index,
        None => {
            renormalize_stack(state, config);
            // A base with no headroom left compacts to 0..N, so raise over the stack alone.
            next_top_z_index(state, config)
                .unwrap_or_else(|| state.max_z_index().unwrap_or(0).saturating_add(1))
        }
    };
    state.windows[index].z_index = z_index;
    state.active_window_id = Some(window_id.clone());
    Ok(())
}

fn next_top_z_index<P>(
    state: &WindowManagerState<P>,
    config: &WindowManagerConfig,
) -> Option<u32> {
    state
        .max_z_index()
        .unwrap_or(config.base_z_index)
        .max(config.base_z_index)
        .checked_add(1)
}

/// Returns the open, non-minimized window with the highest z-index.
///
/// Equal z-indexes resolve to the earliest registered window.
pub(crate) fn top_visible_window<P>(state: &WindowManagerState<P>) -> Option<WindowId> {
    let mut top: Option<(u32, &WindowId)> = None;
    for window in state.windows.iter().filter(|w| w.is_visible()) {
        match top {
            Some((z_index, _)) if window.z_index <= z_index => {}
            _ => top = Some((window.z_index, &window.id)),
        }
    }
    top.map(|(_, window_id)| window_id.clone())
}

/// Rewrites z-indexes to a dense range starting at the base z-index, or at 0 when the range would
/// not fit above the base.
///
/// Relative order is preserved and equal values stay equal. Returns `true` when any value changed.
pub(crate) fn renormalize_stack<P>(
    state: &mut WindowManagerState<P>,
    config: &WindowManagerConfig,
) -> bool {
    let distinct: Vec<u32> = state
        .windows
        .iter()
        .map(|w| w.z_index)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let floor = u32::try_from(distinct.len())
        .ok()
        .and_then(|len| config.base_z_index.checked_add(len))
        .map_or(0, |_| config.base_z_index);

    let mut changed = false;
    for window in &mut state.windows {
        let rank = distinct
            .binary_search(&window.z_index)
            .unwrap_or_default();
        let z_index = floor.saturating_add(rank as u32);
        if window.z_index != z_index {
            window.z_index = z_index;
            changed = true;
        }
    }
    changed
}
