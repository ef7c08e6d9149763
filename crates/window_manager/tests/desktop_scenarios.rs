use pretty_assertions::assert_eq;
use window_manager::{WindowId, WindowManager, WindowManagerConfig};

fn z_index(manager: &WindowManager<()>, id: &str) -> u32 {
    manager
        .state()
        .window(&WindowId::from(id))
        .expect("registered window")
        .z_index
}

fn active(manager: &WindowManager<()>) -> Option<&str> {
    manager.active_window_id().map(WindowId::as_str)
}

#[test]
fn dock_session_focus_and_stacking() {
    let mut manager = WindowManager::<()>::default();
    manager.register_window("files", "Files", "FileExplorer", "folder");
    manager.register_window("notes", "Notes", "NotesApp", "note");

    manager.open_window("files", None);
    assert_eq!(active(&manager), Some("files"));
    assert_eq!(z_index(&manager, "files"), 11);

    manager.open_window("notes", None);
    assert_eq!(active(&manager), Some("notes"));
    assert_eq!(z_index(&manager, "notes"), 12);
    assert_eq!(z_index(&manager, "files"), 11);

    manager.toggle_minimize("notes");
    assert!(
        manager
            .state()
            .window(&WindowId::from("notes"))
            .unwrap()
            .is_minimized
    );
    assert_eq!(active(&manager), None);

    manager.open_window("files", None);
    assert_eq!(active(&manager), Some("files"));
    assert_eq!(z_index(&manager, "files"), 13);
}

#[test]
fn closing_focused_window_promotes_next_highest() {
    let mut manager = WindowManager::<()>::default();
    for id in ["a", "c", "b"] {
        manager.register_window(id, id, "View", "icon");
        manager.open_window(id, None);
    }
    assert_eq!(active(&manager), Some("b"));

    manager.close_window("b");

    assert_eq!(active(&manager), Some("c"));
    let open: Vec<&str> = manager
        .state()
        .open_windows_by_stack()
        .into_iter()
        .map(|w| w.id.as_str())
        .collect();
    assert_eq!(open, vec!["a", "c"]);
}

#[test]
fn closing_last_visible_window_leaves_nothing_focused() {
    let mut manager = WindowManager::<()>::default();
    manager.register_window("files", "Files", "FileExplorer", "folder");
    manager.register_window("notes", "Notes", "NotesApp", "note");
    manager.open_window("notes", None);
    manager.toggle_minimize("notes");
    manager.open_window("files", None);

    manager.close_window("files");

    assert_eq!(active(&manager), None);
}

#[test]
fn unknown_ids_never_change_state() {
    let mut manager = WindowManager::<()>::default();
    manager.register_window("files", "Files", "FileExplorer", "folder");
    manager.open_window("files", None);
    let before = manager.state().clone();

    manager.open_window("ghost", None);
    manager.close_window("ghost");
    manager.toggle_minimize("ghost");
    manager.toggle_maximize("ghost");
    manager.focus_window("ghost");
    manager.register_window("", "Nameless", "View", "icon");
    manager.register_window(" \t ", "Whitespace", "View", "icon");

    assert_eq!(manager.state(), &before);
}

#[test]
fn configured_base_z_index_seeds_registration_and_focus() {
    let config = WindowManagerConfig::from_toml_str("base_z_index = 100").expect("config");
    let mut manager = WindowManager::<()>::new(config);
    manager.register_window("files", "Files", "FileExplorer", "folder");

    assert_eq!(z_index(&manager, "files"), 100);
    manager.open_window("files", None);
    assert_eq!(z_index(&manager, "files"), 101);
}
