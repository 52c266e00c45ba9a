//! Integration tests for the mobile menu controller

use ergoheader_core::{MenuController, MenuRecorder, MenuState};

#[test]
fn test_toggle_opens_then_reverses_all_effects() {
    let mut menu = MenuController::new(MenuRecorder::default());
    assert_eq!(menu.state(), MenuState::Closed);
    assert_eq!(menu.surface().body_overflow(), "");

    menu.on_toggle_click();
    assert_eq!(menu.state(), MenuState::Open);
    assert_eq!(menu.surface().body_overflow(), "hidden");
    let open_edits = menu.state().class_edits();

    menu.on_toggle_click();
    assert_eq!(menu.state(), MenuState::Closed);
    assert_eq!(menu.surface().body_overflow(), "");

    let closed_edits = menu.state().class_edits();
    for (open, closed) in open_edits.iter().zip(closed_edits.iter()) {
        assert_eq!(open.target, closed.target);
        assert_eq!(open.class, closed.class);
        assert_ne!(open.present, closed.present);
    }
}

#[test]
fn test_link_click_matches_toggle_while_open() {
    let mut via_link = MenuController::new(MenuRecorder::default());
    via_link.on_toggle_click();
    via_link.on_nav_link_click();

    let mut via_toggle = MenuController::new(MenuRecorder::default());
    via_toggle.on_toggle_click();
    via_toggle.on_toggle_click();

    assert_eq!(via_link.state(), via_toggle.state());
    assert_eq!(via_link.surface().rendered, via_toggle.surface().rendered);
    assert_eq!(
        via_link.surface().body_overflow(),
        via_toggle.surface().body_overflow()
    );
}

#[test]
fn test_link_click_while_closed_stays_closed() {
    let mut menu = MenuController::new(MenuRecorder::default());
    menu.on_nav_link_click();
    menu.on_nav_link_click();
    assert_eq!(menu.state(), MenuState::Closed);
    assert_eq!(
        menu.surface().rendered,
        vec![MenuState::Closed, MenuState::Closed]
    );
}
