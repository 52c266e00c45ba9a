//! End-to-end replay of an interaction script

use ergoheader_core::{parse_script, HeaderConfig, MenuState, Simulation, VisibilityMode};

const SESSION: &str = r#"
# reader scrolls into an article, checks the menu, then heads back up
viewport 300
scroll 50
scroll 100
scroll 150      # past viewport - 200
enter header
leave header
toggle
link
scroll 120
scroll 90       # back inside viewport - 200
scroll 60       # 90px up so far
scroll 40       # 110px up
"#;

#[test]
fn test_reading_session() {
    let steps = parse_script(SESSION).unwrap();
    let frames = Simulation::run(HeaderConfig::default(), &steps);

    let modes: Vec<_> = frames.iter().map(|f| f.mode).collect();
    use VisibilityMode::{Full, Minimized};
    assert_eq!(
        modes,
        vec![
            Full, Full, Full, Minimized, Full, Minimized, Minimized, Minimized, Minimized,
            Full, Full, Full
        ]
    );

    let menus: Vec<_> = frames.iter().map(|f| f.menu).collect();
    assert_eq!(menus[6], MenuState::Open);
    assert_eq!(menus[7], MenuState::Closed);

    let last = frames.last().unwrap();
    assert_eq!(last.header.scroll_up_distance, 110.0);
    assert!(last.header.is_scrolling_up);
    assert!(!last.header.is_minimized);
}
