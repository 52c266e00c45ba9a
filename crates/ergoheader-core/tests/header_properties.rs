//! Integration tests for the header visibility controller

use ergoheader_core::{
    HeaderConfig, HeaderController, HeaderEvent, HeaderRecorder, HeaderState, VisibilityMode,
};

fn controller(initial_offset: f64) -> HeaderController<HeaderRecorder> {
    HeaderController::new(
        HeaderRecorder::default(),
        HeaderConfig::default(),
        initial_offset,
    )
}

/// Small deterministic generator so the sequence tests cover varied paths
fn offsets(seed: u64, len: usize) -> Vec<f64> {
    let mut x = seed;
    (0..len)
        .map(|_| {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((x >> 33) % 2000) as f64
        })
        .collect()
}

#[test]
fn test_final_offset_within_margin_is_full() {
    let viewport = 600.0;
    for seed in 0..50 {
        let mut header = controller(0.0);
        for (i, offset) in offsets(seed, 30).into_iter().enumerate() {
            header.on_scroll(offset, viewport);
            if i % 3 == 0 {
                header.on_header_hover_leave();
            }
            if i % 7 == 0 {
                header.on_minimized_logo_hover_enter();
            }
        }
        // last scroll lands inside the threshold
        header.on_scroll(400.0, viewport);
        assert_eq!(header.mode(), VisibilityMode::Full, "seed {}", seed);
    }
}

#[test]
fn test_monotonic_downward_never_scrolls_up() {
    let mut header = controller(0.0);
    for offset in (0..40).map(|i| i as f64 * 37.0) {
        header.on_scroll(offset, 700.0);
        assert_eq!(header.state().scroll_up_distance, 0.0);
        assert!(!header.state().is_scrolling_up);
    }
}

#[test]
fn test_minimizes_only_past_threshold() {
    let mut header = controller(0.0);
    let mut minimized = Vec::new();
    for offset in [0.0, 50.0, 100.0, 150.0] {
        header.on_scroll(offset, 300.0);
        minimized.push(header.state().is_minimized);
    }

    assert_eq!(minimized, vec![false, false, false, true]);
    assert_eq!(
        header.surface().rendered,
        vec![
            VisibilityMode::Full,
            VisibilityMode::Full,
            VisibilityMode::Full,
            VisibilityMode::Minimized
        ]
    );
}

#[test]
fn test_upward_scroll_restores_full() {
    let mut header = controller(0.0);
    header.on_scroll(1000.0, 300.0);
    assert_eq!(header.mode(), VisibilityMode::Minimized);

    header.on_scroll(960.0, 300.0);
    assert_eq!(header.mode(), VisibilityMode::Minimized);
    header.on_scroll(930.0, 300.0);
    assert_eq!(header.mode(), VisibilityMode::Minimized);
    header.on_scroll(900.0, 300.0);

    assert_eq!(header.state().scroll_up_distance, 100.0);
    assert!(header.state().is_scrolling_up);
    assert!(header.state().is_minimized);
    assert_eq!(header.mode(), VisibilityMode::Full);
}

#[test]
fn test_downward_scroll_after_upward_resets_override() {
    let mut header = controller(0.0);
    header.on_scroll(1000.0, 300.0);
    header.on_scroll(850.0, 300.0);
    assert_eq!(header.mode(), VisibilityMode::Full);

    header.on_scroll(860.0, 300.0);
    assert_eq!(header.state().scroll_up_distance, 0.0);
    assert_eq!(header.mode(), VisibilityMode::Minimized);
}

#[test]
fn test_hover_forces_full_and_leave_restores_minimized() {
    let mut header = controller(0.0);
    header.on_scroll(1000.0, 300.0);
    assert_eq!(header.mode(), VisibilityMode::Minimized);

    header.on_header_hover_enter();
    assert_eq!(header.mode(), VisibilityMode::Full);

    header.on_header_hover_leave();
    assert_eq!(header.mode(), VisibilityMode::Minimized);
}

#[test]
fn test_badge_hover_sticks_until_header_leave() {
    let mut header = controller(0.0);
    header.on_scroll(1000.0, 300.0);

    header.on_minimized_logo_hover_enter();
    assert_eq!(header.mode(), VisibilityMode::Full);

    header.on_minimized_logo_hover_leave();
    header.on_scroll(1100.0, 300.0);
    assert_eq!(header.mode(), VisibilityMode::Full);

    header.on_header_hover_enter();
    header.on_header_hover_leave();
    assert_eq!(header.mode(), VisibilityMode::Minimized);
}

#[test]
fn test_recompute_is_idempotent() {
    let mut header = controller(0.0);
    header.on_scroll(1000.0, 300.0);
    let state = *header.state();

    header.recompute_presentation();
    header.recompute_presentation();

    assert_eq!(*header.state(), state);
    let rendered = &header.surface().rendered;
    assert_eq!(rendered.len(), 3);
    assert!(rendered.iter().all(|m| *m == VisibilityMode::Minimized));
}

#[test]
fn test_pure_transitions_match_controller() {
    let config = HeaderConfig::default();
    let events = [
        HeaderEvent::Scroll {
            offset: 700.0,
            viewport_height: 500.0,
        },
        HeaderEvent::HeaderEnter,
        HeaderEvent::Scroll {
            offset: 650.0,
            viewport_height: 500.0,
        },
        HeaderEvent::HeaderLeave,
        HeaderEvent::BadgeEnter,
    ];

    let pure = events
        .iter()
        .fold(HeaderState::new(0.0), |s, e| s.apply(*e, &config));

    let mut header = controller(0.0);
    for event in events {
        header.handle(event);
    }

    assert_eq!(*header.state(), pure);
    assert_eq!(header.mode(), pure.mode());
}
