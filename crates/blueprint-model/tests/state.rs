use blueprint_model::{Action, DeviceProfile, ViewMode, ViewState, ZoomFactor};
use proptest::prelude::*;

fn zoom_step() -> impl Strategy<Value = bool> {
    any::<bool>()
}

proptest! {
    #[test]
    fn zoom_stays_in_bounds(steps in proptest::collection::vec(zoom_step(), 0..64)) {
        let mut state = ViewState::default();
        for zoom_in in steps {
            let before = i32::from(state.zoom.percent());
            state.apply(if zoom_in { Action::ZoomIn } else { Action::ZoomOut });
            let after = i32::from(state.zoom.percent());

            prop_assert!((30..=150).contains(&after));
            let unclamped = if zoom_in { before + 10 } else { before - 10 };
            prop_assert_eq!(after, unclamped.clamp(30, 150));
        }
    }

    #[test]
    fn zoom_scale_matches_percent(percent in -500i32..500) {
        let zoom = ZoomFactor::from_percent(percent);
        prop_assert!(zoom.scale() >= 0.3 && zoom.scale() <= 1.5);
    }
}

#[test]
fn toolbar_and_documentation_reach_the_same_design_tool_state() {
    let start = ViewState::default().applied(Action::SetView(ViewMode::Documentation));

    let from_toolbar = start.applied(Action::SetView(ViewMode::DesignTool));
    let from_docs = start.applied(Action::OpenDesignTool);

    assert_eq!(from_toolbar, from_docs);
    assert_eq!(from_docs.view, ViewMode::DesignTool);
}

#[test]
fn switching_device_keeps_zoom_and_view() {
    let mut state = ViewState::default();
    state.apply(Action::ZoomIn);
    state.apply(Action::SetDevice(DeviceProfile::Desktop));
    assert_eq!(state.device, DeviceProfile::Desktop);
    assert_eq!(state.zoom.percent(), 75);
    assert_eq!(state.view, ViewMode::Blueprint);
}
