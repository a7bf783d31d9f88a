use blueprint_ascii_render::{AsciiRenderOptions, render_ascii};
use blueprint_layout::{LayoutStyle, compose_canvas};
use blueprint_model::{
    Blueprint, DeviceProfile, ZoomFactor, parse_blueprint, support_blueprint,
};

#[test]
fn renders_support_flow() {
    let canvas = compose_canvas(
        &support_blueprint(),
        DeviceProfile::Mobile,
        ZoomFactor::default(),
        &LayoutStyle::default(),
    );
    let output = render_ascii(&canvas, &AsciiRenderOptions::default());
    for title in ["Login / Auth", "Customer Dashboard", "Knowledge Base", "ID: agent"] {
        assert!(output.contains(title), "missing {title}");
    }
    assert!(output.contains("[Auth]"));
    assert!(output.contains('>'));
    assert!(output.contains('+'));
}

#[test]
fn zoom_changes_output_size() {
    let blueprint = support_blueprint();
    let style = LayoutStyle::default();
    let options = AsciiRenderOptions::default();
    let small = render_ascii(
        &compose_canvas(&blueprint, DeviceProfile::Mobile, ZoomFactor::MIN, &style),
        &options,
    );
    let large = render_ascii(
        &compose_canvas(&blueprint, DeviceProfile::Mobile, ZoomFactor::default(), &style),
        &options,
    );
    assert!(small.lines().count() < large.lines().count());
}

#[test]
fn empty_canvas_renders_nothing() {
    let blueprint = Blueprint::new("empty", Vec::new(), Vec::new()).unwrap();
    let canvas = compose_canvas(
        &blueprint,
        DeviceProfile::Desktop,
        ZoomFactor::default(),
        &LayoutStyle::default(),
    );
    assert_eq!(render_ascii(&canvas, &AsciiRenderOptions::default()), "");
}

#[test]
fn far_away_screens_are_clipped_to_the_grid() {
    let blueprint = parse_blueprint(
        r#"
        [[screen]]
        id = "home"
        title = "Home"
        column = 0

        [[screen]]
        id = "far"
        column = 4000000000

        [[screen]]
        id = "above"
        column = 1
        offset_y = -1.0e30

        [[connection]]
        from = "home"
        to = "far"
        label = "Away"

        [[connection]]
        from = "far"
        to = "above"
        "#,
    )
    .unwrap();

    for profile in DeviceProfile::ALL {
        for zoom in [ZoomFactor::MIN, ZoomFactor::MAX] {
            let canvas = compose_canvas(&blueprint, profile, zoom, &LayoutStyle::default());
            let options = AsciiRenderOptions::default();
            let output = render_ascii(&canvas, &options);
            assert!(output.contains("Home"));
            assert!(output.lines().count() <= options.max_height);
            assert!(output.lines().all(|line| line.chars().count() <= options.max_width));
        }
    }
}
