use blueprint_layout::{LayoutStyle, compose_canvas};
use blueprint_model::{Blueprint, DeviceProfile, ZoomFactor, support_blueprint};
use blueprint_skia_render::{
    ImageFormat, SkiaRenderError, SkiaRenderOptions, render_to_bytes, render_to_file,
};

#[test]
fn encodes_png() {
    let canvas = compose_canvas(
        &support_blueprint(),
        DeviceProfile::Mobile,
        ZoomFactor::MIN,
        &LayoutStyle::default(),
    );
    let bytes = render_to_bytes(&canvas, ImageFormat::Png, &SkiaRenderOptions::default())
        .expect("png render failed");
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn encodes_jpeg_or_reports_unsupported() {
    let canvas = compose_canvas(
        &support_blueprint(),
        DeviceProfile::Desktop,
        ZoomFactor::MIN,
        &LayoutStyle::default(),
    );
    let options = SkiaRenderOptions {
        jpeg_quality: 80,
        ..SkiaRenderOptions::default()
    };
    match render_to_bytes(&canvas, ImageFormat::Jpeg, &options) {
        Ok(bytes) => assert!(bytes.starts_with(&[0xFF, 0xD8])),
        Err(SkiaRenderError::EncodeUnsupported(_)) => {}
        Err(err) => panic!("unexpected error: {:?}", err),
    }
}

#[test]
fn rejects_oversized_scenes() {
    let canvas = compose_canvas(
        &support_blueprint(),
        DeviceProfile::Desktop,
        ZoomFactor::MAX,
        &LayoutStyle::default(),
    );
    let options = SkiaRenderOptions {
        max_dimension: 512,
        ..SkiaRenderOptions::default()
    };
    let err = render_to_bytes(&canvas, ImageFormat::Png, &options).unwrap_err();
    assert!(matches!(err, SkiaRenderError::TooLarge { max: 512, .. }));
}

#[test]
fn renders_empty_canvas() {
    let blueprint = Blueprint::new("empty", Vec::new(), Vec::new()).unwrap();
    let canvas = compose_canvas(
        &blueprint,
        DeviceProfile::Mobile,
        ZoomFactor::default(),
        &LayoutStyle::default(),
    );
    let bytes = render_to_bytes(&canvas, ImageFormat::Png, &SkiaRenderOptions::default())
        .expect("render failed");
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn jpeg_size_follows_quality_option() {
    let canvas = compose_canvas(
        &support_blueprint(),
        DeviceProfile::Mobile,
        ZoomFactor::default(),
        &LayoutStyle::default(),
    );
    let encode = |jpeg_quality| {
        let options = SkiaRenderOptions {
            jpeg_quality,
            ..SkiaRenderOptions::default()
        };
        render_to_bytes(&canvas, ImageFormat::Jpeg, &options)
    };
    match (encode(10), encode(100)) {
        (Ok(low), Ok(high)) => assert!(low.len() < high.len()),
        (Err(SkiaRenderError::EncodeUnsupported(_)), _) => {}
        (low, high) => panic!("unexpected results: {:?} / {:?}", low.err(), high.err()),
    }
}

#[test]
fn writes_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("support.png");
    let canvas = compose_canvas(
        &support_blueprint(),
        DeviceProfile::Mobile,
        ZoomFactor::MIN,
        &LayoutStyle::default(),
    );
    let options = SkiaRenderOptions::default();
    render_to_file(&canvas, ImageFormat::Png, &options, &path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, render_to_bytes(&canvas, ImageFormat::Png, &options).unwrap());
}

#[test]
fn reports_unwritable_destination() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.png");
    let canvas = compose_canvas(
        &support_blueprint(),
        DeviceProfile::Mobile,
        ZoomFactor::MIN,
        &LayoutStyle::default(),
    );
    let err = render_to_file(&canvas, ImageFormat::Png, &SkiaRenderOptions::default(), &path)
        .unwrap_err();
    assert!(matches!(err, SkiaRenderError::Io(_)));
}
