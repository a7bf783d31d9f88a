use std::fs;
use std::path::{Path, PathBuf};

use blueprint_layout::{Canvas as BlueprintCanvas, CubicPath, LayoutNode, RoutedEdge};
use blueprint_model::DeviceProfile;
use skia_safe::{
    Canvas, Color, EncodedImageFormat, Font, FontHinting, FontMgr, FontStyle, Paint, PaintStyle,
    PathBuilder, PathEffect, Point, RRect, Rect, font::Edging, surfaces,
};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct SkiaColor(pub u8, pub u8, pub u8, pub u8);

impl SkiaColor {
    fn to_color(self) -> Color {
        Color::from_argb(self.3, self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone)]
pub struct SkiaRenderOptions {
    pub background: SkiaColor,
    pub screen_fill: SkiaColor,
    pub edge_halo: SkiaColor,
    pub edge_color: SkiaColor,
    pub text_color: SkiaColor,
    /// Used for `ImageFormat::Jpeg`, capped at 100.
    pub jpeg_quality: u8,
    /// Longest side of the output image; larger scenes are rejected.
    pub max_dimension: u32,
    pub font_size: f32,
    pub font_path: Option<PathBuf>,
}

impl Default for SkiaRenderOptions {
    fn default() -> Self {
        Self {
            background: SkiaColor(250, 250, 250, 255),
            screen_fill: SkiaColor(255, 255, 255, 255),
            edge_halo: SkiaColor(228, 228, 231, 255),
            edge_color: SkiaColor(63, 63, 70, 153),
            text_color: SkiaColor(113, 113, 122, 255),
            jpeg_quality: 85,
            max_dimension: 8192,
            font_size: 14.0,
            font_path: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

#[derive(Debug, thiserror::Error)]
pub enum SkiaRenderError {
    #[error("{0} encoding is not supported by this build")]
    EncodeUnsupported(&'static str),
    #[error("encoding failed: {0}")]
    EncodeFailed(String),
    #[error("scene of {width}x{height} exceeds the {max} pixel limit")]
    TooLarge { width: u32, height: u32, max: u32 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    FontLoadFailed(String),
}

pub fn render_to_bytes(
    canvas: &BlueprintCanvas,
    format: ImageFormat,
    options: &SkiaRenderOptions,
) -> Result<Vec<u8>, SkiaRenderError> {
    let (view_w, view_h) = canvas.view_size();
    let width = (view_w.ceil() as u32).max(1);
    let height = (view_h.ceil() as u32).max(1);
    if width > options.max_dimension || height > options.max_dimension {
        return Err(SkiaRenderError::TooLarge {
            width,
            height,
            max: options.max_dimension,
        });
    }

    let mut surface = surfaces::raster_n32_premul((width as i32, height as i32))
        .ok_or_else(|| SkiaRenderError::EncodeFailed("failed to create surface".to_string()))?;

    let target = surface.canvas();
    target.clear(options.background.to_color());

    let transform = Transform {
        scale: canvas.scale(),
    };
    let font = load_font(options)?;

    draw_edges(target, canvas, &transform, &font, options);
    draw_nodes(target, canvas, &transform, &font, options);

    let image = surface.image_snapshot();
    let (encoded, label) = match format {
        ImageFormat::Png => (image.encode(None, EncodedImageFormat::PNG, 100), "PNG"),
        ImageFormat::Jpeg => {
            let quality = u32::from(options.jpeg_quality.min(100));
            (image.encode(None, EncodedImageFormat::JPEG, quality), "JPEG")
        }
    };

    let data = encoded.ok_or(SkiaRenderError::EncodeUnsupported(label))?;
    debug!(width, height, format = label, bytes = data.len(), "encoded canvas");
    Ok(data.as_bytes().to_vec())
}

/// Encodes the canvas and writes it to `path`, replacing any existing file.
pub fn render_to_file(
    canvas: &BlueprintCanvas,
    format: ImageFormat,
    options: &SkiaRenderOptions,
    path: &Path,
) -> Result<(), SkiaRenderError> {
    let bytes = render_to_bytes(canvas, format, options)?;
    fs::write(path, &bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote image");
    Ok(())
}

/// Zoom is the only view transform; layout coordinates start at the origin.
struct Transform {
    scale: f32,
}

impl Transform {
    fn point(&self, point: blueprint_layout::Point) -> Point {
        Point::new(point.x * self.scale, point.y * self.scale)
    }

    fn length(&self, value: f32) -> f32 {
        value * self.scale
    }

    /// On/off lengths of the dashed connection stroke.
    fn dash(&self) -> [f32; 2] {
        [self.length(6.0), self.length(4.0)]
    }
}

fn load_font(options: &SkiaRenderOptions) -> Result<Font, SkiaRenderError> {
    let font_mgr = FontMgr::new();
    let mut font = if let Some(path) = options.font_path.as_ref() {
        let data = fs::read(path).map_err(|err| {
            SkiaRenderError::FontLoadFailed(format!("failed to read font {path:?}: {err}"))
        })?;
        let typeface = font_mgr.new_from_data(&data, 0).ok_or_else(|| {
            SkiaRenderError::FontLoadFailed(format!("failed to load font {path:?}"))
        })?;
        Font::from_typeface(typeface, options.font_size)
    } else {
        let mut font = Font::default();
        font.set_size(options.font_size);
        let style = FontStyle::default();
        let candidates = ["Inter", "Helvetica", "Arial", "DejaVu Sans"];
        if let Some(typeface) = candidates
            .into_iter()
            .find_map(|family| font_mgr.match_family_style(family, style))
        {
            font.set_typeface(typeface);
        }
        font
    };

    font.set_edging(Edging::AntiAlias);
    font.set_hinting(FontHinting::Slight);
    font.set_subpixel(true);
    Ok(font)
}

fn text_paint(color: SkiaColor) -> Paint {
    let mut paint = Paint::default();
    paint.set_color(color.to_color());
    paint.set_anti_alias(true);
    paint
}

fn draw_text_centered(target: &Canvas, text: &str, center: Point, font: &Font, paint: &Paint) {
    let (text_width, bounds) = font.measure_str(text, Some(paint));
    let x = center.x - text_width / 2.0;
    let y = center.y + bounds.height() / 2.0;
    target.draw_str(text, (x, y), font, paint);
}

fn draw_nodes(
    target: &Canvas,
    canvas: &BlueprintCanvas,
    transform: &Transform,
    font: &Font,
    options: &SkiaRenderOptions,
) {
    let mut stroke = Paint::default();
    stroke.set_style(PaintStyle::Stroke);
    stroke.set_anti_alias(true);

    let mut fill = Paint::default();
    fill.set_style(PaintStyle::Fill);
    fill.set_anti_alias(true);
    fill.set_color(options.screen_fill.to_color());

    let mut title_font = font.clone();
    title_font.set_size(transform.length(options.font_size).max(1.0));
    let title_paint = text_paint(options.text_color);

    for node in &canvas.nodes {
        let (radius, border, border_color) = frame_style(canvas.profile);
        stroke.set_stroke_width(transform.length(border));
        stroke.set_color(border_color);

        let rect = node_rect(node, transform);
        let rrect = RRect::new_rect_xy(rect, transform.length(radius), transform.length(radius));
        target.draw_rrect(rrect, &fill);
        target.draw_rrect(rrect, &stroke);

        let title_origin = transform.point(blueprint_layout::Point::new(node.x, node.y - 16.0));
        target.draw_str(node.title.to_uppercase(), title_origin, &title_font, &title_paint);

        let center = transform.point(blueprint_layout::Point::new(
            node.x + node.width / 2.0,
            node.y + node.height / 2.0,
        ));
        draw_text_centered(target, &node.title, center, &title_font, &title_paint);
    }
}

fn frame_style(profile: DeviceProfile) -> (f32, f32, Color) {
    match profile {
        DeviceProfile::Mobile => (48.0, 6.0, Color::from_rgb(39, 39, 42)),
        DeviceProfile::Desktop => (8.0, 1.0, Color::from_rgb(228, 228, 231)),
    }
}

fn node_rect(node: &LayoutNode, transform: &Transform) -> Rect {
    let origin = transform.point(blueprint_layout::Point::new(node.x, node.y));
    Rect::from_xywh(
        origin.x,
        origin.y,
        transform.length(node.width),
        transform.length(node.height),
    )
}

fn draw_edges(
    target: &Canvas,
    canvas: &BlueprintCanvas,
    transform: &Transform,
    font: &Font,
    options: &SkiaRenderOptions,
) {
    let mut halo = Paint::default();
    halo.set_style(PaintStyle::Stroke);
    halo.set_anti_alias(true);
    halo.set_color(options.edge_halo.to_color());
    halo.set_stroke_width(transform.length(6.0));

    let line = edge_line_paint(transform, options);
    let mut label_font = font.clone();
    label_font.set_size(transform.length(10.0).max(1.0));

    for edge in &canvas.edges {
        draw_edge_path(target, &edge.path, transform, &halo);
        draw_edge_path(target, &edge.path, transform, &line);
        draw_arrowhead(target, &edge.path, transform, options);
        draw_edge_label(target, edge, transform, &label_font, options);
    }
}

fn edge_line_paint(transform: &Transform, options: &SkiaRenderOptions) -> Paint {
    let mut line = Paint::default();
    line.set_style(PaintStyle::Stroke);
    line.set_anti_alias(true);
    line.set_color(options.edge_color.to_color());
    line.set_stroke_width(transform.length(2.0));
    line.set_path_effect(PathEffect::dash(&transform.dash(), 0.0));
    line
}

fn draw_edge_path(target: &Canvas, path: &CubicPath, transform: &Transform, paint: &Paint) {
    let mut builder = PathBuilder::new();
    builder.move_to(transform.point(path.start));
    builder.cubic_to(
        transform.point(path.control1),
        transform.point(path.control2),
        transform.point(path.end),
    );
    let path = builder.detach();
    target.draw_path(&path, paint);
}

fn draw_arrowhead(
    target: &Canvas,
    path: &CubicPath,
    transform: &Transform,
    options: &SkiaRenderOptions,
) {
    let dir = path.end_direction();
    let len = (dir.x * dir.x + dir.y * dir.y).sqrt();
    if len < f32::EPSILON {
        return;
    }
    let ux = dir.x / len;
    let uy = dir.y / len;
    let arrow_len = transform.length(10.0);
    let arrow_w = transform.length(3.5);

    let tip = transform.point(path.end);
    let base = Point::new(tip.x - ux * arrow_len, tip.y - uy * arrow_len);
    let left = Point::new(base.x - uy * arrow_w, base.y + ux * arrow_w);
    let right = Point::new(base.x + uy * arrow_w, base.y - ux * arrow_w);

    let mut paint = Paint::default();
    paint.set_style(PaintStyle::Fill);
    paint.set_anti_alias(true);
    paint.set_color(options.edge_color.to_color().with_a(255));

    let mut builder = PathBuilder::new();
    builder.move_to(tip);
    builder.line_to(left);
    builder.line_to(right);
    builder.close();
    let path = builder.detach();
    target.draw_path(&path, &paint);
}

fn draw_edge_label(
    target: &Canvas,
    edge: &RoutedEdge,
    transform: &Transform,
    font: &Font,
    options: &SkiaRenderOptions,
) {
    let Some(label) = &edge.label else {
        return;
    };
    let origin = transform.point(blueprint_layout::Point::new(label.x, label.y));
    let rect = Rect::from_xywh(
        origin.x,
        origin.y,
        transform.length(label.width),
        transform.length(label.height),
    );
    let rrect = RRect::new_rect_xy(rect, transform.length(4.0), transform.length(4.0));

    let mut fill = Paint::default();
    fill.set_style(PaintStyle::Fill);
    fill.set_anti_alias(true);
    fill.set_color(Color::WHITE);
    target.draw_rrect(rrect, &fill);

    let mut border = Paint::default();
    border.set_style(PaintStyle::Stroke);
    border.set_anti_alias(true);
    border.set_color(options.edge_halo.to_color());
    target.draw_rrect(rrect, &border);

    let paint = text_paint(options.text_color);
    draw_text_centered(target, &label.text, transform.point(label.center()), font, &paint);
}
