use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use blueprint_ascii_render::{AsciiRenderOptions, render_ascii};
use blueprint_layout::{LayoutStyle, compose_canvas};
use blueprint_model::{
    Blueprint, DeviceProfile, ZoomFactor, parse_blueprint, support_blueprint,
};
use blueprint_skia_render::{ImageFormat, SkiaRenderOptions, render_to_bytes, render_to_file};
use blueprint_svg_render::{PlaceholderContent, SvgRenderOptions, render_svg};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render a screen-flow blueprint as text, SVG, or a raster image.
#[derive(Debug, Parser)]
#[command(name = "blueprint", version)]
struct Cli {
    /// TOML blueprint definition. `-` reads stdin; omitted renders the built-in
    /// support flow.
    definition: Option<PathBuf>,

    /// Device profile applied to every screen.
    #[arg(long, env = "BLUEPRINT_DEVICE", default_value_t = DeviceProfile::Mobile)]
    device: DeviceProfile,

    /// View scale, either `0.8` or `80%`. Clamped to 30%..150%.
    #[arg(long, env = "BLUEPRINT_ZOOM", default_value_t = ZoomFactor::default())]
    zoom: ZoomFactor,

    /// Output format. Inferred from `--out` when omitted, otherwise ascii.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Font file for raster output.
    #[arg(long)]
    font: Option<PathBuf>,

    /// JPEG quality, 0-100.
    #[arg(long, default_value_t = 85)]
    quality: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Svg,
    Png,
    Jpeg,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(OutputFormat::Ascii),
            "svg" => Some(OutputFormat::Svg),
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }

    fn image_format(self) -> Option<ImageFormat> {
        match self {
            OutputFormat::Png => Some(ImageFormat::Png),
            OutputFormat::Jpeg => Some(ImageFormat::Jpeg),
            OutputFormat::Ascii | OutputFormat::Svg => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let blueprint = load_blueprint(cli.definition.as_deref())?;
    let format = resolve_format(cli.format, cli.out.as_deref())?;

    let canvas = compose_canvas(&blueprint, cli.device, cli.zoom, &LayoutStyle::default());
    info!(
        blueprint = blueprint.name(),
        device = %cli.device,
        zoom = %cli.zoom,
        edges = canvas.edges.len(),
        "rendering"
    );

    let bytes = match format.image_format() {
        Some(image_format) => {
            let options = SkiaRenderOptions {
                font_path: cli.font.clone(),
                jpeg_quality: cli.quality,
                ..SkiaRenderOptions::default()
            };
            if let Some(path) = cli.out.as_deref() {
                render_to_file(&canvas, image_format, &options, path)
                    .with_context(|| format!("failed to render {}", path.display()))?;
                info!(path = %path.display(), "wrote output");
                return Ok(());
            }
            render_to_bytes(&canvas, image_format, &options)
                .context("failed to rasterize blueprint")?
        }
        None if format == OutputFormat::Svg => {
            render_svg(&canvas, &PlaceholderContent, &SvgRenderOptions::default()).into_bytes()
        }
        None => {
            let mut text = render_ascii(&canvas, &AsciiRenderOptions::default());
            text.push('\n');
            text.into_bytes()
        }
    };

    match cli.out {
        Some(path) => {
            fs::write(&path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None => {
            io::stdout()
                .write_all(&bytes)
                .context("failed to write stdout")?;
        }
    }
    Ok(())
}

fn load_blueprint(path: Option<&Path>) -> anyhow::Result<Blueprint> {
    let input = match path {
        None => return Ok(support_blueprint()),
        Some(path) if path == Path::new("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
    };
    parse_blueprint(&input).context("failed to load blueprint definition")
}

fn resolve_format(
    explicit: Option<OutputFormat>,
    out: Option<&Path>,
) -> anyhow::Result<OutputFormat> {
    if let Some(format) = explicit {
        return Ok(format);
    }
    match out {
        None => Ok(OutputFormat::Ascii),
        Some(path) => match OutputFormat::from_path(path) {
            Some(format) => Ok(format),
            None => bail!(
                "cannot infer output format from {}; pass --format",
                path.display()
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_device_and_zoom() {
        let cli =
            Cli::try_parse_from(["blueprint", "--device", "desktop", "--zoom", "120%"]).unwrap();
        assert_eq!(cli.device, DeviceProfile::Desktop);
        assert_eq!(cli.zoom.percent(), 120);
    }

    #[test]
    fn out_of_range_zoom_is_clamped() {
        let cli = Cli::try_parse_from(["blueprint", "--zoom", "3"]).unwrap();
        assert_eq!(cli.zoom, ZoomFactor::MAX);
    }

    #[test]
    fn infers_format_from_extension() {
        assert_eq!(
            resolve_format(None, Some(Path::new("flow.SVG"))).unwrap(),
            OutputFormat::Svg
        );
        assert_eq!(
            resolve_format(None, Some(Path::new("flow.jpg"))).unwrap(),
            OutputFormat::Jpeg
        );
        assert_eq!(resolve_format(None, None).unwrap(), OutputFormat::Ascii);
        assert!(resolve_format(None, Some(Path::new("flow.bin"))).is_err());
        assert_eq!(
            resolve_format(Some(OutputFormat::Png), Some(Path::new("flow.svg"))).unwrap(),
            OutputFormat::Png
        );
    }

    #[test]
    fn default_definition_is_support_flow() {
        let blueprint = load_blueprint(None).unwrap();
        assert_eq!(blueprint.nodes().len(), 5);
    }

    #[test]
    fn raster_output_is_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.png");
        let cli = Cli {
            definition: None,
            device: DeviceProfile::Mobile,
            zoom: ZoomFactor::MIN,
            format: None,
            out: Some(path.clone()),
            font: None,
            quality: 85,
        };
        run(cli).unwrap();
        assert!(fs::read(&path).unwrap().starts_with(b"\x89PNG"));
    }

    #[test]
    fn raster_formats_map_to_image_formats() {
        assert_eq!(OutputFormat::Png.image_format(), Some(ImageFormat::Png));
        assert_eq!(OutputFormat::Jpeg.image_format(), Some(ImageFormat::Jpeg));
        assert_eq!(OutputFormat::Svg.image_format(), None);
    }
}
