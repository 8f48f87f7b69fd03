//! Renders a `.cbml` badge document to a PNG.
//!
//! With no size flags the badge picks its own square (twice its side length).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cornerlabel_engine::logging::{init_logging, LoggingConfig};
use cornerlabel_engine::render::{save_png, Rasterizer};
use cornerlabel_ui::prelude::*;

const FALLBACK_FONTS: [&str; 5] = [
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Render a corner badge document to PNG.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
struct Args {
    /// The `.cbml` document to render.
    input: PathBuf,
    /// Square surface size in pixels. Overrides --width/--height.
    #[arg(short, long, value_parser = parse_length)]
    size: Option<f32>,
    /// Fixed surface width; the height follows the badge's sizing rules.
    #[arg(long, value_parser = parse_length)]
    width: Option<f32>,
    /// Fixed surface height; the width follows the badge's sizing rules.
    #[arg(long, value_parser = parse_length)]
    height: Option<f32>,
    /// TrueType/OpenType font for the label. Defaults to a system sans font.
    #[arg(short, long)]
    font: Option<PathBuf>,
    /// Output file.
    #[arg(short, long, default_value = "badge.png")]
    out: PathBuf,
    /// Pixels per dp (and per sp).
    #[arg(short, long, default_value_t = 1.0, value_parser = parse_length)]
    density: f32,
    /// Surface background, `#rrggbb` or `#aarrggbb`. Transparent by default.
    #[arg(long, value_parser = parse_color)]
    background: Option<Color>,
    /// Color resource, `name=#rrggbb`. Repeatable.
    #[arg(long = "color", value_name = "NAME=#HEX", value_parser = parse_color_resource)]
    colors: Vec<(String, Color)>,
    /// String resource, `name=value`. Repeatable.
    #[arg(long = "string", value_name = "NAME=VALUE", value_parser = split_pair)]
    strings: Vec<(String, String)>,
    /// More log output (-v debug, -vv trace). `RUST_LOG` still wins.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// `--size` wins; a lone `--width`/`--height` fixes that axis only.
    fn constraints(&self) -> Constraints {
        if let Some(s) = self.size {
            return Constraints::tight(Vec2::splat(s));
        }
        let axis = |fixed: Option<f32>| fixed.map_or((0.0, f32::INFINITY), |v| (v, v));
        let (min_x, max_x) = axis(self.width);
        let (min_y, max_y) = axis(self.height);
        Constraints::between(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    fn resources(&self) -> ResourceTable {
        let mut table = ResourceTable::new();
        for (name, color) in &self.colors {
            table.add_color(name.clone(), *color);
        }
        for (name, value) in &self.strings {
            table.add_string(name.clone(), value.clone());
        }
        table
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::default().verbosity(args.verbose));

    let src = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let resources = args.resources();

    let mut fonts = FontSystem::new();
    let font = match load_font_bytes(args.font.as_ref())? {
        Some(bytes) => fonts.load_font(&bytes).context("loading font")?,
        None => {
            log::warn!("no font found; the label will not be drawn");
            FontId::default()
        }
    };

    let ctx = BuildCtx::new(&resources)
        .metrics(DisplayMetrics::with_density(args.density))
        .font(font);
    let badge = BadgeLoader::load(&src, &ctx)
        .inspect_err(|e| {
            if let BuildError::Parse(parse) = e {
                log::error!("{}", parse.annotate(&src));
            }
        })
        .with_context(|| format!("building {}", args.input.display()))?;

    let mut scene = UiScene::new(badge);
    let size = scene.layout(args.constraints(), &fonts);
    log::info!("badge laid out at {}x{}", size.x, size.y);

    let list = scene.paint(&fonts);
    let (width, height) = (size.x.round() as u32, size.y.round() as u32);
    let pixmap = Rasterizer::new(&fonts)
        .background(args.background.unwrap_or_else(Color::transparent))
        .render(list, width, height)?;
    save_png(&pixmap, &args.out).with_context(|| format!("writing {}", args.out.display()))?;

    Ok(())
}

/// Explicit `--font` must load; otherwise the first system font found wins.
fn load_font_bytes(explicit: Option<&PathBuf>) -> Result<Option<Vec<u8>>> {
    if let Some(path) = explicit {
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        return Ok(Some(bytes));
    }
    Ok(FALLBACK_FONTS.iter().find_map(|p| std::fs::read(p).ok()))
}

// ── value parsers ─────────────────────────────────────────────────────────

fn parse_length(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|_| format!("invalid number {s:?}"))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("expected a non-negative number, got {s}"));
    }
    Ok(v)
}

fn parse_color(s: &str) -> Result<Color, String> {
    cornerlabel_markup::parse_color(s)
        .map(Color::from_argb_u32)
        .ok_or_else(|| format!("expected #rrggbb or #aarrggbb, got {s:?}"))
}

fn split_pair(s: &str) -> Result<(String, String), String> {
    let (name, value) = s.split_once('=').ok_or_else(|| format!("expected name=value, got {s:?}"))?;
    if name.is_empty() {
        return Err(format!("empty resource name in {s:?}"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn parse_color_resource(s: &str) -> Result<(String, Color), String> {
    let (name, hex) = split_pair(s)?;
    Ok((name, parse_color(&hex)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("cornerlabel-studio").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = parse(&["badge.cbml"]).unwrap();
        assert_eq!(args.input, PathBuf::from("badge.cbml"));
        assert_eq!(args.out, PathBuf::from("badge.png"));
        assert_eq!(args.density, 1.0);
        assert_eq!(args.background, None);
        assert_eq!(args.verbose, 0);
        assert_eq!(args.constraints(), Constraints::unbounded());
    }

    #[test]
    fn size_is_tight() {
        let args = parse(&["b.cbml", "--size", "96", "--width", "10"]).unwrap();
        assert_eq!(args.constraints(), Constraints::tight(Vec2::splat(96.0)));
    }

    #[test]
    fn lone_width_fixes_one_axis() {
        let c = parse(&["b.cbml", "--width", "120"]).unwrap().constraints();
        assert_eq!(c.width_spec(), MeasureSpec::exactly(120.0));
        assert!(c.height_spec().is_shrink_to_fit());
    }

    #[test]
    fn repeated_resources_are_collected() {
        let args = parse(&[
            "b.cbml",
            "--color",
            "brand=#ff8800",
            "--color",
            "shade=#80000000",
            "--string",
            "label=HOT",
        ])
        .unwrap();
        assert_eq!(
            args.colors,
            vec![
                ("brand".to_string(), Color::from_argb_u32(0xffff8800)),
                ("shade".to_string(), Color::from_argb_u32(0x80000000)),
            ]
        );
        let table = args.resources();
        let id = table.lookup(ResourceKind::String, "label").unwrap();
        assert_eq!(table.string(id).unwrap(), "HOT");
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["b.cbml", "-vv"]).unwrap().verbose, 2);
    }

    #[test]
    fn rejects_bad_input() {
        use clap::error::ErrorKind;
        assert_eq!(parse(&[]).unwrap_err().kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(parse(&["b.cbml", "--bogus"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert_eq!(parse(&["b.cbml", "--size=-3"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(
            parse(&["b.cbml", "--color", "x=#12345"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert!(parse(&["b.cbml", "--string", "=x"]).is_err());
    }

    #[test]
    fn background_uses_markup_color_rules() {
        let args = parse(&["b.cbml", "--background", "#102030"]).unwrap();
        assert_eq!(args.background, Some(Color::from_argb_u32(0xff102030)));
        assert!(parse_color("102030").is_err());
    }
}
