use std::path::Path as FsPath;

use resvg::tiny_skia::{
    self, FillRule, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8,
    Transform,
};

use crate::coords::Affine;
use crate::paint::Color;
use crate::path::{Path, PathVerb};
use crate::scene::{DrawCmd, DrawList, FillPathCmd, TextCmd};
use crate::text::FontSystem;

use super::RenderError;

/// Software rasterizer for a recorded draw stream.
pub struct Rasterizer<'a> {
    fonts: &'a FontSystem,
    background: Color,
}

impl<'a> Rasterizer<'a> {
    pub fn new(fonts: &'a FontSystem) -> Self {
        Self { fonts, background: Color::transparent() }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Rasterizes `list` onto a fresh `width`×`height` pixmap.
    pub fn render(&self, list: &DrawList, width: u32, height: u32) -> Result<Pixmap, RenderError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::EmptySurface { width, height })?;
        pixmap.fill(sk_color(self.background));

        for cmd in list.items() {
            match cmd {
                DrawCmd::FillPath(cmd) => fill_path(&mut pixmap, cmd),
                DrawCmd::Text(cmd) => self.draw_text(&mut pixmap, cmd),
            }
        }
        Ok(pixmap)
    }

    fn draw_text(&self, pixmap: &mut Pixmap, cmd: &TextCmd) {
        let Some(font) = self.fonts.get(cmd.font) else {
            log::warn!("Rasterizer: unknown FontId {:?}, skipping text", cmd.font);
            return;
        };

        let paint = PixmapPaint { quality: FilterQuality::Bilinear, ..PixmapPaint::default() };
        let mut pen = cmd.origin.x;
        let mut prev: Option<char> = None;

        for ch in cmd.text.chars() {
            if let Some(p) = prev {
                pen += font.horizontal_kern(p, ch, cmd.size).unwrap_or(0.0);
            }
            let (m, coverage) = font.rasterize(ch, cmd.size);
            prev = Some(ch);

            // Glyph bitmap top-left relative to the baseline, +Y down.
            let gx = pen + m.xmin as f32;
            let gy = cmd.origin.y - (m.height as i32 + m.ymin) as f32;
            pen += m.advance_width;

            let Some(glyph) = glyph_pixmap(m.width as u32, m.height as u32, &coverage, cmd.color)
            else {
                continue; // whitespace has no bitmap
            };
            let transform = sk_transform(cmd.transform.translate(gx, gy));
            pixmap.draw_pixmap(0, 0, glyph.as_ref(), &paint, transform, None);
        }
    }
}

fn fill_path(pixmap: &mut Pixmap, cmd: &FillPathCmd) {
    let Some(path) = sk_path(&cmd.path) else {
        log::debug!("Rasterizer: degenerate path skipped");
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(sk_color(cmd.color));
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

/// Builds a solid-color pixmap whose alpha is the glyph coverage.
fn glyph_pixmap(width: u32, height: u32, coverage: &[u8], color: Color) -> Option<Pixmap> {
    let mut glyph = Pixmap::new(width, height)?;
    for (dst, &cov) in glyph.pixels_mut().iter_mut().zip(coverage) {
        let k = cov as f32 / 255.0;
        let a = (color.a * k * 255.0).round() as u8;
        // Premultiplied channels must never exceed alpha after rounding.
        let ch = |v: f32| ((v * k * 255.0).round() as u8).min(a);
        if let Some(px) = PremultipliedColorU8::from_rgba(ch(color.r), ch(color.g), ch(color.b), a) {
            *dst = px;
        }
    }
    Some(glyph)
}

fn sk_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for verb in path.verbs() {
        match *verb {
            PathVerb::MoveTo(p) => pb.move_to(p.x, p.y),
            PathVerb::LineTo(p) => pb.line_to(p.x, p.y),
            PathVerb::Close => pb.close(),
        }
    }
    pb.finish()
}

fn sk_color(color: Color) -> tiny_skia::Color {
    let (r, g, b, a) = color.to_straight();
    tiny_skia::Color::from_rgba(r, g, b, a).unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn sk_transform(m: Affine) -> Transform {
    Transform::from_row(m.a, m.b, m.c, m.d, m.e, m.f)
}

/// Writes `pixmap` as a straight-alpha PNG.
pub fn save_png(pixmap: &Pixmap, path: impl AsRef<FsPath>) -> Result<(), RenderError> {
    let mut buf = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        buf.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let img = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), buf)
        .ok_or_else(|| RenderError::Encode("pixel buffer size mismatch".into()))?;
    img.save_with_format(path.as_ref(), image::ImageFormat::Png)
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    log::info!("wrote {}x{} png to {}", pixmap.width(), pixmap.height(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_triangle() -> Path {
        Path::builder()
            .move_to(0.0, 0.0)
            .line_to(20.0, 0.0)
            .line_to(0.0, 20.0)
            .close()
            .build()
    }

    #[test]
    fn zero_size_surface_is_an_error() {
        let fonts = FontSystem::new();
        let err = Rasterizer::new(&fonts).render(&DrawList::new(), 0, 10).unwrap_err();
        assert!(matches!(err, RenderError::EmptySurface { width: 0, height: 10 }));
    }

    #[test]
    fn triangle_fills_inside_only() {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        list.push_fill_path(corner_triangle(), Color::red());

        let pixmap = Rasterizer::new(&fonts).render(&list, 20, 20).unwrap();
        let inside = pixmap.pixel(2, 2).unwrap();
        assert_eq!((inside.red(), inside.alpha()), (255, 255));
        let outside = pixmap.pixel(18, 18).unwrap();
        assert_eq!(outside.alpha(), 0);
    }

    #[test]
    fn background_fills_surface() {
        let fonts = FontSystem::new();
        let pixmap = Rasterizer::new(&fonts)
            .background(Color::white())
            .render(&DrawList::new(), 4, 4)
            .unwrap();
        let px = pixmap.pixel(3, 3).unwrap();
        assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (255, 255, 255, 255));
    }

    #[test]
    fn text_with_unknown_font_is_skipped() {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        list.push_text(
            "NEW",
            crate::text::FontId(0),
            12.0,
            Color::white(),
            crate::coords::Vec2::new(0.0, 10.0),
            Affine::IDENTITY,
        );
        let pixmap = Rasterizer::new(&fonts).render(&list, 8, 8).unwrap();
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn glyph_pixmap_keeps_channels_below_alpha() {
        let glyph = glyph_pixmap(2, 1, &[255, 77], Color::from_argb_u32(0x80ff8000)).unwrap();
        for px in glyph.pixels() {
            assert!(px.red() <= px.alpha());
            assert!(px.green() <= px.alpha());
        }
        assert!(glyph_pixmap(0, 0, &[], Color::white()).is_none());
    }
}
