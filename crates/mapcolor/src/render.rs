//! Raster renderer for colored layouts.
//!
//! Each region is scaled by `RenderCfg::scale`, filled with its color, and
//! outlined in black. Coordinates are used as pixel coordinates directly, so
//! +y points down in the image. Parts outside the canvas are clipped.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::{Error, Result};
use crate::geom2::{pt, Point2};
use crate::layout::Layout;

const OUTLINE: Rgb<u8> = Rgb([0, 0, 0]);

/// Canvas configuration.
#[derive(Clone, Copy, Debug)]
pub struct RenderCfg {
    pub width: u32,
    pub height: u32,
    /// Integer zoom applied to every vertex.
    pub scale: u32,
    pub background: [u8; 3],
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            scale: 2,
            background: [0, 0, 0],
        }
    }
}

/// Draw every region. Fails before drawing anything if a region has no
/// color.
pub fn render_layout(layout: &Layout, cfg: RenderCfg) -> Result<RgbImage> {
    let mut fills = Vec::with_capacity(layout.len());
    for r in layout.regions() {
        let color = r.color().ok_or_else(|| Error::Uncolored {
            label: r.label().to_string(),
        })?;
        let s = cfg.scale as i64;
        let verts: Vec<Point2> = r
            .poly()
            .vertices
            .iter()
            .map(|v| pt(v.x.saturating_mul(s), v.y.saturating_mul(s)))
            .collect();
        fills.push((verts, Rgb(color.rgb())));
    }

    let mut img = RgbImage::from_pixel(cfg.width, cfg.height, Rgb(cfg.background));
    for (verts, color) in &fills {
        fill_polygon(&mut img, verts, *color);
        let n = verts.len();
        for k in 0..n {
            draw_line(&mut img, verts[k], verts[(k + 1) % n], OUTLINE);
        }
    }
    Ok(img)
}

/// Render and write a PNG.
pub fn save_png<P: AsRef<Path>>(layout: &Layout, cfg: RenderCfg, path: P) -> Result<()> {
    let img = render_layout(layout, cfg)?;
    img.save_with_format(path.as_ref(), ImageFormat::Png)?;
    tracing::info!(path = %path.as_ref().display(), w = cfg.width, h = cfg.height, "rendered");
    Ok(())
}

#[inline]
fn put(img: &mut RgbImage, x: i64, y: i64, c: Rgb<u8>) {
    if x >= 0 && y >= 0 && x < img.width() as i64 && y < img.height() as i64 {
        img.put_pixel(x as u32, y as u32, c);
    }
}

/// Even-odd scanline fill sampled at pixel centers.
fn fill_polygon(img: &mut RgbImage, verts: &[Point2], c: Rgb<u8>) {
    let n = verts.len();
    if n < 3 {
        return;
    }
    let y_lo = verts.iter().map(|v| v.y).min().unwrap_or(0).max(0);
    let y_hi = verts
        .iter()
        .map(|v| v.y)
        .max()
        .unwrap_or(0)
        .min(img.height() as i64);
    let mut xs: Vec<f64> = Vec::with_capacity(n);
    for py in y_lo..y_hi {
        let sy = py as f64 + 0.5;
        xs.clear();
        for k in 0..n {
            let a = verts[k];
            let b = verts[(k + 1) % n];
            let (ay, by) = (a.y as f64, b.y as f64);
            if (ay > sy) == (by > sy) {
                continue;
            }
            let t = (sy - ay) / (by - ay);
            xs.push(a.x as f64 + t * (b.x - a.x) as f64);
        }
        xs.sort_by(|p, q| p.total_cmp(q));
        for pair in xs.chunks_exact(2) {
            let x0 = (pair[0] - 0.5).ceil() as i64;
            let x1 = (pair[1] - 0.5).ceil() as i64;
            for px in x0.max(0)..x1.min(img.width() as i64) {
                put(img, px, py, c);
            }
        }
    }
}

/// Bresenham line, endpoints included. Only the part near the canvas is
/// walked.
fn draw_line(img: &mut RgbImage, a: Point2, b: Point2, c: Rgb<u8>) {
    let Some((a, b)) = clip_to_canvas(a, b, img.width(), img.height()) else {
        return;
    };
    let (mut x, mut y) = (a.x, a.y);
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put(img, x, y, c);
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Liang-Barsky clip of `a..b` to the canvas grown by one pixel on each
/// side, with cut endpoints rounded to the nearest pixel. `None` when the
/// segment misses it.
fn clip_to_canvas(a: Point2, b: Point2, width: u32, height: u32) -> Option<(Point2, Point2)> {
    let (x0, y0) = (a.x as f64, a.y as f64);
    let (dx, dy) = (b.x as f64 - x0, b.y as f64 - y0);
    let (x_max, y_max) = (width as f64, height as f64);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-dx, x0 + 1.0),
        (dx, x_max - x0),
        (-dy, y0 + 1.0),
        (dy, y_max - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    let at = |t: f64| pt((x0 + t * dx).round() as i64, (y0 + t * dy).round() as i64);
    let a = if t0 > 0.0 { at(t0) } else { a };
    let b = if t1 < 1.0 { at(t1) } else { b };
    Some((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Poly2;
    use crate::layout::Color;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn colored_square(color: Color) -> Layout {
        let mut layout = Layout::new();
        let id = layout.add_polygon(
            "sq",
            Poly2::new(vec![pt(0, 0), pt(10, 0), pt(10, 10), pt(0, 10)]),
        );
        layout.region_mut(id).unwrap().assign_color(color);
        layout
    }

    #[test]
    fn uncolored_region_is_rejected() {
        let mut layout = colored_square(Color::Red);
        layout.add_polygon("bare", Poly2::new(vec![pt(20, 0), pt(30, 0), pt(20, 10)]));
        match render_layout(&layout, RenderCfg::default()) {
            Err(Error::Uncolored { label }) => assert_eq!(label, "bare"),
            other => panic!("expected Uncolored, got {other:?}"),
        }
    }

    #[test]
    fn fills_interior_and_outlines_boundary() {
        let cfg = RenderCfg {
            background: [255, 255, 255],
            ..Default::default()
        };
        let img = render_layout(&colored_square(Color::Blue), cfg).unwrap();
        assert_eq!(img.dimensions(), (100, 100));
        // scaled to 0..20
        assert_eq!(*img.get_pixel(10, 10), Rgb(Color::Blue.rgb()));
        assert_eq!(*img.get_pixel(0, 5), OUTLINE);
        assert_eq!(*img.get_pixel(20, 20), OUTLINE);
        assert_eq!(*img.get_pixel(30, 30), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(21, 10), Rgb([255, 255, 255]));
    }

    #[test]
    fn shapes_past_the_canvas_are_clipped() {
        let mut layout = Layout::new();
        let id = layout.add_polygon(
            "big",
            Poly2::new(vec![pt(-50, -50), pt(500, -50), pt(500, 500), pt(-50, 500)]),
        );
        layout.region_mut(id).unwrap().assign_color(Color::Yellow);
        let img = render_layout(&layout, RenderCfg::default()).unwrap();
        assert!(img.pixels().all(|p| *p == Rgb(Color::Yellow.rgb())));
    }

    #[test]
    fn segments_are_clipped_before_stepping() {
        assert_eq!(
            clip_to_canvas(pt(-1_000_000_000, 5), pt(1_000_000_000, 5), 100, 100),
            Some((pt(-1, 5), pt(100, 5)))
        );
        assert_eq!(
            clip_to_canvas(pt(3, 4), pt(50, 60), 100, 100),
            Some((pt(3, 4), pt(50, 60)))
        );
        assert_eq!(clip_to_canvas(pt(500, 500), pt(600, 700), 100, 100), None);
        assert_eq!(
            clip_to_canvas(pt(i64::MIN, 0), pt(i64::MIN, i64::MAX), 100, 100),
            None
        );
    }

    #[test]
    fn huge_shapes_render_in_canvas_time() {
        let side = 400_000_000;
        let mut layout = Layout::new();
        let id = layout.add_polygon(
            "huge",
            Poly2::new(vec![pt(0, 0), pt(side, 0), pt(side, side), pt(0, side)]),
        );
        layout.region_mut(id).unwrap().assign_color(Color::Red);
        let start = Instant::now();
        let img = render_layout(&layout, RenderCfg::default()).unwrap();
        assert!(start.elapsed() < Duration::from_secs(2), "{:?}", start.elapsed());
        assert_eq!(*img.get_pixel(0, 50), OUTLINE);
        assert_eq!(*img.get_pixel(50, 0), OUTLINE);
        assert_eq!(*img.get_pixel(50, 50), Rgb(Color::Red.rgb()));
        assert_eq!(*img.get_pixel(99, 99), Rgb(Color::Red.rgb()));
    }

    #[test]
    fn writes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        save_png(&colored_square(Color::Green), RenderCfg::default(), &path).unwrap();
        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(*back.get_pixel(10, 10), Rgb(Color::Green.rgb()));
    }
}
