use crate::color_utils::{parse_color, to_skia};
use crate::converter::save_png;
use crate::error::{Result, SpiralError};
use crate::models::Layout;
use euclid::default::Point2D;
use std::path::Path;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

const PREVIEW_SIZE: u32 = 800;
const PREVIEW_MARGIN: f32 = 24.0;
const DOT_RADIUS: f32 = 3.0;

// Matplotlib's first two cycle colors
const PRIMARY_COLOR: &str = "#1f77b4";
const MIRRORED_COLOR: &str = "#ff7f0e";

/// Map layout coordinates into the preview square, y pointing up
fn fit_transform(layout: &Layout) -> impl Fn(Point2D<f64>) -> (f32, f32) {
    let bounds = layout.bounds();
    let span = (bounds.max.x - bounds.min.x).max(bounds.max.y - bounds.min.y);
    let inner = PREVIEW_SIZE as f32 - 2.0 * PREVIEW_MARGIN;
    let k = if span > 0.0 { inner / span as f32 } else { 1.0 };
    let (min_x, min_y) = (bounds.min.x, bounds.min.y);

    move |p| {
        let x = PREVIEW_MARGIN + (p.x - min_x) as f32 * k;
        let y = PREVIEW_SIZE as f32 - PREVIEW_MARGIN - (p.y - min_y) as f32 * k;
        (x, y)
    }
}

fn draw_points(
    pixmap: &mut Pixmap,
    points: &[Point2D<f64>],
    color: &str,
    to_screen: &impl Fn(Point2D<f64>) -> (f32, f32),
) -> Result<()> {
    let mut paint = Paint::default();
    paint.set_color(to_skia(parse_color(color)?));
    paint.anti_alias = true;

    let mut pb = PathBuilder::new();
    for &p in points {
        let (x, y) = to_screen(p);
        pb.push_circle(x, y, DOT_RADIUS);
    }
    // An empty builder has nothing to draw
    if let Some(path) = pb.finish() {
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
    Ok(())
}

/// Scatter plot of both curves, written as a PNG
pub fn render_preview(layout: &Layout, output_path: &Path) -> Result<()> {
    let mut pixmap = Pixmap::new(PREVIEW_SIZE, PREVIEW_SIZE)
        .ok_or_else(|| SpiralError::Render("cannot allocate preview pixmap".to_string()))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let to_screen = fit_transform(layout);
    draw_points(&mut pixmap, &layout.primary, PRIMARY_COLOR, &to_screen)?;
    draw_points(&mut pixmap, &layout.mirrored, MIRRORED_COLOR, &to_screen)?;

    save_png(&pixmap, output_path)
}
