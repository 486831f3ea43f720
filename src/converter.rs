use crate::error::{Result, SpiralError};
use resvg::usvg::{self, Tree};
use std::path::Path;
use tiny_skia::Pixmap;

/// Rasterize a rendered SVG document to a PNG file
///
/// `scale` multiplies the document's own size; the output is never smaller
/// than 100x100 pixels.
pub fn convert_svg_to_png(svg_content: &str, output_path: &Path, scale: f32) -> Result<()> {
    // Circles only; no text, so the default (empty) font database is enough
    let options = usvg::Options::default();
    let tree = Tree::from_str(svg_content, &options)
        .map_err(|e| SpiralError::Render(format!("failed to parse SVG: {e}")))?;

    let size = tree.size();
    let width = ((size.width() * scale).ceil() as u32).max(100);
    let height = ((size.height() * scale).ceil() as u32).max(100);

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| SpiralError::Render(format!("cannot allocate {width}x{height} pixmap")))?;

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    save_png(&pixmap, output_path)
}

pub(crate) fn save_png(pixmap: &Pixmap, output_path: &Path) -> Result<()> {
    pixmap
        .save_png(output_path)
        .map_err(|e| SpiralError::Render(format!("failed to write {}: {e}", output_path.display())))
}
