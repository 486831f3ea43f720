pub mod circles;
pub mod color_utils;
pub mod converter;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod preview;
pub mod renderer;
pub mod sampler;
pub mod spiral;
pub mod transform;

pub use circles::{project, CircleSet};
pub use color_utils::ColorScheme;
pub use converter::convert_svg_to_png;
pub use error::SpiralError;
pub use models::{CircleDescriptor, Layout, OutputFormat, SpacingMode, SpiralConfig, SpiralKind};
pub use preview::render_preview;
pub use renderer::{generate_elm, generate_json, generate_svg, render, ViewBox};
pub use transform::run;

/// Run the pipeline and project circles for both curves
pub fn build(config: &SpiralConfig) -> error::Result<(Layout, CircleSet)> {
    let layout = run(config)?;
    let circles = CircleSet::from_layout(&layout, config.rayon, config.circle_exponent)?;
    Ok((layout, circles))
}
