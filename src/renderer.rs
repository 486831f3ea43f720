use crate::circles::CircleSet;
use crate::color_utils::{to_hex, ColorScheme};
use crate::error::{Result, SpiralError};
use crate::models::{CircleDescriptor, Layout, OutputFormat};
use serde::Serialize;

/// Canvas extents in user units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

impl From<&Layout> for ViewBox {
    fn from(layout: &Layout) -> Self {
        ViewBox {
            width: layout.width,
            height: layout.height,
        }
    }
}

fn render_circle_svg(c: &CircleDescriptor) -> String {
    format!(r#"<circle cx="{}" cy="{}" r="{}"/>"#, c.center.x, c.center.y, c.radius)
}

fn render_circle_elm(c: &CircleDescriptor) -> String {
    format!(r#"circle [cx "{}", cy "{}", r "{}"] []"#, c.center.x, c.center.y, c.radius)
}

/// Standalone SVG document: a background rect, then every circle
pub fn generate_svg(circles: &CircleSet, viewbox: ViewBox, colors: ColorScheme) -> String {
    let circles_svg = circles
        .iter()
        .map(render_circle_svg)
        .collect::<Vec<_>>()
        .join("\n  ");

    format!(
        "<?xml version=\"1.0\" standalone=\"no\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" fill=\"{fill}\">\n  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{bg}\"/>\n  {circles}\n</svg>\n",
        w = viewbox.width,
        h = viewbox.height,
        fill = to_hex(colors.fill),
        bg = to_hex(colors.background),
        circles = circles_svg
    )
}

/// Elm `Svg` expression listing every circle
pub fn generate_elm(circles: &CircleSet, viewbox: ViewBox) -> String {
    let circles_elm = circles
        .iter()
        .map(render_circle_elm)
        .collect::<Vec<_>>()
        .join("\n    ,");

    format!(
        "svg [viewBox \"0 0 {} {}\"\n    , height \"32\"\n    , width \"64\"\n    , fill \"white\"\n    ]\n    [\n    {}\n    ]\n",
        viewbox.width, viewbox.height, circles_elm
    )
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    viewbox: ViewBox,
    primary: &'a [CircleDescriptor],
    mirrored: &'a [CircleDescriptor],
}

/// Circles and canvas extents as pretty-printed JSON
pub fn generate_json(circles: &CircleSet, viewbox: ViewBox) -> Result<String> {
    let doc = JsonDocument {
        viewbox,
        primary: &circles.primary,
        mirrored: &circles.mirrored,
    };
    serde_json::to_string_pretty(&doc).map_err(|e| SpiralError::Render(e.to_string()))
}

/// Render in the requested format
pub fn render(
    format: OutputFormat,
    circles: &CircleSet,
    viewbox: ViewBox,
    colors: ColorScheme,
) -> Result<String> {
    match format {
        OutputFormat::Svg => Ok(generate_svg(circles, viewbox, colors)),
        OutputFormat::Elm => Ok(generate_elm(circles, viewbox)),
        OutputFormat::Json => generate_json(circles, viewbox),
    }
}
