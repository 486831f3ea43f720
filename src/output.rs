use crate::circles::CircleSet;
use crate::color_utils::ColorScheme;
use crate::error::Result;
use crate::models::OutputFormat;
use crate::renderer::{generate_svg, render, ViewBox};
use std::path::{Path, PathBuf};

pub const FILE_STEM: &str = "fractale";

/// Documents to write for one run, as (file name, contents)
///
/// SVG output also produces an inverted-color twin.
pub fn documents(
    format: OutputFormat,
    circles: &CircleSet,
    viewbox: ViewBox,
    colors: ColorScheme,
) -> Result<Vec<(String, String)>> {
    let mut docs = vec![(
        format!("{FILE_STEM}.{format}"),
        render(format, circles, viewbox, colors)?,
    )];
    if format == OutputFormat::Svg {
        docs.push((
            format!("{FILE_STEM}_inv.svg"),
            generate_svg(circles, viewbox, colors.inverted()),
        ));
    }
    Ok(docs)
}

/// Write every document into `outdir`, returning the paths written
pub fn write_documents(outdir: &Path, docs: &[(String, String)]) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(outdir)?;
    docs.iter()
        .map(|(name, content)| -> std::io::Result<PathBuf> {
            let path = outdir.join(name);
            std::fs::write(&path, content)?;
            tracing::info!("wrote {}", path.display());
            Ok(path)
        })
        .collect()
}
