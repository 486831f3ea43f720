use anyhow::{Context, Result};
use clap::Parser;
use fractale::output::{documents, write_documents, FILE_STEM};
use fractale::{
    build, convert_svg_to_png, generate_svg, render_preview, ColorScheme, OutputFormat, SpacingMode,
    SpiralConfig, SpiralKind, ViewBox,
};
use std::f64::consts::{E, PI};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fractale")]
#[command(version, about = "Draw a spiral and its mirror image as circles, in SVG or Elm", long_about = None)]
struct Args {
    /// Number of points to generate
    #[arg(short = 't', long = "points", default_value_t = 10)]
    points: usize,

    /// Scaling factor
    #[arg(short = 'k', long = "scale", default_value_t = 10.0, allow_negative_numbers = true)]
    scale: f64,

    /// Base of the exponential spiral
    #[arg(short = 'e', long = "exponent", default_value_t = E)]
    exponent: f64,

    /// Angle span, as a multiple of PI
    #[arg(short = 'o', long, default_value_t = 2.0)]
    theta: f64,

    /// Parameter spacing
    #[arg(short = 's', long = "space", value_enum, default_value_t = SpacingMode::Linear)]
    space: SpacingMode,

    /// Spiral category
    #[arg(short = 'c', long = "category", value_enum, default_value_t = SpiralKind::PowerLaw)]
    category: SpiralKind,

    /// Circle radius factor
    #[arg(short = 'r', long, default_value_t = 1.0)]
    rayon: f64,

    /// Circle radius exponent
    #[arg(long = "exp", default_value_t = 1.0)]
    exp: f64,

    /// Rotate (and reflect through the origin) by this many degrees
    #[arg(long, allow_negative_numbers = true)]
    rotate: Option<f64>,

    /// Canvas inflation factor
    #[arg(long, default_value_t = 1.005)]
    margin: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Write output files instead of printing the document
    #[arg(short, long)]
    write: bool,

    /// Directory for written files
    #[arg(long, value_name = "DIR", default_value = ".")]
    outdir: PathBuf,

    /// Rasterize the SVG document to <outdir>/fractale.png
    #[arg(long)]
    png: bool,

    /// Write a scatter plot of both point sets to this PNG file
    #[arg(long, value_name = "FILE")]
    preview: Option<PathBuf>,

    /// Read the spiral configuration from a JSON file instead of the flags above
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Background color
    #[arg(long, default_value = fractale::color_utils::DEFAULT_BACKGROUND)]
    background: String,

    /// Circle fill color
    #[arg(long, default_value = fractale::color_utils::DEFAULT_FILL)]
    fill: String,
}

impl Args {
    fn spiral_config(&self) -> Result<SpiralConfig> {
        if let Some(path) = &self.config {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path:?}"))?;
            return serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse config file: {path:?}"));
        }

        Ok(SpiralConfig {
            point_count: self.points,
            scale_factor: self.scale,
            exponent: self.exponent,
            angle_span: self.theta * PI,
            spacing: self.space,
            kind: self.category,
            rayon: self.rayon,
            circle_exponent: self.exp,
            rotation_degrees: self.rotate,
            margin: self.margin,
        })
    }
}

fn main() -> Result<()> {
    // stdout carries the rendered document, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("fractale=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = args.spiral_config()?;
    let colors = ColorScheme::parse(&args.background, &args.fill)?;

    let (layout, circles) = build(&config).context("Failed to compute spiral")?;
    let viewbox = ViewBox::from(&layout);
    info!(
        circles = circles.len(),
        width = viewbox.width,
        height = viewbox.height,
        "computed {:?} spiral",
        config.kind
    );

    let docs = documents(args.format, &circles, viewbox, colors)?;

    if args.write {
        write_documents(&args.outdir, &docs)
            .with_context(|| format!("Failed to write output to {:?}", args.outdir))?;
    } else if let Some((_, content)) = docs.first() {
        print!("{content}");
    }

    if args.png {
        fs::create_dir_all(&args.outdir)
            .with_context(|| format!("Failed to create output directory: {:?}", args.outdir))?;
        let png_path = args.outdir.join(format!("{FILE_STEM}.png"));
        let svg = generate_svg(&circles, viewbox, colors);
        convert_svg_to_png(&svg, &png_path, 1.0)
            .with_context(|| format!("Failed to convert to PNG: {png_path:?}"))?;
        info!("wrote {}", png_path.display());
    }

    if let Some(path) = &args.preview {
        render_preview(&layout, path).with_context(|| format!("Failed to render preview: {path:?}"))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
