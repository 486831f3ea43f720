use crate::error::{Result, SpiralError};
use clap::ValueEnum;
use euclid::default::{Box2D, Point2D};
use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

/// How parameter samples are spread over the angle span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SpacingMode {
    #[default]
    #[serde(alias = "lin")]
    #[value(name = "lin", alias = "linear")]
    Linear,
    #[serde(alias = "log")]
    #[value(name = "log", alias = "logarithmic")]
    Logarithmic,
}

impl FromStr for SpacingMode {
    type Err = SpiralError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lin" | "linear" => Ok(SpacingMode::Linear),
            "log" | "logarithmic" => Ok(SpacingMode::Logarithmic),
            other => Err(SpiralError::config(format!("unknown spacing mode '{other}'"))),
        }
    }
}

/// Radius law of the spiral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SpiralKind {
    /// r = exponent^(t/k - 10)
    #[serde(alias = "log")]
    #[value(name = "log", alias = "exponential")]
    Exponential,
    /// r = t^k
    #[default]
    #[serde(alias = "quad")]
    #[value(name = "quad", alias = "power-law")]
    PowerLaw,
}

impl FromStr for SpiralKind {
    type Err = SpiralError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "log" | "exponential" => Ok(SpiralKind::Exponential),
            "quad" | "power_law" | "power-law" => Ok(SpiralKind::PowerLaw),
            other => Err(SpiralError::config(format!("unknown spiral category '{other}'"))),
        }
    }
}

/// Document flavour produced by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Elm,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Svg => write!(f, "svg"),
            OutputFormat::Elm => write!(f, "elm"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Everything the geometric pipeline needs for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    pub point_count: usize,
    pub scale_factor: f64,
    /// Base of the exponential spiral
    pub exponent: f64,
    /// Radians
    pub angle_span: f64,
    pub spacing: SpacingMode,
    pub kind: SpiralKind,
    /// Circle radius multiplier
    pub rayon: f64,
    pub circle_exponent: f64,
    /// When set, points are rotated by this many degrees and reflected through
    /// the origin before mirroring, so `Some(0.0)` is a pure point reflection.
    /// `None` (the default) leaves the spiral as generated.
    pub rotation_degrees: Option<f64>,
    /// Final canvas inflation factor
    pub margin: f64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        SpiralConfig {
            point_count: 10,
            scale_factor: 10.0,
            exponent: E,
            angle_span: 2.0 * PI,
            spacing: SpacingMode::Linear,
            kind: SpiralKind::PowerLaw,
            rayon: 1.0,
            circle_exponent: 1.0,
            rotation_degrees: None,
            margin: 1.005,
        }
    }
}

impl SpiralConfig {
    /// Reject configurations the pipeline cannot sample or evaluate
    pub fn validate(&self) -> Result<()> {
        if self.point_count < 2 {
            return Err(SpiralError::config(format!(
                "point count must be at least 2, got {}",
                self.point_count
            )));
        }
        if self.scale_factor == 0.0 {
            return Err(SpiralError::config("scale factor must be nonzero"));
        }

        let finite = [
            ("scale factor", self.scale_factor),
            ("exponent", self.exponent),
            ("angle span", self.angle_span),
            ("rayon", self.rayon),
            ("circle exponent", self.circle_exponent),
            ("margin", self.margin),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SpiralError::config(format!("{name} must be finite, got {value}")));
            }
        }
        if self.angle_span < 0.0 {
            return Err(SpiralError::config(format!(
                "angle span must be non-negative, got {}",
                self.angle_span
            )));
        }
        if let Some(deg) = self.rotation_degrees {
            if !deg.is_finite() {
                return Err(SpiralError::config(format!("rotation must be finite, got {deg}")));
            }
        }
        if self.margin <= 0.0 {
            return Err(SpiralError::config(format!("margin must be positive, got {}", self.margin)));
        }
        Ok(())
    }

    /// Circle radius drawn for parameter `t`
    pub fn radius_at(&self, t: f64) -> f64 {
        (t * self.rayon).powf(self.circle_exponent)
    }
}

/// A circle to draw: center plus radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleDescriptor {
    pub center: Point2D<f64>,
    pub radius: f64,
}

/// Pipeline output: both curves on a positive canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub t: Vec<f64>,
    pub primary: Vec<Point2D<f64>>,
    pub mirrored: Vec<Point2D<f64>>,
    /// Largest circle radius drawn
    pub max_radius: f64,
    /// Uniform scale applied by the canvas stage
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    /// Bounding box of both curves, without radii
    pub fn bounds(&self) -> Box2D<f64> {
        Box2D::from_points(self.primary.iter().chain(self.mirrored.iter()))
    }
}
