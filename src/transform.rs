use crate::error::{Result, SpiralError};
use crate::math_utils::{max_of, rotate_point};
use crate::models::{Layout, SpiralConfig};
use crate::sampler::padding;
use crate::spiral::generate;
use euclid::default::{Box2D, Point2D, Vector2D};

/// Offset added to the mirrored curve so it never lands exactly on the primary one
pub const MIRROR_OFFSET_X: f64 = 0.000125;
pub const MIRROR_OFFSET_Y: f64 = 0.0001;

/// Spirals narrower than this are magnified to it
pub const CANVAS_TARGET: f64 = 200.0;

/// Fraction of the largest radius kept between the outermost centers and the canvas edge
pub const BORDER_FACTOR: f64 = 0.995;

/// The primary curve and its point reflection, transformed together
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePair {
    pub primary: Vec<Point2D<f64>>,
    pub mirrored: Vec<Point2D<f64>>,
}

impl CurvePair {
    /// Combined bounding box of both curves
    pub fn bounds(&self) -> Box2D<f64> {
        Box2D::from_points(self.primary.iter().chain(self.mirrored.iter()))
    }

    pub fn translate(&self, by: Vector2D<f64>) -> CurvePair {
        CurvePair {
            primary: self.primary.iter().map(|&p| p + by).collect(),
            mirrored: self.mirrored.iter().map(|&p| p + by).collect(),
        }
    }

    pub fn scale(&self, factor: f64) -> CurvePair {
        CurvePair {
            primary: self.primary.iter().map(|&p| p * factor).collect(),
            mirrored: self.mirrored.iter().map(|&p| p * factor).collect(),
        }
    }

    fn check_finite(&self, stage: &'static str) -> Result<()> {
        for curve in [&self.primary, &self.mirrored] {
            if let Some(index) = curve.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
                return Err(SpiralError::Numeric { stage, index });
            }
        }
        Ok(())
    }
}

/// Rotate every point by `degrees` and reflect the result through the origin
pub fn rotate(points: &[Point2D<f64>], degrees: f64) -> Vec<Point2D<f64>> {
    let angle = degrees.to_radians();
    points
        .iter()
        .map(|p| {
            let (x, y) = rotate_point(p.x, p.y, angle);
            Point2D::new(-x, -y)
        })
        .collect()
}

/// Reflect `points` through their first sample, nudged by the mirror offset
pub fn mirror(points: &[Point2D<f64>]) -> Vec<Point2D<f64>> {
    let Some(&origin) = points.first() else {
        return Vec::new();
    };
    points
        .iter()
        .map(|p| {
            Point2D::new(
                p.x - 2.0 * (p.x - origin.x) + MIRROR_OFFSET_X,
                p.y - 2.0 * (p.y - origin.y) - MIRROR_OFFSET_Y,
            )
        })
        .collect()
}

/// Shift both curves so that no coordinate is negative
///
/// Each axis whose combined minimum is negative is moved by `-min + padding`;
/// axes already non-negative are left alone.
pub fn correct_positivity(curves: &CurvePair, padding: f64) -> CurvePair {
    let bounds = curves.bounds();
    let shift = |min: f64| if min < 0.0 { -min + padding } else { 0.0 };
    let by = Vector2D::new(shift(bounds.min.x), shift(bounds.min.y));
    tracing::debug!(dx = by.x, dy = by.y, padding, "positivity correction");
    curves.translate(by)
}

/// Magnify narrow spirals so their widest x reaches [`CANVAS_TARGET`]
///
/// Returns the scaled curves and the factor used. Wide spirals keep a factor
/// of exactly 1; so does a degenerate pair whose maximum x is not positive.
pub fn scale_to_canvas(curves: &CurvePair) -> (CurvePair, f64) {
    let max_x = curves.bounds().max.x;
    let factor = if max_x >= CANVAS_TARGET {
        1.0
    } else if max_x > 0.0 {
        CANVAS_TARGET / max_x
    } else {
        tracing::warn!(max_x, "spiral has no horizontal extent; skipping scale");
        1.0
    };
    tracing::debug!(max_x, factor, "uniform scale");
    (curves.scale(factor), factor)
}

/// Move both curves so the largest circle just fits against the top-left edge
pub fn fit_border(curves: &CurvePair, max_radius: f64) -> CurvePair {
    let bounds = curves.bounds();
    let inset = max_radius * BORDER_FACTOR;
    curves.translate(Vector2D::new(inset - bounds.min.x, inset - bounds.min.y))
}

/// Run the whole geometric pipeline for `config`
pub fn run(config: &SpiralConfig) -> Result<Layout> {
    let spiral = generate(config)?;
    let t = spiral.t;

    let primary = match config.rotation_degrees {
        Some(degrees) => rotate(&spiral.points, degrees),
        None => spiral.points,
    };
    let mirrored = mirror(&primary);
    let curves = CurvePair { primary, mirrored };

    let curves = correct_positivity(&curves, padding(&t));
    let (curves, scale) = scale_to_canvas(&curves);
    curves.check_finite("uniform scale")?;

    let max_t = max_of(&t);
    let max_radius = config.radius_at(max_t);
    if !max_radius.is_finite() {
        let index = t.iter().position(|&v| v == max_t).unwrap_or(0);
        return Err(SpiralError::Numeric { stage: "border fit", index });
    }
    let curves = fit_border(&curves, max_radius);
    curves.check_finite("border fit")?;

    let bounds = curves.bounds();
    let width = (bounds.max.x + max_radius) * config.margin;
    let height = (bounds.max.y + max_radius) * config.margin;
    tracing::debug!(width, height, max_radius, scale, "canvas extents");

    Ok(Layout {
        t,
        primary: curves.primary,
        mirrored: curves.mirrored,
        max_radius,
        scale,
        width,
        height,
    })
}
