use crate::error::{Result, SpiralError};
use crate::models::{SpiralConfig, SpiralKind};
use crate::sampler::sample;
use euclid::default::Point2D;

/// Sampled parameter values and the matching spiral points
#[derive(Debug, Clone, PartialEq)]
pub struct Spiral {
    pub t: Vec<f64>,
    pub points: Vec<Point2D<f64>>,
}

impl SpiralKind {
    /// Distance from the origin at parameter `t`
    pub fn radius(self, t: f64, scale_factor: f64, exponent: f64) -> f64 {
        match self {
            SpiralKind::Exponential => exponent.powf(t / scale_factor - 10.0),
            SpiralKind::PowerLaw => t.powf(scale_factor),
        }
    }

    pub fn point(self, t: f64, scale_factor: f64, exponent: f64) -> Point2D<f64> {
        let r = self.radius(t, scale_factor, exponent);
        let (sin, cos) = t.sin_cos();
        Point2D::new(cos * r, sin * r)
    }
}

/// Sample `config` and evaluate its spiral at every parameter value
///
/// A power-law spiral with a negative scale factor is undefined at `t = 0`,
/// and negative log-spaced samples have no real fractional power; both
/// surface as [`SpiralError::Numeric`] rather than being clamped.
pub fn generate(config: &SpiralConfig) -> Result<Spiral> {
    config.validate()?;
    let t = sample(config.point_count, config.angle_span, config.spacing)?;

    let points = t
        .iter()
        .enumerate()
        .map(|(index, &ti)| {
            let p = config.kind.point(ti, config.scale_factor, config.exponent);
            if p.x.is_finite() && p.y.is_finite() {
                Ok(p)
            } else {
                Err(SpiralError::Numeric { stage: "spiral generation", index })
            }
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(kind = ?config.kind, points = points.len(), "generated spiral");
    Ok(Spiral { t, points })
}
