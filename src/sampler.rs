use crate::error::{Result, SpiralError};
use crate::math_utils::linspace;
use crate::models::SpacingMode;
use std::f64::consts::E;

/// Sample the spiral parameter over `[0, angle_span]`
///
/// Linear spacing is uniform. Logarithmic spacing follows
/// `(span + e) / ln(n + e) * ln(i + e) - e`, which winds more tightly near
/// the origin; its first value is generally not 0.
pub fn sample(point_count: usize, angle_span: f64, spacing: SpacingMode) -> Result<Vec<f64>> {
    if point_count < 2 {
        return Err(SpiralError::config(format!(
            "point count must be at least 2, got {point_count}"
        )));
    }
    if angle_span.is_nan() || angle_span < 0.0 {
        return Err(SpiralError::config(format!(
            "angle span must be non-negative, got {angle_span}"
        )));
    }

    let t = match spacing {
        SpacingMode::Linear => linspace(0.0, angle_span, point_count),
        SpacingMode::Logarithmic => {
            let coeff = (angle_span + E) / (point_count as f64 + E).ln();
            (0..point_count)
                .map(|i| coeff * (i as f64 + E).ln() - E)
                .collect()
        }
    };

    tracing::debug!(?spacing, point_count, first = t[0], last = t[point_count - 1], "sampled parameter");
    Ok(t)
}

/// Padding reused as a spatial margin by the positivity stage: `|t[2] - t[1]|`
pub fn padding(t: &[f64]) -> f64 {
    match t {
        [_, a, b, ..] => (b - a).abs(),
        [a, b] => (b - a).abs(),
        _ => 0.0,
    }
}
