use crate::error::{Result, SpiralError};
use crate::models::{CircleDescriptor, Layout};
use euclid::default::Point2D;

/// One circle per sample: centered on the point, radius `(t * rayon)^circle_exponent`
pub fn project(
    t: &[f64],
    points: &[Point2D<f64>],
    rayon: f64,
    circle_exponent: f64,
) -> Vec<CircleDescriptor> {
    t.iter()
        .zip(points)
        .map(|(&ti, &center)| CircleDescriptor {
            center,
            radius: (ti * rayon).powf(circle_exponent),
        })
        .collect()
}

/// Circles of the primary curve followed by those of the mirrored curve
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSet {
    pub primary: Vec<CircleDescriptor>,
    pub mirrored: Vec<CircleDescriptor>,
}

impl CircleSet {
    /// Project both curves; a negative or non-finite radius is a numeric error
    pub fn from_layout(layout: &Layout, rayon: f64, circle_exponent: f64) -> Result<Self> {
        let primary = project(&layout.t, &layout.primary, rayon, circle_exponent);
        let mirrored = project(&layout.t, &layout.mirrored, rayon, circle_exponent);
        // Both curves share `t`, so the primary radii stand for the mirrored ones
        if let Some(index) = primary
            .iter()
            .position(|c| !c.radius.is_finite() || c.radius < 0.0)
        {
            return Err(SpiralError::Numeric { stage: "circle projection", index });
        }
        Ok(CircleSet { primary, mirrored })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CircleDescriptor> {
        self.primary.iter().chain(self.mirrored.iter())
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.mirrored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
