/// Mathematical utilities for parameter sampling and point transforms

/// Evenly spaced values from `start` to `end` inclusive
///
/// # Arguments
/// * `start` - First value
/// * `end` - Last value
/// * `n` - Number of values, at least 2
pub fn linspace<T>(start: T, end: T, n: usize) -> Vec<T>
where
    T: num_traits::Float,
{
    let steps = T::from(n - 1).unwrap_or_else(T::one);
    (0..n)
        .map(|i| {
            let i = T::from(i).unwrap_or_else(T::zero);
            start + (end - start) * i / steps
        })
        .collect()
}

/// Rotate a point around the origin by a given angle (in radians)
pub fn rotate_point<T>(px: T, py: T, angle_rad: T) -> (T, T)
where
    T: num_traits::Float,
{
    let (sa, ca) = angle_rad.sin_cos();
    (px * ca - py * sa, px * sa + py * ca)
}

/// Largest value of a slice; any NaN makes the result NaN
pub fn max_of<T>(values: &[T]) -> T
where
    T: num_traits::Float,
{
    values
        .iter()
        .fold(T::neg_infinity(), |acc, &v| if v.is_nan() || acc.is_nan() { T::nan() } else { acc.max(v) })
}
