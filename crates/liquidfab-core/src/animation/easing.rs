//! Easing for the cell timeline.

/// Quadratic ease-out clamped to `[0, 1]`: `-t(t - 2)`.
pub fn ease_in_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }
    if t < 0.0 {
        return 0.0;
    }
    -t * (t - 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert!(ease_in_ease_out(0.0).abs() < f64::EPSILON);
        assert!((ease_in_ease_out(1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamping() {
        for t in [1.0, 1.5, 10.0, f64::INFINITY] {
            assert!((ease_in_ease_out(t) - 1.0).abs() < f64::EPSILON);
        }
        for t in [-0.001, -1.0, -100.0] {
            assert!(ease_in_ease_out(t).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_monotonic() {
        let mut prev = ease_in_ease_out(0.0);
        for i in 1..=1000 {
            let v = ease_in_ease_out(i as f64 / 1000.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_ease_out_shape() {
        // Faster than linear at the start.
        assert!((ease_in_ease_out(0.5) - 0.75).abs() < 1e-12);
    }
}
