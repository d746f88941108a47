/// Position of `x` between `a` and `b`, clamped to `[0, 1]`.
#[inline]
pub fn inv_lerp_clamped(a: f64, b: f64, x: f64) -> f64 {
    if a == b {
        return if x >= b { 1.0 } else { 0.0 };
    }
    ((x - a) / (b - a)).clamp(0.0, 1.0)
}

/// Quadratic ease-out.
#[inline]
pub fn ease_quad_out(t: f64) -> f64 {
    t * (2.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_out_endpoints() {
        assert_eq!(ease_quad_out(0.0), 0.0);
        assert_eq!(ease_quad_out(1.0), 1.0);
        assert!(ease_quad_out(0.5) > 0.5);
    }

    #[test]
    fn inv_lerp_clamps() {
        assert_eq!(inv_lerp_clamped(100.0, 200.0, 150.0), 0.5);
        assert_eq!(inv_lerp_clamped(100.0, 200.0, 50.0), 0.0);
        assert_eq!(inv_lerp_clamped(100.0, 200.0, 500.0), 1.0);
        assert_eq!(inv_lerp_clamped(1.0, 1.0, 1.0), 1.0);
    }
}
