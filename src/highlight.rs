//! Flashlight falloff math.
//!
//! The highlight alpha is a continuous function of pointer distance: it
//! equals the configured maximum directly under the pointer and decays to
//! exactly the base alpha at the radius boundary, so a line crossing the
//! boundary never pops.

/// Quadratic ease-out: 0 at t = 0, 1 at t = 1, steepest near t = 0.
pub fn ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// Alpha for the highlight re-stroke of one line, or `None` when the line
/// is outside the flashlight radius and only the base pass applies.
pub fn highlight_alpha(distance: f64, radius: f64, base: f64, max: f64) -> Option<f64> {
    if radius <= 0.0 || distance >= radius {
        return None;
    }
    let t = (distance / radius).clamp(0.0, 1.0);
    Some(max - (max - base) * ease_out(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: f64 = 0.14;
    const MAX: f64 = 0.85;
    const RADIUS: f64 = 240.0;

    #[test]
    fn full_intensity_under_the_pointer() {
        let a = highlight_alpha(0.0, RADIUS, BASE, MAX).unwrap();
        assert!((a - MAX).abs() < 1e-12);
    }

    #[test]
    fn continuous_at_the_radius_boundary() {
        // Exactly at the radius the second stroke is skipped; just inside
        // it must meet the base alpha with no jump.
        assert!(highlight_alpha(RADIUS, RADIUS, BASE, MAX).is_none());
        let just_inside = highlight_alpha(RADIUS - 1e-9, RADIUS, BASE, MAX).unwrap();
        assert!((just_inside - BASE).abs() < 1e-6);
    }

    #[test]
    fn monotonically_decays_with_distance() {
        let mut prev = f64::INFINITY;
        for step in 0..240 {
            let a = highlight_alpha(f64::from(step), RADIUS, BASE, MAX).unwrap();
            assert!(a <= prev, "alpha rose at distance {step}");
            assert!(a >= BASE && a <= MAX);
            prev = a;
        }
    }

    #[test]
    fn outside_radius_skips_the_stroke() {
        assert!(highlight_alpha(RADIUS + 1.0, RADIUS, BASE, MAX).is_none());
        assert!(highlight_alpha(1.0, 0.0, BASE, MAX).is_none());
    }

    #[test]
    fn ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        // Steeper than linear near the pointer.
        assert!(ease_out(0.25) > 0.25);
    }
}
