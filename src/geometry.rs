//! Grid line generation.
//!
//! All geometry lives in two coordinate spaces. Lines are *expressed* in a
//! space translated to the surface center and rotated by the configured
//! angle, where each line is a vertical segment at a plain horizontal
//! offset; that keeps per-line work free of trigonometry. Pointer distance
//! is computed against each line's anchor projected back into unrotated
//! surface ("world") space.
//!
//! Everything here is a pure function of the current surface size; the
//! field is recomputed from scratch every frame and deliberately cheap.

use crate::config::RenderConfig;

/// A single grid line in the rotated, centered space: vertical segment at
/// `offset`, spanning `-half_len..=half_len`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub offset: f64,
}

/// Axis-aligned box that contains a `w`×`h` rectangle after rotating it
/// by `angle`.
pub fn rotated_extent(w: f64, h: f64, angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (
        (w * cos).abs() + (h * sin).abs(),
        (w * sin).abs() + (h * cos).abs(),
    )
}

/// The full family of lines covering one frame.
#[derive(Clone, Copy, Debug)]
pub struct LineField {
    half_count: i32,
    spacing: f64,
    half_len: f64,
    center: (f64, f64),
    sin: f64,
    cos: f64,
}

impl LineField {
    /// Compute the field for a backing surface of `surface_w`×`surface_h`
    /// device pixels. `min_cover_w` widens the covered area for the
    /// viewport variant (pass 0.0 for container-bounded coverage); it is
    /// in device pixels like the surface dimensions.
    pub fn compute(
        surface_w: f64,
        surface_h: f64,
        min_cover_w: f64,
        dpr: f64,
        config: &RenderConfig,
    ) -> Self {
        let (sin, cos) = config.angle.sin_cos();
        let (rot_w, rot_h) = rotated_extent(surface_w, surface_h, config.angle);
        let effective_w = rot_w.max(min_cover_w);
        let half_len = effective_w.hypot(rot_h) * config.length_margin;

        let spacing = config.spacing * dpr;
        let half_count = if spacing > 0.0 && effective_w > 0.0 {
            (effective_w / spacing).ceil() as i32 + config.count_margin
        } else {
            // Degenerate surface: an empty field, not an error.
            -1
        };

        Self {
            half_count,
            spacing,
            half_len,
            center: (surface_w / 2.0, surface_h / 2.0),
            sin,
            cos,
        }
    }

    /// Lines ordered left to right across the rotated space.
    pub fn lines(&self) -> impl Iterator<Item = GridLine> + '_ {
        let spacing = self.spacing;
        (-self.half_count..=self.half_count).map(move |i| GridLine {
            offset: f64::from(i) * spacing,
        })
    }

    pub fn line_count(&self) -> usize {
        if self.half_count < 0 {
            0
        } else {
            self.half_count as usize * 2 + 1
        }
    }

    /// Half-length of every line segment, from the rotated-space center.
    pub fn half_len(&self) -> f64 {
        self.half_len
    }

    /// Surface center, in device pixels. The draw pass translates here
    /// before rotating.
    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn angle_sin_cos(&self) -> (f64, f64) {
        (self.sin, self.cos)
    }

    /// A line's anchor point mapped back into unrotated surface space,
    /// used for pointer distance.
    pub fn world_anchor(&self, line: GridLine) -> (f64, f64) {
        (
            line.offset * self.cos + self.center.0,
            line.offset * self.sin + self.center.1,
        )
    }

    /// Euclidean distance from a pointer (device pixels, unrotated space)
    /// to a line's anchor.
    pub fn pointer_distance(&self, line: GridLine, pointer: (f64, f64)) -> f64 {
        let (ax, ay) = self.world_anchor(line);
        (pointer.0 - ax).hypot(pointer.1 - ay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;

    fn field(w: f64, h: f64) -> LineField {
        LineField::compute(w, h, 0.0, 1.0, &RenderConfig::hero())
    }

    #[test]
    fn rotated_extent_matches_corner_projection() {
        let angle = 18.0_f64.to_radians();
        let (rw, rh) = rotated_extent(1200.0, 120.0, angle);
        assert!(rw >= 1200.0 * angle.cos());
        assert!(rh >= 1200.0 * angle.sin());
        // Zero rotation is the identity.
        let (w, h) = rotated_extent(640.0, 480.0, 0.0);
        assert!((w - 640.0).abs() < 1e-9);
        assert!((h - 480.0).abs() < 1e-9);
    }

    #[test]
    fn coverage_invariant_holds_across_sizes() {
        let config = RenderConfig::hero();
        let (sin, cos) = config.angle.sin_cos();
        for &(w, h) in &[
            (0.0, 0.0),
            (1.0, 1.0),
            (1200.0, 120.0),
            (120.0, 1200.0),
            (2560.0, 1440.0),
            (333.0, 777.0),
        ] {
            let f = LineField::compute(w, h, 0.0, 1.0, &config);
            let needed = (w * cos + h * sin).hypot(w * sin + h * cos);
            assert!(
                f.half_len() >= needed,
                "half_len {} < rotated diagonal {} for {w}x{h}",
                f.half_len(),
                needed
            );
        }
    }

    #[test]
    fn line_count_covers_effective_width() {
        let f = field(1200.0, 120.0);
        let config = RenderConfig::hero();
        let (rot_w, _) = rotated_extent(1200.0, 120.0, config.angle);
        let span = (f.line_count() as f64 - 1.0) * config.spacing;
        assert!(span >= rot_w);
    }

    #[test]
    fn viewport_floor_widens_a_narrow_container() {
        let config = RenderConfig::hero();
        let narrow = LineField::compute(300.0, 120.0, 0.0, 1.0, &config);
        let floored = LineField::compute(300.0, 120.0, 1920.0, 1.0, &config);
        assert!(floored.line_count() > narrow.line_count());
        assert!(floored.half_len() > narrow.half_len());
    }

    #[test]
    fn degenerate_surface_yields_no_lines() {
        let f = field(0.0, 0.0);
        assert_eq!(f.line_count(), 0);
        assert_eq!(f.lines().count(), 0);
    }

    #[test]
    fn density_scales_spacing_not_count() {
        let config = RenderConfig::hero();
        let one = LineField::compute(1200.0, 120.0, 0.0, 1.0, &config);
        // Double density doubles both surface size and spacing, so the
        // on-screen line count is unchanged.
        let two = LineField::compute(2400.0, 240.0, 0.0, 2.0, &config);
        assert_eq!(one.line_count(), two.line_count());
    }

    #[test]
    fn world_anchor_inverts_the_rotation() {
        let f = field(1200.0, 120.0);
        let center_line = GridLine { offset: 0.0 };
        assert_eq!(f.world_anchor(center_line), (600.0, 60.0));

        let (sin, cos) = f.angle_sin_cos();
        let line = GridLine { offset: 100.0 };
        let (x, y) = f.world_anchor(line);
        assert!((x - (100.0 * cos + 600.0)).abs() < 1e-9);
        assert!((y - (100.0 * sin + 60.0)).abs() < 1e-9);
    }

    #[test]
    fn pointer_distance_is_zero_at_the_anchor() {
        let f = field(1200.0, 120.0);
        let line = GridLine { offset: 36.0 };
        let anchor = f.world_anchor(line);
        assert!(f.pointer_distance(line, anchor) < 1e-12);
    }
}
