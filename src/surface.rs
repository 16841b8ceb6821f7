//! Backing-store size reconciliation.
//!
//! A canvas keeps its pixel buffer at on-screen size times device pixel
//! ratio so strokes stay crisp at any density. Reassigning width/height
//! clears the canvas, so the glue code only assigns on an actual
//! mismatch; the comparison itself is pure and lives here so the no-op
//! guarantee is testable off-browser.

/// Backing-store dimensions in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

impl BackingSize {
    /// Target size for a container measuring `css_w`×`css_h` CSS pixels
    /// at the given density. `None` means the container has no layout yet
    /// (zero on either axis) and the draw pass must be skipped entirely.
    pub fn target(css_w: f64, css_h: f64, dpr: f64) -> Option<Self> {
        if css_w <= 0.0 || css_h <= 0.0 || dpr <= 0.0 {
            return None;
        }
        Some(Self {
            width: (css_w * dpr).round() as u32,
            height: (css_h * dpr).round() as u32,
        })
    }

    /// Whether the canvas buffer must be reassigned to match `target`.
    pub fn needs_resize(self, target: Self) -> bool {
        self != target
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_by_density() {
        let size = BackingSize::target(1200.0, 120.0, 2.0).unwrap();
        assert_eq!(
            size,
            BackingSize {
                width: 2400,
                height: 240
            }
        );
    }

    #[test]
    fn reconciliation_is_idempotent() {
        let current = BackingSize::target(1200.0, 120.0, 1.0).unwrap();
        // Same inputs a second time: no reassignment.
        let again = BackingSize::target(1200.0, 120.0, 1.0).unwrap();
        assert!(!current.needs_resize(again));
        // Any changed input forces one.
        let resized = BackingSize::target(1201.0, 120.0, 1.0).unwrap();
        assert!(current.needs_resize(resized));
        let denser = BackingSize::target(1200.0, 120.0, 2.0).unwrap();
        assert!(current.needs_resize(denser));
    }

    #[test]
    fn zero_layout_means_not_ready() {
        assert_eq!(BackingSize::target(0.0, 120.0, 1.0), None);
        assert_eq!(BackingSize::target(1200.0, 0.0, 1.0), None);
        assert_eq!(BackingSize::target(1200.0, 120.0, 0.0), None);
    }
}
