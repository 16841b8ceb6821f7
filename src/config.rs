//! Render-time constants for the line-grid background.
//!
//! One `RenderConfig` covers both original component variants (full-page
//! hero and footer strip); they differ only in coverage source, redraw
//! policy and stroke weights, so each is a preset over the same struct.

/// How the effective horizontal coverage of the grid is determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoverageSource {
    /// Cover the component's own container and nothing more.
    Container,
    /// Cover at least the full viewport width, even if the container has
    /// laid out narrower (scroll bars, zoom).
    Viewport,
}

/// When the animation driver schedules redraws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedrawPolicy {
    /// Redraw on every animation frame.
    Continuous,
    /// Redraw on mount, resize and pointer change, plus a short periodic
    /// timer as a safety net for state changes with no event of their own
    /// (theme flips in particular).
    EventPoll { interval_ms: u32 },
}

/// Immutable per-instance configuration. All lengths are CSS pixels; the
/// renderer scales by device pixel ratio at draw time.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Perpendicular distance between adjacent grid lines.
    pub spacing: f64,
    /// Grid rotation in radians.
    pub angle: f64,
    /// Flashlight radius around the pointer.
    pub highlight_radius: f64,
    /// Half-length multiplier applied to the covering diagonal. Must be
    /// >= 1 so lines overshoot the rotated corners.
    pub length_margin: f64,
    /// Extra lines added on each side of the computed count.
    pub count_margin: i32,
    /// Stroke width of the always-visible base pass.
    pub base_width: f64,
    /// Added to `base_width` for the highlight pass.
    pub highlight_width_boost: f64,
    /// Alpha of the base pass, and the floor the highlight decays to.
    pub base_alpha: f64,
    /// Highlight alpha directly under the pointer.
    pub max_alpha: f64,
    pub coverage: CoverageSource,
    pub redraw: RedrawPolicy,
}

impl RenderConfig {
    /// Full-viewport variant: continuous redraw, viewport-wide coverage.
    pub fn hero() -> Self {
        Self {
            spacing: 12.0,
            angle: 18.0_f64.to_radians(),
            highlight_radius: 240.0,
            length_margin: 1.1,
            count_margin: 4,
            base_width: 1.0,
            highlight_width_boost: 0.6,
            base_alpha: 0.14,
            max_alpha: 0.85,
            coverage: CoverageSource::Viewport,
            redraw: RedrawPolicy::Continuous,
        }
    }

    /// Footer variant: container-bounded coverage, event-driven redraw
    /// with a short poll.
    pub fn footer() -> Self {
        Self {
            coverage: CoverageSource::Container,
            redraw: RedrawPolicy::EventPoll { interval_ms: 80 },
            base_alpha: 0.1,
            max_alpha: 0.7,
            ..Self::hero()
        }
    }

    pub fn with_coverage(mut self, coverage: CoverageSource) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_redraw(mut self, redraw: RedrawPolicy) -> Self {
        self.redraw = redraw;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_angle_degrees(mut self, degrees: f64) -> Self {
        self.angle = degrees.to_radians();
        self
    }

    pub fn with_highlight_radius(mut self, radius: f64) -> Self {
        self.highlight_radius = radius;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::hero()
    }
}
