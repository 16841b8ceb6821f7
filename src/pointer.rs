//! Last-known pointer position, container-relative.

use std::cell::Cell;

/// Tracks the pointer within a container. Coordinates are CSS pixels
/// relative to the container's top-left at the time of the event; no
/// history is kept and leave clears the position entirely.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Cell<Option<(f64, f64)>>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move event's container-local coordinates.
    pub fn set(&self, x: f64, y: f64) {
        self.position.set(Some((x, y)));
    }

    /// Pointer left the container.
    pub fn clear(&self) {
        self.position.set(None);
    }

    pub fn get(&self) -> Option<(f64, f64)> {
        self.position.get()
    }

    /// Position scaled into backing-store (device pixel) space, which is
    /// where the compositor measures distances.
    pub fn device_position(&self, dpr: f64) -> Option<(f64, f64)> {
        self.position.get().map(|(x, y)| (x * dpr, y * dpr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_move_wins() {
        let tracker = PointerTracker::new();
        assert_eq!(tracker.get(), None);
        tracker.set(10.0, 20.0);
        tracker.set(30.0, 40.0);
        assert_eq!(tracker.get(), Some((30.0, 40.0)));
    }

    #[test]
    fn leave_clears_even_after_moves() {
        let tracker = PointerTracker::new();
        tracker.set(600.0, 60.0);
        tracker.clear();
        assert_eq!(tracker.get(), None);
        assert_eq!(tracker.device_position(2.0), None);
    }

    #[test]
    fn device_position_scales_by_density() {
        let tracker = PointerTracker::new();
        tracker.set(600.0, 60.0);
        assert_eq!(tracker.device_position(2.0), Some((1200.0, 120.0)));
    }
}
