//! Redraw reentrancy gate.
//!
//! Several callbacks (animation frames, resize, pointer moves, the poll
//! timer) can all request a redraw on the same thread; overlapping
//! requests are dropped, never queued. The informal "is drawing" boolean
//! is modeled as an explicit two-state machine so the no-op-on-reentry
//! behavior is a contract rather than an accident.

use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawPhase {
    Idle,
    Drawing,
}

/// Gate enforcing at most one active draw pass per component instance.
#[derive(Debug)]
pub struct RedrawGate {
    phase: Cell<DrawPhase>,
}

impl RedrawGate {
    pub fn new() -> Self {
        Self {
            phase: Cell::new(DrawPhase::Idle),
        }
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase.get()
    }

    /// Enter `Drawing`, or return `None` if a pass is already active.
    /// The returned pass restores `Idle` when dropped, which happens
    /// synchronously at the end of the draw routine.
    pub fn try_begin(&self) -> Option<DrawPass<'_>> {
        match self.phase.get() {
            DrawPhase::Drawing => None,
            DrawPhase::Idle => {
                self.phase.set(DrawPhase::Drawing);
                Some(DrawPass { gate: self })
            }
        }
    }
}

impl Default for RedrawGate {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII token for one draw pass.
#[derive(Debug)]
pub struct DrawPass<'a> {
    gate: &'a RedrawGate,
}

impl Drop for DrawPass<'_> {
    fn drop(&mut self) {
        self.gate.phase.set(DrawPhase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reentrant_begin_is_dropped() {
        let gate = RedrawGate::new();
        let pass = gate.try_begin().unwrap();
        assert_eq!(gate.phase(), DrawPhase::Drawing);
        // A nested request while drawing is a no-op, not a queue.
        assert!(gate.try_begin().is_none());
        drop(pass);
        assert_eq!(gate.phase(), DrawPhase::Idle);
        assert!(gate.try_begin().is_some());
    }

    #[test]
    fn pass_releases_on_early_exit() {
        let gate = RedrawGate::new();
        {
            let _pass = gate.try_begin().unwrap();
            // Simulates a draw pass that aborts (no context, zero size).
        }
        assert_eq!(gate.phase(), DrawPhase::Idle);
    }
}
