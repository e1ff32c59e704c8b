//! Per-frame counters for the world tick.
//!
//! [`FrameMetrics`] records what one [`World::advance`](crate::World::advance)
//! did, so a host can drive effects (cascade arcs, move sounds) and tests
//! can check clock behaviour without diffing whole worlds.

/// Work done during a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameMetrics {
    /// Queued worm twists applied this frame (0 or 1).
    pub rotations_applied: u32,
    /// Whether the chaos clock fired.
    pub chaos_fired: bool,
    /// Flips performed by the chaos cascade.
    pub chaos_flips: u32,
    /// Cells the worm advanced (0 or 1).
    pub worm_moves: u32,
    /// The frame hit an internal fault and was discarded.
    pub rolled_back: bool,
}

impl FrameMetrics {
    /// Whether the frame changed anything.
    pub fn is_idle(&self) -> bool {
        self.rotations_applied == 0 && self.chaos_flips == 0 && self.worm_moves == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_idle() {
        let m = FrameMetrics::default();
        assert!(m.is_idle());
        assert!(!m.chaos_fired);
        assert!(!m.rolled_back);
    }

    #[test]
    fn chaos_fire_without_flips_is_idle() {
        let m = FrameMetrics {
            chaos_fired: true,
            ..FrameMetrics::default()
        };
        assert!(m.is_idle());
        let m = FrameMetrics {
            worm_moves: 1,
            ..FrameMetrics::default()
        };
        assert!(!m.is_idle());
    }
}
