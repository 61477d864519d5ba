//! Rising-edge detection on the clock line.

/// `true` iff the line went low → high between two consecutive samples.
pub const fn edge_detected(current: bool, previous: bool) -> bool {
    current && !previous
}

/// Clock history: the level seen at the end of the previous cycle.
///
/// [`sample`](Self::sample) must be called exactly once per polling cycle,
/// whichever circuit is active, so that switching into a clocked circuit
/// never sees a stale level.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { previous: false }
    }

    /// Record `current` and report whether it completed a rising edge.
    pub fn sample(&mut self, current: bool) -> bool {
        let edge = edge_detected(current, self.previous);
        self.previous = current;
        edge
    }

    /// Level recorded by the last [`sample`](Self::sample).
    pub fn previous(&self) -> bool {
        self.previous
    }
}
