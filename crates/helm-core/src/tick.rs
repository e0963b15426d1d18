use crate::rng::{derive_seed, SplitMix64};

/// Per-tick input handed down the chain/task tree.
///
/// The controller is driven externally at a fixed rate; one `TickContext`
/// describes one invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
    pub seed: u64,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32) -> Self {
        Self {
            tick,
            dt_seconds,
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deterministic RNG for this tick and caller-chosen stream.
    ///
    /// Randomness stays confined inside individual behavior tasks; the
    /// arbitration core never consumes it.
    pub fn rng(&self, stream: u64) -> SplitMix64 {
        SplitMix64::new(derive_seed(self.seed, self.tick, stream))
    }
}
