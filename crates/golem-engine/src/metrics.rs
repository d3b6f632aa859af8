//! Per-tick metrics.

/// Timing and population-change data for a single tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the tick, in microseconds.
    pub total_us: u64,
    /// Dead cells that came alive.
    pub births: usize,
    /// Live cells that died.
    pub deaths: usize,
}
