use tracing::info;

/// Per-run search statistics. Elapsed time is measured around the solve
/// loop; peak memory is supplied by the caller wrapping the run, the loop
/// itself never samples it.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub costs: usize,
    pub time_us: usize,
    pub nodes_generated: usize,
    pub peak_memory_bytes: usize,
}

impl Stats {
    pub(crate) fn print(&self, algorithm: &str) {
        info!(
            "{algorithm}: cost {:?} time(microseconds) {:?} nodes generated {:?} peak memory(bytes) {:?}",
            self.costs, self.time_us, self.nodes_generated, self.peak_memory_bytes
        );
    }
}
