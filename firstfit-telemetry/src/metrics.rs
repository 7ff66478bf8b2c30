//! ## firstfit-telemetry::metrics
//! **Prometheus counters and gauges for the arena**

use firstfit_core::alloc::{AllocatedRegion, ArenaStats};
use firstfit_core::error::{AllocError, FreeError};
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub allocations: IntCounter,
    pub frees: IntCounter,
    pub failures: IntCounterVec,
    pub allocation_size: Histogram,
    pub free_bytes: IntGauge,
    pub allocated_bytes: IntGauge,
    pub free_regions: IntGauge,
}

impl MetricsRecorder {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let allocations = IntCounter::new("firstfit_allocations_total", "Successful allocations")?;
        let frees = IntCounter::new("firstfit_frees_total", "Successful frees")?;
        let failures = IntCounterVec::new(
            Opts::new("firstfit_failures_total", "Rejected arena operations"),
            &["kind"],
        )?;
        let allocation_size = Histogram::with_opts(
            HistogramOpts::new(
                "firstfit_allocation_size_bytes",
                "Aligned size of successful allocations",
            )
            .buckets(vec![4.0, 16.0, 64.0, 256.0, 1024.0, 4096.0]),
        )?;
        let free_bytes = IntGauge::new("firstfit_free_bytes", "Bytes currently free")?;
        let allocated_bytes = IntGauge::new("firstfit_allocated_bytes", "Bytes currently allocated")?;
        let free_regions = IntGauge::new("firstfit_free_regions", "Entries in the free list")?;

        registry.register(Box::new(allocations.clone()))?;
        registry.register(Box::new(frees.clone()))?;
        registry.register(Box::new(failures.clone()))?;
        registry.register(Box::new(allocation_size.clone()))?;
        registry.register(Box::new(free_bytes.clone()))?;
        registry.register(Box::new(allocated_bytes.clone()))?;
        registry.register(Box::new(free_regions.clone()))?;

        Ok(Self {
            registry,
            allocations,
            frees,
            failures,
            allocation_size,
            free_bytes,
            allocated_bytes,
            free_regions,
        })
    }

    pub fn record_allocation(&self, outcome: &Result<AllocatedRegion, AllocError>) {
        match outcome {
            Ok(region) => {
                self.allocations.inc();
                self.allocation_size.observe(region.size as f64);
            }
            Err(err) => {
                let kind = match err {
                    AllocError::DuplicateId(_) => "duplicate_id",
                    AllocError::OutOfMemory(_) => "out_of_memory",
                    AllocError::InvalidSize => "invalid_size",
                };
                self.failures.with_label_values(&[kind]).inc();
            }
        }
    }

    pub fn record_free(&self, outcome: &Result<(), FreeError>) {
        match outcome {
            Ok(()) => self.frees.inc(),
            Err(FreeError::NotFound(_)) => self.failures.with_label_values(&["not_found"]).inc(),
        }
    }

    /// Updates the usage gauges from a stats snapshot.
    pub fn observe(&self, stats: &ArenaStats) {
        self.free_bytes.set(clamp(stats.free_bytes));
        self.allocated_bytes.set(clamp(stats.allocated_bytes));
        self.free_regions.set(clamp(stats.free_regions));
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

fn clamp(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use firstfit_core::Arena;

    #[test]
    fn records_outcomes() {
        let metrics = MetricsRecorder::new().unwrap();
        let mut arena = Arena::new();
        arena.init(16);

        metrics.record_allocation(&arena.allocate("a", 10));
        metrics.record_allocation(&arena.allocate("a", 4));
        metrics.record_allocation(&arena.allocate("b", 64));
        metrics.record_free(&arena.free("a"));
        metrics.record_free(&arena.free("a"));
        metrics.observe(&arena.stats());

        assert_eq!(metrics.allocations.get(), 1);
        assert_eq!(metrics.frees.get(), 1);
        assert_eq!(metrics.failures.with_label_values(&["duplicate_id"]).get(), 1);
        assert_eq!(metrics.failures.with_label_values(&["out_of_memory"]).get(), 1);
        assert_eq!(metrics.failures.with_label_values(&["not_found"]).get(), 1);
        assert_eq!(metrics.free_bytes.get(), 16);
        assert_eq!(metrics.free_regions.get(), 1);
    }

    #[test]
    fn gathers_text_exposition() {
        let metrics = MetricsRecorder::new().unwrap();
        metrics.allocations.inc();
        let text = metrics.gather_metrics().unwrap();
        assert!(text.contains("firstfit_allocations_total 1"));
        assert!(text.contains("firstfit_free_bytes 0"));
    }
}
