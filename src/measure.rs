//! Timing and memory measurement, injected into solvers rather than built into them.
//!
//! A [Measure] brackets exactly one critical section: [Measure::begin] takes the "before"
//! sample, [Measure::end] takes the "after" sample and returns the difference as [Metrics].
//! Solvers call the pair once per run around their search loop and path reconstruction, and
//! never when the run is rejected before any work starts.

use std::time::{Duration, Instant};

const BYTES_PER_MB: f64 = 1_048_576.0;

/// Elapsed wall-clock time and heap growth of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    pub elapsed: Duration,
    /// Live heap bytes after the run minus live heap bytes before it. Negative when the
    /// section released more memory than it kept.
    pub memory_delta: i64,
}

impl Metrics {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn memory_mb(&self) -> f64 {
        self.memory_delta as f64 / BYTES_PER_MB
    }
}

pub trait Measure {
    fn begin(&mut self);
    fn end(&mut self) -> Metrics;
}

/// Reports zero for every run, which keeps results reproducible.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMeasure;

impl Measure for NoMeasure {
    fn begin(&mut self) {}

    fn end(&mut self) -> Metrics {
        Metrics::default()
    }
}

/// Monotonic-clock timer with an optional heap sampler returning the number of live heap bytes.
#[derive(Clone, Debug, Default)]
pub struct Stopwatch {
    heap: Option<fn() -> usize>,
    started: Option<Instant>,
    heap_before: usize,
}

impl Stopwatch {
    pub fn new() -> Stopwatch {
        Stopwatch::default()
    }

    pub fn with_heap_sampler(sampler: fn() -> usize) -> Stopwatch {
        Stopwatch {
            heap: Some(sampler),
            ..Stopwatch::default()
        }
    }

    fn sample_heap(&self) -> usize {
        self.heap.map_or(0, |sampler| sampler())
    }
}

impl Measure for Stopwatch {
    fn begin(&mut self) {
        self.heap_before = self.sample_heap();
        self.started = Some(Instant::now());
    }

    fn end(&mut self) -> Metrics {
        let elapsed = self
            .started
            .take()
            .map_or(Duration::ZERO, |started| started.elapsed());
        let heap_after = self.sample_heap();
        Metrics {
            elapsed,
            memory_delta: heap_after as i64 - self.heap_before as i64,
        }
    }
}
