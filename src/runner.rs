use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::errors::RunError;
use crate::fixture::Fixture;
use crate::options::RunOptions;
use crate::report::{Measurement, Report};
use crate::suite::{self, Benchmark};

/// Runs every benchmark matching `options.include` at every configured size.
pub fn run(options: &RunOptions) -> Result<Report, RunError> {
    options.validate()?;
    let benches = suite::matching(&options.include)?;
    if benches.is_empty() {
        return Err(RunError::NoMatchingBenchmarks(options.include.clone()));
    }

    info!(benchmarks = benches.len(), sizes = ?options.sizes, "running");
    let mut report = Report::new();
    for bench in benches {
        for &size in &options.sizes {
            report.add(run_group(bench, size, options));
        }
    }
    Ok(report)
}

/// Warmup then measurement of one benchmark against a freshly generated fixture.
pub fn run_group(bench: &Benchmark, size: usize, options: &RunOptions) -> Measurement {
    let name = bench.full_name();
    let fixture = Fixture::generate(size);
    let time = options.iteration_time();

    for i in 0..options.warmup_iterations {
        let score = iteration(bench, &fixture, time);
        debug!(benchmark = %name, size, iteration = i + 1, score, "warmup");
    }

    let mut scores = Vec::with_capacity(options.measurement_iterations as usize);
    for i in 0..options.measurement_iterations {
        let score = iteration(bench, &fixture, time);
        debug!(benchmark = %name, size, iteration = i + 1, score, "measurement");
        scores.push(score);
    }

    let measurement = Measurement::new(name, size, scores);
    info!(benchmark = %measurement.benchmark, size, score = measurement.score, "us/op");
    measurement
}

// Invokes the operation back to back for at least `time`, returning
// microseconds per invocation.
fn iteration(bench: &Benchmark, fixture: &Fixture, time: Duration) -> f64 {
    let start = Instant::now();
    let mut ops: u64 = 0;
    loop {
        black_box(bench.run(black_box(fixture)));
        ops += 1;
        let elapsed = start.elapsed();
        if elapsed >= time {
            return elapsed.as_secs_f64() * 1_000_000.0 / ops as f64;
        }
    }
}
