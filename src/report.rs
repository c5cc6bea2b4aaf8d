use std::fmt;

use serde::Serialize;

pub const MODE: &str = "avgt";
pub const UNITS: &str = "us/op";

/// Average time per operation for one benchmark at one fixture size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub benchmark: String,
    pub size: usize,
    /// Microseconds per operation, one entry per measurement iteration.
    pub scores: Vec<f64>,
    pub score: f64,
    /// Half the spread between the slowest and fastest iteration.
    pub error: f64
}

impl Measurement {
    pub fn new<S: Into<String>>(benchmark: S, size: usize, scores: Vec<f64>) -> Measurement {
        let (score, error) = summarize(&scores);
        Measurement {
            benchmark: benchmark.into(),
            size,
            scores,
            score,
            error
        }
    }

    pub fn count(&self) -> usize {
        self.scores.len()
    }
}

fn summarize(scores: &[f64]) -> (f64, f64) {
    if scores.is_empty() {
        return (0.0, 0.0);
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    (mean, (max - min) / 2.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub mode: &'static str,
    pub units: &'static str,
    pub measurements: Vec<Measurement>
}

impl Report {
    pub fn new() -> Report {
        Report {
            mode: MODE,
            units: UNITS,
            measurements: Vec::new()
        }
    }

    pub fn add(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    pub fn get(&self, benchmark: &str, size: usize) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.benchmark == benchmark && m.size == size)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Report {
    fn default() -> Report {
        Report::new()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.measurements.iter()
            .map(|m| m.benchmark.len())
            .chain(Some("Benchmark".len()))
            .max()
            .unwrap_or(0);

        writeln!(f, "{:<w$}  {:>8}  {:>4}  {:>3}  {:>12}   {:>10}  {}",
                 "Benchmark", "(size)", "Mode", "Cnt", "Score", "Error", "Units", w = width)?;
        for m in &self.measurements {
            writeln!(f, "{:<w$}  {:>8}  {:>4}  {:>3}  {:>12.3} ± {:>10.3}  {}",
                     m.benchmark, m.size, self.mode, m.count(), m.score, m.error, self.units, w = width)?;
        }
        Ok(())
    }
}
