use std::ops::{Add, AddAssign};

use clap::ValueEnum;
use serde::Deserialize;

/// One benchmark case's timing sample as reported by a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub case: String,
    pub time: f64,
    pub cpu: f64,
    pub iteration: f64,
}

impl BenchmarkResult {
    pub fn new(case: impl Into<String>, time: f64, cpu: f64, iteration: f64) -> Self {
        Self {
            case: case.into(),
            time,
            cpu,
            iteration,
        }
    }

    /// Rescale `time` and `cpu` to a per-iteration basis.
    pub fn normalize(&mut self) {
        self.time /= self.iteration;
        self.cpu /= self.iteration;
        self.iteration = 1.0;
    }
}

/// Pairwise sum. Keeps the left-hand case name; identity is checked by the aggregator.
impl Add for BenchmarkResult {
    type Output = BenchmarkResult;

    fn add(mut self, other: BenchmarkResult) -> BenchmarkResult {
        self += &other;
        self
    }
}

impl AddAssign<&BenchmarkResult> for BenchmarkResult {
    fn add_assign(&mut self, other: &BenchmarkResult) {
        self.time += other.time;
        self.cpu += other.cpu;
        self.iteration += other.iteration;
    }
}

/// How repeated runs are folded into one figure per case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AveragingMode {
    /// Sum raw samples over every run, normalize once at the end.
    #[default]
    Mean,
    /// Normalize after every combination (recency-weighted).
    Progressive,
}
