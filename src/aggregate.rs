use anyhow::Result;
use tracing::debug;

use crate::errors::BmstatError;
use crate::parse::parse_output;
use crate::types::{AveragingMode, BenchmarkResult};

/// Folds parsed runs into one record per case, matched by position.
///
/// Every run after the first must report the same cases in the same order as
/// the first run.
#[derive(Debug)]
pub struct Aggregator {
    mode: AveragingMode,
    runs: usize,
    accumulator: Vec<BenchmarkResult>,
}

impl Aggregator {
    pub fn new(mode: AveragingMode) -> Self {
        Self {
            mode,
            runs: 0,
            accumulator: Vec::new(),
        }
    }

    /// Number of runs pushed so far.
    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn push_run(&mut self, results: Vec<BenchmarkResult>) -> Result<()> {
        let run = self.runs + 1;

        if self.runs == 0 {
            self.accumulator = results;
            self.runs = run;
            return Ok(());
        }

        if results.len() != self.accumulator.len() {
            return Err(BmstatError::ShapeMismatch {
                run,
                expected: self.accumulator.len(),
                found: results.len(),
            }
            .into());
        }

        // Validate the whole run before touching the accumulator.
        for (index, (acc, new)) in self.accumulator.iter().zip(&results).enumerate() {
            if acc.case != new.case {
                return Err(BmstatError::CaseMismatch {
                    run,
                    index,
                    expected: acc.case.clone(),
                    found: new.case.clone(),
                }
                .into());
            }
        }

        for (acc, new) in self.accumulator.iter_mut().zip(&results) {
            *acc += new;
            if self.mode == AveragingMode::Progressive {
                acc.normalize();
            }
        }

        self.runs = run;
        Ok(())
    }

    /// Final per-case figures, in first-run discovery order.
    pub fn finish(mut self) -> Vec<BenchmarkResult> {
        if self.mode == AveragingMode::Mean {
            for acc in &mut self.accumulator {
                acc.normalize();
            }
        }
        self.accumulator
    }
}

/// Execute, parse and aggregate `runs` times.
///
/// `execute` receives the 0-based run index and returns that run's raw output.
pub fn collect_benchmark_statistics<F>(
    runs: usize,
    mode: AveragingMode,
    mut execute: F,
) -> Result<Vec<BenchmarkResult>>
where
    F: FnMut(usize) -> Result<String>,
{
    if runs == 0 {
        return Err(BmstatError::InvalidRunCount.into());
    }

    let mut aggregator = Aggregator::new(mode);
    for run in 0..runs {
        let output = execute(run)?;
        let results = parse_output(&output)?;
        debug!(run = run + 1, cases = results.len(), "run parsed");
        if run == 0 && results.is_empty() {
            // Later runs could only succeed if they were empty too.
            return Ok(Vec::new());
        }
        aggregator.push_run(results)?;
    }

    Ok(aggregator.finish())
}
