use anyhow::Result;
use tracing::debug;

use crate::errors::BmstatError;
use crate::types::BenchmarkResult;

const CASE_PREFIX: &str = "BM";

const TIME_TOKEN: usize = 1;
const CPU_TOKEN: usize = 3;
const ITERATION_TOKEN: usize = 5;

/// Parse the console output of one benchmark run.
///
/// Only lines whose trimmed content starts with `BM` produce a record; headers,
/// separators and blank lines are skipped. Records keep the order of their lines.
pub fn parse_output(output: &str) -> Result<Vec<BenchmarkResult>> {
    let mut results = Vec::new();

    for (idx, line) in output.lines().enumerate() {
        if !line.trim().starts_with(CASE_PREFIX) {
            continue;
        }

        let result = parse_line(line, idx + 1)?;
        debug!(
            case = %result.case,
            time = result.time,
            cpu = result.cpu,
            iteration = result.iteration,
            "parsed benchmark line"
        );
        results.push(result);
    }

    Ok(results)
}

/// Parse a single `BM<name> <time> <unit> <cpu> <unit> <iterations>` line.
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_number: usize) -> Result<BenchmarkResult> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() <= ITERATION_TOKEN {
        return Err(BmstatError::Parse {
            line_number,
            line: line.to_string(),
            detail: format!("expected at least 6 fields, found {}", tokens.len()),
        }
        .into());
    }

    let malformed = |detail: String| -> anyhow::Error {
        BmstatError::Parse {
            line_number,
            line: line.to_string(),
            detail,
        }
        .into()
    };

    let number = |index: usize, field: &str| -> Result<f64> {
        match tokens[index].parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(malformed(format!("{} '{}' is not finite", field, tokens[index]))),
            Err(_) => Err(malformed(format!("{} '{}' is not a number", field, tokens[index]))),
        }
    };

    let time = number(TIME_TOKEN, "time")?;
    let cpu = number(CPU_TOKEN, "cpu time")?;
    let iteration = number(ITERATION_TOKEN, "iteration count")?;
    if iteration <= 0.0 {
        return Err(malformed(format!(
            "iteration count must be positive, found '{}'",
            tokens[ITERATION_TOKEN]
        )));
    }

    Ok(BenchmarkResult {
        case: tokens[0].to_string(),
        time,
        cpu,
        iteration,
    })
}
