use std::path::Path;

use owo_colors::{OwoColorize, Stream, Style};

use crate::types::BenchmarkResult;

fn style_case() -> Style {
    Style::new().cyan().bold()
}

/// `<case>: \t<time> ns\t<cpu> ns`
///
/// Values use the shortest round-trip form, so integral values keep a `.0`.
pub fn format_result(result: &BenchmarkResult) -> String {
    let case = format!("{}:", result.case);
    let case_colored = case
        .if_supports_color(Stream::Stdout, |s| s.style(style_case()))
        .to_string();
    format!("{} \t{:?} ns\t{:?} ns", case_colored, result.time, result.cpu)
}

/// One line per result, each newline-terminated.
pub fn format_report(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&format_result(result));
        out.push('\n');
    }
    out
}

/// Progress line written to stderr before run `run` (0-based) of `total`.
pub fn format_progress(program: &Path, run: usize, total: usize) -> String {
    let line = format!("Running {} ({}/{})", program.display(), run + 1, total);
    line.if_supports_color(Stream::Stderr, |s| s.dimmed())
        .to_string()
}
