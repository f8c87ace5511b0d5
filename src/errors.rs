use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BmstatError {
    #[error("Failed to launch benchmark program {program}: {source}")]
    Execution {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed benchmark line {line_number} ({detail}): {line:?}")]
    Parse {
        line_number: usize,
        line: String,
        detail: String,
    },

    #[error("Run {run} reported {found} benchmark cases, expected {expected}")]
    ShapeMismatch {
        run: usize,
        expected: usize,
        found: usize,
    },

    #[error("Run {run} reported case '{found}' at position {index}, expected '{expected}'")]
    CaseMismatch {
        run: usize,
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Run count must be at least 1")]
    InvalidRunCount,

    #[error("No benchmark program given. Usage: bmstat <program> or set `program` in bmstat.toml")]
    MissingProgram,

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },

    #[error("No benchmark results (lines starting with \"BM\") in the output of {program}")]
    NoBenchmarksFound { program: PathBuf },
}
