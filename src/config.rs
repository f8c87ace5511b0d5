//! Optional `bmstat.toml` configuration.
//!
//! Values given on the command line always win over the file; defaults fill
//! whatever neither provides.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::errors::BmstatError;
use crate::types::AveragingMode;

pub const CONFIG_FILE_NAME: &str = "bmstat.toml";
pub const DEFAULT_RUNS: usize = 50;

/// Contents of a config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub program: Option<PathBuf>,
    pub runs: Option<usize>,
    pub mode: Option<AveragingMode>,
    pub args: Option<Vec<String>>,
}

/// Options taken from the command line, before merging.
#[derive(Debug, Default)]
pub struct Overrides {
    pub program: Option<PathBuf>,
    pub runs: Option<usize>,
    pub mode: Option<AveragingMode>,
    pub args: Vec<String>,
}

/// Fully resolved settings for one aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub program: PathBuf,
    pub runs: usize,
    pub mode: AveragingMode,
    pub args: Vec<String>,
}

pub fn load_config(path: &Path) -> Result<FileConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| BmstatError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&text).map_err(|e| {
        BmstatError::ConfigParse {
            path: path.to_path_buf(),
            detail: e.message().to_string(),
        }
        .into()
    })
}

/// Locate and load the config file.
///
/// An explicit path must exist. Otherwise `bmstat.toml` in `cwd` is tried, then
/// `bmstat/config.toml` under `config_dir`; finding neither yields an empty config.
pub fn discover_config(
    explicit: Option<&Path>,
    cwd: &Path,
    config_dir: Option<&Path>,
) -> Result<FileConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return load_config(&local);
    }

    if let Some(dir) = config_dir {
        let global = dir.join("bmstat").join("config.toml");
        if global.is_file() {
            return load_config(&global);
        }
    }

    Ok(FileConfig::default())
}

pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Settings> {
    let program = overrides
        .program
        .or(file.program)
        .ok_or(BmstatError::MissingProgram)?;

    let runs = overrides.runs.or(file.runs).unwrap_or(DEFAULT_RUNS);
    if runs == 0 {
        return Err(BmstatError::InvalidRunCount.into());
    }

    let args = if overrides.args.is_empty() {
        file.args.unwrap_or_default()
    } else {
        overrides.args
    };

    Ok(Settings {
        program,
        runs,
        mode: overrides.mode.or(file.mode).unwrap_or_default(),
        args,
    })
}
