use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::Result;
use tracing::{debug, warn};

use crate::errors::BmstatError;

/// Run `program` to completion and return its stdout as text.
///
/// The exit status does not affect the result: a program that fails but still
/// prints benchmark lines is treated as a successful run. Only a failure to
/// launch is an error.
pub fn run_benchmark(program: &Path, args: &[String]) -> Result<String> {
    debug!(program = %program.display(), ?args, "spawning benchmark");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| BmstatError::Execution {
            program: program.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        warn!(
            program = %program.display(),
            status = %output.status,
            "benchmark exited unsuccessfully; using its output anyway"
        );
    }

    if !output.stderr.is_empty() {
        debug!(stderr = %String::from_utf8_lossy(&output.stderr), "benchmark stderr");
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn write_script(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn captures_stdout() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let script = write_script(tmp.path(), "bench.sh", "echo 'BM_A 1 ns 1 ns 1'\n");
        let out = run_benchmark(&script, &[]).unwrap();
        assert_eq!(out, "BM_A 1 ns 1 ns 1\n");
    }

    #[test]
    fn passes_arguments_through() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let script = write_script(tmp.path(), "bench.sh", "echo \"$1 $2\"\n");
        let args = vec!["--benchmark_filter=BM_A".to_string(), "x".to_string()];
        let out = run_benchmark(&script, &args).unwrap();
        assert_eq!(out.trim(), "--benchmark_filter=BM_A x");
    }

    #[test]
    fn nonzero_exit_still_returns_output() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let script = write_script(
            tmp.path(),
            "bench.sh",
            "echo 'BM_A 1 ns 1 ns 1'\necho 'oops' >&2\nexit 3\n",
        );
        let out = run_benchmark(&script, &[]).unwrap();
        assert_eq!(out, "BM_A 1 ns 1 ns 1\n");
    }

    #[test]
    fn missing_program_is_execution_error() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");
        let err = run_benchmark(&missing, &[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BmstatError>(),
            Some(BmstatError::Execution { .. })
        ));
    }

    #[test]
    fn non_executable_file_is_execution_error() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let path = tmp.path().join("plain.txt");
        fs::write(&path, "not a program").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        let err = run_benchmark(&path, &[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BmstatError>(),
            Some(BmstatError::Execution { .. })
        ));
    }
}
