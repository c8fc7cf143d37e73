use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;

use crate::command::{build_command, render_command};
use crate::errors::HeapbenchError;
use crate::types::{BenchConfig, BenchmarkResult};

/// Where a child's stdout or stderr goes.
#[derive(Debug, Clone, Default)]
pub enum Sink {
    /// Child writes straight to the caller's stream (visible on the console).
    #[default]
    Inherit,
    Null,
    /// Created (or truncated) at spawn time.
    File(PathBuf),
}

impl Sink {
    fn to_stdio(&self) -> Result<Stdio> {
        match self {
            Sink::Inherit => Ok(Stdio::inherit()),
            Sink::Null => Ok(Stdio::null()),
            Sink::File(path) => {
                let file = std::fs::File::create(path).map_err(|source| {
                    HeapbenchError::SinkOpenError {
                        path: path.clone(),
                        source,
                    }
                })?;
                Ok(Stdio::from(file))
            }
        }
    }
}

/// Spawn a token vector as a child process and block until it exits.
///
/// The first token is the program, the rest are its arguments; no shell is
/// involved. Returns the child's exit status whatever it is — a non-zero
/// exit is not an error at this layer.
pub fn run_command(tokens: &[String], stdout: &Sink, stderr: &Sink) -> Result<ExitStatus> {
    let (program, args) = tokens.split_first().ok_or(HeapbenchError::EmptyCommand)?;

    let status = std::process::Command::new(program)
        .args(args)
        .stdout(stdout.to_stdio()?)
        .stderr(stderr.to_stdio()?)
        .status()
        .map_err(|source| HeapbenchError::SpawnFailure {
            program: program.clone(),
            source,
        })?;

    Ok(status)
}

/// Time a spawn-and-wait. The clock starts immediately before the spawn and
/// stops when the child has exited, so only the child's execution window is
/// measured — token assembly happens before this call.
pub fn benchmark_command(
    tokens: &[String],
    stdout: &Sink,
    stderr: &Sink,
) -> Result<(Duration, ExitStatus)> {
    let begin = Instant::now();
    let status = run_command(tokens, stdout, stderr)?;
    Ok((begin.elapsed(), status))
}

/// Build the command for `config`, run it once, and report the wall-clock
/// duration. With `strict`, a non-zero child exit becomes an error; otherwise
/// the exit code is recorded in the result and the duration returned
/// regardless of outcome.
pub fn benchmark(
    config: &BenchConfig,
    stdout: &Sink,
    stderr: &Sink,
    strict: bool,
) -> Result<BenchmarkResult> {
    let tokens = build_command(config);
    let command = render_command(&tokens);

    let started_at = Utc::now();
    let (elapsed, status) = benchmark_command(&tokens, stdout, stderr)?;

    if strict && !status.success() {
        return Err(HeapbenchError::NonZeroExit {
            status: status.to_string(),
        }
        .into());
    }

    Ok(BenchmarkResult {
        command,
        started_at,
        duration_secs: elapsed.as_secs_f64(),
        exit_code: status.code(),
    })
}
