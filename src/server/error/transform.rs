use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures of the external transform script invocation.
///
/// The runner has no visibility into what the script does; these cover the
/// whole contract it enforces: spawn, finish within the bound, exit 0, and
/// leave the output file behind.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Failed to start transform script: {0}")]
    Spawn(std::io::Error),
    #[error("Failed waiting for transform script: {0}")]
    Wait(std::io::Error),
    #[error("Transform script timed out after {}s and was killed", .0.as_secs())]
    Timeout(Duration),
    #[error("Transform script failed with exit code: {}", exit_code_text(.0))]
    ExitStatus(Option<i32>),
    #[error("Transform script did not create output file {0}")]
    MissingOutput(PathBuf),
}

fn exit_code_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        // No code means the process died to a signal.
        None => "unknown (killed by signal)".to_string(),
    }
}
