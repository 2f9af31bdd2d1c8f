use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::time::timeout;

use crate::server::{config::Config, error::transform::TransformError};

/// Runs the external transform script against the fixed input file.
///
/// The runner knows nothing about what the script does; it enforces the
/// contract "consume the input file, produce the output file within the
/// time bound, exit 0". The script is launched with no arguments and both
/// of its output streams are forwarded to the log.
pub struct TransformRunner<'a> {
    config: &'a Config,
}

impl<'a> TransformRunner<'a> {
    /// Creates a new instance of [`TransformRunner`]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<(), TransformError> {
        tracing::info!(
            "running transform script {}",
            self.config.transform_script.display()
        );

        let mut child = Command::new(&self.config.transform_interpreter)
            .arg(&self.config.transform_script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(TransformError::Spawn)?;

        // Drain both pipes into the log so the child never blocks on a full
        // pipe buffer.
        if let Some(stdout) = child.stdout.take() {
            forward_output(stdout);
        }
        if let Some(stderr) = child.stderr.take() {
            forward_output(stderr);
        }

        let status = match timeout(self.config.transform_timeout, child.wait()).await {
            Ok(status) => status.map_err(TransformError::Wait)?,
            Err(_) => {
                let _ = child.kill().await;
                return Err(TransformError::Timeout(self.config.transform_timeout));
            }
        };

        if !status.success() {
            return Err(TransformError::ExitStatus(status.code()));
        }

        let output_path = self.config.output_path();
        if !output_path.exists() {
            return Err(TransformError::MissingOutput(output_path));
        }

        Ok(())
    }
}

fn forward_output<R>(stream: R)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            tracing::info!(target: "transform", "{}", line);
        }
    });
}
