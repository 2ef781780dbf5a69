use anyhow::{Context, Result, anyhow};
use log::debug;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command as TokioCommand;

/// Where streamed process output lands.
pub trait OutputSink: Send + Sync {
    fn line(&self, line: &str);
}

/// Console log panel: every stdout and stderr line is framed with `│`.
pub struct ConsolePanel;

impl OutputSink for ConsolePanel {
    fn line(&self, line: &str) {
        println!("│ {}", line);
    }
}

/// Spawn `program` with `args`, forwarding stdout and stderr line by line to `sink`.
///
/// Returns the exit status; a non-zero exit is not an error here.
pub async fn stream_process<S>(program: &str, args: &[String], sink: &S) -> Result<ExitStatus>
where
    S: OutputSink + ?Sized,
{
    debug!("spawning: {program} {args:?}");

    let mut child = TokioCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow!(
                    "Command not found: {}. Please ensure the command exists in your PATH.",
                    program
                )
            } else {
                anyhow!("Failed to execute command '{}': {}", program, e)
            }
        })?;

    let stdout = child
        .stdout
        .take()
        .context("Failed to capture stdout")?;
    let stderr = child
        .stderr
        .take()
        .context("Failed to capture stderr")?;

    let (out_result, err_result) = tokio::join!(forward(stdout, sink), forward(stderr, sink));
    out_result.context("Failed to read command output")?;
    err_result.context("Failed to read command errors")?;

    child
        .wait()
        .await
        .map_err(|e| anyhow!("Failed to wait for command completion: {}", e))
}

async fn forward<R, S>(reader: R, sink: &S) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    S: OutputSink + ?Sized,
{
    // Compiler diagnostics are not guaranteed to be UTF-8.
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }
        let text = String::from_utf8_lossy(&buf);
        sink.line(text.trim_end_matches(['\n', '\r']));
    }
}
