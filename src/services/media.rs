use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::ThumbnailError;

/// Exit status and diagnostic stream of one external tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub diagnostics: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Prints media metadata without producing output media.
#[async_trait]
pub trait MediaProber: Send + Sync {
    async fn probe(&self, input: &Path) -> Result<ToolOutput, ThumbnailError>;
}

/// Decodes one frame at `seek_seconds` and writes it as an image to `output`.
#[async_trait]
pub trait FrameExtractor: Send + Sync {
    async fn extract_frame(
        &self,
        input: &Path,
        seek_seconds: u64,
        output: &Path,
        qscale: u8,
    ) -> Result<ToolOutput, ThumbnailError>;
}

/// ffmpeg binary at a fixed path.
///
/// Both modes read stderr as the process runs, so a chatty ffmpeg never
/// stalls on a full pipe.
#[derive(Debug, Clone)]
pub struct FfmpegTool {
    binary: PathBuf,
}

impl FfmpegTool {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn probe_args(input: &Path) -> Vec<OsString> {
        vec!["-i".into(), input.as_os_str().to_owned()]
    }

    pub fn extract_args(input: &Path, seek_seconds: u64, output: &Path, qscale: u8) -> Vec<OsString> {
        vec![
            "-ss".into(),
            seek_seconds.to_string().into(),
            "-i".into(),
            input.as_os_str().to_owned(),
            "-frames:v".into(),
            "1".into(),
            "-qscale:v".into(),
            qscale.to_string().into(),
            "-y".into(),
            output.as_os_str().to_owned(),
        ]
    }

    /// Runs ffmpeg to completion. Each stderr line is handed to `on_line`
    /// and also collected into the returned diagnostics.
    async fn run<F>(&self, args: Vec<OsString>, mut on_line: F) -> Result<ToolOutput, ThumbnailError>
    where
        F: FnMut(&str) + Send,
    {
        let launch_error = |source| ThumbnailError::ToolLaunch {
            tool: self.binary.clone(),
            source,
        };

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(launch_error)?;

        let mut diagnostics = String::new();
        if let Some(stderr) = child.stderr.take() {
            let mut reader = BufReader::new(stderr);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf).await {
                    Ok(0) => break,
                    Ok(_) => {
                        let line = String::from_utf8_lossy(&buf);
                        on_line(line.trim_end());
                        diagnostics.push_str(&line);
                    }
                    Err(e) => {
                        debug!("Stopped reading ffmpeg stderr: {}", e);
                        break;
                    }
                }
            }
        }

        let status = child.wait().await.map_err(launch_error)?;

        Ok(ToolOutput {
            exit_code: status.code(),
            diagnostics,
        })
    }
}

#[async_trait]
impl MediaProber for FfmpegTool {
    async fn probe(&self, input: &Path) -> Result<ToolOutput, ThumbnailError> {
        self.run(Self::probe_args(input), |_| {}).await
    }
}

#[async_trait]
impl FrameExtractor for FfmpegTool {
    async fn extract_frame(
        &self,
        input: &Path,
        seek_seconds: u64,
        output: &Path,
        qscale: u8,
    ) -> Result<ToolOutput, ThumbnailError> {
        let args = Self::extract_args(input, seek_seconds, output, qscale);
        self.run(args, |line| info!("ffmpeg: {}", line)).await
    }
}
