use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThumbnailError {
    #[error("Event contains no records")]
    InvalidEvent,

    #[error("Object key is not valid UTF-8 after decoding: {0}")]
    InvalidKey(String),

    #[error("Failed to read s3://{bucket}/{key}")]
    StorageRead {
        bucket: String,
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to launch {}", .tool.display())]
    ToolLaunch {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Frame extraction failed with exit code {}", .code.map_or("none".to_string(), |c| c.to_string()))]
    FrameExtraction { code: Option<i32> },

    #[error("Scratch file error at {}", .path.display())]
    ScratchIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write s3://{bucket}/{key}")]
    StorageWrite {
        bucket: String,
        key: String,
        #[source]
        source: anyhow::Error,
    },
}
