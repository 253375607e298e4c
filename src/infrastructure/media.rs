use crate::config::ThumbnailConfig;
use crate::services::media::FfmpegTool;
use std::sync::Arc;
use tracing::{info, warn};

pub fn setup_media_tool(config: &ThumbnailConfig) -> Arc<FfmpegTool> {
    let tool = FfmpegTool::new(&config.ffmpeg_path);

    // Bare names are resolved through PATH at spawn time
    if tool.binary().components().count() > 1 && !tool.binary().exists() {
        warn!(
            "⚠️  ffmpeg not found at {}! Every thumbnail will fail to launch.",
            tool.binary().display()
        );
    } else {
        info!("🎞️  Using ffmpeg at {}", tool.binary().display());
    }

    Arc::new(tool)
}
