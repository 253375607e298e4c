use std::env;
use std::path::PathBuf;

/// Runtime configuration for the thumbnail extractor
#[derive(Debug, Clone)]
pub struct ThumbnailConfig {
    /// Path to the ffmpeg binary (default: "/opt/nodejs/ffmpeg")
    pub ffmpeg_path: PathBuf,

    /// AWS region for the S3 client (default: "eu-north-1")
    pub region: String,

    /// Custom S3 endpoint, e.g. a local MinIO (default: none)
    pub s3_endpoint: Option<String>,

    /// Directory for scratch files (default: system temp dir)
    pub scratch_dir: PathBuf,

    /// Only keys ending with this suffix are processed (default: ".mp4")
    pub video_extension: String,

    /// Extension of the uploaded thumbnail (default: ".jpg")
    pub image_extension: String,

    /// Key segment replaced in the source key (default: "videos/")
    pub video_prefix: String,

    /// Key segment written into the thumbnail key (default: "images/")
    pub image_prefix: String,

    /// Content type of the uploaded thumbnail (default: "image/jpeg")
    pub image_content_type: String,

    /// Fraction of the duration to seek to (default: 0.25)
    pub seek_fraction: f64,

    /// Seek offset used when the duration is unknown (default: 1)
    pub fallback_seek_seconds: u64,

    /// ffmpeg `-qscale:v` value, lower is better (default: 2)
    pub jpeg_qscale: u8,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("/opt/nodejs/ffmpeg"),
            region: "eu-north-1".to_string(),
            s3_endpoint: None,
            scratch_dir: env::temp_dir(),
            video_extension: ".mp4".to_string(),
            image_extension: ".jpg".to_string(),
            video_prefix: "videos/".to_string(),
            image_prefix: "images/".to_string(),
            image_content_type: "image/jpeg".to_string(),
            seek_fraction: 0.25,
            fallback_seek_seconds: 1,
            jpeg_qscale: 2,
        }
    }
}

impl ThumbnailConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            ffmpeg_path: env::var("FFMPEG_PATH")
                .map(PathBuf::from)
                .unwrap_or(default.ffmpeg_path),

            region: env::var("AWS_REGION").unwrap_or(default.region),

            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|v| !v.is_empty()),

            scratch_dir: env::var("SCRATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.scratch_dir),

            video_extension: env::var("VIDEO_EXTENSION").unwrap_or(default.video_extension),

            image_extension: env::var("IMAGE_EXTENSION").unwrap_or(default.image_extension),

            video_prefix: env::var("VIDEO_PREFIX").unwrap_or(default.video_prefix),

            image_prefix: env::var("IMAGE_PREFIX").unwrap_or(default.image_prefix),

            image_content_type: env::var("IMAGE_CONTENT_TYPE")
                .unwrap_or(default.image_content_type),

            seek_fraction: env::var("SEEK_FRACTION")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|f: &f64| (0.0..=1.0).contains(f))
                .unwrap_or(default.seek_fraction),

            fallback_seek_seconds: env::var("FALLBACK_SEEK_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.fallback_seek_seconds),

            jpeg_qscale: env::var("JPEG_QSCALE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.jpeg_qscale),
        }
    }

    /// Create config for local development against MinIO with ffmpeg on PATH
    pub fn development() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
            region: "us-east-1".to_string(),
            s3_endpoint: Some("http://127.0.0.1:9000".to_string()),
            ..Self::default()
        }
    }
}
