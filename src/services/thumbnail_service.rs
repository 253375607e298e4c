use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ThumbnailConfig;
use crate::error::ThumbnailError;
use crate::models::{ObjectRef, ThumbnailOutcome, TriggerEvent};
use crate::services::media::{FrameExtractor, MediaProber};
use crate::services::probe::{SeekPolicy, parse_duration};
use crate::services::storage::ObjectStore;
use crate::utils::keys::{derive_image_key, is_video_key};
use crate::utils::scratch::ScratchFile;

pub struct ThumbnailService {
    storage: Arc<dyn ObjectStore>,
    prober: Arc<dyn MediaProber>,
    extractor: Arc<dyn FrameExtractor>,
    config: ThumbnailConfig,
}

impl ThumbnailService {
    pub fn new(
        storage: Arc<dyn ObjectStore>,
        prober: Arc<dyn MediaProber>,
        extractor: Arc<dyn FrameExtractor>,
        config: ThumbnailConfig,
    ) -> Self {
        Self {
            storage,
            prober,
            extractor,
            config,
        }
    }

    fn seek_policy(&self) -> SeekPolicy {
        SeekPolicy::new(self.config.seek_fraction, self.config.fallback_seek_seconds)
    }

    /// Handles one upload notification end to end.
    pub async fn handle_event(&self, event: &TriggerEvent) -> Result<ThumbnailOutcome, ThumbnailError> {
        let object = event.object_ref()?;

        if !is_video_key(&object.key, &self.config.video_extension) {
            info!(
                "Not a {} file, skipping: {}",
                self.config.video_extension, object.key
            );
            return Ok(ThumbnailOutcome::Skipped { key: object.key });
        }

        info!("Processing file: s3://{}/{}", object.bucket, object.key);
        self.generate_thumbnail(&object).await
    }

    /// Downloads the video, grabs one frame and uploads it next to the
    /// `images/` tree. Scratch files are removed on every exit path.
    pub async fn generate_thumbnail(&self, object: &ObjectRef) -> Result<ThumbnailOutcome, ThumbnailError> {
        let input = ScratchFile::new(
            &self.config.scratch_dir,
            "input",
            &self.config.video_extension,
        );

        let size = self
            .storage
            .download_to_file(&object.bucket, &object.key, input.path())
            .await
            .map_err(|source| ThumbnailError::StorageRead {
                bucket: object.bucket.clone(),
                key: object.key.clone(),
                source,
            })?;
        info!("Video downloaded to {} ({} bytes)", input.path().display(), size);

        let probe = self.prober.probe(input.path()).await?;
        let duration = parse_duration(&probe.diagnostics);
        let seek_seconds = self.seek_policy().seek_seconds(duration);
        match duration {
            Some(d) => info!("Video duration: {}s, seek time: {}s", d, seek_seconds),
            None => info!("Video duration unknown, seek time: {}s", seek_seconds),
        }

        let output = ScratchFile::new(
            &self.config.scratch_dir,
            "screenshot",
            &self.config.image_extension,
        );
        let extraction = self
            .extractor
            .extract_frame(
                input.path(),
                seek_seconds,
                output.path(),
                self.config.jpeg_qscale,
            )
            .await?;
        if !extraction.success() {
            return Err(ThumbnailError::FrameExtraction {
                code: extraction.exit_code,
            });
        }
        info!("Screenshot created: {}", output.path().display());

        let image = tokio::fs::read(output.path())
            .await
            .map_err(|source| ThumbnailError::ScratchIo {
                path: output.to_path_buf(),
                source,
            })?;

        let image_key = derive_image_key(
            &object.key,
            &self.config.video_prefix,
            &self.config.image_prefix,
            &self.config.video_extension,
            &self.config.image_extension,
        );
        self.storage
            .upload_file(
                &object.bucket,
                &image_key,
                image,
                &self.config.image_content_type,
            )
            .await
            .map_err(|source| ThumbnailError::StorageWrite {
                bucket: object.bucket.clone(),
                key: image_key.clone(),
                source,
            })?;
        info!("Thumbnail uploaded to: s3://{}/{}", object.bucket, image_key);

        for scratch in [input, output] {
            let path = scratch.to_path_buf();
            if let Err(e) = scratch.remove() {
                warn!("Failed to remove scratch file {}: {}", path.display(), e);
            }
        }

        Ok(ThumbnailOutcome::Uploaded {
            bucket: object.bucket.clone(),
            image_key,
            seek_seconds,
        })
    }
}
