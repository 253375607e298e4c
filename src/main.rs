use dotenvy::dotenv;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use std::sync::Arc;
use thumbnail_extractor::infrastructure::{media, storage};
use thumbnail_extractor::{ThumbnailConfig, ThumbnailOutcome, ThumbnailService, TriggerEvent};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv().ok();

    // Initialize tracing with EnvFilter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thumbnail_extractor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .init();

    info!("🚀 Starting thumbnail extractor...");

    let config = ThumbnailConfig::from_env();
    info!(
        "🖼️  Config: {}{} -> {}{}, seek={}x duration (fallback {}s), qscale={}",
        config.video_prefix,
        config.video_extension,
        config.image_prefix,
        config.image_extension,
        config.seek_fraction,
        config.fallback_seek_seconds,
        config.jpeg_qscale
    );

    let storage_service = storage::setup_storage(&config).await;
    let ffmpeg = media::setup_media_tool(&config);

    let service = Arc::new(ThumbnailService::new(
        storage_service,
        ffmpeg.clone(),
        ffmpeg,
        config,
    ));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<TriggerEvent>| {
        let service = service.clone();
        async move {
            let request_id = event.context.request_id.clone();
            match service.handle_event(&event.payload).await {
                Ok(ThumbnailOutcome::Uploaded { image_key, .. }) => {
                    info!("✅ [{}] Thumbnail stored at {}", request_id, image_key);
                    Ok(())
                }
                Ok(ThumbnailOutcome::Skipped { .. }) => Ok(()),
                Err(e) => {
                    error!("❌ [{}] Thumbnail generation failed: {:?}", request_id, e);
                    Err(Error::from(e))
                }
            }
        }
    }))
    .await
}
