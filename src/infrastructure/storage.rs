use crate::config::ThumbnailConfig;
use crate::services::storage::S3StorageService;
use aws_sdk_s3::config::Region;
use std::sync::Arc;
use tracing::info;

/// Builds the S3 client once per process. Credentials come from the
/// environment (the Lambda execution role in production).
pub async fn setup_storage(config: &ThumbnailConfig) -> Arc<S3StorageService> {
    let mut loader = aws_config::from_env().region(Region::new(config.region.clone()));
    if let Some(endpoint_url) = &config.s3_endpoint {
        info!("☁️  S3 Storage: {} (region: {})", endpoint_url, config.region);
        loader = loader.endpoint_url(endpoint_url);
    } else {
        info!("☁️  S3 Storage: AWS (region: {})", config.region);
    }
    let aws_config = loader.load().await;

    // Custom endpoints (MinIO) need path-style addressing
    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(config.s3_endpoint.is_some())
        .build();

    let s3_client = aws_sdk_s3::Client::from_conf(s3_config);

    Arc::new(S3StorageService::new(s3_client))
}
