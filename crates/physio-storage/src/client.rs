use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;

/// Build an S3 client from the ambient AWS configuration (environment,
/// profile, or execution role).
pub async fn build_client() -> Client {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    Client::new(&config)
}
