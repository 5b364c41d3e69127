/*
[INPUT]:  INTRANET_* environment variables and a demo payload
[OUTPUT]: Kafka send outcome printed to stdout
[POS]:    Example - connector endpoint usage
[UPDATE]: When the send contract changes
*/

use std::env;

use intranet_adapter::{ClientConfig, IntranetClient};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("INTRANET_SDK_LOG_LEVEL")
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let access_key_id = env::var("INTRANET_ACCESS_KEY_ID")?;
    let access_key_secret = env::var("INTRANET_ACCESS_KEY_SECRET")?;

    let config = match env::var("INTRANET_BASE_URL") {
        Ok(base_url) => ClientConfig::new(base_url)?,
        Err(_) => ClientConfig::default(),
    };
    let config = config.with_access_keys(access_key_id, access_key_secret);

    let client = IntranetClient::with_config(config)?;

    let payload = json!({
        "event": "example",
        "value": 42,
    });
    let result = client.send_kafka_message("sdk-demo", &payload).await?;

    if result.is_success() {
        println!("message accepted");
    } else {
        println!("message rejected: code={} msg={}", result.code, result.msg);
    }

    Ok(())
}
