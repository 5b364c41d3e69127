/*
[INPUT]:  INTRANET_* environment variables
[OUTPUT]: Current user's profile printed to stdout
[POS]:    Example - user endpoint usage
[UPDATE]: When the client construction API changes
*/

use std::env;

use intranet_adapter::{ClientConfig, IntranetClient};
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
    let user = client.get_user_info().await?;

    println!("user id:    {}", user.user_id.as_deref().unwrap_or("-"));
    println!("username:   {}", user.username());
    println!("nickname:   {}", user.nickname());
    println!("role:       {}", user.role_name.as_deref().unwrap_or("-"));
    println!("department: {}", user.department_name.as_deref().unwrap_or("-"));

    Ok(())
}
