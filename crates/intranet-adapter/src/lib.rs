/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Intranet SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Client SDK for the MiniEye Intranet API.
//!
//! [`IntranetClient`] wraps one configured HTTP client and exposes the user,
//! connector and api-key operations as async methods. Authentication is
//! either a bearer API key or an hourly STS token derived from an access key
//! pair; see [`auth::sts`] for the scheme and its UTC+8 requirement.
//!
//! ```no_run
//! use intranet_adapter::{ClientConfig, IntranetClient};
//!
//! # async fn run() -> intranet_adapter::Result<()> {
//! let config = ClientConfig::default().with_access_keys("key-id", "key-secret");
//! let client = IntranetClient::with_config(config)?;
//!
//! let user = client.get_user_info().await?;
//! println!("hello, {}", user.username());
//!
//! let result = client
//!     .send_kafka_message("events", &serde_json::json!({"a": 1}))
//!     .await?;
//! if !result.is_success() {
//!     eprintln!("connector rejected message: {}", result.msg);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{sts_token, sts_token_at};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    IntranetClient,
    IntranetError,
    Result,
};

// Re-export all types
pub use types::*;
