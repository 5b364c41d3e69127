/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod apikey;
pub mod client;
pub mod connector;
pub mod error;
pub mod user;

pub use client::{ClientConfig, IntranetClient};
pub use error::{IntranetError, Result};
