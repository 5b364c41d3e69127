/*
[INPUT]:  Access key credentials
[OUTPUT]: STS tokens for request authentication
[POS]:    Auth layer - handles Intranet API authentication
[UPDATE]: When auth schemes change
*/

pub mod sts;

pub use sts::{sts_token, sts_token_at};
