/*
[INPUT]:  Caller-supplied operation parameters
[OUTPUT]: Typed request bodies for API endpoints
[POS]:    Data layer - request type definitions
[UPDATE]: When endpoint request schemas change
*/

use serde::{Deserialize, Serialize};

/// Body of `POST /connector/kafka/send-topic-message`.
///
/// `message` is a JSON document serialized to a string and embedded as a
/// string field of the outer body. The double encoding is the remote wire
/// contract; the server expects text here, not a nested object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KafkaMessage {
    pub topic: String,
    pub message: String,
}

/// Filters for `POST /aiplorer/api_key/list`.
///
/// `page`/`page_size` are passed through verbatim; the SDK never iterates
/// pages on the caller's behalf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiKeyListRequest {
    pub page: u64,
    pub page_size: u64,
    pub created_at: i64,
    pub updated_at: i64,
    pub name: String,
    pub description: String,
    pub base_url: String,
    pub token: String,
    pub domain: String,
    pub sub: String,
    pub sub_type: String,
}

impl ApiKeyListRequest {
    /// List request with only paging fields set
    pub fn page(page: u64, page_size: u64) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }
}

/// Body of `POST /aiplorer/sub2api/group/switch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchGroupRequest {
    pub group_id: i64,
}
