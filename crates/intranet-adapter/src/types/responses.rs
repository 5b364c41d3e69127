/*
[INPUT]:  Decoded JSON values from the transport layer
[OUTPUT]: Typed envelopes and operation results
[POS]:    Data layer - response type definitions
[UPDATE]: When endpoint response schemas change
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::{IntranetError, Result};
use crate::types::ApiKeyInfo;

/// Uniform `{code, msg, data?}` wrapper used by every endpoint.
///
/// `code == 0` means success. Missing fields decode to their defaults so a
/// bare `{}` is a zero-code envelope with no data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    pub code: i64,
    pub msg: String,
    pub data: Option<Value>,
}

impl Envelope {
    /// Decode an envelope from a raw response value
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|err| IntranetError::internal("invalid response envelope", err))
    }

    /// True when the application code signals success
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Convert a non-zero code into an [`IntranetError::Api`]
    pub fn ensure_success(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(IntranetError::Api {
                code: self.code,
                message: self.msg,
            })
        }
    }

    /// Decode the `data` field; a missing or null payload yields the default
    pub fn decode_data<T>(self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.data {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value)
                .map_err(|err| IntranetError::internal("invalid response data", err)),
        }
    }
}

/// Outcome of a Kafka send, success or application-level failure.
///
/// A non-zero code from the connector endpoint is reported here rather than
/// as an error; callers inspect [`SendResult::is_success`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendResult {
    pub code: i64,
    pub msg: String,
}

impl SendResult {
    /// True when the connector accepted the message
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// One page of API keys from `POST /aiplorer/api_key/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyList {
    pub total: u64,
    #[serde(rename = "data")]
    pub list: Vec<ApiKeyInfo>,
}
