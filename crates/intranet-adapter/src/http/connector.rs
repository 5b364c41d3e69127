/*
[INPUT]:  Topic name and serializable message payload
[OUTPUT]: Send outcome, including application-level rejections as data
[POS]:    HTTP layer - connector messaging endpoints
[UPDATE]: When adding new connector endpoints or changing the send contract
*/

use serde::Serialize;
use tracing::{debug, warn};

use crate::http::{IntranetClient, IntranetError, Result};
use crate::types::{Envelope, KafkaMessage, SendResult};

impl IntranetClient {
    /// Send a message to a Kafka topic through the connector
    ///
    /// POST /connector/kafka/send-topic-message
    ///
    /// The payload is serialized to a JSON string and embedded as the
    /// `message` string field of the outer body; the server expects that
    /// double encoding. Unlike the other endpoints, a non-zero envelope
    /// code is not an error: it comes back in the [`SendResult`] and the
    /// caller checks [`SendResult::is_success`]. Transport failures still
    /// surface as errors.
    pub async fn send_kafka_message<T>(&self, topic: &str, message: &T) -> Result<SendResult>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(message)
            .map_err(|err| IntranetError::internal("failed to serialize message", err))?;

        debug!(topic, "sending message to Kafka topic");

        let body = serde_json::to_value(KafkaMessage {
            topic: topic.to_string(),
            message: payload,
        })
        .map_err(|err| IntranetError::internal("failed to serialize request body", err))?;

        let value = self
            .post("/connector/kafka/send-topic-message", &body)
            .await?;
        let envelope = Envelope::from_value(value)?;

        if !envelope.is_success() {
            warn!(topic, code = envelope.code, msg = %envelope.msg, "connector rejected message");
        } else {
            debug!(topic, "message sent");
        }

        Ok(SendResult {
            code: envelope.code,
            msg: envelope.msg,
        })
    }
}
