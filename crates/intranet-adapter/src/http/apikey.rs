/*
[INPUT]:  API key records and list/group requests
[OUTPUT]: API key management results (aiplorer endpoints)
[POS]:    HTTP layer - api-key and subscription group endpoints
[UPDATE]: When adding new aiplorer endpoints or changing request schemas
*/

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::http::{IntranetClient, IntranetError, Result};
use crate::types::{
    ApiKeyInfo, ApiKeyList, ApiKeyListRequest, Envelope, GroupInfo, SwitchGroupRequest,
};

#[derive(Debug, Default, Deserialize)]
struct CreatedId {
    #[serde(default)]
    id: u64,
}

impl IntranetClient {
    /// Create a new API key, returning its id
    ///
    /// POST /aiplorer/api_key/create
    pub async fn create_api_key(&self, api_key: &ApiKeyInfo) -> Result<u64> {
        debug!(name = %api_key.name, "creating API key");

        let body = serde_json::to_value(api_key)
            .map_err(|err| IntranetError::internal("failed to serialize request body", err))?;
        let value = self.post("/aiplorer/api_key/create", &body).await?;
        let created: CreatedId = Envelope::from_value(value)?.ensure_success()?.decode_data()?;

        debug!(id = created.id, "created API key");
        Ok(created.id)
    }

    /// Update an existing API key
    ///
    /// POST /aiplorer/api_key/update
    pub async fn update_api_key(&self, api_key: &ApiKeyInfo) -> Result<()> {
        debug!(id = api_key.id, "updating API key");

        let body = serde_json::to_value(api_key)
            .map_err(|err| IntranetError::internal("failed to serialize request body", err))?;
        let value = self.post("/aiplorer/api_key/update", &body).await?;
        Envelope::from_value(value)?.ensure_success()?;
        Ok(())
    }

    /// Delete API keys by id
    ///
    /// POST /aiplorer/api_key/delete
    pub async fn delete_api_keys(&self, ids: &[u64]) -> Result<()> {
        debug!(?ids, "deleting API keys");

        let value = self
            .post("/aiplorer/api_key/delete", &json!({ "ids": ids }))
            .await?;
        Envelope::from_value(value)?.ensure_success()?;
        Ok(())
    }

    /// Query a page of API keys
    ///
    /// POST /aiplorer/api_key/list
    pub async fn query_api_keys(&self, req: &ApiKeyListRequest) -> Result<ApiKeyList> {
        debug!(page = req.page, page_size = req.page_size, "querying API key list");

        let body = serde_json::to_value(req)
            .map_err(|err| IntranetError::internal("failed to serialize request body", err))?;
        let value = self.post("/aiplorer/api_key/list", &body).await?;
        Envelope::from_value(value)?.ensure_success()?.decode_data()
    }

    /// Query one API key by id
    ///
    /// POST /aiplorer/api_key
    pub async fn query_api_key(&self, id: u64) -> Result<ApiKeyInfo> {
        debug!(id, "querying API key");

        let value = self.post("/aiplorer/api_key", &json!({ "id": id })).await?;
        Envelope::from_value(value)?.ensure_success()?.decode_data()
    }

    /// Query the sub2api API key bound to the current user
    ///
    /// POST /aiplorer/sub2api/api_key
    pub async fn sub2api_key(&self) -> Result<ApiKeyInfo> {
        debug!("querying sub2api API key");

        let value = self.post("/aiplorer/sub2api/api_key", &json!({})).await?;
        Envelope::from_value(value)?.ensure_success()?.decode_data()
    }

    /// Query subscription groups available to the current user
    ///
    /// POST /aiplorer/sub2api/group/available
    pub async fn query_available_groups(&self) -> Result<Vec<GroupInfo>> {
        debug!("querying available subscription groups");

        let value = self
            .post("/aiplorer/sub2api/group/available", &json!({}))
            .await?;
        Envelope::from_value(value)?.ensure_success()?.decode_data()
    }

    /// Query the subscription group currently bound to the user's API key
    ///
    /// POST /aiplorer/sub2api/group/current
    ///
    /// The key may have no group bound, hence the `Option`.
    pub async fn query_current_group(&self) -> Result<Option<GroupInfo>> {
        debug!("querying current subscription group");

        let value = self
            .post("/aiplorer/sub2api/group/current", &json!({}))
            .await?;
        Envelope::from_value(value)?.ensure_success()?.decode_data()
    }

    /// Switch the subscription group bound to the user's API key
    ///
    /// POST /aiplorer/sub2api/group/switch
    pub async fn switch_group(&self, group_id: i64) -> Result<Option<GroupInfo>> {
        debug!(group_id, "switching subscription group");

        let body = serde_json::to_value(SwitchGroupRequest { group_id })
            .map_err(|err| IntranetError::internal("failed to serialize request body", err))?;
        let value = self.post("/aiplorer/sub2api/group/switch", &body).await?;
        Envelope::from_value(value)?.ensure_success()?.decode_data()
    }
}
