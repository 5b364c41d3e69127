/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust domain structs with serialization support
[POS]:    Data layer - user, api-key and group models
[UPDATE]: When API schema changes or new models added
*/

use serde::{Deserialize, Serialize};

/// Current user's profile as returned by `GET /user/info`.
///
/// Every field is optional on the wire; missing keys decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub home_path: Option<String>,
    pub role_name: Option<String>,
    pub department_name: Option<String>,
}

impl UserInfo {
    /// Username, or the empty string when absent
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }

    /// Nickname, or the empty string when absent
    pub fn nickname(&self) -> &str {
        self.nickname.as_deref().unwrap_or("")
    }
}

/// An API key record managed through the aiplorer endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiKeyInfo {
    pub id: u64,
    pub created_at: i64,
    pub updated_at: i64,
    pub name: String,
    pub description: String,
    pub base_url: String,
    pub token: String,
    pub domain: String,
    pub sub: String,
    pub sub_type: String,
    pub is_owner: bool,
    pub is_admin: bool,
    pub has_read: bool,
    pub has_write: bool,
    pub has_use: bool,
    pub stats: Option<ApiKeyStats>,
}

/// Usage statistics attached to an API key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiKeyStats {
    pub api_id: String,
    pub name: String,
    pub is_active: bool,
    pub usage: Option<UsageData>,
    pub daily_usage: Option<UsageData>,
    pub monthly_usage: Option<UsageData>,
}

/// Aggregated request/token usage counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageData {
    pub requests: i64,
    pub input_tokens: i64,
    pub output_tokens: i64,
    pub cache_create_tokens: i64,
    pub cache_read_tokens: i64,
    pub all_tokens: i64,
    pub cost: f64,
    pub formatted_cost: String,
}

/// A sub2api subscription group. Quota fields are in cents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupInfo {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub domain: String,
    pub sub: String,
    pub sub_type: String,
    pub is_owner: bool,
    pub is_admin: bool,
    pub has_read: bool,
    pub has_write: bool,
    pub has_use: bool,
    pub daily_limit: i64,
    pub daily_used: i64,
    pub weekly_limit: i64,
    pub weekly_used: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_decodes_camel_case_keys() {
        let info: UserInfo = serde_json::from_str(
            r#"{
                "userId": "u1",
                "username": "bob",
                "homePath": "/home/bob",
                "roleName": "dev",
                "departmentName": "perception"
            }"#,
        )
        .unwrap();

        assert_eq!(info.user_id.as_deref(), Some("u1"));
        assert_eq!(info.username(), "bob");
        assert_eq!(info.home_path.as_deref(), Some("/home/bob"));
        assert_eq!(info.role_name.as_deref(), Some("dev"));
        assert_eq!(info.department_name.as_deref(), Some("perception"));
        // Absent keys decode to None, accessor falls back to ""
        assert_eq!(info.nickname, None);
        assert_eq!(info.nickname(), "");
    }

    #[test]
    fn test_user_info_ignores_unknown_keys() {
        let info: UserInfo =
            serde_json::from_str(r#"{"username": "bob", "somethingNew": 42}"#).unwrap();
        assert_eq!(info.username(), "bob");
    }

    #[test]
    fn test_api_key_info_round_trip() {
        let key: ApiKeyInfo = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "ci-bot",
                "baseUrl": "https://api.example.com",
                "subType": "service",
                "hasUse": true,
                "stats": {"apiId": "a-1", "isActive": true, "dailyUsage": {"requests": 12}}
            }"#,
        )
        .unwrap();

        assert_eq!(key.id, 7);
        assert_eq!(key.base_url, "https://api.example.com");
        assert!(key.has_use && !key.has_write);
        let stats = key.stats.as_ref().unwrap();
        assert_eq!(stats.daily_usage.as_ref().unwrap().requests, 12);

        let value = serde_json::to_value(&key).unwrap();
        assert_eq!(value["baseUrl"], "https://api.example.com");
        assert_eq!(value["subType"], "service");
    }
}
