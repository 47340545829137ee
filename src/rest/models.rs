use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Webhook credentials; a repeated parameter contributes its first value.
#[derive(Debug, Default, PartialEq)]
pub struct UpdatePackageQuery {
    pub username: Option<String>,
    pub api_token: Option<String>,
}

impl UpdatePackageQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "username" => &mut query.username,
                "apiToken" => &mut query.api_token,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}
