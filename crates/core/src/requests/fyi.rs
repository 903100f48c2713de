use crate::params::QueryParams;
use serde::{Deserialize, Serialize};

/// Body for `POST /fyi/deliveryoptions` and `PUT /fyi/settings/{typecode}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnabledRequest {
    pub enabled: bool,
}

/// Body for `PUT /fyi/deliveryoptions/device`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDeliveryRequest {
    pub device_id: String,
    pub ui_name: String,
    pub enabled: bool,
}

/// Body for `POST /fyi/settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FyiSettingsRequest {
    pub type_codes: Vec<String>,
}

/// Body for `DELETE /fyi/notifications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest {
    pub notification_ids: Vec<String>,
}

fn default_max() -> i64 {
    10
}

/// Query for `GET /fyi/notifications`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsQuery {
    /// Comma-separated notification IDs to exclude.
    pub exclude: Option<String>,
    /// Comma-separated notification IDs to include.
    pub include: Option<String>,
    #[serde(default = "default_max")]
    pub max: i64,
}

impl NotificationsQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("max", self.max)
            .with_opt("exclude", self.exclude.as_deref())
            .with_opt("include", self.include.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notifications_default_max() {
        let q: NotificationsQuery = serde_json::from_value(json!({})).unwrap();
        let params = q.to_params();
        assert_eq!(params.get("max"), Some("10"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_device_request_field_names() {
        let body = DeviceDeliveryRequest {
            device_id: "dev-1".to_string(),
            ui_name: "iPhone".to_string(),
            enabled: true,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"deviceId": "dev-1", "uiName": "iPhone", "enabled": true})
        );
    }

    #[test]
    fn test_mark_read_requires_ids() {
        let parsed: Result<MarkReadRequest, _> = serde_json::from_value(json!({}));
        assert!(parsed.is_err());
    }
}
