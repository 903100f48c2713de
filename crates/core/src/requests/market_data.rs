use crate::params::QueryParams;
use serde::{Deserialize, Serialize};

fn default_bar_type() -> Option<String> {
    Some("trades".to_string())
}

/// Query for `GET /iserver/marketdata/snapshot`.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotQuery {
    /// Comma-separated contract IDs.
    pub conids: String,
    /// Comma-separated field codes.
    pub fields: String,
}

impl SnapshotQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("conids", self.conids.as_str())
            .with("fields", self.fields.as_str())
    }
}

/// Query for `GET /md/snapshot`.
#[derive(Debug, Clone, Deserialize)]
pub struct MdSnapshotQuery {
    pub conids: String,
    pub fields: Option<String>,
}

impl MdSnapshotQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("conids", self.conids.as_str())
            .with_opt("fields", self.fields.as_deref())
    }
}

/// Query for `GET /iserver/marketdata/history`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub conid: String,
    /// e.g. `1d`, `2w`.
    pub period: String,
    pub bar: Option<String>,
    pub exchange: Option<String>,
    #[serde(default)]
    pub outside_rth: bool,
    #[serde(default = "default_bar_type")]
    pub bar_type: Option<String>,
}

impl HistoryQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("conid", self.conid.as_str())
            .with("period", self.period.as_str())
            .with("outsideRth", self.outside_rth)
            .with_opt("bar", self.bar.as_deref())
            .with_opt("exchange", self.exchange.as_deref())
            .with_opt("barType", self.bar_type.as_deref())
    }
}

/// Query for `GET /hmds/history`. Period units are case-sensitive upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HmdsHistoryQuery {
    pub conid: String,
    pub period: String,
    pub bar: Option<String>,
    #[serde(default)]
    pub outside_rth: bool,
    #[serde(default = "default_bar_type")]
    pub bar_type: Option<String>,
    /// `YYYYMMDD-hh:mm:ss`.
    pub start_time: Option<String>,
}

impl HmdsHistoryQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("conid", self.conid.as_str())
            .with("period", self.period.as_str())
            .with("outsideRth", self.outside_rth)
            .with_opt("bar", self.bar.as_deref())
            .with_opt("barType", self.bar_type.as_deref())
            .with_opt("startTime", self.start_time.as_deref())
    }
}

/// Body for `POST /iserver/marketdata/unsubscribe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsubscribeRequest {
    pub conid: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_history_defaults() {
        let q: HistoryQuery =
            serde_json::from_value(json!({"conid": "265598", "period": "1d"})).unwrap();
        let params = q.to_params();
        assert_eq!(params.get("outsideRth"), Some("false"));
        assert_eq!(params.get("barType"), Some("trades"));
        assert!(!params.contains("bar"));
        assert!(!params.contains("exchange"));
    }

    #[test]
    fn test_hmds_history_empty_bar_type_is_dropped() {
        let q: HmdsHistoryQuery = serde_json::from_value(json!({
            "conid": "265598",
            "period": "1w",
            "barType": "",
            "outsideRth": true,
            "startTime": "20240102-15:00:00"
        }))
        .unwrap();
        let params = q.to_params();
        assert!(!params.contains("barType"));
        assert_eq!(params.get("outsideRth"), Some("true"));
        assert_eq!(params.get("startTime"), Some("20240102-15:00:00"));
    }

    #[test]
    fn test_md_snapshot_omits_fields() {
        let q = MdSnapshotQuery {
            conids: "265598,8314".to_string(),
            fields: None,
        };
        let keys: Vec<_> = q.to_params().keys().map(String::from).collect();
        assert_eq!(keys, vec!["conids"]);
    }
}
