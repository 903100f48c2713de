use serde::{Deserialize, Serialize};

/// Body for `POST /iserver/account/{accountId}/watchlist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistCreateRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conids: Option<Vec<String>>,
}

/// Body for `POST /iserver/account/watchlist/{watchlistId}/contract`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistContractsRequest {
    pub conids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_without_conids_omits_key() {
        let req: WatchlistCreateRequest =
            serde_json::from_value(json!({"name": "Tech", "conids": null})).unwrap();
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"name": "Tech"}));
    }
}
