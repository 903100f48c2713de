use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_false() -> Option<bool> {
    Some(false)
}

/// A single order for placement, preview or modification.
///
/// Unset optional fields are skipped on serialization; the upstream rejects
/// explicit nulls. `outsideRTH` and `useAdaptive` default to `false` when the
/// caller leaves them out, and are dropped when the caller sends `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acct_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conid: Option<i64>,
    /// Contract ID with exchange, e.g. `265598@SMART`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conidex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sec_type: Option<String>,
    /// Customer order ID, unique for 24 hours.
    #[serde(rename = "cOID", default, skip_serializing_if = "Option::is_none")]
    pub c_oid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub order_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_exchange: Option<String>,
    #[serde(
        rename = "outsideRTH",
        default = "default_false",
        skip_serializing_if = "Option::is_none"
    )]
    pub outside_rth: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux_price: Option<f64>,
    pub side: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    pub tif: String,
    pub quantity: f64,
    #[serde(default = "default_false", skip_serializing_if = "Option::is_none")]
    pub use_adaptive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_parameters: Option<Map<String, Value>>,
}

/// Body for order placement and what-if preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersRequest {
    pub orders: Vec<Order>,
}

/// Body for `POST /iserver/reply/{replyId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyRequest {
    pub confirmed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_order_has_no_nulls() {
        let req: OrdersRequest = serde_json::from_value(json!({
            "orders": [{
                "orderType": "LMT",
                "side": "BUY",
                "tif": "DAY",
                "quantity": 10,
                "conid": 265598
            }]
        }))
        .unwrap();

        let body = serde_json::to_value(&req).unwrap();
        let order = body["orders"][0].as_object().unwrap();
        assert!(order.values().all(|v| !v.is_null()));
        assert_eq!(order["orderType"], "LMT");
        assert_eq!(order["quantity"], 10.0);
        assert_eq!(order["conid"], 265598);
        assert_eq!(order["outsideRTH"], false);
        assert_eq!(order["useAdaptive"], false);
        assert!(!order.contains_key("price"));
    }

    #[test]
    fn test_explicit_null_flag_is_dropped() {
        let order: Order = serde_json::from_value(json!({
            "orderType": "MKT",
            "side": "SELL",
            "tif": "GTC",
            "quantity": 1.5,
            "outsideRTH": null,
            "cOID": "my-order-1"
        }))
        .unwrap();

        let body = serde_json::to_value(&order).unwrap();
        assert!(body.get("outsideRTH").is_none());
        assert_eq!(body["cOID"], "my-order-1");
    }

    #[test]
    fn test_order_requires_side() {
        let parsed: Result<Order, _> = serde_json::from_value(json!({
            "orderType": "LMT",
            "tif": "DAY",
            "quantity": 10
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_strategy_parameters_pass_through() {
        let order: Order = serde_json::from_value(json!({
            "orderType": "LMT",
            "side": "BUY",
            "tif": "DAY",
            "quantity": 100,
            "strategy": "Adaptive",
            "strategyParameters": {"adaptivePriority": "Normal"}
        }))
        .unwrap();
        let body = serde_json::to_value(&order).unwrap();
        assert_eq!(body["strategyParameters"]["adaptivePriority"], "Normal");
    }
}
