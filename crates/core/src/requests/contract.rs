use crate::params::QueryParams;
use serde::{Deserialize, Serialize};

/// Query for `GET /iserver/contract/{conid}/algos`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgosQuery {
    /// Comma-separated list of IB Algos to query.
    pub algos: Option<String>,
    /// "1" to receive algorithm descriptions.
    pub add_description: Option<String>,
    /// "1" to receive algorithm parameters.
    pub add_params: Option<String>,
}

impl AlgosQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("algos", self.algos.as_deref())
            .with_opt("addDescription", self.add_description.as_deref())
            .with_opt("addParams", self.add_params.as_deref())
    }
}

/// Query for `GET /iserver/contract/{conid}/info-and-rules`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoAndRulesQuery {
    pub is_buy: bool,
}

impl InfoAndRulesQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new().with("isBuy", self.is_buy)
    }
}

/// Body for `POST /iserver/contract/rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRulesRequest {
    pub conid: i64,
    /// true for buy-side rules, false for sell-side rules.
    pub is_buy: bool,
}

/// Query for `GET /iserver/secdef/bond-filters`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondFiltersQuery {
    pub issuer_id: String,
}

impl BondFiltersQuery {
    /// The upstream only answers bond filter requests for the `BOND` symbol.
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("symbol", "BOND")
            .with("issuerId", self.issuer_id.as_str())
    }
}

/// Query for `GET /iserver/secdef/currency`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyQuery {
    /// Currency pair, e.g. `EUR.USD`.
    pub symbol: String,
}

impl CurrencyQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new().with("symbol", self.symbol.as_str())
    }
}

/// Query for `GET /iserver/secdef/info`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecdefInfoQuery {
    pub conid: String,
    pub sec_type: String,
    pub month: Option<String>,
    pub exchange: Option<String>,
    pub strike: Option<f64>,
    pub right: Option<String>,
}

impl SecdefInfoQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("conid", self.conid.as_str())
            .with("secType", self.sec_type.as_str())
            .with_opt("month", self.month.as_deref())
            .with_opt("exchange", self.exchange.as_deref())
            .with_opt("strike", self.strike)
            .with_opt("right", self.right.as_deref())
    }
}

/// Query for `GET /iserver/secdef/search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecdefSearchQuery {
    pub symbol: String,
    /// Search by company name instead of symbol. Always forwarded.
    #[serde(default)]
    pub name: bool,
    pub sec_type: Option<String>,
}

impl SecdefSearchQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("symbol", self.symbol.as_str())
            .with("name", self.name)
            .with_opt("secType", self.sec_type.as_deref())
    }
}

/// Query for `GET /iserver/secdef/strikes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrikesQuery {
    pub conid: i64,
    pub sec_type: String,
    /// Expiration month, `MMMYY`.
    pub month: String,
    pub exchange: Option<String>,
}

impl StrikesQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("conid", self.conid)
            .with("secType", self.sec_type.as_str())
            .with("month", self.month.as_str())
            .with_opt("exchange", self.exchange.as_deref())
    }
}

/// Query for `GET /trsrv/futures` and `GET /trsrv/stocks`.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolsQuery {
    /// Comma-separated symbols, forwarded untouched.
    pub symbols: String,
}

impl SymbolsQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new().with("symbols", self.symbols.as_str())
    }
}

/// Query for `GET /trsrv/secdef`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConidsQuery {
    pub conids: String,
}

impl ConidsQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new().with("conids", self.conids.as_str())
    }
}

/// Query for `GET /trsrv/secdef/schedule`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleQuery {
    pub asset_class: String,
    pub symbol: String,
    pub exchange: Option<String>,
    pub exchange_filter: Option<String>,
}

impl ScheduleQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("assetClass", self.asset_class.as_str())
            .with("symbol", self.symbol.as_str())
            .with_opt("exchange", self.exchange.as_deref())
            .with_opt("exchangeFilter", self.exchange_filter.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_filters_inject_symbol() {
        let q = BondFiltersQuery {
            issuer_id: "e1400715".to_string(),
        };
        let params = q.to_params();
        assert_eq!(params.get("symbol"), Some("BOND"));
        assert_eq!(params.get("issuerId"), Some("e1400715"));
    }

    #[test]
    fn test_search_always_sends_name() {
        let q: SecdefSearchQuery =
            serde_json::from_value(serde_json::json!({"symbol": "AAPL"})).unwrap();
        let params = q.to_params();
        assert_eq!(params.get("name"), Some("false"));
        assert!(!params.contains("secType"));
    }

    #[test]
    fn test_secdef_info_omits_unset_optionals() {
        let q = SecdefInfoQuery {
            conid: "265598".to_string(),
            sec_type: "OPT".to_string(),
            month: Some("JAN25".to_string()),
            exchange: None,
            strike: Some(150.0),
            right: None,
        };
        let keys: Vec<_> = q.to_params().keys().map(String::from).collect();
        assert_eq!(keys, vec!["conid", "secType", "month", "strike"]);
    }

    #[test]
    fn test_contract_rules_body_uses_upstream_names() {
        let body = ContractRulesRequest {
            conid: 265598,
            is_buy: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"conid": 265598, "isBuy": true}));
    }

    #[test]
    fn test_contract_rules_requires_side() {
        let parsed: Result<ContractRulesRequest, _> =
            serde_json::from_value(serde_json::json!({"conid": 265598}));
        assert!(parsed.is_err());
    }
}
