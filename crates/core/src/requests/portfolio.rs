use crate::params::QueryParams;
use serde::{Deserialize, Serialize};

/// Body for `POST /portfolio/allocation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAllocationRequest {
    pub acct_ids: Vec<String>,
}

/// Query for `GET /portfolio/{accountId}/positions/{pageId}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionsQuery {
    pub model: Option<String>,
    pub sort: Option<String>,
    /// `a` ascending, `d` descending.
    pub direction: Option<String>,
    pub period: Option<String>,
}

impl PositionsQuery {
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("model", self.model.as_deref())
            .with_opt("sort", self.sort.as_deref())
            .with_opt("direction", self.direction.as_deref())
            .with_opt("period", self.period.as_deref())
    }
}
