use serde::{Deserialize, Serialize};

/// One account inside an FA allocation group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountAllocation {
    pub id: String,
    /// Allocation amount or percentage, depending on the group method.
    pub amount: f64,
}

/// Body for `POST /fa/groups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaGroup {
    pub name: String,
    /// `NetLiq`, `Equal`, `PctChange`, `AvailableEquity` or `Ratio`.
    pub method: String,
    pub accounts: Vec<AccountAllocation>,
}

impl FaGroup {
    /// The upstream takes a list of group definitions, even for one group.
    pub fn into_upstream_body(self) -> Vec<FaGroup> {
        vec![self]
    }
}
