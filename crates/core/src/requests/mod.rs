//! Validated inbound shapes, one module per upstream domain.
//!
//! Query types expose `to_params()`, which yields the exact outbound query
//! string for the route. Body types serialize to the exact outbound JSON.

pub mod contract;
pub mod fa;
pub mod fyi;
pub mod market_data;
pub mod orders;
pub mod portfolio;
pub mod watchlists;
