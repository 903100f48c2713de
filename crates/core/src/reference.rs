//! Static market-data reference tables.
//!
//! Served verbatim by the gateway without touching the upstream. Tables that
//! are JSON objects serialize in declaration order.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Market data fields
// ---------------------------------------------------------------------------

/// A field code accepted by the market data snapshot endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketDataField {
    pub field_code: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'static str,
}

const fn field(field_code: &'static str, kind: &'static str, name: &'static str) -> MarketDataField {
    MarketDataField {
        field_code,
        kind,
        name,
    }
}

pub const MARKET_DATA_FIELDS: &[MarketDataField] = &[
    field("31", "String", "Last Price"),
    field("55", "String", "Symbol"),
    field("58", "String", "Text"),
    field("70", "String", "High"),
    field("71", "String", "Low"),
    field("73", "String", "Market Value"),
    field("74", "String", "Avg Price"),
    field("75", "String", "Unrealized PnL"),
    field("76", "String", "Formatted position"),
    field("77", "String", "Formatted Unrealized PnL"),
    field("78", "String", "Daily PnL"),
    field("79", "String", "Realized PnL"),
    field("80", "String", "Unrealized PnL %"),
    field("82", "String", "Change"),
    field("83", "String", "Change %"),
    field("84", "String", "Bid Price"),
    field("85", "String", "Ask Size"),
    field("86", "String", "Ask Price"),
    field("87", "String", "Volume"),
    field("88", "String", "Bid Size"),
    field("6004", "String", "Exchange"),
    field("6008", "Integer", "Conid"),
    field("6070", "String", "SecType"),
    field("6072", "String", "Months"),
    field("6073", "String", "Regular Expiry"),
    field("6119", "String", "Marker for market data delivery method"),
    field("6457", "Integer", "Underlying Conid"),
    field("6508", "String", "Service Params"),
    field("6509", "String", "Market Data Availability"),
    field("7051", "String", "Company name"),
    field("7057", "String", "Ask Exch"),
    field("7058", "String", "Last Exch"),
    field("7059", "String", "Last Size"),
    field("7068", "String", "Bid Exch"),
    field("7084", "String", "Implied Vol./Hist. Vol %"),
    field("7085", "String", "Put/Call Interest"),
    field("7086", "String", "Put/Call Volume"),
    field("7087", "String", "Hist. Vol. %"),
    field("7088", "String", "Hist. Vol. Close %"),
    field("7089", "String", "Opt. Volume"),
    field("7094", "String", "Conid + Exchange"),
    field("7184", "String", "canBeTraded"),
    field("7219", "String", "Contract Description"),
    field("7220", "String", "Contract Description"),
    field("7221", "String", "Listing Exchange"),
    field("7280", "String", "Industry"),
    field("7281", "String", "Category"),
    field("7282", "String", "Average Volume"),
    field("7283", "String", "Option Implied Vol. %"),
    field("7284", "String", "Historic Volume (30d)"),
    field("7285", "String", "Put/Call Ratio"),
    field("7286", "String", "Dividend Amount"),
    field("7287", "String", "Dividend Yield %"),
    field("7288", "String", "Ex-date of the dividend"),
    field("7289", "String", "Market Cap"),
    field("7290", "String", "P/E"),
    field("7291", "String", "EPS"),
    field("7292", "String", "Cost Basis"),
    field("7293", "String", "52 Week High"),
    field("7294", "String", "52 Week Low"),
    field("7295", "String", "Open"),
    field("7296", "String", "Close"),
    field("7308", "String", "Delta"),
    field("7309", "String", "Gamma"),
    field("7310", "String", "Theta"),
    field("7311", "String", "Vega"),
    field("7607", "String", "Opt. Volume Change %"),
    field("7633", "String", "VWAP"),
];

// ---------------------------------------------------------------------------
// Market data availability (field 6509)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityCode {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const MARKET_DATA_AVAILABILITY: &[AvailabilityCode] = &[
    AvailabilityCode {
        code: "L",
        name: "Live",
        description: "Real-time streaming data. Requires Market Data subscription.",
    },
    AvailabilityCode {
        code: "D",
        name: "Delayed",
        description: "Delayed data, typically 15-20 minutes behind real time.",
    },
    AvailabilityCode {
        code: "Z",
        name: "Frozen",
        description: "Last recorded data at market close.",
    },
    AvailabilityCode {
        code: "Y",
        name: "Frozen Delayed",
        description: "Last recorded delayed data at market close.",
    },
    AvailabilityCode {
        code: "N",
        name: "Not Subscribed",
        description: "No market data subscription for this contract.",
    },
    AvailabilityCode {
        code: "P",
        name: "Snapshot",
        description: "Snapshot request is available for the contract.",
    },
    AvailabilityCode {
        code: "p",
        name: "Consolidated",
        description: "Market data is aggregated across multiple exchanges or venues.",
    },
    AvailabilityCode {
        code: "B",
        name: "Book",
        description: "Top of the book data is available for the contract.",
    },
    AvailabilityCode {
        code: "d",
        name: "Delayed Snapshot",
        description: "A static snapshot of delayed market data.",
    },
];

/// Serializes as `{code: {name, description}}`.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityTable(pub &'static [AvailabilityCode]);

impl Serialize for AvailabilityTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry {
            name: &'static str,
            description: &'static str,
        }

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for code in self.0 {
            map.serialize_entry(
                code.code,
                &Entry {
                    name: code.name,
                    description: code.description,
                },
            )?;
        }
        map.end()
    }
}

pub fn market_data_availability() -> AvailabilityTable {
    AvailabilityTable(MARKET_DATA_AVAILABILITY)
}

// ---------------------------------------------------------------------------
// History rules
// ---------------------------------------------------------------------------

/// An ordered string-to-string JSON object.
#[derive(Debug, Clone, Copy)]
pub struct OrderedPairs(pub &'static [(&'static str, &'static str)]);

impl Serialize for OrderedPairs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Valid period and bar units for `/hmds/history`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HmdsHistoryRules {
    pub period_units: OrderedPairs,
    pub bar_units_by_period: OrderedPairs,
}

pub const HMDS_HISTORY_RULES: HmdsHistoryRules = HmdsHistoryRules {
    period_units: OrderedPairs(&[
        ("S", "Seconds"),
        ("d", "Day"),
        ("w", "Week"),
        ("m", "Month"),
        ("y", "Year"),
    ]),
    bar_units_by_period: OrderedPairs(&[
        ("60S", "secs, mins (1 secs -> 1 mins)"),
        ("3600S", "secs, mins, hrs (5 secs -> 1 hour)"),
        ("14400S", "secs, mins, hrs (10 secs -> 4 hrs)"),
        ("28800S", "secs, mins, hrs (30 secs -> 8 hrs)"),
        ("1d", "mins, hrs, d (1 min -> 1 day)"),
        ("1w", "mins, hrs, d, w (3 mins -> 1 week)"),
        ("1m", "mins, d, w (30 mins -> 1 month)"),
        ("1y", "d, w, m (1 day -> 1 month)"),
    ]),
};

/// Parallel lists: `bar_range[i]` and `default_bar[i]` apply to `period[i]`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StepSize {
    pub period: &'static [&'static str],
    pub bar_range: &'static [&'static str],
    pub default_bar: &'static [&'static str],
}

/// Valid period, bar and step-size rules for `/iserver/marketdata/history`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IserverHistoryRules {
    pub period_format: &'static str,
    pub bar_values: &'static str,
    pub step_size: StepSize,
}

pub const ISERVER_HISTORY_RULES: IserverHistoryRules = IserverHistoryRules {
    period_format: "{1-30}min, {1-8}h, {1-1000}d, {1-792}w, {1-182}m, {1-15}y",
    bar_values: "1min, 2min, 3min, 5min, 10min, 15min, 30min, 1h, 2h, 3h, 4h, 8h, 1d, 1w, 1m",
    step_size: StepSize {
        period: &[
            "1min", "1h", "1d", "1w", "1m", "3m", "6m", "1y", "2y", "3y", "15y",
        ],
        bar_range: &[
            "1min",
            "1min – 8h",
            "1min – 8h",
            "10min – 1w",
            "1h – 1m",
            "2h – 1m",
            "4h – 1m",
            "8h – 1m",
            "1d – 1m",
            "1d – 1m",
            "1w – 1m",
        ],
        default_bar: &[
            "1min", "1min", "1min", "15min", "30min", "1d", "1d", "1d", "1d", "1w", "1w",
        ],
    },
};
