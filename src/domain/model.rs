use serde::{Deserialize, Serialize};

/// Column names every input source must provide.
pub const REQUIRED_COLUMNS: [&str; 2] = ["address", "balance"];

/// Number of rank boundaries reported in `Summary::deciles_balance`.
pub const DECILE_COUNT: usize = 10;

/// A balance as it appears in the source file, before numeric coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawBalance {
    Number(f64),
    Text(String),
    Missing,
}

impl RawBalance {
    /// Maps a JSON cell onto the raw balance shapes. Booleans, arrays and
    /// objects keep their JSON text and therefore coerce to zero.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawBalance::Missing,
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(x) => RawBalance::Number(x),
                None => RawBalance::Text(n.to_string()),
            },
            serde_json::Value::String(s) => RawBalance::Text(s.clone()),
            other => RawBalance::Text(other.to_string()),
        }
    }

    /// Maps a CSV cell; an empty cell is treated as missing.
    pub fn from_cell(cell: &str) -> Self {
        if cell.is_empty() {
            RawBalance::Missing
        } else {
            RawBalance::Text(cell.to_string())
        }
    }
}

impl From<f64> for RawBalance {
    fn from(value: f64) -> Self {
        RawBalance::Number(value)
    }
}

impl From<&str> for RawBalance {
    fn from(value: &str) -> Self {
        RawBalance::Text(value.to_string())
    }
}

/// One row handed over by a loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub address: String,
    pub balance: RawBalance,
}

impl RawRecord {
    pub fn new(address: impl Into<String>, balance: impl Into<RawBalance>) -> Self {
        Self {
            address: address.into(),
            balance: balance.into(),
        }
    }
}

/// A record whose balance has been coerced to a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct Holder {
    pub address: String,
    pub balance: f64,
}

/// Distribution statistics for one holder set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub holders: usize,
    pub total_balance: f64,
    pub top_share: f64,
    pub gini: f64,
    pub deciles_balance: [f64; DECILE_COUNT],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Table,
    Json,
    #[default]
    Both,
}

impl OutputMode {
    pub fn includes_table(self) -> bool {
        matches!(self, OutputMode::Table | OutputMode::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_balance_from_json() {
        assert_eq!(RawBalance::from_json(&json!(12.5)), RawBalance::Number(12.5));
        assert_eq!(RawBalance::from_json(&json!(7)), RawBalance::Number(7.0));
        assert_eq!(
            RawBalance::from_json(&json!("1e3")),
            RawBalance::Text("1e3".to_string())
        );
        assert_eq!(RawBalance::from_json(&json!(null)), RawBalance::Missing);
        assert_eq!(
            RawBalance::from_json(&json!(true)),
            RawBalance::Text("true".to_string())
        );
    }

    #[test]
    fn test_raw_balance_from_cell() {
        assert_eq!(RawBalance::from_cell(""), RawBalance::Missing);
        assert_eq!(RawBalance::from_cell("42"), RawBalance::Text("42".to_string()));
    }

    #[test]
    fn test_summary_json_keys() {
        let summary = Summary {
            holders: 2,
            total_balance: 3.0,
            top_share: 1.0,
            gini: 0.0,
            deciles_balance: [1.0; DECILE_COUNT],
        };
        let value = serde_json::to_value(&summary).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys.len(),
            5,
            "unexpected keys in serialized summary: {:?}",
            keys
        );
        assert_eq!(value["deciles_balance"].as_array().unwrap().len(), DECILE_COUNT);
    }

    #[test]
    fn test_output_mode_parts() {
        assert!(OutputMode::Both.includes_table() && OutputMode::Both.includes_json());
        assert!(!OutputMode::Table.includes_json());
        assert!(!OutputMode::Json.includes_table());
    }
}
