use crate::core::{HolderSource, RawBalance, RawRecord, Result};
use crate::domain::model::{InputFormat, REQUIRED_COLUMNS};
use crate::utils::error::AnalyticsError;
use crate::utils::validation::{missing_columns, validate_required_columns};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
    format: InputFormat,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>, format: InputFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }
}

impl HolderSource for FileLoader {
    fn load(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!("Reading {:?} input from {}", self.format, self.path.display());
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        match self.format {
            InputFormat::Csv => read_csv(reader),
            InputFormat::Json => read_json(reader),
        }
    }
}

/// Reads a headed CSV table. Cells are trimmed and columns other than
/// `address` and `balance` are ignored. Short rows are padded with empty
/// cells, so a missing balance reads as `RawBalance::Missing`.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);
    let (address_idx, balance_idx) = match (position("address"), position("balance")) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return Err(AnalyticsError::InvalidInput {
                missing: missing_columns(&REQUIRED_COLUMNS, headers.iter()),
            })
        }
    };

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        records.push(RawRecord {
            address: row.get(address_idx).unwrap_or_default().to_string(),
            balance: RawBalance::from_cell(row.get(balance_idx).unwrap_or_default()),
        });
    }

    tracing::debug!("Parsed {} CSV rows", records.len());
    Ok(records)
}

/// Reads JSON in either row form (`[{"address": .., "balance": ..}, ..]`)
/// or column form (`{"address": [..], "balance": [..]}`).
pub fn read_json<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_reader(reader)?;

    let records = match value {
        Value::Array(rows) => read_json_rows(rows)?,
        Value::Object(columns) => read_json_columns(columns)?,
        other => {
            return Err(AnalyticsError::MalformedInput {
                message: format!("expected a JSON array or object, found {}", json_kind(&other)),
            })
        }
    };

    tracing::debug!("Parsed {} JSON records", records.len());
    Ok(records)
}

fn read_json_rows(rows: Vec<Value>) -> Result<Vec<RawRecord>> {
    let mut objects = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        match row {
            Value::Object(obj) => objects.push(obj),
            other => {
                return Err(AnalyticsError::MalformedInput {
                    message: format!("row {} is {}, expected an object", i, json_kind(&other)),
                })
            }
        }
    }

    // A column exists if any row carries it.
    validate_required_columns(
        &REQUIRED_COLUMNS,
        objects.iter().flat_map(|obj| obj.keys().map(String::as_str)),
    )?;

    Ok(objects
        .iter()
        .map(|obj| RawRecord {
            address: obj.get("address").map(address_text).unwrap_or_default(),
            balance: obj
                .get("balance")
                .map(RawBalance::from_json)
                .unwrap_or(RawBalance::Missing),
        })
        .collect())
}

fn read_json_columns(columns: Map<String, Value>) -> Result<Vec<RawRecord>> {
    validate_required_columns(&REQUIRED_COLUMNS, columns.keys().map(String::as_str))?;

    let addresses = json_column(&columns, "address")?;
    let balances = json_column(&columns, "balance")?;
    if addresses.len() != balances.len() {
        return Err(AnalyticsError::MalformedInput {
            message: format!(
                "columns have different lengths (address: {}, balance: {})",
                addresses.len(),
                balances.len()
            ),
        });
    }

    Ok(addresses
        .iter()
        .zip(balances)
        .map(|(address, balance)| RawRecord {
            address: address_text(address),
            balance: RawBalance::from_json(balance),
        })
        .collect())
}

fn json_column<'a>(columns: &'a Map<String, Value>, name: &str) -> Result<&'a Vec<Value>> {
    match columns.get(name) {
        Some(Value::Array(values)) => Ok(values),
        Some(other) => Err(AnalyticsError::MalformedInput {
            message: format!("column '{}' is {}, expected an array", name, json_kind(other)),
        }),
        None => Err(AnalyticsError::InvalidInput {
            missing: vec![name.to_string()],
        }),
    }
}

fn address_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv() {
        let holders_csv = b"\
address, balance, note
0xaaa,   100,     first
0xbbb,   2.5e1,
0xccc,   ,        empty balance
0xddd,   oops,    text balance
";
        let records = read_csv(&holders_csv[..]).unwrap();
        assert_eq!(
            records,
            [
                RawRecord::new("0xaaa", "100"),
                RawRecord::new("0xbbb", "2.5e1"),
                RawRecord::new("0xccc", RawBalance::Missing),
                RawRecord::new("0xddd", "oops"),
            ]
        );
    }

    #[test]
    fn test_read_csv_short_rows() {
        let records = read_csv(&b"address,balance,note\n0xa,100,x\n0xb\n0xc,5\n"[..]).unwrap();
        assert_eq!(
            records,
            [
                RawRecord::new("0xa", "100"),
                RawRecord::new("0xb", RawBalance::Missing),
                RawRecord::new("0xc", "5"),
            ]
        );
    }

    #[test]
    fn test_read_csv_header_only() {
        let records = read_csv(&b"address,balance\n"[..]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_csv_missing_column() {
        match read_csv(&b"address,amount\n0xaaa,1\n"[..]) {
            Err(AnalyticsError::InvalidInput { missing }) => assert_eq!(missing, ["balance"]),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_read_csv_empty_file() {
        match read_csv(&b""[..]) {
            Err(AnalyticsError::InvalidInput { missing }) => {
                assert_eq!(missing, ["address", "balance"])
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_read_json_rows() {
        let input = br#"[
            {"address": "0xaaa", "balance": 100},
            {"address": "0xbbb", "balance": "25"},
            {"address": 42, "balance": null},
            {"address": "0xddd"}
        ]"#;
        let records = read_json(&input[..]).unwrap();
        assert_eq!(
            records,
            [
                RawRecord::new("0xaaa", 100.0),
                RawRecord::new("0xbbb", "25"),
                RawRecord::new("42", RawBalance::Missing),
                RawRecord::new("0xddd", RawBalance::Missing),
            ]
        );
    }

    #[test]
    fn test_read_json_columns() {
        let input = br#"{"address": ["0xaaa", "0xbbb"], "balance": [1.5, "x"], "tier": [1, 2]}"#;
        let records = read_json(&input[..]).unwrap();
        assert_eq!(
            records,
            [RawRecord::new("0xaaa", 1.5), RawRecord::new("0xbbb", "x")]
        );
    }

    #[test]
    fn test_read_json_missing_column() {
        let input = br#"[{"address": "0xaaa", "amount": 1}]"#;
        match read_json(&input[..]) {
            Err(AnalyticsError::InvalidInput { missing }) => assert_eq!(missing, ["balance"]),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_read_json_empty_array_has_no_columns() {
        assert!(matches!(
            read_json(&b"[]"[..]),
            Err(AnalyticsError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_read_json_malformed_shapes() {
        assert!(matches!(
            read_json(&b"42"[..]),
            Err(AnalyticsError::MalformedInput { .. })
        ));
        assert!(matches!(
            read_json(&br#"[1, 2]"#[..]),
            Err(AnalyticsError::MalformedInput { .. })
        ));
        assert!(matches!(
            read_json(&br#"{"address": ["a", "b"], "balance": [1]}"#[..]),
            Err(AnalyticsError::MalformedInput { .. })
        ));
        assert!(matches!(
            read_json(&b"{not json"[..]),
            Err(AnalyticsError::SerializationError(_))
        ));
    }
}
