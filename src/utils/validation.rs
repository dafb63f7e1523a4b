use crate::utils::error::{AnalyticsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AnalyticsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AnalyticsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_existing_file(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    if !std::path::Path::new(path).is_file() {
        return Err(AnalyticsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File does not exist".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AnalyticsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Returns the names from `required` that are not in `present`, in the order
/// they were required.
pub fn missing_columns<'a, I>(required: &[&str], present: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let present: Vec<&str> = present.into_iter().collect();
    required
        .iter()
        .filter(|name| !present.contains(name))
        .map(|name| name.to_string())
        .collect()
}

pub fn validate_required_columns<'a, I>(required: &[&str], present: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let missing = missing_columns(required, present);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AnalyticsError::InvalidInput { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_file", "holders.csv").is_ok());
        assert!(validate_path("input_file", "").is_err());
        assert!(validate_path("input_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert!(validate_existing_file("input_file", path).is_ok());
        assert!(validate_existing_file("input_file", "definitely/not/here.csv").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("top", 10, 1).is_ok());
        assert!(validate_positive_number("top", 0, 1).is_err());
    }

    #[test]
    fn test_validate_required_columns() {
        let required = ["address", "balance"];
        assert!(validate_required_columns(&required, ["balance", "address", "note"]).is_ok());

        match validate_required_columns(&required, ["address", "amount"]) {
            Err(AnalyticsError::InvalidInput { missing }) => {
                assert_eq!(missing, vec!["balance".to_string()])
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        assert_eq!(
            missing_columns(&required, std::iter::empty()),
            vec!["address".to_string(), "balance".to_string()]
        );
    }
}
