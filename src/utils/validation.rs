use crate::utils::error::{ConfigError, Result};
use url::Url;

/// Strict checks on an assembled configuration. The builder itself never calls
/// this; it is opt-in for callers that would rather fail than fall back.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A required field as seen by [`required_fields_present`]: its property name
/// and its effective value after defaults were applied.
pub type RequiredField<'a> = (&'static str, Option<&'a str>);

/// Returns `true` when every required field carries a non-empty value.
///
/// Stops at the first missing field and logs its name, so a group with several
/// gaps reports only the first one.
pub fn required_fields_present(fields: &[RequiredField<'_>]) -> bool {
    fields.iter().all(|(prop, value)| {
        if value.is_some_and(|v| !v.is_empty()) {
            true
        } else {
            tracing::warn!("Missing required property '{}' in configuration", prop);
            false
        }
    })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_database_uri(field_name: &str, uri: &str) -> Result<()> {
    const SCHEMES: [&str; 4] = ["mongodb", "mongodb+srv", "postgres", "postgresql"];

    let url = Url::parse(uri).map_err(|e| ConfigError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: uri.to_string(),
        reason: format!("Invalid connection string: {}", e),
    })?;

    if !SCHEMES.contains(&url.scheme()) {
        return Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: uri.to_string(),
            reason: format!(
                "Unsupported database scheme: {}. Supported schemes: {}",
                url.scheme(),
                SCHEMES.join(", ")
            ),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logger::capture::with_captured_logs;

    #[test]
    fn test_required_fields_present() {
        assert!(required_fields_present(&[
            ("name", Some("acct")),
            ("container", Some("parse")),
            ("accessKey", Some("key1")),
        ]));
        assert!(!required_fields_present(&[
            ("name", Some("acct")),
            ("container", Some("parse")),
            ("accessKey", None),
        ]));
        assert!(!required_fields_present(&[
            ("HubName", Some("")),
            ("ConnectionString", Some("x")),
        ]));
        // "0" is a non-empty string and counts as present
        assert!(required_fields_present(&[("HubName", Some("0"))]));
        assert!(required_fields_present(&[]));
    }

    #[test]
    fn test_missing_property_is_logged_by_name() {
        let (present, logs) = with_captured_logs(|| {
            required_fields_present(&[
                ("name", Some("acct")),
                ("container", Some("parse")),
                ("accessKey", None),
            ])
        });
        assert!(!present);
        assert!(logs.contains("Missing required property 'accessKey' in configuration"));
    }

    #[test]
    fn test_only_first_missing_property_is_logged() {
        let (present, logs) = with_captured_logs(|| {
            required_fields_present(&[("HubName", None), ("ConnectionString", Some(""))])
        });
        assert!(!present);
        assert!(logs.contains("Missing required property 'HubName' in configuration"));
        assert!(!logs.contains("ConnectionString"));
        assert_eq!(logs.matches("Missing required property").count(), 1);
    }

    #[test]
    fn test_complete_group_logs_nothing() {
        let (present, logs) =
            with_captured_logs(|| required_fields_present(&[("HubName", Some("hub"))]));
        assert!(present);
        assert!(!logs.contains("Missing required property"));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("serverURL", "https://example.com/parse").is_ok());
        assert!(validate_url("serverURL", "http://localhost:1337/parse").is_ok());
        assert!(validate_url("serverURL", "").is_err());
        assert!(validate_url("serverURL", "localhost/parse").is_err());
        assert!(validate_url("serverURL", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_database_uri() {
        assert!(validate_database_uri("databaseURI", "mongodb://localhost:27017/dev").is_ok());
        let srv = "mongodb+srv://u:p@cluster0.example.net/db";
        assert!(validate_database_uri("databaseURI", srv).is_ok());
        assert!(validate_database_uri("databaseURI", "postgres://u@db/parse").is_ok());
        assert!(validate_database_uri("databaseURI", "redis://localhost").is_err());
        assert!(validate_database_uri("databaseURI", "not a uri").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("appId", "myApp").is_ok());
        assert!(validate_non_empty_string("appId", "   ").is_err());
    }
}
