use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
///
/// # Errors
///
/// Returns an error naming the field when the value is not a variant.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` date flag.
///
/// # Errors
///
/// Returns an error naming the field when the value does not parse.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

#[cfg(test)]
mod tests {
    use uplift_core::enums::{ExperimentCategory, ExperimentStatus};

    use super::{parse_date, parse_enum};

    #[test]
    fn parses_snake_case_enum() {
        let status: ExperimentStatus = parse_enum("completed", "status").expect("should parse");
        assert_eq!(status, ExperimentStatus::Completed);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let category: ExperimentCategory =
            parse_enum("form-test", "category").expect("should parse");
        assert_eq!(category, ExperimentCategory::FormTest);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<ExperimentStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }

    #[test]
    fn parses_iso_date() {
        let date = parse_date("2026-08-24", "planned_start").expect("should parse");
        assert_eq!(date.to_string(), "2026-08-24");
    }

    #[test]
    fn errors_on_bad_date() {
        let err = parse_date("24/08/2026", "planned_start").expect_err("should fail");
        assert!(err.to_string().contains("planned_start"));
    }
}
