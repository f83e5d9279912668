//! Stateless data-processing helpers: totals, validation, formatting and
//! normalization of loosely-typed user input.

use crate::domain::{DomainError, LineItem, ProcessedUser, RawUserData};

/// Sums `price * quantity` over the given items. Items missing either field
/// contribute 0.
pub fn calculate_total(items: &[LineItem]) -> f64 {
    items
        .iter()
        .filter_map(|item| match (item.price, item.quantity) {
            (Some(price), Some(quantity)) => Some(price * quantity),
            _ => None,
        })
        .sum()
}

/// Returns `true` when every required field is present and truthy.
/// Empty strings and an age of integer 0 fail validation; the age string
/// "0" passes (it is non-empty and not yet parsed).
pub fn validate_input(data: &RawUserData) -> bool {
    let name_ok = data.name.as_deref().is_some_and(|n| !n.is_empty());
    let email_ok = data.email.as_deref().is_some_and(|e| !e.is_empty());
    let age_ok = data.age.as_ref().is_some_and(|a| !a.is_falsy());

    name_ok && email_ok && age_ok
}

/// Renders a raw record as `"Name: <name>, Email: <email>"`, substituting
/// `N/A` for missing fields.
pub fn format_output(data: &RawUserData) -> String {
    format!(
        "Name: {}, Email: {}",
        data.name.as_deref().unwrap_or("N/A"),
        data.email.as_deref().unwrap_or("N/A"),
    )
}

/// Validates and normalizes a raw record: name trimmed and title-cased,
/// email trimmed and lower-cased, age parsed to an integer.
pub fn process_user_data(data: &RawUserData) -> Result<ProcessedUser, DomainError> {
    if !validate_input(data) {
        return Err(DomainError::invalid_input("Invalid input data"));
    }

    // Validation guarantees all three fields are present.
    let (Some(name), Some(email), Some(age)) = (&data.name, &data.email, &data.age) else {
        return Err(DomainError::invalid_input("Invalid input data"));
    };

    Ok(ProcessedUser {
        name: title_case(name.trim()),
        email: email.trim().to_lowercase(),
        age: age.parse()?,
    })
}

/// Upper-cases the first letter of each whitespace-separated word and
/// lower-cases the rest.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AgeValue;

    #[test]
    fn test_calculate_total_skips_partial_items() {
        let items = vec![LineItem::new(2.0, 3.0), LineItem::price_only(1.0)];
        assert_eq!(calculate_total(&items), 6.0);
    }

    #[test]
    fn test_calculate_total_empty() {
        assert_eq!(calculate_total(&[]), 0.0);
    }

    #[test]
    fn test_validate_rejects_missing_field() {
        let data = RawUserData::new().with_name("A").with_email("a@b.com");
        assert!(!validate_input(&data));
    }

    #[test]
    fn test_validate_rejects_zero_age() {
        let data = RawUserData::new()
            .with_name("A")
            .with_email("a@b.com")
            .with_age(0);
        assert!(!validate_input(&data));
    }

    #[test]
    fn test_validate_accepts_zero_age_string() {
        let data = RawUserData::new()
            .with_name("A")
            .with_email("a@b.com")
            .with_age("0");
        assert!(validate_input(&data));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let data = RawUserData::new()
            .with_name("")
            .with_email("a@b.com")
            .with_age(30);
        assert!(!validate_input(&data));
    }

    #[test]
    fn test_format_output_substitutes_missing() {
        let data = RawUserData::new().with_name("Alice");
        assert_eq!(format_output(&data), "Name: Alice, Email: N/A");
        assert_eq!(format_output(&RawUserData::new()), "Name: N/A, Email: N/A");
    }

    #[test]
    fn test_process_normalizes_fields() {
        let data = RawUserData::new()
            .with_name(" bob ")
            .with_email(" BOB@X.COM ")
            .with_age("5");

        let processed = process_user_data(&data).unwrap();
        assert_eq!(processed.name, "Bob");
        assert_eq!(processed.email, "bob@x.com");
        assert_eq!(processed.age, 5);
    }

    #[test]
    fn test_process_title_cases_multiple_words() {
        let data = RawUserData::new()
            .with_name("mary jane WATSON")
            .with_email("mj@x.com")
            .with_age(AgeValue::Number(21));

        let processed = process_user_data(&data).unwrap();
        assert_eq!(processed.name, "Mary Jane Watson");
    }

    #[test]
    fn test_process_json_payload() {
        let data: RawUserData =
            serde_json::from_str(r#"{"name":" bob ","email":" BOB@X.COM ","age":"5"}"#).unwrap();
        let processed = process_user_data(&data).unwrap();
        assert_eq!(processed.age, 5);

        let data: RawUserData =
            serde_json::from_str(r#"{"name":"Ann","email":"ann@x.com","age":42}"#).unwrap();
        assert_eq!(process_user_data(&data).unwrap().age, 42);
    }

    #[test]
    fn test_process_rejects_invalid_input() {
        let err = process_user_data(&RawUserData::new()).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid input: Invalid input data");
    }

    #[test]
    fn test_process_rejects_non_numeric_age() {
        let data = RawUserData::new()
            .with_name("A")
            .with_email("a@b.com")
            .with_age("not-a-number");

        let err = process_user_data(&data).unwrap_err();
        assert!(err.is_parse_error());
    }
}
