use chrono::NaiveDate;

use crate::domain::{parse_cents, Kind, NewTransaction, MAX_CENTS};

use super::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Turn raw form text into a validated transaction, checking fields in form order.
pub fn validate_input(
    kind_text: &str,
    amount_text: &str,
    category_text: &str,
    date_text: &str,
    note_text: &str,
) -> Result<NewTransaction, ValidationError> {
    let kind = Kind::from_str(kind_text)
        .ok_or_else(|| ValidationError::InvalidKind(kind_text.trim().to_string()))?;

    let amount_cents = parse_cents(amount_text)
        .map_err(|_| ValidationError::InvalidAmount(amount_text.trim().to_string()))?;
    if amount_cents <= 0 {
        return Err(ValidationError::NonPositiveAmount(
            amount_text.trim().to_string(),
        ));
    }
    if amount_cents > MAX_CENTS {
        return Err(ValidationError::InvalidAmount(amount_text.trim().to_string()));
    }

    let date = parse_date(date_text)?;

    Ok(NewTransaction::new(kind, amount_cents, date)
        .with_category(category_text)
        .with_note(note_text))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(date_text: &str) -> Result<NaiveDate, ValidationError> {
    let date_text = date_text.trim();
    // chrono accepts unpadded fields like "2024-1-5"; the form pattern does not
    if date_text.len() != 10 {
        return Err(ValidationError::InvalidDate(date_text.to_string()));
    }
    NaiveDate::parse_from_str(date_text, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(date_text.to_string()))
}
