use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point drift when summing.
/// 1 unit = 100 cents, so 42.50 = 4250 cents.
pub type Cents = i64;

/// Wide accumulator for sums of many amounts.
pub type TotalCents = i128;

/// Largest amount a single transaction may carry (9999999999999.99).
/// Fifteen significant digits is the most that survives the trip through the
/// floating-point `amount` column, which stores units rather than cents.
pub const MAX_CENTS: Cents = 999_999_999_999_999;

/// Format cents as a plain two-decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: impl Into<TotalCents>) -> String {
    let cents: TotalCents = cents.into();
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// Digits past the second decimal place are truncated.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (units_str, decimal_str) = match digits.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (digits, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units_str.bytes().all(|b| b.is_ascii_digit())
        || !decimal_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::Overflow)?
    };

    // Pad or truncate the fraction to exactly two digits
    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        1 => decimal_str.parse::<i64>().map_err(|_| ParseCentsError::InvalidFormat)? * 10,
        _ => decimal_str[..2]
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or(ParseCentsError::Overflow)?;
    Ok(if negative { -cents } else { cents })
}

/// Convert cents to currency units for the floating-point `amount` column.
pub fn cents_to_units(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Convert a stored floating-point amount back to cents, rounding to the nearest cent.
pub fn units_to_cents(units: f64) -> Cents {
    (units * 100.0).round() as Cents
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    #[error("invalid money format")]
    InvalidFormat,

    #[error("amount is too large")]
    Overflow,
}
