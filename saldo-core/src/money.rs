use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// Monetary amount in minor currency units.
///
/// All arithmetic inside the workspace happens on this integer type;
/// decimal strings coming out of storage are converted exactly once at
/// the ingestion boundary.
pub type Amount = i64;

/// Error raised when a decimal value cannot be represented in minor units.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum AmountError {
    #[error("not a decimal number: {0:?}")]
    Malformed(String),
    #[error("{0} carries sub-minor-unit precision")]
    TooPrecise(Decimal),
    #[error("{0} does not fit in a 64-bit minor-unit amount")]
    OutOfRange(Decimal),
}

/// Parse a decimal-formatted string into minor units at the given scale.
///
/// `scale` is the number of decimal digits per major unit (0 for KRW,
/// 2 for USD). Conversion is exact; values with more precision than the
/// minor unit are rejected rather than rounded.
pub fn parse_amount(text: &str, scale: u32) -> Result<Amount, AmountError> {
    let value: Decimal = text
        .trim()
        .parse()
        .map_err(|_| AmountError::Malformed(text.to_string()))?;
    amount_from_decimal(value, scale)
}

/// Convert an exact decimal into minor units at the given scale.
pub fn amount_from_decimal(value: Decimal, scale: u32) -> Result<Amount, AmountError> {
    let factor = Decimal::from(10u64.pow(scale));
    let scaled = value
        .checked_mul(factor)
        .ok_or(AmountError::OutOfRange(value))?;
    if scaled.fract() != Decimal::ZERO {
        return Err(AmountError::TooPrecise(value));
    }
    scaled.trunc().to_i64().ok_or(AmountError::OutOfRange(value))
}

/// Render minor units back into a plain decimal string at the given scale.
pub fn format_amount(amount: Amount, scale: u32) -> String {
    Decimal::new(amount, scale).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_units_at_zero_scale() {
        assert_eq!(parse_amount("110000", 0), Ok(110_000));
        assert_eq!(parse_amount(" -2500 ", 0), Ok(-2_500));
    }

    #[test]
    fn parses_decimal_columns_at_two_scale() {
        assert_eq!(parse_amount("1234.56", 2), Ok(123_456));
        assert_eq!(parse_amount("1234.50", 2), Ok(123_450));
        assert_eq!(parse_amount("0.01", 2), Ok(1));
    }

    #[test]
    fn rejects_sub_minor_precision() {
        assert!(matches!(
            parse_amount("0.001", 2),
            Err(AmountError::TooPrecise(_))
        ));
        assert!(matches!(
            parse_amount("10.5", 0),
            Err(AmountError::TooPrecise(_))
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_amount("12,000", 0),
            Err(AmountError::Malformed(_))
        ));
        assert!(matches!(parse_amount("", 0), Err(AmountError::Malformed(_))));
    }

    #[test]
    fn formats_round_trip() {
        assert_eq!(format_amount(123_456, 2), "1234.56");
        assert_eq!(format_amount(110_000, 0), "110000");
    }
}
