//! Brazilian currency text to number.

/// Parse a Brazilian-formatted amount such as `"R$ 20.000,00"`.
///
/// Currency symbol characters, whitespace and `.` thousands separators are
/// dropped and the first `,` becomes the decimal point. Empty, unparseable
/// or NaN input yields `0.0`; a garbled amount is treated as "no amount
/// entered" rather than an error. Overflowing amounts stay infinite.
///
/// ```
/// use ficha_form::parse_currency;
///
/// assert_eq!(parse_currency("20.000,00"), 20000.0);
/// assert_eq!(parse_currency("R$ 1.500,50"), 1500.5);
/// assert_eq!(parse_currency("abc"), 0.0);
/// ```
pub fn parse_currency(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| !matches!(c, 'R' | '$' | '.') && !c.is_whitespace())
        .collect();

    match cleaned.replacen(',', ".", 1).parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_and_decimals() {
        assert_eq!(parse_currency("20.000,00"), 20000.0);
        assert_eq!(parse_currency("19.999,99"), 19999.99);
        assert_eq!(parse_currency("1.234.567,89"), 1234567.89);
    }

    #[test]
    fn test_currency_symbol_and_spaces() {
        assert_eq!(parse_currency("R$ 1.500,50"), 1500.5);
        assert_eq!(parse_currency("  R$20.000  "), 20000.0);
        assert_eq!(parse_currency("R$\u{a0}5.000,00"), 5000.0);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_currency("20000"), 20000.0);
        assert_eq!(parse_currency("150,5"), 150.5);
        assert_eq!(parse_currency("-10,00"), -10.0);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(parse_currency(""), 0.0);
        assert_eq!(parse_currency("   "), 0.0);
        assert_eq!(parse_currency("R$"), 0.0);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_currency("abc"), 0.0);
        assert_eq!(parse_currency("1,000,00"), 0.0);
        assert_eq!(parse_currency("vinte mil"), 0.0);
    }

    #[test]
    fn test_nan_is_zero() {
        assert_eq!(parse_currency("NaN"), 0.0);
        assert_eq!(parse_currency("nan"), 0.0);
    }

    #[test]
    fn test_overflow_stays_infinite() {
        assert_eq!(parse_currency("1e400"), f64::INFINITY);
        assert_eq!(parse_currency("Infinity"), f64::INFINITY);
        assert_eq!(parse_currency("-1e400"), f64::NEG_INFINITY);
    }
}
