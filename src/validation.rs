//! Form-field parsing.
//!
//! Every screen parses its text buffers through these helpers before
//! touching a store, so a bad numeric entry becomes a recoverable
//! [`ValidationError`] instead of a crashed action.

use crate::error::ValidationError;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejects empty (or whitespace-only) input and returns the trimmed value.
pub fn require_nonempty(field: &'static str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_string())
}

/// Parses a product id field.
pub fn parse_id(field: &'static str, value: &str) -> ValidationResult<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidInteger { field })
}

/// Parses a quantity field; quantities are whole and non-negative.
pub fn parse_quantity(field: &'static str, value: &str) -> ValidationResult<i64> {
    let quantity = parse_id(field, value)?;
    if quantity < 0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(quantity)
}

/// Parses a price field; prices are real and non-negative.
pub fn parse_price(field: &'static str, value: &str) -> ValidationResult<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let price = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumber { field })?;
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonempty_trims_input() {
        assert_eq!(require_nonempty("Name", "  Widget  ").unwrap(), "Widget");
        assert_eq!(
            require_nonempty("Name", "   "),
            Err(ValidationError::Empty { field: "Name" })
        );
    }

    #[test]
    fn id_accepts_integers_only() {
        assert_eq!(parse_id("Product ID", "42").unwrap(), 42);
        assert_eq!(parse_id("Product ID", " 7 ").unwrap(), 7);
        assert_eq!(
            parse_id("Product ID", "seven"),
            Err(ValidationError::InvalidInteger { field: "Product ID" })
        );
        assert_eq!(
            parse_id("Product ID", "3.5"),
            Err(ValidationError::InvalidInteger { field: "Product ID" })
        );
        assert_eq!(
            parse_id("Product ID", ""),
            Err(ValidationError::Empty { field: "Product ID" })
        );
    }

    #[test]
    fn quantity_rejects_negatives() {
        assert_eq!(parse_quantity("Quantity", "0").unwrap(), 0);
        assert_eq!(parse_quantity("Quantity", "12").unwrap(), 12);
        assert_eq!(
            parse_quantity("Quantity", "-1"),
            Err(ValidationError::Negative { field: "Quantity" })
        );
    }

    #[test]
    fn price_accepts_decimals() {
        assert_eq!(parse_price("Price", "2.50").unwrap(), 2.50);
        assert_eq!(parse_price("Price", "3").unwrap(), 3.0);
        assert_eq!(
            parse_price("Price", "free"),
            Err(ValidationError::InvalidNumber { field: "Price" })
        );
        assert_eq!(
            parse_price("Price", "-0.01"),
            Err(ValidationError::Negative { field: "Price" })
        );
        assert_eq!(
            parse_price("Price", "NaN"),
            Err(ValidationError::Negative { field: "Price" })
        );
    }
}
