// 📐 Receipt Validation - Reject receipts whose fields cannot be scored
// Collects every field error instead of stopping at the first one

use crate::models::Receipt;
use serde::Serialize;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

// ============================================================================
// RECEIPT VALIDATOR
// ============================================================================

/// Checks that every field the scoring rules read is parsable.
/// Content is not judged: empty retailers, descriptions and item lists pass.
pub struct ReceiptValidator;

impl ReceiptValidator {
    pub fn validate(receipt: &Receipt) -> ValidationResult {
        let mut errors = Vec::new();

        if receipt.date().is_none() {
            errors.push(ValidationError::new("purchaseDate", "Expected date as YYYY-MM-DD"));
        }

        if receipt.time().is_none() {
            errors.push(ValidationError::new("purchaseTime", "Expected 24-hour time as HH:MM"));
        }

        if receipt.total_amount().is_none() {
            errors.push(ValidationError::new("total", "Expected a decimal amount"));
        }

        for (i, item) in receipt.items.iter().enumerate() {
            if item.price_amount().is_none() {
                errors.push(ValidationError::new(
                    &format!("items[{}].price", i),
                    "Expected a decimal amount",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
