// 🧾 Receipt Models - Wire shapes for submitted receipts
// Fields stay as the client sent them; typed views are parsed on demand

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Date format accepted for `purchaseDate`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format accepted for `purchaseTime` (24-hour clock)
pub const TIME_FORMAT: &str = "%H:%M";

// ============================================================================
// ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "shortDescription")]
    pub short_description: String,

    /// Decimal amount as a string, e.g. "6.49"
    pub price: String,
}

impl Item {
    pub fn new(short_description: &str, price: &str) -> Self {
        Item {
            short_description: short_description.to_string(),
            price: price.to_string(),
        }
    }

    /// Parsed price, `None` when the string is not a decimal number
    pub fn price_amount(&self) -> Option<Decimal> {
        parse_amount(&self.price)
    }
}

// ============================================================================
// RECEIPT
// ============================================================================

/// A submitted purchase record.
///
/// `id` is empty until the store assigns one. Once stored the record is
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub retailer: String,

    #[serde(rename = "purchaseDate")]
    pub purchase_date: String,

    #[serde(rename = "purchaseTime")]
    pub purchase_time: String,

    pub items: Vec<Item>,

    pub total: String,
}

impl Receipt {
    /// Parsed total, `None` when unparsable
    pub fn total_amount(&self) -> Option<Decimal> {
        parse_amount(&self.total)
    }

    /// Parsed purchase date, exactly `YYYY-MM-DD` with zero-padded fields
    pub fn date(&self) -> Option<NaiveDate> {
        if !is_padded_date(&self.purchase_date) {
            return None;
        }
        NaiveDate::parse_from_str(&self.purchase_date, DATE_FORMAT).ok()
    }

    /// Parsed purchase time (`HH:MM`)
    pub fn time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.purchase_time, TIME_FORMAT).ok()
    }
}

/// Ten bytes: four digits, '-', two digits, '-', two digits.
/// chrono's `%m` and `%d` also accept a single digit.
fn is_padded_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(s).ok()
}

// ============================================================================
// RESPONSES
// ============================================================================

/// Body returned by `POST /receipts/process`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptIdResponse {
    pub id: String,
}

/// Body returned by `/receipts/{id}/points`. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Points {
    pub points: i64,
}

// ============================================================================
// TESTS
// ============================================================================
