// 🏆 Points Calculator - Loyalty score for a stored receipt
// Seven independent additive rules. A field that does not parse makes its
// rule contribute nothing; it never fails the whole computation.

use crate::models::Receipt;
use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

const ROUND_DOLLAR_POINTS: i64 = 50;
const QUARTER_MULTIPLE_POINTS: i64 = 25;
const ITEM_PAIR_POINTS: i64 = 5;
const ODD_DAY_POINTS: i64 = 6;
const AFTERNOON_POINTS: i64 = 10;

/// Purchases in [14:00, 16:00) earn the afternoon bonus
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

// ============================================================================
// BREAKDOWN
// ============================================================================

/// Contribution of every rule, kept apart for logging and `--explain`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: i64,
    pub round_dollar: i64,
    pub quarter_multiple: i64,
    pub item_pairs: i64,
    pub descriptions: i64,
    pub odd_day: i64,
    pub afternoon: i64,
}

impl PointsBreakdown {
    /// Sum of all rules, saturating at the `i64` bounds
    pub fn total(&self) -> i64 {
        self.rules()
            .iter()
            .fold(0i64, |acc, (_, points)| acc.saturating_add(*points))
    }

    /// (rule name, points) pairs in evaluation order
    pub fn rules(&self) -> [(&'static str, i64); 7] {
        [
            ("retailer", self.retailer),
            ("round_dollar", self.round_dollar),
            ("quarter_multiple", self.quarter_multiple),
            ("item_pairs", self.item_pairs),
            ("descriptions", self.descriptions),
            ("odd_day", self.odd_day),
            ("afternoon", self.afternoon),
        ]
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Score a receipt
pub fn compute(receipt: &Receipt) -> i64 {
    breakdown(receipt).total()
}

/// Evaluate every rule independently
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = receipt.total_amount();

    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: match total {
            Some(t) if t.fract().is_zero() => ROUND_DOLLAR_POINTS,
            _ => 0,
        },
        quarter_multiple: match total {
            Some(t) if (t % Decimal::new(25, 2)).is_zero() => QUARTER_MULTIPLE_POINTS,
            _ => 0,
        },
        item_pairs: ITEM_PAIR_POINTS.saturating_mul((receipt.items.len() / 2) as i64),
        descriptions: receipt
            .items
            .iter()
            .map(|item| description_points(&item.short_description, item.price_amount()))
            .fold(0i64, i64::saturating_add),
        odd_day: match receipt.date() {
            Some(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
            _ => 0,
        },
        afternoon: match receipt.time() {
            Some(time) if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&time.hour()) => {
                AFTERNOON_POINTS
            }
            _ => 0,
        },
    }
}

/// One point per ASCII letter or digit
fn retailer_points(retailer: &str) -> i64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as i64
}

/// ceil(price * 0.2) when the trimmed description length is a multiple of 3.
/// Length is in bytes; an empty description qualifies. Prices beyond the
/// `i64` range clamp to its bounds.
fn description_points(description: &str, price: Option<Decimal>) -> i64 {
    if description.trim().len() % 3 != 0 {
        return 0;
    }

    let Some(price) = price else {
        return 0;
    };

    let points = (price * Decimal::new(2, 1)).ceil();
    points.to_i64().unwrap_or(if points.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn receipt(retailer: &str, date: &str, time: &str, items: Vec<Item>, total: &str) -> Receipt {
        Receipt {
            id: String::new(),
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items,
            total: total.to_string(),
        }
    }

    fn target_receipt() -> Receipt {
        receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        )
    }

    fn corner_market_receipt() -> Receipt {
        receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            vec![
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
            ],
            "9.00",
        )
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let r = target_receipt();
        let b = breakdown(&r);

        assert_eq!(b.retailer, 6);
        assert_eq!(b.round_dollar, 0);
        assert_eq!(b.quarter_multiple, 0);
        assert_eq!(b.item_pairs, 10);
        assert_eq!(b.descriptions, 6);
        assert_eq!(b.odd_day, 6);
        assert_eq!(b.afternoon, 0);
        assert_eq!(compute(&r), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let r = corner_market_receipt();
        let b = breakdown(&r);

        assert_eq!(b.retailer, 14);
        assert_eq!(b.round_dollar, 50);
        assert_eq!(b.quarter_multiple, 25);
        assert_eq!(b.item_pairs, 10);
        assert_eq!(b.descriptions, 0);
        assert_eq!(b.odd_day, 0);
        assert_eq!(b.afternoon, 10);
        assert_eq!(compute(&r), 109);
    }

    #[test]
    fn test_single_item_target_scores_12() {
        // "Mountain Dew 12PK" is 17 bytes, so only retailer and odd day fire
        let r = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![Item::new("Mountain Dew 12PK", "6.49")],
            "35.35",
        );
        assert_eq!(compute(&r), 12);
    }

    #[test]
    fn test_retailer_counts_ascii_alphanumerics_only() {
        assert_eq!(retailer_points("M&M Corner Market"), 14);
        assert_eq!(retailer_points("  --  "), 0);
        assert_eq!(retailer_points("Café 24"), 5);
    }

    #[test]
    fn test_whole_dollar_total_fires_both_total_rules() {
        let r = receipt("", "2022-01-02", "10:00", vec![], "100.00");
        let b = breakdown(&r);
        assert_eq!(b.round_dollar + b.quarter_multiple, 75);
    }

    #[test]
    fn test_quarter_total_without_round_dollar() {
        let r = receipt("", "2022-01-02", "10:00", vec![], "12.75");
        let b = breakdown(&r);
        assert_eq!(b.round_dollar, 0);
        assert_eq!(b.quarter_multiple, 25);
    }

    #[test]
    fn test_uneven_total_fires_neither_total_rule() {
        let r = receipt("", "2022-01-02", "10:00", vec![], "35.35");
        let b = breakdown(&r);
        assert_eq!(b.round_dollar, 0);
        assert_eq!(b.quarter_multiple, 0);
    }

    #[test]
    fn test_item_pairs_round_down() {
        let items = |n: usize| vec![Item::new("ab", "1.00"); n];

        assert_eq!(breakdown(&receipt("", "", "", items(1), "")).item_pairs, 0);
        assert_eq!(breakdown(&receipt("", "", "", items(2), "")).item_pairs, 5);
        assert_eq!(breakdown(&receipt("", "", "", items(4), "")).item_pairs, 10);
        assert_eq!(breakdown(&receipt("", "", "", items(5), "")).item_pairs, 10);
    }

    #[test]
    fn test_description_points() {
        let price = |s: &str| s.parse::<Decimal>().ok();

        assert_eq!(description_points("Gatorade", price("100.00")), 0);
        assert_eq!(description_points("Emils Cheese Pizza", price("12.25")), 3);
        assert_eq!(description_points("   Klarbrunn 12-PK 12 FL OZ  ", price("12.00")), 3);
        // exact multiples of 5 do not round up
        assert_eq!(description_points("abc", price("10.00")), 2);
        assert_eq!(description_points("abc", price("6.49")), 2);
        assert_eq!(description_points("   ", price("1.00")), 1);
        assert_eq!(description_points("abc", None), 0);
    }

    #[test]
    fn test_huge_prices_saturate_instead_of_overflowing() {
        let items = vec![
            Item::new("abc", "40000000000000000000"),
            Item::new("abc", "40000000000000000000"),
        ];
        let r = receipt("Target", "2022-01-01", "14:00", items, "80000000000000000000");

        assert_eq!(breakdown(&r).descriptions, i64::MAX);
        assert_eq!(compute(&r), i64::MAX);
    }

    #[test]
    fn test_price_beyond_i64_clamps() {
        let price = |s: &str| s.parse::<Decimal>().ok();

        assert_eq!(description_points("abc", price("50000000000000000000000")), i64::MAX);
        assert_eq!(description_points("abc", price("-50000000000000000000000")), i64::MIN);
        assert_eq!(description_points("abc", price("-10.00")), -2);
    }

    #[test]
    fn test_odd_day_rule() {
        let on = |date: &str| breakdown(&receipt("", date, "", vec![], "")).odd_day;

        assert_eq!(on("2022-01-01"), 6);
        assert_eq!(on("2022-01-31"), 6);
        assert_eq!(on("2022-01-02"), 0);
        assert_eq!(on("not-a-date"), 0);
    }

    #[test]
    fn test_afternoon_window_is_half_open() {
        let at = |time: &str| breakdown(&receipt("", "", time, vec![], "")).afternoon;

        assert_eq!(at("13:59"), 0);
        assert_eq!(at("14:00"), 10);
        assert_eq!(at("15:59"), 10);
        assert_eq!(at("16:00"), 0);
        assert_eq!(at("2pm"), 0);
    }

    #[test]
    fn test_unparsable_total_contributes_nothing() {
        let r = receipt("", "", "", vec![], "lots");
        let b = breakdown(&r);
        assert_eq!(b.round_dollar, 0);
        assert_eq!(b.quarter_multiple, 0);
        assert_eq!(b.total(), 0);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let r = target_receipt();
        assert_eq!(compute(&r), compute(&r));
        assert_eq!(breakdown(&r).rules().iter().map(|(_, p)| p).sum::<i64>(), compute(&r));
    }
}
