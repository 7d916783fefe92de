//! Points scoring engine
//!
//! Computes the loyalty points for a receipt as the sum of seven independent
//! rules. Each rule produces a [`RuleOutcome`], and the outcomes are collected
//! in a [`PointsBreakdown`] whose total is the score.
//!
//! # Rules
//!
//! | Rule | Points |
//! |---|---|
//! | Retailer name | 1 per ASCII letter or digit |
//! | Round dollar total | 50 if the total has no cents |
//! | Quarter multiple total | 25 if the total is a multiple of 0.25 |
//! | Item pairs | 5 per complete pair of items |
//! | Description length | `ceil(price * 0.2)` per item whose trimmed description length is a positive multiple of 3 |
//! | Odd purchase day | 6 if the day of the month is odd |
//! | Afternoon purchase | 10 if the purchase time is strictly between 14:00 and 16:00 |
//!
//! Scoring never fails. A field that cannot be parsed makes the rules that
//! depend on it [`RuleOutcome::Unscorable`], which contributes zero, and the
//! remaining rules are still applied.

use crate::core::validation::{parse_purchase_date, parse_purchase_time};
use crate::types::{Amount, Item, Receipt};
use chrono::{Datelike, Timelike};
use rust_decimal::Decimal;

/// Points for a total with no cents
pub const ROUND_DOLLAR_POINTS: u64 = 50;

/// Points for a total that is a multiple of 0.25
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Points per complete pair of items
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Points for an odd day of the month
pub const ODD_DAY_POINTS: u64 = 6;

/// Points for a purchase inside the afternoon window
pub const AFTERNOON_POINTS: u64 = 10;

/// Afternoon window bounds in minutes after midnight (both exclusive)
const AFTERNOON_START: u32 = 14 * 60;
const AFTERNOON_END: u32 = 16 * 60;

/// Result of applying a single scoring rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule applied and awarded this many points
    Awarded(u64),

    /// The rule was evaluated and its condition did not hold
    NotMet,

    /// A field the rule depends on could not be parsed
    ///
    /// Contributes zero points; other rules are unaffected.
    Unscorable {
        /// Name of the unparsable field
        field: &'static str,
        /// The raw field value
        value: String,
    },
}

impl RuleOutcome {
    /// Points contributed by this outcome
    pub fn points(&self) -> u64 {
        match self {
            RuleOutcome::Awarded(points) => *points,
            RuleOutcome::NotMet | RuleOutcome::Unscorable { .. } => 0,
        }
    }

    fn award_if(condition: bool, points: u64) -> Self {
        if condition && points > 0 {
            RuleOutcome::Awarded(points)
        } else {
            RuleOutcome::NotMet
        }
    }

    fn unscorable(field: &'static str, value: &str) -> Self {
        RuleOutcome::Unscorable {
            field,
            value: value.to_string(),
        }
    }
}

/// Per-rule outcomes for one receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: RuleOutcome,
    pub round_dollar_total: RuleOutcome,
    pub quarter_multiple_total: RuleOutcome,
    pub item_pairs: RuleOutcome,
    pub description_length: RuleOutcome,
    pub odd_purchase_day: RuleOutcome,
    pub afternoon_purchase: RuleOutcome,
}

impl PointsBreakdown {
    /// All outcomes paired with a rule name, in rule order
    pub fn outcomes(&self) -> [(&'static str, &RuleOutcome); 7] {
        [
            ("retailer_name", &self.retailer_name),
            ("round_dollar_total", &self.round_dollar_total),
            ("quarter_multiple_total", &self.quarter_multiple_total),
            ("item_pairs", &self.item_pairs),
            ("description_length", &self.description_length),
            ("odd_purchase_day", &self.odd_purchase_day),
            ("afternoon_purchase", &self.afternoon_purchase),
        ]
    }

    /// Sum of all rule contributions
    pub fn total(&self) -> u64 {
        self.outcomes()
            .iter()
            .fold(0u64, |sum, (_, outcome)| sum.saturating_add(outcome.points()))
    }
}

/// Apply every rule to a receipt
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = receipt.total.parse::<Amount>();

    PointsBreakdown {
        retailer_name: retailer_name(&receipt.retailer),
        round_dollar_total: match &total {
            Ok(amount) => RuleOutcome::award_if(amount.is_whole(), ROUND_DOLLAR_POINTS),
            Err(_) => RuleOutcome::unscorable("total", &receipt.total),
        },
        quarter_multiple_total: match &total {
            Ok(amount) => RuleOutcome::award_if(
                amount.is_multiple_of(Decimal::new(25, 2)),
                QUARTER_MULTIPLE_POINTS,
            ),
            Err(_) => RuleOutcome::unscorable("total", &receipt.total),
        },
        item_pairs: item_pairs(&receipt.items),
        description_length: description_length(&receipt.items),
        odd_purchase_day: odd_purchase_day(&receipt.purchase_date),
        afternoon_purchase: afternoon_purchase(&receipt.purchase_time),
    }
}

/// Compute the points for a receipt
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

fn retailer_name(retailer: &str) -> RuleOutcome {
    let count = retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64;
    RuleOutcome::award_if(count > 0, count)
}

fn item_pairs(items: &[Item]) -> RuleOutcome {
    let pairs = (items.len() / 2) as u64;
    RuleOutcome::award_if(pairs > 0, pairs.saturating_mul(ITEM_PAIR_POINTS))
}

fn description_length(items: &[Item]) -> RuleOutcome {
    let factor = Decimal::new(2, 1);

    let points = items
        .iter()
        .filter(|item| {
            let length = item.short_description.trim().len();
            length > 0 && length % 3 == 0
        })
        .map(|item| match item.price.parse::<Amount>() {
            Ok(price) => price.scaled_ceil(factor).unwrap_or(0),
            Err(_) => {
                tracing::trace!(price = %item.price, "skipping item with unparsable price");
                0
            }
        })
        .fold(0u64, u64::saturating_add);

    RuleOutcome::award_if(points > 0, points)
}

fn odd_purchase_day(purchase_date: &str) -> RuleOutcome {
    match parse_purchase_date(purchase_date) {
        Some(date) => RuleOutcome::award_if(date.day() % 2 == 1, ODD_DAY_POINTS),
        None => RuleOutcome::unscorable("purchaseDate", purchase_date),
    }
}

fn afternoon_purchase(purchase_time: &str) -> RuleOutcome {
    match parse_purchase_time(purchase_time) {
        Some(time) => {
            let minutes = time.hour() * 60 + time.minute();
            RuleOutcome::award_if(
                minutes > AFTERNOON_START && minutes < AFTERNOON_END,
                AFTERNOON_POINTS,
            )
        }
        None => RuleOutcome::unscorable("purchaseTime", purchase_time),
    }
}
