//! Receipt validation
//!
//! Checks the fields a receipt must be able to parse before it may be stored:
//! the total, every item price, the purchase date and the purchase time.
//! Retailer and descriptions are accepted as-is and there is no cross-field
//! check (item prices need not sum to the total).

use crate::types::{Amount, Receipt, ReceiptError};
use chrono::{NaiveDate, NaiveTime};

/// Accepted purchase date layout
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted purchase time layout (24-hour)
pub const TIME_FORMAT: &str = "%H:%M";

/// Digit/separator shape of a purchase date, `#` marking an ASCII digit
const DATE_SHAPE: &str = "####-##-##";

/// Digit/separator shape of a purchase time
const TIME_SHAPE: &str = "##:##";

/// True if `value` has exactly the given shape
///
/// chrono on its own accepts one-digit fields and leading whitespace.
fn has_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value
            .bytes()
            .zip(shape.bytes())
            .all(|(actual, expected)| match expected {
                b'#' => actual.is_ascii_digit(),
                separator => actual == separator,
            })
}

/// Parse a purchase date, returning `None` unless it is a zero-padded
/// `YYYY-MM-DD` calendar date
pub fn parse_purchase_date(value: &str) -> Option<NaiveDate> {
    if !has_shape(value, DATE_SHAPE) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parse a purchase time, returning `None` unless it is a zero-padded
/// `HH:MM` time of day
pub fn parse_purchase_time(value: &str) -> Option<NaiveTime> {
    if !has_shape(value, TIME_SHAPE) {
        return None;
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
}

/// Validate the structurally required fields of a receipt
///
/// Fields are checked in declaration order (date, time, item prices, total)
/// and the first failure is reported.
///
/// # Errors
///
/// Returns `ReceiptError::InvalidReceipt` naming the offending field if:
/// - `purchase_date` is not a valid zero-padded `YYYY-MM-DD` calendar date
/// - `purchase_time` is not a valid zero-padded `HH:MM` time of day
/// - any item `price` or the `total` is not a non-negative amount with at
///   most two decimal places
pub fn validate(receipt: &Receipt) -> Result<(), ReceiptError> {
    parse_purchase_date(&receipt.purchase_date)
        .ok_or_else(|| ReceiptError::invalid_date(&receipt.purchase_date))?;

    parse_purchase_time(&receipt.purchase_time)
        .ok_or_else(|| ReceiptError::invalid_time(&receipt.purchase_time))?;

    for (index, item) in receipt.items.iter().enumerate() {
        item.price.parse::<Amount>().map_err(|_| {
            ReceiptError::invalid_amount(&format!("items[{}].price", index), &item.price)
        })?;
    }

    receipt
        .total
        .parse::<Amount>()
        .map_err(|_| ReceiptError::invalid_amount("total", &receipt.total))?;

    Ok(())
}
