//! Field formatters for the fixed-width ASC layouts.
//!
//! Each function renders one value into its padded text form. Widths are
//! minimums: values longer than the width are emitted in full, never truncated.

use std::fmt::Display;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

const BIRTH_DATE_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// `DD/MM/YY`, used for posting and reference dates.
    Short,
    /// `DD/MM/YYYY`, used for birth dates.
    Long,
}

impl DatePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePattern::Short => "%d/%m/%y",
            DatePattern::Long => "%d/%m/%Y",
        }
    }
}

/// Renders a date, or the empty string when it is missing.
pub fn format_date(value: Option<NaiveDate>, pattern: DatePattern) -> String {
    match value {
        Some(date) => date.format(pattern.as_str()).to_string(),
        None => String::new(),
    }
}

/// Renders a birth date as `DD/MM/YYYY`. Unlike [`format_date`], a missing
/// birth date keeps the column width and renders as 10 spaces.
pub fn format_birth_date(value: Option<NaiveDate>) -> String {
    match value {
        Some(_) => format_date(value, DatePattern::Long),
        None => " ".repeat(BIRTH_DATE_WIDTH),
    }
}

/// Converts an amount in major units to whole cents, rounding half to even.
///
/// `amount * 100` must fit in a [`Decimal`]; [`RowRecord::validate`] rejects
/// amounts that do not. Out-of-range amounts saturate instead of panicking, so
/// their cents are wrong.
///
/// [`RowRecord::validate`]: crate::dto::RowRecord::validate
pub fn format_amount_cents(amount: Decimal, absolute: bool) -> i128 {
    // Scale is 0 after rounding, so the mantissa is the integer value.
    let cents = amount
        .saturating_mul(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .mantissa();
    if absolute {
        cents.abs()
    } else {
        cents
    }
}

/// Aligns `text` to the left of a `width`-wide field, filling with spaces.
pub fn pad_left(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

/// Aligns `value` to the right of a `width`-wide field, filling with spaces.
pub fn pad_right(value: impl Display, width: usize) -> String {
    format!("{value:>width$}")
}

pub fn zero_pad_int(value: u64, width: usize) -> String {
    format!("{value:0width$}")
}
