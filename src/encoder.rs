//! Record encoders for the two ASC layouts.
//!
//! Each encoder turns one validated [`InputRow`] into one comma-joined line.
//! Field order and widths are fixed by the back-office import format.

use crate::dto::InputRow;
use crate::format::{
    format_amount_cents, format_birth_date, format_date, pad_left, pad_right, zero_pad_int,
    DatePattern,
};

const CREDIT_MARKER: &str = "C";
/// Constant code emitted twice on every credit line.
const CREDIT_CODE: u64 = 1;

/// Encodes a credit ("Avere") line:
/// `date,C,client,code,reference date,|cents|,code`.
pub fn encode_avere(row: &InputRow) -> String {
    let posting_date = format_date(Some(row.posting_date), DatePattern::Short);
    // The reference date is the posting date.
    let reference_date = format_date(Some(row.posting_date), DatePattern::Short);
    [
        posting_date,
        CREDIT_MARKER.to_string(),
        pad_right(row.client_id, 9),
        pad_right(CREDIT_CODE, 6),
        reference_date,
        pad_right(format_amount_cents(row.amount, true), 5),
        pad_right(CREDIT_CODE, 9),
    ]
    .join(",")
}

/// Encodes a debit ("Dare") line with the full customer block.
pub fn encode_dare(row: &InputRow) -> String {
    let (birth_city, birth_province) = split_birth_city(row.birth_city.as_deref());
    [
        format_date(Some(row.posting_date), DatePattern::Short),
        pad_right(row.client_id, 5),
        pad_left(&full_name(row), 35),
        pad_left(text(&row.address), 35),
        residence_field(row),
        pad_right(format_amount_cents(row.amount, false), 9),
        birth_city,
        birth_province,
        pad_left(text(&row.birth_country), 23),
        pad_left(text(&row.birth_country_code), 5),
        format_birth_date(row.birth_date),
        text(&row.tax_code).to_string(),
    ]
    .join(",")
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// `"{last} {first}"` with surrounding whitespace trimmed.
fn full_name(row: &InputRow) -> String {
    format!("{} {}", text(&row.last_name), text(&row.first_name))
        .trim()
        .to_string()
}

/// Postal code, city and province packed into a single column:
/// `PPPPP CITY(25)PR`.
fn residence_field(row: &InputRow) -> String {
    format!(
        "{} {}{}",
        zero_pad_int(row.postal_code.unwrap_or(0), 5),
        pad_left(text(&row.residence_city), 25),
        pad_right(text(&row.province), 2),
    )
}

/// Splits `"CITY,PR"` at the first comma into the 26-wide city column and the
/// 2-wide province column. Without a comma the province is blank.
fn split_birth_city(value: Option<&str>) -> (String, String) {
    match value.unwrap_or_default().split_once(',') {
        Some((city, province)) => (pad_left(city, 26), pad_right(province.trim(), 2)),
        None => (pad_left(value.unwrap_or_default(), 26), " ".repeat(2)),
    }
}
