use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// One raw record of the spreadsheet export, keyed by the sheet's column names.
///
/// Every column is optional here; required columns are enforced by
/// [`RowRecord::validate`]. A column missing from the header reads as empty.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RowRecord {
    #[serde(rename = "Data_contabilizzazione")]
    pub posting_date: Option<String>,
    #[serde(rename = "Importo")]
    pub amount: Option<String>,
    #[serde(rename = "N_Cli")]
    pub client_id: Option<String>,
    #[serde(rename = "Nome")]
    pub first_name: Option<String>,
    #[serde(rename = "Cognome")]
    pub last_name: Option<String>,
    #[serde(rename = "Indirizzo")]
    pub address: Option<String>,
    #[serde(rename = "CAP")]
    pub postal_code: Option<String>,
    #[serde(rename = "Citta_residenza")]
    pub residence_city: Option<String>,
    #[serde(rename = "Provincia")]
    pub province: Option<String>,
    #[serde(rename = "Citta_nascita")]
    pub birth_city: Option<String>,
    #[serde(rename = "Nazione_nascita")]
    pub birth_country: Option<String>,
    #[serde(rename = "Sigla_nazione")]
    pub birth_country_code: Option<String>,
    #[serde(rename = "Data_nascita")]
    pub birth_date: Option<String>,
    #[serde(rename = "Cod_fisc")]
    pub tax_code: Option<String>,
}

/// A validated input row. Optional columns stay `None` when the cell was empty.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
    pub posting_date: NaiveDate,
    /// `amount * 100` must be representable; rows built by
    /// [`RowRecord::validate`] always satisfy this.
    pub amount: Decimal,
    pub client_id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<u64>,
    pub residence_city: Option<String>,
    pub province: Option<String>,
    pub birth_city: Option<String>,
    pub birth_country: Option<String>,
    pub birth_country_code: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// Kept verbatim, leading whitespace included.
    pub tax_code: Option<String>,
}

impl InputRow {
    /// A row with only the required fields set.
    pub fn new(posting_date: NaiveDate, amount: Decimal, client_id: u64) -> Self {
        Self {
            posting_date,
            amount,
            client_id,
            first_name: None,
            last_name: None,
            address: None,
            postal_code: None,
            residence_city: None,
            province: None,
            birth_city: None,
            birth_country: None,
            birth_country_code: None,
            birth_date: None,
            tax_code: None,
        }
    }
}

impl RowRecord {
    /// Validates the record found at 1-based position `row` into an [`InputRow`].
    pub fn validate(self, row: usize) -> Result<InputRow> {
        let posting_date = parse_date(row, "posting_date", self.posting_date)?
            .ok_or(Error::MissingRequiredField {
                row,
                field: "posting_date",
            })?;
        let amount = parse_amount(row, self.amount)?.ok_or(Error::MissingRequiredField {
            row,
            field: "amount",
        })?;
        let client_id = parse_integer(row, "client_id", self.client_id)?.ok_or(
            Error::MissingRequiredField {
                row,
                field: "client_id",
            },
        )?;

        Ok(InputRow {
            posting_date,
            amount,
            client_id,
            first_name: non_empty(self.first_name),
            last_name: non_empty(self.last_name),
            address: non_empty(self.address),
            postal_code: parse_integer(row, "postal_code", self.postal_code)?,
            residence_city: non_empty(self.residence_city),
            province: non_empty(self.province),
            birth_city: non_empty(self.birth_city),
            birth_country: non_empty(self.birth_country),
            birth_country_code: non_empty(self.birth_country_code),
            birth_date: parse_date(row, "birth_date", self.birth_date)?,
            tax_code: non_empty(self.tax_code),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Trimmed cell content, `None` for an empty or whitespace-only cell.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(
    row: usize,
    field: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>> {
    let Some(text) = non_blank(&value) else {
        return Ok(None);
    };
    let date = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .map(|datetime| datetime.date())
        })
        .ok_or_else(|| Error::InvalidDate {
            row,
            field,
            value: text.to_owned(),
        })?;
    Ok(Some(date))
}

fn parse_amount(row: usize, value: Option<String>) -> Result<Option<Decimal>> {
    let Some(text) = non_blank(&value) else {
        return Ok(None);
    };
    let invalid = || Error::InvalidAmount {
        row,
        value: text.to_owned(),
    };
    let amount = Decimal::from_str(text).map_err(|_| invalid())?;
    // The encoders work in cents, which must stay representable.
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(invalid)?;
    Ok(Some(amount))
}

/// Parses a non-negative integer. Integral decimals such as `20100.0`, which
/// spreadsheet exports write for numeric columns containing blanks, are accepted.
fn parse_integer(
    row: usize,
    field: &'static str,
    value: Option<String>,
) -> Result<Option<u64>> {
    let Some(text) = non_blank(&value) else {
        return Ok(None);
    };
    if let Ok(integer) = text.parse::<u64>() {
        return Ok(Some(integer));
    }
    Decimal::from_str(text)
        .ok()
        .filter(|decimal| decimal.fract().is_zero())
        .and_then(|decimal| decimal.to_u64())
        .map(Some)
        .ok_or_else(|| Error::InvalidInteger {
            row,
            field,
            value: text.to_owned(),
        })
}
