use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::dto::{InputRow, RowRecord};
use crate::encoder::{encode_avere, encode_dare};
use crate::error::Result;

/// Target ledger of a row, decided by the sign of its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ledger {
    /// Credit file, `amount < 0`.
    Avere,
    /// Debit file, `amount >= 0`.
    Dare,
}

impl Ledger {
    pub fn for_amount(amount: Decimal) -> Self {
        if amount < Decimal::ZERO {
            Ledger::Avere
        } else {
            Ledger::Dare
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Ledger::Avere => "Avere.ASC",
            Ledger::Dare => "Dare.ASC",
        }
    }
}

/// Counts and file contents of a converted batch. Contents are `\n`-joined
/// lines without a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub total_records: usize,
    pub dare_count: usize,
    pub avere_count: usize,
    pub avere_content: String,
    pub dare_content: String,
}

impl ConversionResult {
    pub fn content(&self, ledger: Ledger) -> &str {
        match ledger {
            Ledger::Avere => &self.avere_content,
            Ledger::Dare => &self.dare_content,
        }
    }

    pub fn count(&self, ledger: Ledger) -> usize {
        match ledger {
            Ledger::Avere => self.avere_count,
            Ledger::Dare => self.dare_count,
        }
    }
}

/// Incremental batch splitter. Rows are encoded as they are pushed and keep
/// their relative order within each ledger.
#[derive(Debug, Default)]
pub struct Converter {
    avere: Vec<String>,
    dare: Vec<String>,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `row` into the ledger its amount routes it to.
    pub fn push(&mut self, row: &InputRow) -> Ledger {
        let ledger = Ledger::for_amount(row.amount);
        debug!(
            "client {} amount {} -> {}",
            row.client_id,
            row.amount,
            ledger.file_name()
        );
        match ledger {
            Ledger::Avere => self.avere.push(encode_avere(row)),
            Ledger::Dare => self.dare.push(encode_dare(row)),
        }
        ledger
    }

    pub fn finish(self) -> ConversionResult {
        let result = ConversionResult {
            total_records: self.avere.len() + self.dare.len(),
            dare_count: self.dare.len(),
            avere_count: self.avere.len(),
            avere_content: self.avere.join("\n"),
            dare_content: self.dare.join("\n"),
        };
        info!(
            "converted {} records: {} dare, {} avere",
            result.total_records, result.dare_count, result.avere_count
        );
        for ledger in [Ledger::Avere, Ledger::Dare] {
            if result.count(ledger) == 0 {
                warn!("no records routed to {}", ledger.file_name());
            }
        }
        result
    }
}

/// Converts already validated rows. Rows built by hand must keep
/// `amount * 100` within [`Decimal`] range; use [`convert_records`] to have
/// amounts checked.
pub fn convert(rows: &[InputRow]) -> ConversionResult {
    let mut converter = Converter::new();
    for row in rows {
        converter.push(row);
    }
    converter.finish()
}

/// Validates and converts raw records. The first invalid record aborts the
/// batch and nothing is returned for the rows before it.
pub fn convert_records<I>(records: I) -> Result<ConversionResult>
where
    I: IntoIterator<Item = RowRecord>,
{
    let mut converter = Converter::new();
    for (index, record) in records.into_iter().enumerate() {
        let row = record.validate(index + 1)?;
        converter.push(&row);
    }
    Ok(converter.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn row(day: u32, amount: Decimal, client_id: u64) -> InputRow {
        InputRow::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            amount,
            client_id,
        )
    }

    fn record(amount: &str, client_id: &str) -> RowRecord {
        RowRecord {
            posting_date: Some("2024-03-01".to_string()),
            amount: Some(amount.to_string()),
            client_id: Some(client_id.to_string()),
            ..RowRecord::default()
        }
    }

    #[test]
    fn test_ledger_for_amount() {
        assert_eq!(Ledger::for_amount(dec!(-0.01)), Ledger::Avere);
        assert_eq!(Ledger::for_amount(dec!(0)), Ledger::Dare);
        assert_eq!(Ledger::for_amount(dec!(-0)), Ledger::Dare);
        assert_eq!(Ledger::for_amount(dec!(0.01)), Ledger::Dare);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Ledger::Avere.file_name(), "Avere.ASC");
        assert_eq!(Ledger::Dare.file_name(), "Dare.ASC");
    }

    #[test]
    fn test_single_credit_row() {
        let result = convert(&[row(1, dec!(-150.50), 42)]);
        assert_eq!(
            result,
            ConversionResult {
                total_records: 1,
                dare_count: 0,
                avere_count: 1,
                avere_content: "01/03/24,C,       42,     1,01/03/24,15050,        1".to_string(),
                dare_content: String::new(),
            }
        );
    }

    #[test]
    fn test_partition_is_stable() {
        let rows = vec![
            row(1, dec!(-1), 1),
            row(2, dec!(2), 2),
            row(3, dec!(-3), 3),
            row(4, dec!(0), 4),
            row(5, dec!(-5), 5),
            row(6, dec!(6), 6),
        ];
        let result = convert(&rows);

        assert_eq!(result.total_records, 6);
        assert_eq!(result.avere_count, 3);
        assert_eq!(result.dare_count, 3);
        assert_eq!(result.avere_count + result.dare_count, result.total_records);

        let avere_clients: Vec<&str> = result
            .avere_content
            .lines()
            .map(|line| line.split(',').nth(2).unwrap().trim())
            .collect();
        assert_eq!(avere_clients, ["1", "3", "5"]);

        let dare_clients: Vec<&str> = result
            .dare_content
            .lines()
            .map(|line| line.split(',').nth(1).unwrap().trim())
            .collect();
        assert_eq!(dare_clients, ["2", "4", "6"]);
    }

    #[test]
    fn test_no_trailing_newline() {
        let result = convert(&[row(1, dec!(1), 1), row(2, dec!(2), 2)]);
        assert_eq!(result.dare_content.matches('\n').count(), 1);
        assert!(!result.dare_content.ends_with('\n'));
    }

    #[test]
    fn test_empty_batch() {
        let result = convert(&[]);
        assert_eq!(result.total_records, 0);
        assert_eq!(result.content(Ledger::Avere), "");
        assert_eq!(result.content(Ledger::Dare), "");
    }

    #[test]
    fn test_push_reports_ledger() {
        let mut converter = Converter::new();
        assert_eq!(converter.push(&row(1, dec!(-1), 1)), Ledger::Avere);
        assert_eq!(converter.push(&row(1, dec!(1), 1)), Ledger::Dare);
        let result = converter.finish();
        assert_eq!(result.count(Ledger::Avere), 1);
        assert_eq!(result.count(Ledger::Dare), 1);
    }

    #[test]
    fn test_convert_records_matches_convert() {
        let records = vec![record("-1.25", "10"), record("3", "11")];
        let result = convert_records(records).unwrap();
        let expected = convert(&[row(1, dec!(-1.25), 10), row(1, dec!(3), 11)]);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_convert_records_aborts_on_missing_field() {
        let records = vec![
            record("1", "10"),
            record("2", "11"),
            RowRecord {
                client_id: None,
                ..record("3", "12")
            },
        ];
        let result = convert_records(records);
        assert!(matches!(
            result,
            Err(Error::MissingRequiredField {
                row: 3,
                field: "client_id"
            })
        ));
    }

    #[test]
    fn test_convert_records_rejects_amount_without_cent_range() {
        let result = convert_records(vec![record(&Decimal::MAX.to_string(), "10")]);
        assert!(matches!(result, Err(Error::InvalidAmount { row: 1, .. })));
    }

    #[test]
    fn test_convert_records_aborts_on_invalid_amount() {
        let result = convert_records(vec![record("1", "10"), record("1,5", "11")]);
        assert!(matches!(result, Err(Error::InvalidAmount { row: 2, .. })));
    }
}
