//! This example generates a CSV export with a number of synthetic ledger rows
//! (supplied as a command-line argument), shaped like the back-office sheet.
//!
//! The CSV file can then be used to exercise or benchmark `asc-converter`.
//!
//! Example (10 000 rows):
//! ```bash
//! cargo run --example generator 10000 > data/10K_rows.csv
//! ```
//! Every third row has a negative amount and lands in `Avere.ASC`; the others
//! land in `Dare.ASC`. Every fifth row leaves the optional columns blank.

use asc_converter::RowRecord;
use csv::Writer;
use std::{env, error::Error};

const CITIES: [(&str, &str); 4] = [
    ("Milano", "MI"),
    ("Roma", "RM"),
    ("Torino", "TO"),
    ("Napoli", "NA"),
];

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_rows>");
        std::process::exit(1);
    }
    let num_rows: usize = args[1].parse()?;

    let mut writer = Writer::from_writer(std::io::stdout());
    for i in 1..=num_rows {
        writer.serialize(synthetic_row(i))?;
    }
    writer.flush()?;
    Ok(())
}

fn synthetic_row(i: usize) -> RowRecord {
    let sign = if i % 3 == 0 { "-" } else { "" };
    let required = RowRecord {
        posting_date: Some(format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1)),
        amount: Some(format!("{}{}.{:02}", sign, i * 7, i % 100)),
        client_id: Some(i.to_string()),
        ..RowRecord::default()
    };
    if i % 5 == 0 {
        return required;
    }

    let (city, province) = CITIES[i % CITIES.len()];
    let (birth_city, birth_province) = CITIES[(i / 2) % CITIES.len()];
    RowRecord {
        first_name: Some(format!("Nome{}", i)),
        last_name: Some(format!("Cognome{}", i)),
        address: Some(format!("Via Roma {}", i % 200 + 1)),
        postal_code: Some(format!("{:05}", (i * 37) % 99999)),
        residence_city: Some(city.to_string()),
        province: Some(province.to_string()),
        birth_city: Some(format!("{},{}", birth_city, birth_province)),
        birth_country: Some("Italia".to_string()),
        birth_country_code: Some("IT".to_string()),
        birth_date: Some(format!("19{:02}-{:02}-{:02}", 40 + i % 60, i % 12 + 1, i % 28 + 1)),
        tax_code: Some(format!(" TAX{:012}", i)),
        ..required
    }
}
