use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::{asc_paths, RunOutput};
use crate::{
    config::Config,
    csv_utils::load_rows,
    engine::{convert, ConversionResult},
    error::Result,
};

/// Runs the conversion on the given input file and writes both ASC files into `out_dir`.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file exported from the spreadsheet
/// * `out_dir` - Existing directory that receives `Avere.ASC` and `Dare.ASC`
/// * `config` - Input limits
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read or exceeds the size limit
/// * The CSV is malformed or a row misses a required field
/// * Writing the output files fails
///
/// On error no output file is written.
pub fn run<P, D>(input_path: P, out_dir: D, config: &Config) -> Result<RunOutput>
where
    P: AsRef<Path>,
    D: AsRef<Path>,
{
    let rows = load_rows(input_path, config)?;
    let result = convert(&rows);
    let files = write_asc_files(&result, out_dir)?;
    Ok(RunOutput { result, files })
}

/// Writes both ledgers into `out_dir`, including empty ones.
/// Returns the written paths in `[Avere, Dare]` order.
pub fn write_asc_files<D: AsRef<Path>>(
    result: &ConversionResult,
    out_dir: D,
) -> Result<[PathBuf; 2]> {
    let paths = asc_paths(out_dir.as_ref());
    for (ledger, path) in &paths {
        fs::write(path, result.content(*ledger))?;
        info!("wrote {}", path.display());
    }
    Ok(paths.map(|(_, path)| path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn read(dir: &Path, name: &str) -> String {
        fs::read_to_string(dir.join(name)).unwrap()
    }

    #[test]
    fn test_sample_input() -> Result<()> {
        let out_dir = tempfile::tempdir()?;
        let RunOutput { result, files } =
            run("data/sample_input.csv", out_dir.path(), &Config::default())?;

        assert_eq!(
            files,
            [
                out_dir.path().join("Avere.ASC"),
                out_dir.path().join("Dare.ASC")
            ]
        );
        assert_eq!(result.total_records, 5);
        assert_eq!(result.dare_count, 3);
        assert_eq!(result.avere_count, 2);
        assert_eq!(
            read(out_dir.path(), "Avere.ASC"),
            fs::read_to_string("data/sample_Avere.ASC")?
        );
        assert_eq!(
            read(out_dir.path(), "Dare.ASC"),
            fs::read_to_string("data/sample_Dare.ASC")?
        );
        Ok(())
    }

    #[test]
    fn test_output_has_no_bom_or_trailing_newline() -> Result<()> {
        let out_dir = tempfile::tempdir()?;
        run("data/sample_input.csv", out_dir.path(), &Config::default())?;

        let avere = fs::read(out_dir.path().join("Avere.ASC"))?;
        assert!(avere.starts_with(b"15/01/24,C,"));
        assert_ne!(avere.last(), Some(&b'\n'));
        Ok(())
    }

    #[test]
    fn test_invalid_input_writes_nothing() -> Result<()> {
        let out_dir = tempfile::tempdir()?;
        let result = run("data/missing_client.csv", out_dir.path(), &Config::default());

        assert!(matches!(
            result,
            Err(Error::MissingRequiredField { row: 2, .. })
        ));
        assert!(!out_dir.path().join("Avere.ASC").exists());
        assert!(!out_dir.path().join("Dare.ASC").exists());
        Ok(())
    }

    #[test]
    fn test_malformed_csv_writes_nothing() -> Result<()> {
        let out_dir = tempfile::tempdir()?;
        let result = run("data/unequal_fields.csv", out_dir.path(), &Config::default());

        assert!(matches!(result, Err(Error::Csv(_))));
        assert!(!out_dir.path().join("Avere.ASC").exists());
        assert!(!out_dir.path().join("Dare.ASC").exists());
        Ok(())
    }

    #[test]
    fn test_empty_ledger_still_written() -> Result<()> {
        let out_dir = tempfile::tempdir()?;
        let result = ConversionResult {
            total_records: 0,
            dare_count: 0,
            avere_count: 0,
            avere_content: String::new(),
            dare_content: String::new(),
        };
        let [avere, dare] = write_asc_files(&result, out_dir.path())?;

        assert_eq!(avere, out_dir.path().join("Avere.ASC"));
        assert_eq!(fs::read_to_string(avere)?, "");
        assert_eq!(fs::read_to_string(dare)?, "");
        Ok(())
    }
}
