use std::path::Path;

use super::{asc_paths, RunOutput};
use crate::{
    config::Config,
    csv_utils::check_input_size,
    dto::RowRecord,
    engine::{ConversionResult, Converter},
    error::Result,
};

use csv_async::{AsyncReaderBuilder, Trim};
use log::info;
use tokio::fs::{self, File};
use tokio::sync::mpsc;
use tokio_stream::StreamExt;

const BUFFER_SIZE: usize = 1024;

/// Runs the conversion async on the given input file and writes both ASC files into `out_dir`.
/// Spawns two tasks:
/// * CSV reader - streams records from the input file, deserializes them and sends them to the processor via channel.
/// * Processor - validates and encodes records until the channel is closed or a record is invalid.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file exported from the spreadsheet
/// * `out_dir` - Existing directory that receives `Avere.ASC` and `Dare.ASC`
/// * `config` - Input limits
///
/// # Errors
/// Same as the synchronous runner. On error no output file is written.
pub async fn run<P, D>(input_path: P, out_dir: D, config: &Config) -> Result<RunOutput>
where
    P: AsRef<Path>,
    D: AsRef<Path>,
{
    let input_path = input_path.as_ref().to_owned();
    check_input_size(fs::metadata(&input_path).await?.len(), config)?;

    // Create channel for passing records from reader to processor
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);

    let reader_handle = tokio::spawn(read_records(input_path, tx));
    let processor_handle = tokio::spawn(process_records(rx));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    let result = processor_handle.await??;

    let paths = asc_paths(out_dir.as_ref());
    for (ledger, path) in &paths {
        fs::write(path, result.content(*ledger)).await?;
        info!("wrote {}", path.display());
    }
    Ok(RunOutput {
        result,
        files: paths.map(|(_, path)| path),
    })
}

/// Reads and deserializes records from a CSV file.
/// Sends them, numbered from 1, through the provided channel.
async fn read_records(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<(usize, RowRecord)>,
) -> Result<()> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::None)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<RowRecord>();
    let mut row = 0;
    while let Some(record) = records.next().await {
        row += 1;
        if tx.send((row, record?)).await.is_err() {
            // Processor stopped on an invalid record, exit gracefully
            break;
        }
    }
    Ok(())
}

/// Validates and encodes records received through the channel.
/// Returns the finished batch once the channel is closed by the reader.
async fn process_records(mut rx: mpsc::Receiver<(usize, RowRecord)>) -> Result<ConversionResult> {
    let mut converter = Converter::new();
    while let Some((row, record)) = rx.recv().await {
        converter.push(&record.validate(row)?);
    }
    Ok(converter.finish())
}
