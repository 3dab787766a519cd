pub mod config;
pub mod engine;
pub mod error;
pub mod finalizer;
pub mod models;
pub mod rounding;

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use config::RunConfig;
use engine::ContributionEngine;
use error::{EngineError, Result};
use models::Contribution;

/// Counters describing one pass over the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-blank input lines seen
    pub records_read: usize,
    /// Lines dropped from both reports
    pub rejected: usize,
    /// Lines written to the per-zip report
    pub zip_rows: usize,
    /// Lines written to the per-date report
    pub date_rows: usize,
}

/// Stream contributions from `reader`, writing the running per-zip report to
/// `zip_writer` as each record arrives and the per-date report to `date_writer`
/// once the input is exhausted
///
/// Malformed and ineligible lines are skipped. Only I/O failures are returned.
pub fn process_contributions<R, Z, D>(
    reader: R,
    zip_writer: Z,
    date_writer: D,
) -> Result<RunSummary>
where
    R: Read,
    Z: Write,
    D: Write,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut zip_csv = report_writer(zip_writer);
    let mut engine = ContributionEngine::new();
    let mut summary = RunSummary::default();

    for result in csv_reader.byte_records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                // Silently skip malformed lines
                debug!(error = %err, "Skipping unreadable line");
                summary.records_read += 1;
                summary.rejected += 1;
                continue;
            }
        };
        summary.records_read += 1;

        let line = record.position().map(|pos| pos.line());
        let record = StringRecord::from_byte_record_lossy(record);

        let contribution = match Contribution::from_record(&record) {
            Ok(contribution) => contribution,
            Err(reason) => {
                debug!(?line, %reason, "Skipping contribution");
                summary.rejected += 1;
                continue;
            }
        };

        // Each per-zip line is on disk before the next record is read
        if let Some(row) = engine.process_contribution(contribution) {
            zip_csv.serialize(&row)?;
            zip_csv.flush()?;
            summary.zip_rows += 1;
        }
    }

    zip_csv.flush()?;

    summary.date_rows = write_date_report(engine, date_writer)?;

    Ok(summary)
}

/// Open the configured files and run one full pass
///
/// The per-zip file is appended to (and created if missing); the per-date
/// file is truncated.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let input =
        File::open(&config.input).map_err(|source| open_error(&config.input, source))?;

    let zip_output = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.zip_output)
        .map_err(|source| open_error(&config.zip_output, source))?;

    let date_output = File::create(&config.date_output)
        .map_err(|source| open_error(&config.date_output, source))?;

    process_contributions(input, zip_output, date_output)
}

/// Drain the engine's date groups and write them in key order
fn write_date_report<W: Write>(engine: ContributionEngine, writer: W) -> Result<usize> {
    let mut csv_writer = report_writer(writer);

    let rows = finalizer::finalize(engine.into_date_groups());
    for row in &rows {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(rows.len())
}

/// `|`-delimited, headerless, never quoted, `\n`-terminated
fn report_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

fn open_error(path: &Path, source: std::io::Error) -> EngineError {
    EngineError::Open {
        path: path.to_path_buf(),
        source,
    }
}
