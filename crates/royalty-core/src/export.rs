use crate::error::RoyaltyError;
use crate::model::Record;
use std::io::Write;
use std::path::Path;

/// CSV header, in [`Record`] field order.
pub const COLUMNS: [&str; 12] = [
    "title",
    "artist",
    "source",
    "reference",
    "product",
    "income_type",
    "income_period",
    "rate",
    "quantity",
    "amount_received",
    "percent_payable",
    "amount_payable",
];

/// Write records as CSV: a header row, then one row per record.
///
/// The header is written even when there are no records. A missing product
/// is an empty field.
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<(), RoyaltyError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(COLUMNS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write records to a CSV file, replacing it atomically.
///
/// Rows go to a temporary file next to `path` which is renamed over the
/// destination only once everything has been written.
pub fn write_csv_file(records: &[Record], path: &Path) -> Result<(), RoyaltyError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmpfile = tempfile::NamedTempFile::new_in(dir)?;
    write_csv(records, &mut tmpfile)?;
    tmpfile.persist(path).map_err(|e| RoyaltyError::Io(e.error))?;

    log::debug!("wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}
