use std::fs;
use std::io;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::ExtractError;
use crate::model::OutputDocument;

pub(crate) fn write_csv(path: &Path, document: &OutputDocument) -> Result<(), ExtractError> {
    let bytes = render_csv(document)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub(crate) fn write_csv_to_string(document: &OutputDocument) -> Result<String, ExtractError> {
    let bytes = render_csv(document)?;
    String::from_utf8(bytes)
        .map_err(|error| ExtractError::Io(io::Error::new(io::ErrorKind::InvalidData, error)))
}

fn render_csv(document: &OutputDocument) -> Result<Vec<u8>, ExtractError> {
    let mut out = Vec::new();

    for row in &document.rows {
        if row.is_empty() {
            // CSV has no encoding for a zero-field record; the writer would
            // emit `""` instead. Blank separator lines are written directly.
            out.push(b'\n');
            continue;
        }

        let mut writer = WriterBuilder::new().from_writer(&mut out);
        writer.write_record(row)?;
        writer.flush()?;
    }

    Ok(out)
}
