mod config;
mod csv_out;
mod error;
mod layout;
mod line_parse;
mod model;
mod section_extract;
mod text_reader;
mod warning;

use crate::csv_out::{write_csv, write_csv_to_string};
use crate::layout::compose_output;
use crate::model::OutputDocument;
use crate::section_extract::{extract_table, extract_unstructured};
use crate::text_reader::{normalize_lines, read_input_text};

pub use config::{Config, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use error::ExtractError;
pub use section_extract::{CART_ITEMS_MARKER, CART_SUMMARY_MARKER, UNSTRUCTURED_MARKER};
pub use warning::{ExtractWarning, WarningCode as ExtractWarningCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub row_count: usize,
    pub table_count: usize,
    pub warnings: Vec<ExtractWarning>,
}

fn extract_document(text: &str, warnings: &mut Vec<ExtractWarning>) -> OutputDocument {
    let lines = normalize_lines(text);

    let items = extract_table(&lines, CART_ITEMS_MARKER, CART_SUMMARY_MARKER, warnings);
    let summary = extract_table(&lines, CART_SUMMARY_MARKER, UNSTRUCTURED_MARKER, warnings);
    let notes = extract_unstructured(&lines, UNSTRUCTURED_MARKER, warnings);

    compose_output(&items, &summary, &notes)
}

pub fn convert_cart_file(config: &Config) -> Result<ExtractionReport, ExtractError> {
    let mut warnings = Vec::new();
    let text = read_input_text(&config.input_path, &mut warnings)?;
    let document = extract_document(&text, &mut warnings);
    write_csv(&config.output_path, &document)?;

    if !warnings.is_empty() {
        tracing::warn!("cart extraction degraded: {} warning(s)", warnings.len());
    }
    tracing::info!(
        "cart extraction completed: rows={}, tables={}",
        document.row_count,
        document.table_count
    );

    Ok(ExtractionReport {
        row_count: document.row_count,
        table_count: document.table_count,
        warnings,
    })
}

pub fn convert_cart_text(text: &str) -> Result<(String, ExtractionReport), ExtractError> {
    let mut warnings = Vec::new();
    let document = extract_document(text, &mut warnings);
    let output = write_csv_to_string(&document)?;

    Ok((
        output,
        ExtractionReport {
            row_count: document.row_count,
            table_count: document.table_count,
            warnings,
        },
    ))
}
