use crate::line_parse::split_plain_fields;
use crate::model::TableSection;
use crate::warning::{ExtractWarning, WarningCode};

pub const CART_ITEMS_MARKER: &str = "Table 1: Shopping Cart Items";
pub const CART_SUMMARY_MARKER: &str = "Table 2: Cart Summary";
pub const UNSTRUCTURED_MARKER: &str = "Unstructured Data:";

fn find_marker(lines: &[String], marker: &str, from: usize) -> Option<usize> {
    lines
        .iter()
        .skip(from)
        .position(|line| line == marker)
        .map(|offset| from + offset)
}

pub(crate) fn extract_table(
    lines: &[String],
    start_marker: &str,
    end_marker: &str,
    warnings: &mut Vec<ExtractWarning>,
) -> TableSection {
    let Some(start_index) = find_marker(lines, start_marker, 0) else {
        warnings.push(
            ExtractWarning::new(
                WarningCode::SectionMissing,
                "table marker not found; emitting an empty section",
            )
            .with_marker(start_marker),
        );
        return TableSection::default();
    };

    // The end marker scan starts at the start marker itself, so equal or
    // adjacent markers always yield an empty data set.
    let end_index = find_marker(lines, end_marker, start_index).unwrap_or(lines.len());

    let header_line = lines.get(start_index + 1).cloned().unwrap_or_default();
    if header_line.is_empty() {
        warnings.push(
            ExtractWarning::new(
                WarningCode::HeaderMissing,
                "no header line after table marker",
            )
            .with_marker(start_marker),
        );
    }

    let data_rows: Vec<String> = if end_index > start_index + 2 {
        lines[start_index + 2..end_index]
            .iter()
            .filter(|line| *line != &header_line)
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    if data_rows.is_empty() && !header_line.is_empty() {
        warnings.push(
            ExtractWarning::new(WarningCode::NoDataRows, "table section has no data rows")
                .with_marker(start_marker),
        );
    }

    TableSection {
        header: split_plain_fields(&header_line),
        data_rows,
    }
}

pub(crate) fn extract_unstructured(
    lines: &[String],
    start_marker: &str,
    warnings: &mut Vec<ExtractWarning>,
) -> String {
    let Some(start_index) = find_marker(lines, start_marker, 0) else {
        warnings.push(
            ExtractWarning::new(
                WarningCode::SectionMissing,
                "unstructured marker not found; emitting empty content",
            )
            .with_marker(start_marker),
        );
        return String::new();
    };

    lines[start_index + 1..].join(" ")
}
