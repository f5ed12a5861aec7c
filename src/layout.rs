use crate::line_parse::split_quoted_fields;
use crate::model::{OutputDocument, TableSection};
use crate::section_extract::{CART_ITEMS_MARKER, CART_SUMMARY_MARKER, UNSTRUCTURED_MARKER};

pub(crate) const SECTION_SEPARATOR: &str = "---";

fn push_table(rows: &mut Vec<Vec<String>>, marker: &str, table: &TableSection) -> usize {
    rows.push(vec![marker.to_string()]);
    if !table.header.is_empty() {
        rows.push(table.header.clone());
    }
    for data_row in &table.data_rows {
        rows.push(split_quoted_fields(data_row));
    }
    table.data_rows.len()
}

fn push_separator(rows: &mut Vec<Vec<String>>) {
    rows.push(Vec::new());
    rows.push(vec![SECTION_SEPARATOR.to_string()]);
    rows.push(Vec::new());
}

pub(crate) fn compose_output(
    items: &TableSection,
    summary: &TableSection,
    notes: &str,
) -> OutputDocument {
    let mut rows = Vec::new();
    let mut row_count = 0;

    row_count += push_table(&mut rows, CART_ITEMS_MARKER, items);
    push_separator(&mut rows);
    row_count += push_table(&mut rows, CART_SUMMARY_MARKER, summary);
    push_separator(&mut rows);

    rows.push(vec![UNSTRUCTURED_MARKER.to_string()]);
    rows.push(vec!["Notes".to_string(), "Content".to_string()]);
    rows.push(vec![String::new(), notes.to_string()]);

    let table_count = [items, summary]
        .iter()
        .filter(|table| !table.header.is_empty())
        .count();

    OutputDocument {
        rows,
        table_count,
        row_count,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{compose_output, push_table};
    use crate::model::TableSection;
    use crate::section_extract::{CART_ITEMS_MARKER, CART_SUMMARY_MARKER, UNSTRUCTURED_MARKER};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn composes_full_document_in_section_order() {
        let items = TableSection {
            header: strings(&["Item", "Qty", "Price"]),
            data_rows: strings(&["Apple,3,1.00"]),
        };
        let summary = TableSection {
            header: strings(&["Total", "Count"]),
            data_rows: strings(&["3.00,1"]),
        };

        let document = compose_output(&items, &summary, "Buyer requested gift wrap.");

        let expected: Vec<Vec<String>> = vec![
            strings(&[CART_ITEMS_MARKER]),
            strings(&["Item", "Qty", "Price"]),
            strings(&["Apple", "3", "1.00"]),
            Vec::new(),
            strings(&["---"]),
            Vec::new(),
            strings(&[CART_SUMMARY_MARKER]),
            strings(&["Total", "Count"]),
            strings(&["3.00", "1"]),
            Vec::new(),
            strings(&["---"]),
            Vec::new(),
            strings(&[UNSTRUCTURED_MARKER]),
            strings(&["Notes", "Content"]),
            strings(&["", "Buyer requested gift wrap."]),
        ];
        assert_eq!(document.rows, expected);
        assert_eq!(document.table_count, 2);
        assert_eq!(document.row_count, 2);
    }

    #[test]
    fn empty_sections_still_produce_marker_rows_and_notes_row() {
        let document = compose_output(&TableSection::default(), &TableSection::default(), "");

        let expected: Vec<Vec<String>> = vec![
            strings(&[CART_ITEMS_MARKER]),
            Vec::new(),
            strings(&["---"]),
            Vec::new(),
            strings(&[CART_SUMMARY_MARKER]),
            Vec::new(),
            strings(&["---"]),
            Vec::new(),
            strings(&[UNSTRUCTURED_MARKER]),
            strings(&["Notes", "Content"]),
            strings(&["", ""]),
        ];
        assert_eq!(document.rows, expected);
        assert_eq!(document.table_count, 0);
        assert_eq!(document.row_count, 0);
    }

    #[test]
    fn data_rows_are_split_quote_aware() {
        let mut rows = Vec::new();
        let table = TableSection {
            header: strings(&["Name", "Qty", "Kind"]),
            data_rows: strings(&["\"Smith, J.\",42,widget"]),
        };

        let written = push_table(&mut rows, CART_ITEMS_MARKER, &table);

        assert_eq!(written, 1);
        assert_eq!(rows[2], strings(&["Smith, J.", "42", "widget"]));
    }

    #[test]
    fn header_fields_are_written_as_split() {
        let mut rows = Vec::new();
        let table = TableSection {
            header: strings(&["\"Name", " Full\"", "Qty"]),
            data_rows: Vec::new(),
        };

        push_table(&mut rows, CART_ITEMS_MARKER, &table);

        assert_eq!(rows[1], strings(&["\"Name", " Full\"", "Qty"]));
    }
}
