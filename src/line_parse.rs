pub(crate) fn split_plain_fields(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

pub(crate) fn split_quoted_fields(line: &str) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        _ => split_plain_fields(line),
    }
}

#[cfg(test)]
mod tests {
    use super::{split_plain_fields, split_quoted_fields};

    #[test]
    fn plain_split_ignores_quotes_and_keeps_spaces() {
        let fields = split_plain_fields("\"Name, Full\", Qty");
        assert_eq!(fields, vec!["\"Name", " Full\"", " Qty"]);
    }

    #[test]
    fn plain_split_of_empty_line_yields_one_empty_field() {
        assert_eq!(split_plain_fields(""), vec![""]);
    }

    #[test]
    fn quoted_split_keeps_embedded_commas_together() {
        let fields = split_quoted_fields("\"Smith, J.\",42,widget");
        assert_eq!(fields, vec!["Smith, J.", "42", "widget"]);
    }

    #[test]
    fn quoted_split_unescapes_doubled_quotes() {
        let fields = split_quoted_fields("\"say \"\"hi\"\"\",ok");
        assert_eq!(fields, vec!["say \"hi\"", "ok"]);
    }

    #[test]
    fn quoted_split_matches_plain_split_for_unquoted_rows() {
        assert_eq!(
            split_quoted_fields("Apple,3,1.00"),
            split_plain_fields("Apple,3,1.00")
        );
    }
}
