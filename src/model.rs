#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSection {
    pub header: Vec<String>,
    pub data_rows: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub rows: Vec<Vec<String>>,
    pub table_count: usize,
    pub row_count: usize,
}
