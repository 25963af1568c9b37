/// A product in the shopping cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    price: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

/// Textual result of a `SELECT`. `None` cells are SQL NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl QueryResult {
    /// 以 TSV 呈現：每個欄位後接 tab，每列以換行結尾
    pub fn to_tsv(&self) -> String {
        let mut output = String::new();
        for column in &self.columns {
            output.push_str(column);
            output.push('\t');
        }
        output.push('\n');

        for row in &self.rows {
            for cell in row {
                output.push_str(cell.as_deref().unwrap_or("null"));
                output.push('\t');
            }
            output.push('\n');
        }
        output
    }
}
