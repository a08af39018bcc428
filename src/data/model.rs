use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Row – one record of the source CSV
// ---------------------------------------------------------------------------

/// A single index observation (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Index name (`index_name` column).
    pub category: String,
    /// Trading date, kept as text and used as the x-axis label.
    pub date: String,
    /// Closing value as it appeared in the file.
    pub value: String,
}

impl Row {
    pub fn new(category: impl Into<String>, date: impl Into<String>, value: impl Into<String>) -> Self {
        Row {
            category: category.into(),
            date: date.into(),
            value: value.into(),
        }
    }

    /// Numeric closing value, NaN when the text is not a finite number.
    ///
    /// The whole trimmed field must parse: `"12abc"` is NaN, not 12, and the
    /// textual `inf`/`NaN` spellings are NaN as well.
    pub fn closing_value(&self) -> f64 {
        self.value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(f64::NAN)
    }
}

// ---------------------------------------------------------------------------
// Category list
// ---------------------------------------------------------------------------

/// Unique category names in order of first appearance.
pub fn unique_categories(rows: &[Row]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(rows.len());
    rows.iter()
        .filter(|row| seen.insert(row.category.as_str()))
        .map(|row| row.category.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// IndexDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Parsed rows together with the derived category list.
#[derive(Debug, Clone, Default)]
pub struct IndexDataset {
    pub rows: Vec<Row>,
    pub categories: Vec<String>,
}

impl IndexDataset {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let categories = unique_categories(&rows);
        IndexDataset { rows, categories }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
