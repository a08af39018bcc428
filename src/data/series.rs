use super::model::Row;

/// Ordered `(date, value)` pairs for every row of `category`.
///
/// Matching is exact and case-sensitive. Source order is kept; non-numeric
/// values come through as NaN. No match yields an empty vector.
pub fn series_for(category: &str, rows: &[Row]) -> Vec<(String, f64)> {
    rows.iter()
        .filter(|row| row.category == category)
        .map(|row| (row.date.clone(), row.closing_value()))
        .collect()
}
