/// Data layer: rows, loading, pagination, and series selection.
///
/// Architecture:
/// ```text
///  URL / local .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → Vec<Row>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ IndexDataset  │  rows, unique categories
///   └──────────────┘
///        │                    │
///        ▼                    ▼
///   ┌────────────┐      ┌──────────┐
///   │ pagination  │      │  series   │  category → (date, value)
///   └────────────┘      └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod pagination;
pub mod series;
