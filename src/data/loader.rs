use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use super::model::Row;
use crate::config::ViewerConfig;

/// Header names the source CSV must provide.
pub const CATEGORY_COLUMN: &str = "index_name";
pub const DATE_COLUMN: &str = "index_date";
pub const VALUE_COLUMN: &str = "closing_index_value";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV payload: {0}")]
    Parse(#[from] csv::Error),
    #[error("CSV header is missing required column '{0}'")]
    MissingColumn(&'static str),
}

impl LoadError {
    /// Whether the payload arrived but could not be interpreted.
    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse(_) | LoadError::MissingColumn(_))
    }
}

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

/// Where a dataset comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch or read the source and parse it into rows.
///
/// Runs on the loader thread; blocks until the transfer finishes.
pub fn load_source(source: &DataSource, config: &ViewerConfig) -> Result<Vec<Row>, LoadError> {
    let bytes = match source {
        DataSource::Url(url) => fetch_csv(url, config)?,
        DataSource::File(path) => read_csv(path)?,
    };
    parse_rows(&bytes)
}

fn fetch_csv(url: &str, config: &ViewerConfig) -> Result<Vec<u8>, LoadError> {
    let fetch_err = |source| LoadError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout_secs.map(Duration::from_secs))
        .build()
        .map_err(fetch_err)?;

    let response = client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .map_err(fetch_err)?;

    let body = response.bytes().map_err(fetch_err)?;
    log::debug!("Fetched {} bytes from {url}", body.len());
    Ok(body.to_vec())
}

fn read_csv(path: &Path) -> Result<Vec<u8>, LoadError> {
    std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV text with a header row into [`Row`]s.
///
/// Records lacking one of the required fields are skipped; an empty result is
/// valid. Only a payload the reader cannot interpret (including a header that
/// is not UTF-8), or a header without the required columns, is an error.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<Row>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let category_idx = column(CATEGORY_COLUMN)?;
    let date_idx = column(DATE_COLUMN)?;
    let value_idx = column(VALUE_COLUMN)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    // Header is strict UTF-8; record fields are decoded lossily.
    for result in reader.byte_records() {
        let record = result?;
        match (
            record.get(category_idx),
            record.get(date_idx),
            record.get(value_idx),
        ) {
            (Some(category), Some(date), Some(value)) => {
                rows.push(Row::new(
                    String::from_utf8_lossy(category),
                    String::from_utf8_lossy(date),
                    String::from_utf8_lossy(value),
                ));
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} CSV records with missing fields");
    }
    Ok(rows)
}
