//! Bootstrap loader for the locations dataset.
//!
//! Reads the five-column comma-separated text source
//! (`id,name,address,lat,lng`, one record per line, values trimmed) and
//! produces the initial record set plus the highest imported id, so the
//! store's id sequence resumes after the dataset without collisions.
//!
//! The load is all-or-nothing: any malformed row aborts the whole load,
//! and an unreadable source is fatal to boot. The service never runs with
//! a partial dataset.
//!
//! # Example
//!
//! ```
//! use shoplocator::dataset::LocationsParser;
//!
//! let text = "1, Equator, 986 Market St, 37.782394, -122.409973\n\
//!             2, Four Barrel, 375 Valencia St, 37.7671, -122.4219";
//! let dataset = LocationsParser::parse_str(text).expect("well-formed rows");
//! assert_eq!(dataset.shops.len(), 2);
//! assert_eq!(dataset.max_id, 2);
//! ```

mod parser;

use std::io;
use std::path::{Path, PathBuf};

pub use parser::{LocationsParser, COLUMN_COUNT};

use crate::shop::{Shop, ShopId};

/// Error type for dataset loading.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The source file could not be read at all. Fatal to boot.
    #[error("cannot read locations file {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line did not split into exactly five columns.
    #[error("malformed location row at line {line}: expected {COLUMN_COUNT} columns, got {columns}")]
    MalformedRow { line: usize, columns: usize },

    /// The id column did not parse as a non-negative integer.
    #[error("invalid numeric id at line {line}: '{value}'")]
    InvalidId { line: usize, value: String },
}

/// The parsed record set plus the highest imported id.
///
/// `shops` preserves file order; `max_id` is 0 for an empty dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Records in file order.
    pub shops: Vec<Shop>,
    /// Highest numeric id seen; the id sequence resumes at `max_id + 1`.
    pub max_id: ShopId,
}

/// Load and parse a locations file from disk.
///
/// Any [`DatasetError`] aborts the load; no partial dataset is returned.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = LocationsParser::parse_str(&text)?;
    tracing::info!(
        path = %path.display(),
        count = dataset.shops.len(),
        max_id = dataset.max_id,
        "locations dataset loaded"
    );
    Ok(dataset)
}
