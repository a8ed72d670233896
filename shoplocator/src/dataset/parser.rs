//! Parser for the five-column locations text format.
//!
//! Each line is `id, name, address, lat, lng` with comma separators and
//! whitespace-trimmed values. Whitespace-only lines are skipped; every
//! other line must split into exactly five columns or the whole parse
//! fails.

use chrono::Utc;

use super::{Dataset, DatasetError};
use crate::shop::{Shop, ShopId};

/// Number of columns in a well-formed row.
pub const COLUMN_COUNT: usize = 5;

/// Parser for the locations text format.
pub struct LocationsParser;

impl LocationsParser {
    /// Parse a text blob into a [`Dataset`].
    ///
    /// Fails on the first malformed row or non-numeric id, with the
    /// 1-based line number of the offender. Rows whose coordinates do not
    /// parse still load, tagged invalid by the record model.
    pub fn parse_str(text: &str) -> Result<Dataset, DatasetError> {
        let now = Utc::now();
        let mut shops = Vec::new();
        let mut max_id: ShopId = 0;

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let columns: Vec<&str> = line.split(',').map(str::trim).collect();
            if columns.len() != COLUMN_COUNT {
                return Err(DatasetError::MalformedRow {
                    line: line_number,
                    columns: columns.len(),
                });
            }

            let id: ShopId = columns[0].parse().map_err(|_| DatasetError::InvalidId {
                line: line_number,
                value: columns[0].to_string(),
            })?;

            let shop = Shop::from_row(id, columns[1], columns[2], columns[3], columns[4], now);
            if !shop.is_active() {
                tracing::warn!(id, line = line_number, "row has unparsable coordinates, tagged invalid");
            }

            max_id = max_id.max(id);
            shops.push(shop);
        }

        Ok(Dataset { shops, max_id })
    }
}
