//! CSV export of the in-memory item list.
//!
//! Values are written with the `csv` crate's default minimal quoting: plain
//! values go out bare, values containing commas, quotes or line breaks are
//! quoted so the file stays loadable in a spreadsheet.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{InventoryError, Result};
use crate::models::Item;

/// Default file name offered by the save dialog.
pub const EXPORT_FILE_NAME: &str = "garage_inventory.csv";

pub const CSV_HEADER: [&str; 5] = ["Item", "Size", "Quantity", "Price", "Notes"];

/// Serializes `items` to CSV text with a header row.
pub fn items_to_csv(items: &[Item]) -> Result<String> {
    debug!("Serializing {} items to CSV", items.len());
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for item in items {
        let quantity = item.quantity.to_string();
        let price = item.price.map(|p| p.to_string()).unwrap_or_default();
        writer.write_record([
            item.item.as_str(),
            item.size.as_str(),
            quantity.as_str(),
            price.as_str(),
            item.notes.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| InventoryError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| InventoryError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Writes the CSV export of `items` to `path`.
pub fn write_csv_file<P: AsRef<Path>>(path: P, items: &[Item]) -> Result<()> {
    let path = path.as_ref();
    let content = items_to_csv(items)?;
    std::fs::write(path, content)?;
    info!("Exported {} items to {}", items.len(), path.display());
    Ok(())
}

/// `dir/garage_inventory.csv`
pub fn default_export_path(dir: &Path) -> PathBuf {
    dir.join(EXPORT_FILE_NAME)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
