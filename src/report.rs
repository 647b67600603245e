//! Low-stock report generation.
//!
//! Writes the full product set as CSV (header `id,name,quantity,price`) to
//! a fixed relative path, overwriting any previous report, and returns how
//! many rows fell below the low-stock threshold. The write is a plain
//! overwrite; a crash mid-write can leave a truncated file.

use std::path::Path;

use crate::error::StoreError;
use crate::models::Product;
use crate::store::ProductStore;

/// Fixed relative path of the generated report.
pub const REPORT_FILE: &str = "inventory_report.csv";

/// Outcome of one report generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    /// Rows written to the report (all products)
    pub total: usize,
    /// Rows with quantity below the low-stock threshold
    pub low_stock: usize,
}

/// Generates the report at [`REPORT_FILE`] in the working directory.
pub fn generate(store: &ProductStore) -> Result<ReportSummary, StoreError> {
    generate_at(store, Path::new(REPORT_FILE))
}

/// Generates the report at an explicit path.
pub fn generate_at(store: &ProductStore, path: &Path) -> Result<ReportSummary, StoreError> {
    let products = store.list_all()?;
    write_report(path, &products)?;

    let summary = summarize(&products);
    log::info!(
        "Report written to {}: {} products, {} low-stock",
        path.display(),
        summary.total,
        summary.low_stock
    );
    Ok(summary)
}

/// Serializes all products to CSV. The header is written explicitly so an
/// empty store still produces a header-only file.
fn write_report(path: &Path, products: &[Product]) -> Result<(), StoreError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["id", "name", "quantity", "price"])?;
    for product in products {
        writer.serialize(product)?;
    }
    writer.flush()?;
    Ok(())
}

/// Partitions products into low-stock vs normal by quantity.
fn summarize(products: &[Product]) -> ReportSummary {
    ReportSummary {
        total: products.len(),
        low_stock: products.iter().filter(|p| p.is_low_stock()).count(),
    }
}
