//! End-to-end tests for report generation: store → CSV file → summary.

use stockroom::{db, report, ProductStore};
use tempfile::tempdir;

fn store_with(products: &[(&str, i64, f64)]) -> (tempfile::TempDir, ProductStore) {
    let dir = tempdir().unwrap();
    let store = ProductStore::with_connection(db::open_at(&dir.path().join("inventory.db")).unwrap());
    for (name, quantity, price) in products {
        store.add(name, *quantity, *price).unwrap();
    }
    (dir, store)
}

#[test]
fn report_lists_everything_and_counts_low_stock() {
    let (dir, store) = store_with(&[
        ("Bolts", 5, 0.10),
        ("Nuts", 15, 0.05),
        ("Washers", 9, 0.02),
    ]);
    let path = dir.path().join("inventory_report.csv");

    let summary = report::generate_at(&store, &path).unwrap();

    // Quantities 5 and 9 are below the threshold, 15 is not
    assert_eq!(summary.total, 3);
    assert_eq!(summary.low_stock, 2);

    // The file carries the full set, not just the low-stock partition
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "id,name,quantity,price");
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().any(|l| l.contains("Bolts")));
    assert!(lines.iter().any(|l| l.contains("Nuts")));
    assert!(lines.iter().any(|l| l.contains("Washers")));
}

#[test]
fn report_on_empty_store_is_header_only() {
    let (dir, store) = store_with(&[]);
    let path = dir.path().join("inventory_report.csv");

    let summary = report::generate_at(&store, &path).unwrap();

    assert_eq!(summary.total, 0);
    assert_eq!(summary.low_stock, 0);
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim_end(), "id,name,quantity,price");
}

#[test]
fn report_overwrites_previous_snapshot() {
    let (dir, store) = store_with(&[("Bolts", 5, 0.10)]);
    let path = dir.path().join("inventory_report.csv");

    report::generate_at(&store, &path).unwrap();
    store.add("Nuts", 15, 0.05).unwrap();
    let summary = report::generate_at(&store, &path).unwrap();

    assert_eq!(summary.total, 2);
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 3, "header plus both rows, no stale data");
}

#[test]
fn boundary_quantity_is_not_low_stock() {
    let (dir, store) = store_with(&[("Exact", 10, 1.0), ("Under", 9, 1.0)]);
    let path = dir.path().join("inventory_report.csv");

    let summary = report::generate_at(&store, &path).unwrap();
    assert_eq!(summary.low_stock, 1, "threshold is strictly less than 10");
}
