//! End-to-end tests for the credential and product stores against an
//! on-disk database file, the way the application uses them.

use std::path::Path;

use stockroom::{db, AuthError, CredentialStore, ProductStore};
use tempfile::tempdir;

/// Opens both stores against the same database file, each with its own
/// connection, mirroring application startup.
fn open_stores(path: &Path) -> (CredentialStore, ProductStore) {
    let credentials = CredentialStore::with_connection(db::open_at(path).unwrap());
    let products = ProductStore::with_connection(db::open_at(path).unwrap());
    (credentials, products)
}

#[test]
fn full_product_lifecycle() {
    let dir = tempdir().unwrap();
    let (_credentials, products) = open_stores(&dir.path().join("inventory.db"));

    // Empty store lists nothing
    assert!(products.list_all().unwrap().is_empty());

    // Add
    products.add("Widget", 5, 2.50).unwrap();
    let listed = products.list_all().unwrap();
    assert_eq!(listed.len(), 1);
    let id = listed[0].id;
    assert_eq!(listed[0].name, "Widget");
    assert_eq!(listed[0].quantity, 5);
    assert_eq!(listed[0].price, 2.50);

    // Edit keeps the id stable
    products.edit(id, "Widget", 3, 2.75).unwrap();
    let listed = products.list_all().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].quantity, 3);
    assert_eq!(listed[0].price, 2.75);

    // Delete removes the row; a second delete is a clean no-op
    products.delete(id).unwrap();
    assert!(products.list_all().unwrap().is_empty());
    products.delete(id).unwrap();
    assert!(products.list_all().unwrap().is_empty());
}

#[test]
fn products_persist_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.db");

    {
        let (_credentials, products) = open_stores(&path);
        products.add("Widget", 5, 2.50).unwrap();
    }

    let (_credentials, products) = open_stores(&path);
    let listed = products.list_all().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Widget");
}

#[test]
fn register_and_sign_in_roundtrip() {
    let dir = tempdir().unwrap();
    let (credentials, _products) = open_stores(&dir.path().join("inventory.db"));

    credentials.register("alice", "correct horse").unwrap();

    assert!(credentials.verify("alice", "correct horse").unwrap());
    assert!(!credentials.verify("alice", "wrong horse").unwrap());
    assert!(!credentials.verify("bob", "correct horse").unwrap());
}

#[test]
fn duplicate_registration_leaves_first_user_intact() {
    let dir = tempdir().unwrap();
    let (credentials, _products) = open_stores(&dir.path().join("inventory.db"));

    credentials.register("alice", "first password").unwrap();
    let second = credentials.register("alice", "second password");
    assert!(matches!(second, Err(AuthError::DuplicateUsername)));

    // The original credentials still work, the rejected ones never do
    assert!(credentials.verify("alice", "first password").unwrap());
    assert!(!credentials.verify("alice", "second password").unwrap());
}

#[test]
fn users_and_products_share_one_database() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.db");
    let (credentials, products) = open_stores(&path);

    credentials.register("alice", "hunter2").unwrap();
    products.add("Widget", 5, 2.50).unwrap();

    // Both visible through fresh connections to the same file
    let (credentials, products) = open_stores(&path);
    assert!(credentials.verify("alice", "hunter2").unwrap());
    assert_eq!(products.list_all().unwrap().len(), 1);
}
