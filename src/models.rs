use serde::Serialize;

/// A product is low-stock when its quantity is strictly below this.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// A product record as stored in the `products` table.
///
/// Field order matters: the CSV report header (`id,name,quantity,price`)
/// is derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl Product {
    /// Returns true if this product counts as low-stock in the report.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

/// A registered user. `password_hash` is an Argon2id PHC string, never
/// the raw password.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(quantity: i64) -> Product {
        Product {
            id: 1,
            name: "Widget".to_string(),
            quantity,
            price: 2.50,
        }
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        assert!(product(0).is_low_stock());
        assert!(product(9).is_low_stock());
        assert!(!product(10).is_low_stock());
        assert!(!product(15).is_low_stock());
    }
}
