use chrono::NaiveDate;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use katalog_core::{DomainError, ProductId};

/// Product category. Serialized under the exact variant name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Makanan,
    Minuman,
    Elektronik,
    Pakaian,
}

impl Category {
    /// All selectable categories, in form-select order.
    pub const ALL: [Category; 4] = [
        Category::Makanan,
        Category::Minuman,
        Category::Elektronik,
        Category::Pakaian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Makanan => "Makanan",
            Category::Minuman => "Minuman",
            Category::Elektronik => "Elektronik",
            Category::Pakaian => "Pakaian",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s}")))
    }
}

/// A fully validated catalog record.
///
/// Instances only come from [`crate::draft::ValidDraft::into_product`] or a
/// previously persisted snapshot; there is no partially-valid state.
///
/// Field names serialize in camelCase, matching the snapshot format the
/// catalog has always persisted (`releaseDate`, not `release_date`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub release_date: NaiveDate,
    pub stock: i64,
    pub active: bool,
}

/// Seed catalog used when no snapshot exists yet.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Makanan".to_string(),
            description: "Produk makanan siap saji".to_string(),
            price: 15000.0,
            category: Category::Makanan,
            release_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid seed date"),
            stock: 10,
            active: true,
        },
        Product {
            id: ProductId::new(2),
            name: "Minuman".to_string(),
            description: "Aneka minuman dingin & hangat".to_string(),
            price: 8000.0,
            category: Category::Minuman,
            release_date: NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid seed date"),
            stock: 20,
            active: true,
        },
    ]
}
