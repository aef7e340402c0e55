//! Draft form state and per-field validation.
//!
//! A [`ProductDraft`] holds whatever the form currently holds; nothing is
//! promised about it. [`ProductDraft::checked`] either promotes it to a
//! [`ValidDraft`] (every field parsed and trimmed) or returns the exact
//! per-field error map. Rules are evaluated independently: one bad field
//! never hides another.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use katalog_core::ProductId;

use crate::product::{Category, Product};

/// Form field identifiers, the keys of [`FieldErrors`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Description,
    Price,
    Category,
    ReleaseDate,
    Stock,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
            Field::Category => "category",
            Field::ReleaseDate => "releaseDate",
            Field::Stock => "stock",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field → human-readable message for every field that failed the last
/// validation attempt. Fields that passed are absent; empty means the draft
/// is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// An unvalidated, in-progress set of form field values.
///
/// `price` and `release_date` stay raw strings: the form can hold anything,
/// and non-numeric or empty input must fail validation rather than be
/// unrepresentable. `category` mirrors a select input — either unset or one
/// of the known variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: Option<Category>,
    pub release_date: String,
    pub stock: i64,
    pub active: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: None,
            release_date: String::new(),
            stock: 0,
            active: false,
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category: Some(product.category),
            release_date: product.release_date.to_string(),
            stock: product.stock,
            active: product.active,
        }
    }
}

/// The parsed, promotable form of a draft: every field has passed its rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub release_date: NaiveDate,
    pub stock: i64,
    pub active: bool,
}

impl ValidDraft {
    /// Promote to a full record under the given id.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            release_date: self.release_date,
            stock: self.stock,
            active: self.active,
        }
    }
}

impl ProductDraft {
    /// Evaluate every field rule independently. An empty map signals the
    /// draft is acceptable.
    pub fn validate(&self, today: NaiveDate) -> FieldErrors {
        self.checked(today).err().unwrap_or_default()
    }

    /// Either every field comes back typed and trimmed, or the exact
    /// per-field error map.
    pub fn checked(&self, today: NaiveDate) -> Result<ValidDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self
            .checked_name()
            .map_err(|m| errors.insert(Field::Name, m))
            .ok();
        let description = self
            .checked_description()
            .map_err(|m| errors.insert(Field::Description, m))
            .ok();
        let price = self
            .checked_price()
            .map_err(|m| errors.insert(Field::Price, m))
            .ok();
        let category = self
            .checked_category()
            .map_err(|m| errors.insert(Field::Category, m))
            .ok();
        let release_date = self
            .checked_release_date(today)
            .map_err(|m| errors.insert(Field::ReleaseDate, m))
            .ok();
        let stock = self
            .checked_stock()
            .map_err(|m| errors.insert(Field::Stock, m))
            .ok();

        match (name, description, price, category, release_date, stock) {
            (Some(name), Some(description), Some(price), Some(category), Some(release_date), Some(stock)) => {
                Ok(ValidDraft {
                    name,
                    description,
                    price,
                    category,
                    release_date,
                    stock,
                    active: self.active,
                })
            }
            _ => Err(errors),
        }
    }

    fn checked_name(&self) -> Result<String, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            Err("Product name is required.")
        } else if name.chars().count() < 3 {
            Err("Product name must be at least 3 characters.")
        } else if name.chars().count() > 100 {
            Err("Product name must be at most 100 characters.")
        } else {
            Ok(name.to_string())
        }
    }

    fn checked_description(&self) -> Result<String, &'static str> {
        let description = self.description.trim();
        if description.chars().count() < 20 {
            Err("Description must be at least 20 characters.")
        } else {
            Ok(description.to_string())
        }
    }

    fn checked_price(&self) -> Result<f64, &'static str> {
        match self.price.trim().parse::<f64>() {
            // `>` instead of `!(<= 0)` so NaN is rejected too.
            Ok(price) if price > 0.0 => Ok(price),
            _ => Err("Price must be greater than 0."),
        }
    }

    fn checked_category(&self) -> Result<Category, &'static str> {
        self.category.ok_or("Category is required.")
    }

    fn checked_release_date(&self, today: NaiveDate) -> Result<NaiveDate, &'static str> {
        if self.release_date.is_empty() {
            return Err("Release date is required.");
        }
        match NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d") {
            Err(_) => Err("Release date is not a valid date."),
            Ok(date) if date > today => Err("Release date cannot be in the future."),
            Ok(date) => Ok(date),
        }
    }

    fn checked_stock(&self) -> Result<i64, &'static str> {
        // Upper bound is an input affordance; only the sign is enforced here.
        if self.stock < 0 {
            Err("Stock cannot be negative.")
        } else {
            Ok(self.stock)
        }
    }
}
