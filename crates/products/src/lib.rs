//! `katalog-products` — the product catalog domain.
//!
//! Pure domain types and validation. Persistence, confirmation, and
//! notifications live in `katalog-store`.

pub mod draft;
pub mod product;

pub use draft::{Field, FieldErrors, ProductDraft, ValidDraft};
pub use product::{Category, Product, seed_products};
