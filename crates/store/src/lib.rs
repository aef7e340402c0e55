//! `katalog-store` — the product-catalog store and its collaborators.
//!
//! [`store::ProductStore`] owns the ordered product list and the validated
//! create/update/delete operations; persistence ([`snapshot::SnapshotStore`]),
//! id generation, the calendar clock, and deletion confirmation are all
//! injected so callers (and tests) control them.

pub mod confirm;
pub mod notice;
pub mod snapshot;
pub mod store;

pub use confirm::{ConfirmPrompt, FixedPrompt};
pub use notice::{Notice, Severity};
pub use snapshot::{
    InMemorySnapshotStore, JsonFileSnapshotStore, PRODUCTS_KEY, SnapshotError, SnapshotStore,
};
pub use store::{ProductStore, Removal, Submitted};
