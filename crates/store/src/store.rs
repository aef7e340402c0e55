//! The product-catalog store: validated mutations over an ordered list,
//! persisted as a full snapshot after every change.

use katalog_core::{Clock, DomainError, DomainResult, IdGenerator, ProductId};
use katalog_products::{FieldErrors, Product, ProductDraft, seed_products};

use crate::confirm::ConfirmPrompt;
use crate::notice::Notice;
use crate::snapshot::{PRODUCTS_KEY, SnapshotError, SnapshotStore};

/// Outcome of [`ProductStore::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    /// Draft was valid while not editing: prepended under a fresh id.
    Added(Product),
    /// Draft was valid while editing: replaced in place.
    Updated(Product),
    /// Validation failed; the list is untouched.
    Rejected(FieldErrors),
}

/// Outcome of [`ProductStore::remove`] for an id that exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    Removed(Product),
    /// The prompt was declined; nothing changed.
    Cancelled,
}

/// Owns the ordered product list, the editing marker, and the result of the
/// last validation attempt. Persistence, id generation, the clock, and the
/// confirmation prompt are injected collaborators.
#[derive(Debug)]
pub struct ProductStore<S, G, C, P> {
    products: Vec<Product>,
    editing: Option<ProductId>,
    errors: FieldErrors,
    notices: Vec<Notice>,
    storage: S,
    ids: G,
    clock: C,
    prompt: P,
}

impl<S, G, C, P> ProductStore<S, G, C, P>
where
    S: SnapshotStore,
    G: IdGenerator,
    C: Clock,
    P: ConfirmPrompt,
{
    /// Rehydrate from the snapshot slot, seeding the catalog when the slot
    /// has never been written.
    ///
    /// A slot that exists but fails to decode is an error: seeding over it
    /// would let the next successful write clobber data we could not read.
    pub fn open(storage: S, ids: G, clock: C, prompt: P) -> Result<Self, SnapshotError> {
        let mut store = Self {
            products: Vec::new(),
            editing: None,
            errors: FieldErrors::default(),
            notices: Vec::new(),
            storage,
            ids,
            clock,
            prompt,
        };

        match store.storage.get(PRODUCTS_KEY)? {
            Some(payload) => {
                store.products = serde_json::from_str(&payload)?;
                tracing::info!(count = store.products.len(), "catalog rehydrated from snapshot");
            }
            None => {
                store.products = seed_products();
                tracing::info!("no snapshot found, seeding catalog");
                store.persist();
            }
        }

        Ok(store)
    }

    /// Current list, newest-created first.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Id being edited, if the form is in edit mode.
    pub fn editing(&self) -> Option<ProductId> {
        self.editing
    }

    /// Field errors from the last validation attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Drain queued notifications, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// The injected snapshot collaborator.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Validate a draft against today's date, recording the result as the
    /// store's current error map.
    pub fn validate(&mut self, draft: &ProductDraft) -> FieldErrors {
        self.errors = draft.validate(self.clock.today());
        self.errors.clone()
    }

    /// Validate and apply a draft: prepend when creating, replace in place
    /// when editing. The list is untouched on rejection.
    pub fn submit(&mut self, draft: &ProductDraft) -> Submitted {
        let valid = match draft.checked(self.clock.today()) {
            Ok(valid) => valid,
            Err(errors) => {
                self.errors = errors.clone();
                self.notices.push(Notice::error("Check your input again."));
                return Submitted::Rejected(errors);
            }
        };

        let outcome = match self.editing {
            None => {
                let id = self.ids.next_id(&self.held_ids());
                let product = valid.into_product(id);
                self.products.insert(0, product.clone());
                tracing::info!(%id, "product added");
                self.notices.push(Notice::success("Product added."));
                Submitted::Added(product)
            }
            Some(id) => {
                let product = valid.into_product(id);
                if let Some(slot) = self.products.iter_mut().find(|p| p.id == id) {
                    *slot = product.clone();
                }
                tracing::info!(%id, "product updated");
                self.notices.push(Notice::success("Product updated."));
                Submitted::Updated(product)
            }
        };

        self.persist();
        self.reset_edit_state();
        outcome
    }

    /// Start editing: marks the id and returns a draft filled from the
    /// current record. The list is untouched.
    pub fn begin_edit(&mut self, id: ProductId) -> DomainResult<ProductDraft> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;
        let draft = ProductDraft::from(product);
        self.editing = Some(id);
        Ok(draft)
    }

    /// Delete after confirmation. A confirmed delete resets any in-progress
    /// edit, whichever id it targeted.
    pub fn remove(&mut self, id: ProductId) -> DomainResult<Removal> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;

        let message = format!("Remove product \"{}\"?", self.products[index].name);
        if !self.prompt.confirm(&message) {
            return Ok(Removal::Cancelled);
        }

        let product = self.products.remove(index);
        tracing::info!(%id, "product removed");
        self.notices.push(Notice::success("Product deleted."));
        self.persist();
        self.reset_edit_state();
        Ok(Removal::Removed(product))
    }

    /// Leave edit mode: clears the marker and the error map, hands back the
    /// default draft. Idempotent; the list is untouched.
    pub fn cancel_edit(&mut self) -> ProductDraft {
        self.reset_edit_state();
        ProductDraft::default()
    }

    fn held_ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id).collect()
    }

    fn reset_edit_state(&mut self) {
        self.editing = None;
        self.errors = FieldErrors::default();
    }

    /// Write the full list back to the snapshot slot.
    ///
    /// Failures are non-fatal to the in-memory state: logged and queued as a
    /// warning notice instead of being silently dropped.
    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.products) {
            Ok(payload) => payload,
            Err(err) => {
                self.persist_failed(err.into());
                return;
            }
        };
        if let Err(err) = self.storage.set(PRODUCTS_KEY, &payload) {
            self.persist_failed(err);
        }
    }

    fn persist_failed(&mut self, err: SnapshotError) {
        tracing::warn!("snapshot write failed, catalog kept in memory only: {err}");
        self.notices.push(Notice::warning(format!(
            "Changes are kept in memory but could not be saved: {err}"
        )));
    }
}
