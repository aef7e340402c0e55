//! Black-box flow over the public API with the file-backed snapshot store:
//! seed, mutate, drop, reopen, and check what survived on disk.

use chrono::NaiveDate;
use katalog_core::{FixedClock, ProductId, SequentialIdGen};
use katalog_products::{Category, Product, ProductDraft};
use katalog_store::{
    FixedPrompt, JsonFileSnapshotStore, PRODUCTS_KEY, ProductStore, Removal, SnapshotStore,
    Submitted,
};

type FlowStore<'a> =
    ProductStore<JsonFileSnapshotStore, SequentialIdGen, FixedClock, &'a FixedPrompt>;

fn open_store<'a>(dir: &std::path::Path, prompt: &'a FixedPrompt) -> FlowStore<'a> {
    katalog_observability::init();
    ProductStore::open(
        JsonFileSnapshotStore::open(dir).expect("open snapshot dir"),
        SequentialIdGen::starting_at(100),
        FixedClock(NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")),
        prompt,
    )
    .expect("open store")
}

fn draft() -> ProductDraft {
    ProductDraft {
        name: "Teh Melati".to_string(),
        description: "Teh melati celup isi dua puluh kantong".to_string(),
        price: "12000".to_string(),
        category: Some(Category::Minuman),
        release_date: "2025-01-10".to_string(),
        stock: 40,
        active: true,
    }
}

#[test]
fn catalog_survives_a_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    let prompt = FixedPrompt::new(true);

    let expected = {
        let mut store = open_store(dir.path(), &prompt);
        assert_eq!(store.products().len(), 2, "fresh store starts seeded");

        let outcome = store.submit(&draft());
        assert!(matches!(outcome, Submitted::Added(_)));
        store.products().to_vec()
    };

    let reopened = open_store(dir.path(), &prompt);
    assert_eq!(reopened.products(), expected.as_slice());
    assert_eq!(reopened.products()[0].name, "Teh Melati");
}

#[test]
fn snapshot_file_uses_the_original_wire_format() {
    let dir = tempfile::tempdir().expect("temp dir");
    let prompt = FixedPrompt::new(true);
    let store = open_store(dir.path(), &prompt);

    let payload = store
        .storage()
        .get(PRODUCTS_KEY)
        .expect("read slot")
        .expect("seed snapshot written");
    let json: serde_json::Value = serde_json::from_str(&payload).expect("valid JSON");

    let first = &json.as_array().expect("array")[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["releaseDate"], "2024-01-01");
    assert_eq!(first["category"], "Makanan");
    assert_eq!(first["active"], true);
}

#[test]
fn edit_and_delete_round_trip_through_the_snapshot() {
    let dir = tempfile::tempdir().expect("temp dir");
    let prompt = FixedPrompt::new(true);

    {
        let mut store = open_store(dir.path(), &prompt);

        let mut editing = store.begin_edit(ProductId::new(2)).expect("begin edit");
        editing.name = "Minuman Hangat".to_string();
        editing.description = "Aneka minuman hangat untuk musim hujan".to_string();
        let outcome = store.submit(&editing);
        assert!(matches!(outcome, Submitted::Updated(p) if p.id == ProductId::new(2)));

        let outcome = store.remove(ProductId::new(1)).expect("remove");
        assert!(matches!(outcome, Removal::Removed(_)));
    }

    let reopened = open_store(dir.path(), &prompt);
    let products: &[Product] = reopened.products();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, ProductId::new(2));
    assert_eq!(products[0].name, "Minuman Hangat");
}
