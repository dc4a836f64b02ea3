//! Catalog read path: listings, kind-discriminated lookups, legacy probing
//! Run: cargo test -p store-server --test catalog_read

use shared::models::{Deal, ItemKind, Product, VariantOption};
use store_server::catalog::{CatalogService, pricing};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

fn product(name: &str, base_price: f64, sort_order: i32, is_active: bool) -> Product {
    Product {
        name: name.to_string(),
        base_price,
        variant_options: vec![],
        in_stock: true,
        images: vec![],
        colors: vec![],
        sort_order,
        is_active,
    }
}

async fn setup() -> (tempfile::TempDir, Surreal<Db>, CatalogService) {
    let tmp = tempfile::tempdir().unwrap();
    let db: Surreal<Db> = Surreal::new::<RocksDb>(tmp.path().join("store.db")).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    let _: Option<Product> = db
        .create(("product", "p2"))
        .content(product("Power Bank", 49.0, 2, true))
        .await
        .unwrap();
    let _: Option<Product> = db
        .create(("product", "p1"))
        .content(product("Smart Watch", 199.0, 1, true))
        .await
        .unwrap();
    let _: Option<Product> = db
        .create(("product", "p3"))
        .content(product("Discontinued Cable", 5.0, 3, false))
        .await
        .unwrap();

    let _: Option<Deal> = db
        .create(("deal", "d1"))
        .content(Deal {
            name: "Tablet Clearance".to_string(),
            base_price: 300.0,
            previous_price: Some(450.0),
            variant_options: vec![
                VariantOption { label: "64GB".to_string(), price: 300.0 },
                VariantOption { label: "128GB".to_string(), price: 350.0 },
            ],
            in_stock: false,
            images: vec![],
            colors: vec![],
            sort_order: 1,
            is_active: true,
        })
        .await
        .unwrap();

    let catalog = CatalogService::new(db.clone());
    (tmp, db, catalog)
}

#[tokio::test]
async fn listings_are_active_only_and_display_ordered() {
    let (_tmp, _db, catalog) = setup().await;

    let products = catalog.list_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Smart Watch");
    assert_eq!(products[1].name, "Power Bank");
    assert!(products.iter().all(|p| p.kind == ItemKind::Product));
    assert_eq!(products[0].id, "product:p1");

    let deals = catalog.list_deals().await.unwrap();
    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0].kind, ItemKind::Deal);
    assert_eq!(deals[0].previous_price, Some(450.0));
    assert!(deals[0].has_discount());
    assert!(!deals[0].in_stock);
}

#[tokio::test]
async fn find_is_kind_discriminated() {
    let (_tmp, _db, catalog) = setup().await;

    let item = catalog.find(ItemKind::Product, "product:p1").await.unwrap();
    assert_eq!(item.unwrap().name, "Smart Watch");

    // Wrong namespace misses instead of guessing
    let missing = catalog.find(ItemKind::Deal, "product:p1").await.unwrap();
    assert!(missing.is_none());

    // Bare keys are accepted too
    let item = catalog.find(ItemKind::Deal, "d1").await.unwrap();
    assert_eq!(item.unwrap().id, "deal:d1");
}

#[tokio::test]
async fn find_any_probes_product_then_deal() {
    let (_tmp, _db, catalog) = setup().await;

    let item = catalog.find_any("product:p2").await.unwrap().unwrap();
    assert_eq!(item.kind, ItemKind::Product);

    let item = catalog.find_any("deal:d1").await.unwrap().unwrap();
    assert_eq!(item.kind, ItemKind::Deal);

    assert!(catalog.find_any("product:nope").await.unwrap().is_none());
}

#[tokio::test]
async fn display_price_and_default_variant_from_live_records() {
    let (_tmp, _db, catalog) = setup().await;

    let deal = catalog.find(ItemKind::Deal, "deal:d1").await.unwrap().unwrap();
    assert_eq!(deal.display_price(), 300.0);
    assert_eq!(pricing::default_variant(&deal), Some("64GB"));

    let product = catalog.find(ItemKind::Product, "product:p1").await.unwrap().unwrap();
    assert_eq!(product.display_price(), 199.0);
    assert_eq!(pricing::default_variant(&product), None);
}
