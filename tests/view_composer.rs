mod common;

use shopcart::catalog::{Catalog, ProductId};
use shopcart::store::SelectionStore;
use shopcart::view::{Badges, Tab, ViewComposer};

#[test]
fn all_products_is_the_catalog_verbatim() {
    let (catalog, store) = common::seeded();
    let composer = ViewComposer::new(&catalog, &store);
    assert_eq!(composer.all_products(), catalog.products());
}

#[test]
fn favorite_products_are_a_sub_order_of_all_products() {
    let (catalog, mut store) = common::seeded();
    for id in [6, 2, 4] {
        store.toggle_favorite(ProductId(id)).unwrap();
    }
    let composer = ViewComposer::new(&catalog, &store);

    let all: Vec<ProductId> = composer.all_products().iter().map(|p| p.id).collect();
    let favorites: Vec<ProductId> = composer.favorite_products().iter().map(|p| p.id).collect();

    let positions: Vec<usize> = favorites
        .iter()
        .map(|id| all.iter().position(|other| other == id).expect("subset of all"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(favorites, vec![ProductId(2), ProductId(4), ProductId(6)]);
}

#[test]
fn badges_track_store_counts() {
    let (catalog, mut store) = common::seeded();
    store.toggle_favorite(ProductId(1)).unwrap();
    store.add_to_cart(ProductId(1)).unwrap();
    store.add_to_cart(ProductId(1)).unwrap();

    let composer = ViewComposer::new(&catalog, &store);
    assert_eq!(
        composer.badges(),
        Badges {
            all_products: 6,
            favorites: 1,
            cart: 2,
        }
    );
}

#[test]
fn products_for_switches_on_tab() {
    let (catalog, mut store) = common::seeded();
    store.toggle_favorite(ProductId(5)).unwrap();
    let composer = ViewComposer::new(&catalog, &store);

    assert_eq!(composer.products_for(Tab::All).len(), 6);
    assert_eq!(composer.products_for(Tab::Favorites).len(), 1);
    assert!(composer.is_favorite(ProductId(5)));
}

#[test]
fn composer_works_over_a_loaded_catalog() {
    let catalog = Catalog::from_toml_str(
        r#"
[[products]]
id = 7
name = "Kettle"
price = 30
image = "https://example.com/kettle.png"
rating = 4.1
reviews = 8
category = "Kitchen"
description = "Boils water"
"#,
    )
    .unwrap();
    let mut store = SelectionStore::new(&catalog);
    assert!(store.toggle_favorite(ProductId(1)).is_err());
    store.toggle_favorite(ProductId(7)).unwrap();

    let composer = ViewComposer::new(&catalog, &store);
    assert_eq!(composer.favorite_products().len(), 1);
    assert_eq!(composer.badges().all_products, 1);
}
