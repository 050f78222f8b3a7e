//! Integration tests for the prefix index and the suggestion surface.
//!
//! Exercises the public API the way the storefront does: load catalogs,
//! then answer queries from several request threads.

use std::collections::BTreeSet;
use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use marketplace_suggest_lib::catalog;
use marketplace_suggest_lib::config::{CatalogConfig, CatalogSource, SuggestSettings};
use marketplace_suggest_lib::data_structures::{PrefixIndex, SharedPrefixIndex};
use marketplace_suggest_lib::search::{IndexRegistry, Suggester};

fn set_of(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn as_set(results: Vec<String>) -> BTreeSet<String> {
    results.into_iter().collect()
}

#[test]
fn test_car_dog_scenario() {
    let mut index = PrefixIndex::new();
    for word in ["Car", "Card", "Care", "Cart", "Dog"] {
        index.insert(word);
    }

    assert_eq!(as_set(index.query("Car")), set_of(&["Car", "Card", "Care", "Cart"]));
    assert_eq!(as_set(index.query("Card")), set_of(&["Card"]));
    assert_eq!(as_set(index.query("Do")), set_of(&["Dog"]));
    assert!(index.query("z").is_empty());
}

#[test]
fn test_last_spelling_wins() {
    let mut index = PrefixIndex::new();
    index.insert("Apple");
    index.insert("APPLE");

    assert_eq!(index.query("apple"), vec!["APPLE".to_string()]);
    assert_eq!(index.query(""), vec!["APPLE".to_string()]);
}

#[test]
fn test_no_match_and_disjoint_branches() {
    let index: PrefixIndex = ["Apple", "Apricot", "Banana"].into_iter().collect();

    assert!(index.query("xyz").is_empty());
    assert_eq!(as_set(index.query("Ap")), set_of(&["Apple", "Apricot"]));
    assert_eq!(as_set(index.query("")), set_of(&["Apple", "Apricot", "Banana"]));
}

#[test]
fn test_catalog_to_suggestions() {
    let dir = tempfile::tempdir().unwrap();
    let products = dir.path().join("products.json");
    fs::write(
        &products,
        r#"[
            {"id": 1, "name": "Carbon Road Bike"},
            {"id": 2, "name": "Car Phone Mount"},
            {"id": 3, "name": "cardigan"},
            {"id": 4, "name": "Dog Leash"}
        ]"#,
    )
    .unwrap();

    let registry = Arc::new(IndexRegistry::new());
    let config = CatalogConfig {
        sources: vec![CatalogSource {
            index: "products".to_string(),
            path: products,
        }],
        skip_missing: false,
    };
    assert_eq!(catalog::load_sources(&registry, &config).unwrap(), 4);

    let suggester = Suggester::new(
        Arc::clone(&registry),
        SuggestSettings::default()
            .with_min_prefix_chars(2)
            .with_max_results(2),
    );

    assert!(suggester.suggest("products", "C").is_empty());
    assert_eq!(
        suggester.suggest("products", "CAR"),
        vec!["Car Phone Mount", "Carbon Road Bike"]
    );
    assert_eq!(suggester.suggest("products", "dog l"), vec!["Dog Leash"]);
}

#[test]
fn test_shared_index_across_threads() {
    const READERS: usize = 4;
    const NAMES: usize = 500;

    let index = Arc::new(SharedPrefixIndex::new());
    let barrier = Arc::new(Barrier::new(READERS + 1));

    let writer = {
        let index = Arc::clone(&index);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..NAMES {
                index.insert(format!("Product {i:04}"));
            }
        })
    };

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let index = Arc::clone(&index);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut last_seen = 0;
                for _ in 0..100 {
                    let seen = index.query("product").len();
                    // The index only grows
                    assert!(seen >= last_seen);
                    last_seen = seen;
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(index.len(), NAMES);
    assert_eq!(index.query("PRODUCT 01").len(), 100);
}
