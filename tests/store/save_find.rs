use laptop_catalog::{sample, Gpu, InMemoryLaptopStore, LaptopStore, StoreError};

use crate::support::{gb, laptop};

#[test]
fn saved_laptop_is_found() {
    let store = InMemoryLaptopStore::new();
    let original = sample::new_laptop();

    store.save(&original).unwrap();

    let found = store.find(&original.id).unwrap().unwrap();
    assert_eq!(found, original);
}

#[test]
fn mutating_a_found_copy_does_not_touch_the_store() {
    let store = InMemoryLaptopStore::new();
    let original = sample::new_laptop();
    store.save(&original).unwrap();

    let mut found = store.find(&original.id).unwrap().unwrap();
    found.price_usd = 1.0;
    found.cpu.number_cores = 64;
    found.gpus.push(Gpu::default());
    found.storages.clear();

    let again = store.find(&original.id).unwrap().unwrap();
    assert_eq!(again, original);
}

#[test]
fn mutating_the_saved_value_does_not_touch_the_store() {
    let store = InMemoryLaptopStore::new();
    let mut original = laptop("l1", 1200.0, 4, 2.4, gb(8));
    store.save(&original).unwrap();

    original.price_usd = 9999.0;
    original.brand.push_str(" (edited)");

    let found = store.find("l1").unwrap().unwrap();
    assert_eq!(found.price_usd, 1200.0);
    assert_eq!(found.brand, "Dell");
}

#[test]
fn duplicate_id_is_rejected_and_first_value_kept() {
    let store = InMemoryLaptopStore::new();
    let first = laptop("dup", 1000.0, 4, 2.0, gb(8));
    let second = laptop("dup", 2000.0, 8, 3.0, gb(32));

    store.save(&first).unwrap();
    let err = store.save(&second).unwrap_err();

    assert!(matches!(err, StoreError::AlreadyExists(ref id) if id == "dup"));
    assert_eq!(store.find("dup").unwrap().unwrap(), first);
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn absent_id_is_none_not_error() {
    let store = InMemoryLaptopStore::new();
    store.save(&laptop("present", 1000.0, 4, 2.0, gb(8))).unwrap();

    assert_eq!(store.find("absent").unwrap(), None);
}
