use dialbook_core::domain::ContactKey;
use dialbook_core::CoreError;
use dialbook_store::error::StoreError;
use dialbook_store::ContactStore;

fn names<'a>(contacts: impl Iterator<Item = &'a dialbook_core::Contact>) -> Vec<String> {
    contacts.map(|contact| contact.name.clone()).collect()
}

#[test]
fn add_normalizes_and_rejects_duplicate_phone() {
    let mut store = ContactStore::new();

    let contact = store.add("Kamal", "98765-43210").expect("add contact");
    assert_eq!(contact.name, "Kamal");
    assert_eq!(contact.phone.as_deref(), Some("9876543210"));

    let err = store.add("Kamal", "98765-43210").unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { ref phone } if phone == "9876543210"));
    assert_eq!(store.len(), 1);

    let err = store.add("Someone Else", "+91 9876543210").unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { .. }));
    assert_eq!(store.len(), 1);
}

#[test]
fn add_reports_validation_errors() {
    let mut store = ContactStore::new();

    let err = store.add("   ", "9876543210").unwrap_err();
    assert!(matches!(err, StoreError::Validation(CoreError::InvalidName)));

    let err = store.add("Ada", "555-1212").unwrap_err();
    assert!(matches!(err, StoreError::Validation(CoreError::InvalidPhone(_))));

    assert!(store.is_empty());
}

#[test]
fn add_then_search_by_name_finds_single_record() {
    let mut store = ContactStore::new();
    store.add("Ada Lovelace", "1111111111").expect("add ada");
    store.add("Grace Hopper", "2222222222").expect("add grace");

    let found: Vec<_> = store.search("Ada Lovelace").collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Ada Lovelace");
}

#[test]
fn search_matches_name_case_insensitively_and_phone_digits() {
    let mut store = ContactStore::new();
    store.add("Ada Lovelace", "9876543210").expect("add ada");
    store.add("Grace Hopper", "1234567890").expect("add grace");
    store.add("Alan Turing", "5555543210").expect("add alan");

    assert_eq!(names(store.search("  LOVE ")), vec!["Ada Lovelace"]);
    assert_eq!(names(store.search("43210")), vec!["Ada Lovelace", "Alan Turing"]);
    assert_eq!(names(store.search("a")).len(), 3);
    assert_eq!(store.search("nobody").count(), 0);
}

#[test]
fn search_with_blank_query_is_empty() {
    let mut store = ContactStore::new();
    store.add("Ada", "9876543210").expect("add");

    assert_eq!(store.search("").count(), 0);
    assert_eq!(store.search("   \t").count(), 0);
}

#[test]
fn delete_by_phone_removes_single_record() {
    let mut store = ContactStore::new();
    store.add("Kamal", "9876543210").expect("add first");
    store.add("Kamal", "9876543211").expect("add second");

    assert!(store.delete("+91 98765 43210"));
    assert_eq!(store.len(), 1);
    assert!(!store.contains_key(&ContactKey::from_phone("9876543210").unwrap()));
    assert!(store.contains_key(&ContactKey::from_phone("9876543211").unwrap()));

    assert!(!store.delete("9876543210"));
}

#[test]
fn delete_by_name_removes_every_match() {
    let mut store = ContactStore::new();
    store.add("Kamal", "9876543210").expect("add first");
    store.add("Ada", "1111111111").expect("add ada");
    store.add("kamal", "9876543211").expect("add second");

    assert!(store.delete("  KAMAL "));
    assert_eq!(names(store.list()), vec!["Ada"]);

    // A freed phone key can be reused.
    store.add("Kamal", "9876543210").expect("re-add");
    assert_eq!(store.len(), 2);
}

#[test]
fn delete_by_phone_shaped_name_removes_name_keyed_record() {
    let mut store = ContactStore::from_json(r#"[{"name": "0000000000", "phone": ""}]"#);
    assert_eq!(store.len(), 1);

    assert!(store.delete("0000000000"));
    assert!(store.is_empty());
}

#[test]
fn delete_without_match_returns_false() {
    let mut store = ContactStore::new();
    store.add("Ada", "9876543210").expect("add");

    assert!(!store.delete("Grace"));
    assert!(!store.delete(""));
    assert!(!store.delete("   "));
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_by_name_matches_whole_name_only() {
    let mut store = ContactStore::new();
    store.add("Ada Lovelace", "9876543210").expect("add");

    assert!(!store.delete("Ada"));
    assert_eq!(store.len(), 1);
}

#[test]
fn list_is_ordered_and_restartable() {
    let mut store = ContactStore::new();
    store.add("Charlie", "3333333333").expect("add c");
    store.add("Alice", "1111111111").expect("add a");
    store.add("Bob", "2222222222").expect("add b");

    let first = names(store.list());
    let second = names(store.list());
    assert_eq!(first, vec!["Charlie", "Alice", "Bob"]);
    assert_eq!(first, second);
    assert_eq!(store.len(), 3);

    let via_ref: Vec<_> = (&store).into_iter().map(|c| c.name.as_str()).collect();
    assert_eq!(via_ref, vec!["Charlie", "Alice", "Bob"]);
}

#[test]
fn get_returns_contact_by_key() {
    let mut store = ContactStore::new();
    store.add("Ada", "9876543210").expect("add");

    let key = ContactKey::from_phone("09876543210").expect("key");
    assert_eq!(store.get(&key).map(|c| c.name.as_str()), Some("Ada"));

    let missing = ContactKey::from_phone("1111111111").expect("key");
    assert!(store.get(&missing).is_none());
}
