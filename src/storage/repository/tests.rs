use crate::models::SortColumn;
use crate::storage::{Database, StorageError};

#[test]
fn test_insert_and_get_contact() {
    let db = Database::new_in_memory().unwrap();

    let contact = db
        .insert_contact("Ada Lovelace", "555-0100", Some("ada@example.com"))
        .unwrap();
    assert_eq!(contact.name, "Ada Lovelace");
    assert_eq!(contact.phone, "555-0100");
    assert_eq!(contact.email.as_deref(), Some("ada@example.com"));

    let fetched = db.get_contact(contact.id).unwrap().unwrap();
    assert_eq!(fetched.id, contact.id);
    assert_eq!(fetched.name, "Ada Lovelace");
}

#[test]
fn test_insert_contact_without_email() {
    let db = Database::new_in_memory().unwrap();

    let contact = db.insert_contact("Grace Hopper", "555-0101", None).unwrap();
    assert!(contact.email.is_none());

    let fetched = db.get_contact(contact.id).unwrap().unwrap();
    assert!(fetched.email.is_none());
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let db = Database::new_in_memory().unwrap();

    let first = db.insert_contact("A", "1", None).unwrap();
    let second = db.insert_contact("B", "2", None).unwrap();
    assert!(second.id > first.id);
}

#[test]
fn test_get_contact_missing_id() {
    let db = Database::new_in_memory().unwrap();
    assert!(db.get_contact(42).unwrap().is_none());
}

#[test]
fn test_update_contact_overwrites_fields() {
    let db = Database::new_in_memory().unwrap();
    let contact = db.insert_contact("Ada", "555-0100", None).unwrap();

    let updated = db
        .update_contact(contact.id, "Ada Lovelace", "555-0199", Some("ada@example.com"))
        .unwrap();
    assert!(updated);

    let fetched = db.get_contact(contact.id).unwrap().unwrap();
    assert_eq!(fetched.name, "Ada Lovelace");
    assert_eq!(fetched.phone, "555-0199");
    assert_eq!(fetched.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn test_update_missing_contact_is_noop() {
    let db = Database::new_in_memory().unwrap();

    let updated = db.update_contact(99, "Nobody", "000", None).unwrap();
    assert!(!updated);
    assert_eq!(db.count_contacts().unwrap(), 0);
}

#[test]
fn test_delete_contact() {
    let db = Database::new_in_memory().unwrap();
    let contact = db.insert_contact("Ada", "555-0100", None).unwrap();

    assert!(db.delete_contact(contact.id).unwrap());
    assert!(db.get_contact(contact.id).unwrap().is_none());

    // Deleting again is a no-op
    assert!(!db.delete_contact(contact.id).unwrap());
}

#[test]
fn test_list_contacts_insertion_order() {
    let db = Database::new_in_memory().unwrap();
    db.insert_contact("Charlie", "3", None).unwrap();
    db.insert_contact("Alice", "1", None).unwrap();
    db.insert_contact("Bob", "2", None).unwrap();

    let contacts = db.list_contacts().unwrap();
    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Charlie", "Alice", "Bob"]);
}

#[test]
fn test_search_matches_any_field() {
    let db = Database::new_in_memory().unwrap();
    db.insert_contact("Ada Lovelace", "555-0100", Some("ada@example.com"))
        .unwrap();
    db.insert_contact("Grace Hopper", "555-0101", Some("grace@navy.mil"))
        .unwrap();
    db.insert_contact("Alan Turing", "020-7946", None).unwrap();

    // Name match
    let by_name = db.search_contacts("Hopper").unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Grace Hopper");

    // Phone match
    let by_phone = db.search_contacts("7946").unwrap();
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].name, "Alan Turing");

    // Email match
    let by_email = db.search_contacts("navy.mil").unwrap();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Grace Hopper");
}

#[test]
fn test_search_empty_pattern_matches_everything() {
    let db = Database::new_in_memory().unwrap();
    db.insert_contact("Ada", "1", None).unwrap();
    db.insert_contact("Bob", "2", Some("bob@example.com")).unwrap();

    let all = db.search_contacts("").unwrap();
    assert_eq!(all.len(), db.list_contacts().unwrap().len());
}

#[test]
fn test_search_no_match() {
    let db = Database::new_in_memory().unwrap();
    db.insert_contact("Ada", "1", None).unwrap();

    assert!(db.search_contacts("zzz").unwrap().is_empty());
}

#[test]
fn test_list_contacts_sorted_by_name() {
    let db = Database::new_in_memory().unwrap();
    db.insert_contact("Charlie", "3", None).unwrap();
    db.insert_contact("Alice", "1", None).unwrap();
    db.insert_contact("Bob", "2", None).unwrap();

    let contacts = db.list_contacts_sorted(SortColumn::Name).unwrap();
    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Charlie"]);
}

#[test]
fn test_list_contacts_sorted_by_phone() {
    let db = Database::new_in_memory().unwrap();
    db.insert_contact("A", "555-0300", None).unwrap();
    db.insert_contact("B", "555-0100", None).unwrap();
    db.insert_contact("C", "555-0200", None).unwrap();

    let contacts = db.list_contacts_sorted(SortColumn::Phone).unwrap();
    let phones: Vec<&str> = contacts.iter().map(|c| c.phone.as_str()).collect();
    assert_eq!(phones, ["555-0100", "555-0200", "555-0300"]);
}

#[test]
fn test_restore_contact_preserves_existing_row() {
    let db = Database::new_in_memory().unwrap();
    let contact = db.insert_contact("Ada", "555-0100", None).unwrap();

    // Same id again: existing row wins
    let inserted = db
        .restore_contact(contact.id, "Impostor", "999", None)
        .unwrap();
    assert!(!inserted);

    let fetched = db.get_contact(contact.id).unwrap().unwrap();
    assert_eq!(fetched.name, "Ada");
    assert_eq!(fetched.phone, "555-0100");
}

#[test]
fn test_restore_contact_inserts_new_id() {
    let db = Database::new_in_memory().unwrap();

    let inserted = db
        .restore_contact(7, "Ada", "555-0100", Some("ada@example.com"))
        .unwrap();
    assert!(inserted);

    let fetched = db.get_contact(7).unwrap().unwrap();
    assert_eq!(fetched.name, "Ada");
}

#[test]
fn test_count_contacts() {
    let db = Database::new_in_memory().unwrap();
    assert_eq!(db.count_contacts().unwrap(), 0);

    db.insert_contact("Ada", "1", None).unwrap();
    db.insert_contact("Bob", "2", None).unwrap();
    assert_eq!(db.count_contacts().unwrap(), 2);
}

#[test]
fn test_insert_user_and_find() {
    let db = Database::new_in_memory().unwrap();

    let user = db.insert_user("decker", "hunter2").unwrap();
    assert_eq!(user.username, "decker");

    let found = db.find_user("decker", "hunter2").unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));
}

#[test]
fn test_find_user_requires_exact_match() {
    let db = Database::new_in_memory().unwrap();
    db.insert_user("decker", "hunter2").unwrap();

    assert!(db.find_user("decker", "wrong").unwrap().is_none());
    assert!(db.find_user("Decker", "hunter2").unwrap().is_none());
    assert!(db.find_user("other", "hunter2").unwrap().is_none());
}

#[test]
fn test_insert_duplicate_user_rejected() {
    let db = Database::new_in_memory().unwrap();
    db.insert_user("decker", "hunter2").unwrap();

    let result = db.insert_user("decker", "different");
    assert!(matches!(result, Err(StorageError::DuplicateUser(_))));

    // Original credentials still work
    assert!(db.find_user("decker", "hunter2").unwrap().is_some());
}
