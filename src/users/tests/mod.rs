//! Unit tests for users module
//!
//! Exercises the in-memory store. The PostgreSQL store is not tested here.

#![allow(clippy::unwrap_used)]

use crate::users::{MemoryUserStore, NewUser, User, UserStore, UserStoreError};

#[test]
fn new_user_stamps_matching_timestamps() {
    let user = NewUser::new("kim");

    assert_eq!(user.name, "kim");
    assert_eq!(user.created_at, user.updated_at);
    assert_eq!(user.id.get_version_num(), 4);
}

#[test]
fn new_user_ids_are_unique() {
    assert_ne!(NewUser::new("a").id, NewUser::new("a").id);
}

#[test]
fn create_then_find() {
    let store = MemoryUserStore::new();
    let new_user = NewUser::new("kim");
    let id = new_user.id;

    let created = store.create(new_user).unwrap();
    let found = store.find_by_name("kim").unwrap();

    assert_eq!(created.id, id);
    assert_eq!(found, created);
}

#[test]
fn find_missing_user_is_not_found() {
    let store = MemoryUserStore::with_users(["kim"]);

    let err = store.find_by_name("lane").unwrap_err();

    assert!(matches!(err, UserStoreError::NotFound { ref name } if name == "lane"));
}

#[test]
fn create_duplicate_is_conflict() {
    let store = MemoryUserStore::with_users(["kim"]);

    let err = store.create(NewUser::new("kim")).unwrap_err();

    assert!(matches!(err, UserStoreError::Conflict { ref name } if name == "kim"));
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_all_reports_count() {
    let store = MemoryUserStore::with_users(["a", "b", "c"]);

    assert_eq!(store.delete_all().unwrap(), 3);
    assert!(store.is_empty());
    assert_eq!(store.delete_all().unwrap(), 0);
}

#[test]
fn list_all_keeps_insertion_order() {
    let store = MemoryUserStore::with_users(["b", "a"]);
    store.create(NewUser::new("c")).unwrap();

    let names: Vec<String> = store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|user: User| user.name)
        .collect();

    assert_eq!(names, ["b", "a", "c"]);
}
