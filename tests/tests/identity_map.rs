use std::rc::Rc;

use ormlet::EntityManager;
use pretty_assertions::assert_eq;
use tests::{user_row, RecordingConnection, User};

#[test]
fn two_finds_share_one_instance() {
    let conn = RecordingConnection::new();
    conn.push_row(user_row(1, "a", 30, "a@x"));

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    let first = manager.find::<User, _>(1_i64).unwrap().unwrap();
    let second = manager.find::<User, _>(1_i64).unwrap().unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(*first.borrow(), User::new(1, "a", 30, "a@x"));
}

#[test]
fn cached_find_skips_storage() {
    let conn = RecordingConnection::new();
    conn.push_row(user_row(1, "a", 30, "a@x"));

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    manager.find::<User, _>(1_i64).unwrap().unwrap();
    manager.find::<User, _>(1_i64).unwrap().unwrap();
    manager.find::<User, _>(1_i64).unwrap().unwrap();

    assert_eq!(conn.query_count(), 1);
    assert_eq!(
        conn.last_executed().unwrap(),
        "SELECT id, nick_name, old, email FROM users WHERE id = 1"
    );
}

#[test]
fn absent_row_is_none_and_not_cached() {
    let conn = RecordingConnection::new();
    conn.push_empty();
    conn.push_empty();

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    assert!(manager.find::<User, _>(9_i64).unwrap().is_none());
    assert!(manager.find::<User, _>(9_i64).unwrap().is_none());

    // A miss leaves nothing behind, so the next find asks storage again.
    assert_eq!(conn.query_count(), 2);
}

#[test]
fn get_requires_a_hit() {
    let conn = RecordingConnection::new();
    conn.push_row(user_row(1, "a", 30, "a@x"));
    conn.push_empty();

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    let user = manager.get::<User, _>(1_i64).unwrap();
    assert_eq!(user.borrow().id, 1);

    let err = manager.get::<User, _>(9_i64).unwrap_err();
    assert!(err.is_record_not_found());
    assert!(err.to_string().contains("users"));
}

#[test]
fn distinct_ids_load_distinct_instances() {
    let conn = RecordingConnection::new();
    conn.push_row(user_row(1, "a", 30, "a@x"));
    conn.push_row(user_row(2, "b", 40, "b@x"));

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    let one = manager.find::<User, _>(1_i64).unwrap().unwrap();
    let two = manager.find::<User, _>(2_i64).unwrap().unwrap();

    assert!(!Rc::ptr_eq(&one, &two));
    assert_eq!(one.borrow().id, 1);
    assert_eq!(two.borrow().id, 2);
}

#[test]
fn find_all_bypasses_the_context() {
    let conn = RecordingConnection::new();
    conn.push_row(user_row(1, "a", 30, "a@x"));
    conn.push_rows(vec![
        user_row(1, "a", 30, "a@x"),
        user_row(2, "b", 40, "b@x"),
    ]);

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    // Track id 1 first, then confirm find_all still reads everything fresh.
    manager.find::<User, _>(1_i64).unwrap().unwrap();
    let all = manager.find_all::<User>().unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(
        conn.last_executed().unwrap(),
        "SELECT id, nick_name, old, email FROM users"
    );
}
