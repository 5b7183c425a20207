use ormlet::EntityManager;
use pretty_assertions::assert_eq;
use tests::{user_row, RecordingConnection, User};

#[test]
fn persist_inserts_then_baselines() {
    let conn = RecordingConnection::new();
    conn.push_row(user_row(1, "a", 30, "a@x"));

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    let handle = manager.persist(User::new(1, "a", 30, "a@x")).unwrap();

    assert_eq!(
        conn.executed(),
        [
            "INSERT INTO users (id, nick_name, old, email) VALUES (1, 'a', 30, 'a@x')",
            "SELECT id, nick_name, old, email FROM users WHERE id = 1",
        ]
    );
    assert_eq!(*handle.borrow(), User::new(1, "a", 30, "a@x"));
}

#[test]
fn persist_then_find_hits_the_cache() {
    let conn = RecordingConnection::new();
    conn.push_row(user_row(1, "a", 30, "a@x"));

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    let persisted = manager.persist(User::new(1, "a", 30, "a@x")).unwrap();
    let queries = conn.query_count();

    let found = manager.find::<User, _>(1_i64).unwrap().unwrap();

    assert!(std::rc::Rc::ptr_eq(&persisted, &found));
    assert_eq!(conn.query_count(), queries);
}

#[test]
fn persisting_a_tracked_identity_skips_the_insert() {
    let conn = RecordingConnection::new();
    conn.push_row(user_row(1, "a", 30, "a@x"));

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    manager.persist(User::new(1, "a", 30, "a@x")).unwrap();
    let statements = conn.executed().len();

    // Second persist for the same id replaces the tracked instance only.
    let handle = manager.persist(User::new(1, "b", 30, "a@x")).unwrap();

    assert_eq!(conn.executed().len(), statements);
    assert_eq!(handle.borrow().name, "b");
}

#[test]
fn transient_fields_never_reach_storage() {
    let conn = RecordingConnection::new();
    conn.push_row(user_row(1, "a", 30, "a@x"));

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    let mut user = User::new(1, "a", 30, "a@x");
    user.position = Some(4);
    manager.persist(user).unwrap();

    assert_eq!(
        conn.executed()[0],
        "INSERT INTO users (id, nick_name, old, email) VALUES (1, 'a', 30, 'a@x')"
    );
}

#[test]
fn storage_failure_propagates() {
    let conn = RecordingConnection::new();
    conn.fail_next("disk full");

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    let err = manager.persist(User::new(1, "a", 30, "a@x")).unwrap_err();

    assert!(err.is_storage());
    assert!(conn.executed().is_empty());
}

#[test]
fn create_and_drop_table() {
    let conn = RecordingConnection::new();

    let mut manager = EntityManager::builder()
        .register::<User>()
        .build(conn.clone());

    manager.create_table::<User>().unwrap();
    manager.drop_table::<User>().unwrap();

    assert_eq!(
        conn.executed(),
        [
            "CREATE TABLE users (id BIGINT PRIMARY KEY, nick_name VARCHAR(255), old BIGINT, email VARCHAR(255))",
            "DROP TABLE users",
        ]
    );
}
