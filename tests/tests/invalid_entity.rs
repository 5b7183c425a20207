use ormlet::EntityManager;
use pretty_assertions::assert_eq;
use tests::{RecordingConnection, User};

#[test]
fn operations_on_an_unregistered_type_fail() {
    let conn = RecordingConnection::new();
    let mut manager = EntityManager::builder().build(conn.clone());

    assert!(manager.find::<User, _>(1_i64).unwrap_err().is_invalid_entity());
    assert!(manager.find_all::<User>().unwrap_err().is_invalid_entity());
    assert!(manager
        .persist(User::new(1, "a", 30, "a@x"))
        .unwrap_err()
        .is_invalid_entity());
    assert!(manager.remove::<User, _>(1_i64).unwrap_err().is_invalid_entity());
    assert!(manager.create_table::<User>().unwrap_err().is_invalid_entity());
    assert!(manager.drop_table::<User>().unwrap_err().is_invalid_entity());

    // The failure happens before any statement is built.
    assert_eq!(conn.executed(), Vec::<String>::new());
}

#[test]
fn the_error_names_the_offending_type() {
    let conn = RecordingConnection::new();
    let mut manager = EntityManager::builder().build(conn);

    let err = manager.find::<User, _>(1_i64).unwrap_err();
    assert!(err.to_string().contains("User"));
}
