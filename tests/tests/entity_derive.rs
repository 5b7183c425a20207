use ormlet::{
    schema::Type,
    stmt::{FieldValue, Value},
    Entity,
};
use pretty_assertions::assert_eq;
use tests::{user_row, User};

#[test]
fn table_metadata() {
    let table = User::table();

    assert_eq!(table.name, "users");

    let names: Vec<_> = table.column_names().collect();
    assert_eq!(names, ["id", "nick_name", "old", "email"]);

    let pk = table.primary_key_column().unwrap();
    assert_eq!(pk.name, "id");
    assert_eq!(pk.ty, Type::I64);
    assert!(!table.column("email").unwrap().primary_key);
}

#[test]
fn transient_fields_are_not_columns() {
    let table = User::table();
    assert!(table.column("position").is_none());
}

#[test]
fn values_follow_declaration_order() {
    let user = User::new(1, "a", 30, "a@x");

    assert_eq!(
        user.values(),
        [
            FieldValue::new("id", 1_i64),
            FieldValue::new("nick_name", "a"),
            FieldValue::new("old", 30_i64),
            FieldValue::new("email", "a@x"),
        ]
    );
    assert_eq!(user.id(), Value::I64(1));
}

#[test]
fn load_maps_columns_and_defaults_transients() {
    let mut user = User::load(&user_row(1, "a", 30, "a@x")).unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "a");
    assert_eq!(user.age, 30);
    assert_eq!(user.email, "a@x");
    assert_eq!(user.position, None);

    // Transient state is in-memory only, invisible to load and values.
    user.position = Some(2);
    assert_eq!(user.values().len(), 4);
}

#[test]
fn load_requires_every_mapped_column() {
    let row = [("id", Value::I64(1))].into_iter().collect();
    assert!(User::load(&row).is_err());
}
