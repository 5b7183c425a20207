use ormlet_core::{
    schema::Table,
    stmt::{FieldValue, Row, Value},
    Result,
};

/// A domain type with persistence metadata mapping it to a table.
///
/// Normally implemented with `#[derive(Entity)]`. The trait supplies the
/// table descriptor, per-instance field values, the primary-key value and
/// the reverse row mapping — everything the engine needs to generate SQL
/// for the type.
pub trait Entity: Sized + 'static {
    /// The table this entity maps to.
    ///
    /// Columns appear in field declaration order; `#[transient]` fields are
    /// excluded entirely.
    fn table() -> Table;

    /// Current values of all persistent fields, in column order.
    fn values(&self) -> Vec<FieldValue>;

    /// The primary-key field's value.
    fn id(&self) -> Value;

    /// Construct an instance from a queried row.
    ///
    /// Transient fields are restored with their default values.
    fn load(row: &Row) -> Result<Self>;
}
