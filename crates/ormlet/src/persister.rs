use crate::{Entity, EntityKey};

use ormlet_core::{
    schema::Table,
    stmt::{FieldValue, Value},
    Connection, Result,
};
use ormlet_sql::Serializer;

use log::debug;

use std::{any::Any, any::TypeId, cell::RefCell, marker::PhantomData};

/// Per-type SQL strategy: the only component that talks to the connection
/// for a given entity type.
///
/// Builds statements through the serializer and executes them; execution
/// failures propagate unchanged, with no retry.
pub struct Persister<T: Entity> {
    table: Table,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> Persister<T> {
    pub fn new() -> Self {
        Self {
            table: T::table(),
            _marker: PhantomData,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Unfiltered select, mapping each row back through `Entity::load`.
    pub fn find_all(&self, conn: &mut dyn Connection) -> Result<Vec<T>> {
        let sql = Serializer::new(&self.table).select("find_all", &[])?;
        debug!("executing `{sql}`");

        conn.query(&sql)?.iter().map(T::load).collect()
    }

    /// Filtered select; an absent row is `Ok(None)`, not an error.
    pub fn find_by_id(&self, conn: &mut dyn Connection, id: &Value) -> Result<Option<T>> {
        let sql = Serializer::new(&self.table).select("find_by_id", std::slice::from_ref(id))?;
        debug!("executing `{sql}`");

        match conn.query_one(&sql)? {
            Some(row) => T::load(&row).map(Some),
            None => Ok(None),
        }
    }

    pub fn insert(&self, conn: &mut dyn Connection, entity: &T) -> Result<()> {
        let sql = Serializer::new(&self.table).insert(&entity.values())?;
        debug!("executing `{sql}`");

        conn.exec(&sql)
    }

    pub fn update(&self, conn: &mut dyn Connection, values: &[FieldValue], id: &Value) -> Result<()> {
        let sql = Serializer::new(&self.table).update(values, id)?;
        debug!("executing `{sql}`");

        conn.exec(&sql)
    }

    pub fn delete(&self, conn: &mut dyn Connection, id: &Value) -> Result<()> {
        let sql = Serializer::new(&self.table).delete(id)?;
        debug!("executing `{sql}`");

        conn.exec(&sql)
    }

    pub fn create_table(&self, conn: &mut dyn Connection) -> Result<()> {
        let sql = Serializer::new(&self.table).create_table()?;
        debug!("executing `{sql}`");

        conn.exec(&sql)
    }

    pub fn drop_table(&self, conn: &mut dyn Connection) -> Result<()> {
        let sql = Serializer::new(&self.table).drop_table();
        debug!("executing `{sql}`");

        conn.exec(&sql)
    }

    /// The primary-key field's value on an instance.
    pub fn id_value(&self, entity: &T) -> Value {
        entity.id()
    }

    /// The persistence context key for an id value.
    pub fn key_of(&self, id: &Value) -> EntityKey {
        EntityKey::new(TypeId::of::<T>(), id)
    }
}

impl<T: Entity> Default for Persister<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased facet of [`Persister`], enough for flush to replay deletes
/// and updates for snapshots whose entity type is only known as a `TypeId`.
pub(crate) trait ErasedPersister {
    fn as_any(&self) -> &dyn Any;

    /// Delete the row for a snapshot's recorded id.
    fn delete_by_id(&self, conn: &mut dyn Connection, id: &Value) -> Result<()>;

    /// Update from the current state of a tracked (type-erased) entity,
    /// filtered by the snapshot's recorded id.
    fn update_tracked(&self, conn: &mut dyn Connection, entity: &dyn Any, id: &Value)
        -> Result<()>;
}

impl<T: Entity> ErasedPersister for Persister<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn delete_by_id(&self, conn: &mut dyn Connection, id: &Value) -> Result<()> {
        self.delete(conn, id)
    }

    fn update_tracked(
        &self,
        conn: &mut dyn Connection,
        entity: &dyn Any,
        id: &Value,
    ) -> Result<()> {
        let cell = entity
            .downcast_ref::<RefCell<T>>()
            .ok_or_else(|| ormlet_core::err!("tracked entity has unexpected type"))?;
        let values = cell.borrow().values();

        self.update(conn, &values, id)
    }
}
