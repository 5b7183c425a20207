use crate::{
    context::{self, PersistenceContext},
    persister::ErasedPersister,
    Entity, Persister, Tracked,
};

use ormlet_core::{stmt::Value, Connection, Error, Result};

use std::{
    any::{type_name, TypeId},
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
};

/// The session façade: find, find_all, persist, remove, flush.
///
/// One manager serves one synchronous unit of work. All SQL goes through the
/// per-type persisters, all caching through the persistence context; the
/// manager only orchestrates. Create one instance per unit of work — the
/// tracked handles are `Rc`-shared, so a manager never crosses threads.
pub struct EntityManager {
    persisters: HashMap<TypeId, Box<dyn ErasedPersister>>,
    context: PersistenceContext,
    conn: Box<dyn Connection>,
}

/// Builds an [`EntityManager`], registering each entity type up front.
///
/// Registration is what makes a type an entity from the engine's point of
/// view: operating on an unregistered type fails with an invalid entity
/// error before any SQL is built.
#[derive(Default)]
pub struct Builder {
    persisters: HashMap<TypeId, Box<dyn ErasedPersister>>,
}

impl Builder {
    pub fn register<T: Entity>(mut self) -> Self {
        self.persisters
            .insert(TypeId::of::<T>(), Box::new(Persister::<T>::new()));
        self
    }

    pub fn build(self, conn: impl Connection + 'static) -> EntityManager {
        EntityManager {
            persisters: self.persisters,
            context: PersistenceContext::new(),
            conn: Box::new(conn),
        }
    }
}

impl EntityManager {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Find by id, read-through caching the result.
    ///
    /// Once an identity is cached, every find returns the context's shared
    /// handle — never a fresh read — so two finds for the same id yield the
    /// same in-memory instance within the session.
    pub fn find<T, I>(&mut self, id: I) -> Result<Option<Tracked<T>>>
    where
        T: Entity,
        I: Into<Value>,
    {
        let id = id.into();
        let persister = persister_for::<T>(&self.persisters)?;
        let key = persister.key_of(&id);

        if !self.context.is_tracked(key) {
            let Some(entity) =
                self.context
                    .snapshot_of(key, persister, self.conn.as_mut(), &id)?
            else {
                return Ok(None);
            };

            self.context.track(key, Rc::new(RefCell::new(entity)));
        }

        let entity = self
            .context
            .entity(key)
            .ok_or_else(|| ormlet_core::err!("entity vanished from context"))?;
        context::downcast(entity).map(Some)
    }

    /// Find by id, requiring a hit.
    ///
    /// Same caching behavior as [`find`](Self::find); an absent row is a
    /// record not found error instead of `None`.
    pub fn get<T, I>(&mut self, id: I) -> Result<Tracked<T>>
    where
        T: Entity,
        I: Into<Value>,
    {
        let id = id.into();
        let table = persister_for::<T>(&self.persisters)?.table().name.clone();

        self.find::<T, _>(id.clone())?
            .ok_or_else(|| Error::record_not_found(format!("table={table} id={id:?}")))
    }

    /// Unfiltered select. Bypasses the context entirely: always hits
    /// storage, and the returned instances are not tracked.
    pub fn find_all<T: Entity>(&mut self) -> Result<Vec<T>> {
        let persister = persister_for::<T>(&self.persisters)?;
        persister.find_all(self.conn.as_mut())
    }

    /// Insert if the identity is not yet tracked, snapshot, then track.
    ///
    /// Always (re)tracks the given instance and returns the tracked handle.
    pub fn persist<T: Entity>(&mut self, entity: T) -> Result<Tracked<T>> {
        let persister = persister_for::<T>(&self.persisters)?;
        let id = persister.id_value(&entity);
        let key = persister.key_of(&id);

        if !self.context.is_tracked(key) {
            persister.insert(self.conn.as_mut(), &entity)?;

            // Baseline from a fresh read, same as the read-through path.
            self.context
                .snapshot_of(key, persister, self.conn.as_mut(), &id)?;
        }

        let handle = Rc::new(RefCell::new(entity));
        self.context.track(key, handle.clone());
        Ok(handle)
    }

    /// Untrack the identity. No delete is executed here — deletion is
    /// deferred to the next flush.
    pub fn remove<T, I>(&mut self, id: I) -> Result<()>
    where
        T: Entity,
        I: Into<Value>,
    {
        let persister = persister_for::<T>(&self.persisters)?;
        let key = persister.key_of(&id.into());

        self.context.untrack(key);
        Ok(())
    }

    /// Reconcile tracked state against the baseline snapshots.
    ///
    /// One statement per baseline: a delete when the identity is no longer
    /// tracked, otherwise an update from the tracked entity's current
    /// values. No field-level diffing and no transaction boundary —
    /// statements already applied stay applied if a later one fails.
    pub fn flush(&mut self) -> Result<()> {
        for (key, snapshot) in self.context.reconcile() {
            let persister = self.persisters.get(&snapshot.model()).ok_or_else(|| {
                Error::invalid_entity("snapshot refers to an unregistered entity type")
            })?;

            if !self.context.is_tracked(key) {
                persister.delete_by_id(self.conn.as_mut(), snapshot.id())?;
                self.context.remove_snapshot(key);
            } else {
                let entity = self
                    .context
                    .entity(key)
                    .ok_or_else(|| ormlet_core::err!("entity vanished from context"))?;
                persister.update_tracked(self.conn.as_mut(), &*entity, snapshot.id())?;
            }
        }

        Ok(())
    }

    /// DDL convenience: create the table backing an entity type.
    pub fn create_table<T: Entity>(&mut self) -> Result<()> {
        let persister = persister_for::<T>(&self.persisters)?;
        persister.create_table(self.conn.as_mut())
    }

    /// DDL convenience: drop the table backing an entity type.
    pub fn drop_table<T: Entity>(&mut self) -> Result<()> {
        let persister = persister_for::<T>(&self.persisters)?;
        persister.drop_table(self.conn.as_mut())
    }
}

fn persister_for<T: Entity>(
    persisters: &HashMap<TypeId, Box<dyn ErasedPersister>>,
) -> Result<&Persister<T>> {
    persisters
        .get(&TypeId::of::<T>())
        .and_then(|persister| persister.as_any().downcast_ref::<Persister<T>>())
        .ok_or_else(|| {
            Error::invalid_entity(format!(
                "`{}` is not a registered entity",
                type_name::<T>()
            ))
        })
}
