use crate::{Entity, EntityManager, Result, Tracked};

use ormlet_core::stmt::Value;

use std::marker::PhantomData;

/// Typed convenience wrapper over an [`EntityManager`].
///
/// Owns the manager for its unit of work: `save` persists, `delete` defers
/// the removal and commits, `commit` flushes pending changes.
pub struct Repository<T: Entity> {
    manager: EntityManager,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> Repository<T> {
    pub fn new(manager: EntityManager) -> Self {
        Self {
            manager,
            _marker: PhantomData,
        }
    }

    pub fn find_by_id(&mut self, id: impl Into<Value>) -> Result<Option<Tracked<T>>> {
        self.manager.find(id)
    }

    pub fn save(&mut self, entity: T) -> Result<Tracked<T>> {
        self.manager.persist(entity)
    }

    pub fn delete(&mut self, id: impl Into<Value>) -> Result<()> {
        self.manager.remove::<T, _>(id)?;
        self.commit()
    }

    pub fn commit(&mut self) -> Result<()> {
        self.manager.flush()
    }

    /// The underlying manager, for operations outside the wrapper.
    pub fn manager(&mut self) -> &mut EntityManager {
        &mut self.manager
    }
}
