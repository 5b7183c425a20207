use crate::{Entity, EntityKey, Persister, Snapshot};

use ormlet_core::{stmt::Value, Connection, Result};

use indexmap::IndexMap;

use std::{any::Any, cell::RefCell, rc::Rc};

/// Per-session identity map and dirty-checking cache.
///
/// At most one entry per key. Tracked entities are shared handles
/// (`Rc<RefCell<T>>`, type-erased here); baseline snapshots live alongside
/// and survive `untrack`, which is what lets flush tell a deferred delete
/// apart from an identity that was never seen.
#[derive(Default)]
pub struct PersistenceContext {
    /// Live tracked entities (`Rc<RefCell<T>>` behind the erasure), in
    /// insertion order
    entries: IndexMap<EntityKey, Rc<dyn Any>>,

    /// Baseline snapshots: last known storage state per identity
    snapshots: IndexMap<EntityKey, Snapshot>,
}

impl PersistenceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracked(&self, key: EntityKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// The tracked entity for a key, if any.
    pub fn entity(&self, key: EntityKey) -> Option<Rc<dyn Any>> {
        self.entries.get(&key).cloned()
    }

    /// Insert or replace the entry for a key. Never creates a snapshot.
    pub fn track(&mut self, key: EntityKey, entity: Rc<dyn Any>) {
        self.entries.insert(key, entity);
    }

    /// Remove the entry for a key, marking the identity for deletion at the
    /// next flush. The baseline snapshot stays behind as the tombstone.
    pub fn untrack(&mut self, key: EntityKey) {
        self.entries.shift_remove(&key);
    }

    pub fn snapshot(&self, key: EntityKey) -> Option<&Snapshot> {
        self.snapshots.get(&key)
    }

    /// Read-through load with baseline capture.
    ///
    /// Loads the entity for `input` via the persister and, if no baseline
    /// exists yet for the key, captures one from the loaded state; an
    /// existing baseline is never replaced. Returns the loaded entity so the
    /// caller can track it, or `None` when storage has no such row.
    pub fn snapshot_of<T: Entity>(
        &mut self,
        key: EntityKey,
        persister: &Persister<T>,
        conn: &mut dyn Connection,
        input: &Value,
    ) -> Result<Option<T>> {
        let Some(entity) = persister.find_by_id(conn, input)? else {
            return Ok(None);
        };

        if !self.snapshots.contains_key(&key) {
            self.snapshots.insert(key, Snapshot::capture(key, &entity));
        }

        Ok(Some(entity))
    }

    /// Drop the baseline for a key, once flush has reconciled it.
    pub(crate) fn remove_snapshot(&mut self, key: EntityKey) {
        self.snapshots.shift_remove(&key);
    }

    /// The full baseline snapshot set, in insertion order.
    ///
    /// The caller decides, per key, whether the current tracked state
    /// implies a delete or an update.
    pub fn reconcile(&self) -> Vec<(EntityKey, Snapshot)> {
        self.snapshots
            .iter()
            .map(|(key, snapshot)| (*key, snapshot.clone()))
            .collect()
    }
}

/// Recover the typed handle from a type-erased context entry.
pub(crate) fn downcast<T: Entity>(entity: Rc<dyn Any>) -> Result<Rc<RefCell<T>>> {
    entity
        .downcast::<RefCell<T>>()
        .map_err(|_| ormlet_core::err!("tracked entity has unexpected type"))
}
