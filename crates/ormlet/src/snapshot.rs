use crate::{Entity, EntityKey};

use ormlet_core::stmt::{FieldValue, Value};

use std::any::TypeId;

/// Immutable capture of an entity's persisted state.
///
/// Represents "what we believe is in storage" for one identity: created when
/// the entity is first loaded (read-through) or right after a successful
/// insert, and used as the baseline at flush time. The recorded type id lets
/// flush route a deferred delete to the right persister after the entity
/// itself is gone from the context.
#[derive(Debug, Clone)]
pub struct Snapshot {
    key: EntityKey,
    model: TypeId,
    id: Value,
    values: Vec<FieldValue>,
}

impl Snapshot {
    pub(crate) fn capture<T: Entity>(key: EntityKey, entity: &T) -> Self {
        Self {
            key,
            model: TypeId::of::<T>(),
            id: entity.id(),
            values: entity.values(),
        }
    }

    pub fn key(&self) -> EntityKey {
        self.key
    }

    pub fn model(&self) -> TypeId {
        self.model
    }

    pub fn id(&self) -> &Value {
        &self.id
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }
}
