use ormlet_core::stmt::Value;

use std::{
    any::TypeId,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// Identity-map key: the entity type plus a fingerprint of its id value.
///
/// Keying by the composite means equal id values of different entity types
/// never collide in the persistence context. The fingerprint is stable for
/// equal id values within one process, which is as long as a context lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityKey {
    model: TypeId,
    hash: u64,
}

impl EntityKey {
    pub(crate) fn new(model: TypeId, id: &Value) -> Self {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);

        Self {
            model,
            hash: hasher.finish(),
        }
    }
}
