mod context;
pub use context::PersistenceContext;

mod entity;
pub use entity::Entity;

mod key;
pub use key::EntityKey;

mod manager;
pub use manager::{Builder, EntityManager};

mod persister;
pub use persister::Persister;

mod repository;
pub use repository::Repository;

mod snapshot;
pub use snapshot::Snapshot;

pub use ormlet_core::{driver, schema, stmt, Connection, Error, Result};
pub use ormlet_macros::Entity;

use std::{cell::RefCell, rc::Rc};

/// Shared handle to an entity tracked by a persistence context.
///
/// Two finds for the same identity within one session return handles to the
/// same instance; mutations through the handle are visible at flush time.
pub type Tracked<T> = Rc<RefCell<T>>;
