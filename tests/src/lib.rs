use ormlet::{
    stmt::{Row, Value},
    Connection, Error, Result,
};

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

/// Scripted connection double.
///
/// Records every statement it executes and serves `query` results from a
/// queue scripted by the test. Clones share state, so a test can keep a
/// handle while the entity manager owns its clone.
#[derive(Clone, Default)]
pub struct RecordingConnection {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    executed: Vec<String>,
    results: VecDeque<Vec<Row>>,
    fail_next: Option<String>,
}

impl RecordingConnection {
    pub fn new() -> Self {
        init_logging();
        Self::default()
    }

    /// Script the result of the next `query` call.
    pub fn push_rows(&self, rows: Vec<Row>) {
        self.inner.borrow_mut().results.push_back(rows);
    }

    pub fn push_row(&self, row: Row) {
        self.push_rows(vec![row]);
    }

    pub fn push_empty(&self) {
        self.push_rows(vec![]);
    }

    /// Make the next statement fail with a storage error.
    pub fn fail_next(&self, message: &str) {
        self.inner.borrow_mut().fail_next = Some(message.to_string());
    }

    /// Every statement executed so far, in order.
    pub fn executed(&self) -> Vec<String> {
        self.inner.borrow().executed.clone()
    }

    pub fn last_executed(&self) -> Option<String> {
        self.inner.borrow().executed.last().cloned()
    }

    /// Number of select statements executed so far.
    pub fn query_count(&self) -> usize {
        self.inner
            .borrow()
            .executed
            .iter()
            .filter(|sql| sql.starts_with("SELECT"))
            .count()
    }
}

impl Connection for RecordingConnection {
    fn exec(&mut self, sql: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if let Some(message) = inner.fail_next.take() {
            return Err(Error::storage(message));
        }

        inner.executed.push(sql.to_string());
        Ok(())
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        let mut inner = self.inner.borrow_mut();
        if let Some(message) = inner.fail_next.take() {
            return Err(Error::storage(message));
        }

        inner.executed.push(sql.to_string());
        inner
            .results
            .pop_front()
            .ok_or_else(|| Error::storage(format!("no scripted result for `{sql}`")))
    }
}

/// The `users` fixture: id (pk), nick_name, old, email, plus a transient
/// position that never reaches storage.
#[derive(Debug, Clone, PartialEq, ormlet::Entity)]
#[table(name = "users")]
pub struct User {
    #[key]
    pub id: i64,

    #[column = "nick_name"]
    pub name: String,

    #[column = "old"]
    pub age: i32,

    pub email: String,

    #[transient]
    pub position: Option<i32>,
}

impl User {
    pub fn new(id: i64, name: &str, age: i32, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            email: email.to_string(),
            position: None,
        }
    }
}

/// A storage row for the `users` fixture.
pub fn user_row(id: i64, name: &str, age: i32, email: &str) -> Row {
    [
        ("id", Value::from(id)),
        ("nick_name", Value::from(name)),
        ("old", Value::from(age)),
        ("email", Value::from(email)),
    ]
    .into_iter()
    .collect()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
