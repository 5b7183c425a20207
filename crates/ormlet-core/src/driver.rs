use crate::{stmt::Row, Result};

/// The execution collaborator: runs opaque SQL text against a database.
///
/// The engine builds complete SQL strings and treats this seam as a black
/// box. One connection serves one session; all calls are synchronous and
/// block until the database responds. Failures surface as storage errors and
/// are never retried.
pub trait Connection {
    /// Execute a statement that returns no rows.
    fn exec(&mut self, sql: &str) -> Result<()>;

    /// Execute a query, returning all matching rows.
    fn query(&mut self, sql: &str) -> Result<Vec<Row>>;

    /// Execute a query expected to match at most one row.
    fn query_one(&mut self, sql: &str) -> Result<Option<Row>> {
        let mut rows = self.query(sql)?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(crate::err!("query returned {} rows, expected at most one", n)),
        }
    }
}
