mod error;
pub use error::Error;

pub mod driver;
pub use driver::Connection;

pub mod schema;
pub use schema::{Column, Table, Type};

pub mod stmt;

/// A Result type alias that uses ormlet's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
