/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// Boolean column
    Bool,

    /// Signed 64-bit integer column
    I64,

    /// Text column
    String,
}
