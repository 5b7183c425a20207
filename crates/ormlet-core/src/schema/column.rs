use super::Type;

/// A mapped table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The column type.
    pub ty: Type,

    /// True if the column is the table's primary key
    pub primary_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            primary_key: false,
        }
    }

    pub fn primary_key(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            primary_key: true,
        }
    }
}
