use super::Value;

/// The current value of one mapped field on one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    /// Column the field maps to
    pub column: String,

    /// The field's current value
    pub value: Value,
}

impl FieldValue {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}
