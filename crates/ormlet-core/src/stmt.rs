mod field_value;
pub use field_value::FieldValue;

mod primitive;
pub use primitive::Primitive;

mod row;
pub use row::Row;

mod value;
pub use value::Value;
