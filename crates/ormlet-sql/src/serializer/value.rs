use super::{Ident, ToSql};

use ormlet_core::stmt::{FieldValue, Value};

impl ToSql for &Value {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        use std::fmt::Write;

        match self {
            Value::Null => fmt!(f, "NULL"),
            Value::Bool(true) => fmt!(f, "true"),
            Value::Bool(false) => fmt!(f, "false"),
            Value::I64(value) => write!(f.dst, "{value}").unwrap(),
            Value::String(value) => {
                // Literal inlining; embedded quotes are doubled.
                f.dst.push('\'');
                for ch in value.chars() {
                    if ch == '\'' {
                        f.dst.push('\'');
                    }
                    f.dst.push(ch);
                }
                f.dst.push('\'');
            }
        }
    }
}

/// An UPDATE assignment: `column = value`.
impl ToSql for &FieldValue {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let column = Ident(&self.column);

        fmt!(f, column " = " self.value);
    }
}
