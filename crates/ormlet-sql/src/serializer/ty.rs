use super::ToSql;

use ormlet_core::schema::Type;

impl ToSql for &Type {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        fmt!(
            f,
            match self {
                Type::Bool => "BOOLEAN",
                Type::I64 => "BIGINT",
                Type::String => "VARCHAR(255)",
            }
        );
    }
}
