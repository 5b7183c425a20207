use super::{Ident, ToSql};

use ormlet_core::schema::Column;

impl ToSql for &Column {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);

        fmt!(f, name " " self.ty);

        if self.primary_key {
            fmt!(f, " PRIMARY KEY");
        }
    }
}
