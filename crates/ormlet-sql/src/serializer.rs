#[macro_use]
mod fmt;
use fmt::ToSql;

mod column_def;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod ty;
mod value;

use ormlet_core::{
    schema::{Column, Table},
    stmt::{FieldValue, Value},
    Error, Result,
};

/// Serialize persistence statements for one table to SQL strings.
///
/// Pure and stateless: every method renders a complete statement from the
/// table descriptor and the given values. Values are inlined as literals
/// (the observable SQL contract); escaping lives in the value fragment.
/// Column ordering always matches the descriptor's column order.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Table against which statements are serialized
    table: &'a Table,
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table }
    }

    /// `CREATE TABLE <name> (<column defs>)`.
    ///
    /// The primary-key column gets a `PRIMARY KEY` clause; fails when no
    /// column is marked as the primary key.
    pub fn create_table(&self) -> Result<String> {
        self.primary_key()?;

        let name = Ident(&self.table.name);
        let columns = Comma(&self.table.columns);

        let mut ret = String::new();
        let mut f = Formatter { dst: &mut ret };
        fmt!(&mut f, "CREATE TABLE " name " (" columns ")");
        Ok(ret)
    }

    /// `DROP TABLE <name>`.
    pub fn drop_table(&self) -> String {
        let name = Ident(&self.table.name);

        let mut ret = String::new();
        let mut f = Formatter { dst: &mut ret };
        fmt!(&mut f, "DROP TABLE " name);
        ret
    }

    /// `INSERT INTO <name> (<columns>) VALUES (<values>)`.
    ///
    /// The value list must have one entry per column, in column order.
    pub fn insert(&self, values: &[FieldValue]) -> Result<String> {
        if values.len() != self.table.columns.len() {
            return Err(ormlet_core::err!(
                "insert into `{}` requires {} values, got {}",
                self.table.name,
                self.table.columns.len(),
                values.len()
            ));
        }

        let name = Ident(&self.table.name);
        let columns = Comma(self.table.column_names().map(Ident));
        let literals = Comma(values.iter().map(|value| &value.value));

        let mut ret = String::new();
        let mut f = Formatter { dst: &mut ret };
        fmt!(&mut f, "INSERT INTO " name " (" columns ") VALUES (" literals ")");
        Ok(ret)
    }

    /// `SELECT <columns> FROM <name>`, optionally filtered by primary key.
    ///
    /// The method name is a convention key: `"find_all"` yields the
    /// unfiltered select; any other name filters by `<pk> = <args[0]>`.
    pub fn select(&self, method: &str, args: &[Value]) -> Result<String> {
        let name = Ident(&self.table.name);
        let columns = Comma(self.table.column_names().map(Ident));

        let mut ret = String::new();
        let mut f = Formatter { dst: &mut ret };
        fmt!(&mut f, "SELECT " columns " FROM " name);

        if method != "find_all" {
            let pk = self.primary_key()?;
            let id = args.first().ok_or_else(|| {
                ormlet_core::err!("select `{}` on `{}` requires an id argument", method, self.table.name)
            })?;

            let pk_name = Ident(&pk.name);
            fmt!(&mut f, " WHERE " pk_name " = " id);
        }

        Ok(ret)
    }

    /// `UPDATE <name> SET <assignments> WHERE <pk> = <id>`.
    ///
    /// Sets every non-primary-key column to its current value.
    pub fn update(&self, values: &[FieldValue], id: &Value) -> Result<String> {
        let pk = self.primary_key()?;

        let name = Ident(&self.table.name);
        let pk_name = Ident(&pk.name);
        let assignments = Comma(values.iter().filter(|value| value.column != pk.name));

        let mut ret = String::new();
        let mut f = Formatter { dst: &mut ret };
        fmt!(&mut f, "UPDATE " name " SET " assignments " WHERE " pk_name " = " id);
        Ok(ret)
    }

    /// `DELETE FROM <name> WHERE <pk> = <id>`.
    pub fn delete(&self, id: &Value) -> Result<String> {
        let pk = self.primary_key()?;

        let name = Ident(&self.table.name);
        let pk_name = Ident(&pk.name);

        let mut ret = String::new();
        let mut f = Formatter { dst: &mut ret };
        fmt!(&mut f, "DELETE FROM " name " WHERE " pk_name " = " id);
        Ok(ret)
    }

    fn primary_key(&self) -> Result<&Column> {
        self.table.primary_key_column().ok_or_else(|| {
            Error::invalid_schema(format!(
                "table `{}` has no primary key column",
                self.table.name
            ))
        })
    }
}
