macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($f);
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql(self, f: &mut super::Formatter<'_>);
}

impl ToSql for &str {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        f.dst.push_str(self);
    }
}
