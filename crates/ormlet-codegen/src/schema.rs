use syn::spanned::Spanned;

/// Parsed persistence metadata for one derived struct.
pub(crate) struct Entity {
    pub(crate) ident: syn::Ident,
    pub(crate) table: String,
    pub(crate) fields: Vec<Field>,
}

pub(crate) struct Field {
    pub(crate) ident: syn::Ident,
    pub(crate) ty: syn::Type,
    pub(crate) column: String,
    pub(crate) key: bool,
    pub(crate) transient: bool,
}

impl Entity {
    pub(crate) fn from_ast(item: &syn::ItemStruct) -> syn::Result<Self> {
        // Table name: #[table(name = "...")] override, or the struct
        // identifier verbatim.
        let mut table = item.ident.to_string();

        for attr in &item.attrs {
            if attr.path().is_ident("table") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("name") {
                        let lit: syn::LitStr = meta.value()?.parse()?;
                        table = lit.value();
                        Ok(())
                    } else {
                        Err(meta.error("unsupported table attribute"))
                    }
                })?;
            }
        }

        let syn::Fields::Named(named) = &item.fields else {
            return Err(syn::Error::new(
                item.span(),
                "#[derive(Entity)] requires a struct with named fields",
            ));
        };

        let mut fields = Vec::with_capacity(named.named.len());

        for field in &named.named {
            fields.push(Field::from_ast(field)?);
        }

        let keys = fields.iter().filter(|field| field.key).count();
        if keys != 1 {
            return Err(syn::Error::new(
                item.span(),
                format!("#[derive(Entity)] requires exactly one #[key] field, found {keys}"),
            ));
        }

        Ok(Self {
            ident: item.ident.clone(),
            table,
            fields,
        })
    }

    pub(crate) fn key_field(&self) -> &Field {
        self.fields
            .iter()
            .find(|field| field.key)
            .expect("validated in from_ast")
    }
}

impl Field {
    fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let ident = field.ident.clone().expect("named field");
        let mut column = ident.to_string();
        let mut key = false;
        let mut transient = false;

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                key = true;
            } else if attr.path().is_ident("transient") {
                transient = true;
            } else if attr.path().is_ident("column") {
                // #[column = "nick_name"]
                let syn::Meta::NameValue(nv) = &attr.meta else {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected #[column = \"name\"]",
                    ));
                };
                let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit),
                    ..
                }) = &nv.value
                else {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected #[column = \"name\"]",
                    ));
                };
                column = lit.value();
            }
        }

        if key && transient {
            return Err(syn::Error::new(
                field.span(),
                "a #[key] field cannot be #[transient]",
            ));
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            column,
            key,
            transient,
        })
    }
}
