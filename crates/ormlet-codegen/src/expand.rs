use crate::schema;

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn entity(entity: &schema::Entity) -> TokenStream {
    let ident = &entity.ident;
    let table = &entity.table;

    let persistent = || entity.fields.iter().filter(|field| !field.transient);

    let columns = persistent().map(|field| {
        let column = &field.column;
        let ty = &field.ty;

        if field.key {
            quote!(ormlet::schema::Column::primary_key(
                #column,
                <#ty as ormlet::stmt::Primitive>::ty(),
            ))
        } else {
            quote!(ormlet::schema::Column::new(
                #column,
                <#ty as ormlet::stmt::Primitive>::ty(),
            ))
        }
    });

    let values = persistent().map(|field| {
        let column = &field.column;
        let field_ident = &field.ident;
        let ty = &field.ty;

        quote!(ormlet::stmt::FieldValue::new(
            #column,
            <#ty as ormlet::stmt::Primitive>::into_value(self.#field_ident.clone()),
        ))
    });

    let key_field = entity.key_field();
    let key_ident = &key_field.ident;
    let key_ty = &key_field.ty;

    let load_fields = entity.fields.iter().map(|field| {
        let field_ident = &field.ident;

        if field.transient {
            quote!(#field_ident: ::core::default::Default::default())
        } else {
            let column = &field.column;
            let ty = &field.ty;
            quote!(#field_ident: <#ty as ormlet::stmt::Primitive>::load(row.require(#column)?)?)
        }
    });

    quote! {
        impl ormlet::Entity for #ident {
            fn table() -> ormlet::schema::Table {
                ormlet::schema::Table::new(#table, ::std::vec![#(#columns),*])
            }

            fn values(&self) -> ::std::vec::Vec<ormlet::stmt::FieldValue> {
                ::std::vec![#(#values),*]
            }

            fn id(&self) -> ormlet::stmt::Value {
                <#key_ty as ormlet::stmt::Primitive>::into_value(self.#key_ident.clone())
            }

            fn load(row: &ormlet::stmt::Row) -> ormlet::Result<Self> {
                ::core::result::Result::Ok(Self {
                    #(#load_fields,)*
                })
            }
        }
    }
}
