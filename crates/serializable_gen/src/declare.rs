//! # Declarator
//! One `name: Type` declaration per field, in field list order.

use crate::{fields::FieldList, record::Record, tokens::Checked};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{ItemStruct, Visibility};

pub fn declarations(fields: &FieldList, vis: &Visibility) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|field| {
            let name = &field.name;
            let ty = &field.ty;
            quote! { #vis #name: #ty }
        })
        .collect()
}

pub fn generate_struct(record: &Record, fields: &FieldList, pub_fields: bool) -> Checked<ItemStruct> {
    let Record {
        attrs,
        vis,
        struct_token,
        name,
        generics,
        ..
    } = record;
    let field_vis = if pub_fields {
        vis.clone()
    } else {
        Visibility::Inherited
    };
    let decls = declarations(fields, &field_vis);
    let where_clause = &generics.where_clause;

    quote! {
        #(#attrs)*
        #vis #struct_token #name #generics #where_clause {
            #(#decls),*
        }
    }
    .into()
}
