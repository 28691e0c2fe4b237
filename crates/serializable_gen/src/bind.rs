//! # Binder
//! Pairs every field with its own name and passes all pairs, in field list
//! order, to a single `archive` call.
//! ```text
//! archive.archive((make_nvp("count", &mut self.count), (make_nvp("active", &mut self.active), ())))
//! ```
//! - The key is the identifier's text, produced here and nowhere else.
//! - The argument list is a right-nested tuple closed by `()`, so an empty
//!   field list is `archive.archive(())`.

use crate::{
    fields::{FieldList, FieldSpec},
    namer::CodeNamer,
    record::Record,
    tokens::Checked,
};
use quote::quote;
use syn::{Expr, ItemImpl, WherePredicate};

pub fn binding(field: &FieldSpec, namer: &CodeNamer) -> Checked<Expr> {
    let make_nvp = namer.fn_make_nvp();
    let key = field.key();
    let name = &field.name;
    quote! { #make_nvp(#key, &mut self.#name) }.into()
}

pub fn binding_list(fields: &FieldList, namer: &CodeNamer) -> Checked<Expr> {
    let bindings = fields.iter().map(|f| binding(f, namer)).collect::<Vec<_>>();
    bindings
        .into_iter()
        .rev()
        .fold(quote! { () }, |rest, binding| quote! { (#binding, #rest) })
        .into()
}

/// Only records with type parameters get bounds, otherwise the field types
/// are concrete and the bindings check them directly.
fn field_bounds(record: &Record, fields: &FieldList, namer: &CodeNamer) -> Vec<WherePredicate> {
    if record.generics.type_params().next().is_none() {
        return Vec::new();
    }
    let serialize = namer.trait_serialize();
    fields
        .iter()
        .map(|f| {
            let ty = &f.ty;
            syn::parse_quote! { #ty: #serialize }
        })
        .collect()
}

pub fn generate_impl(record: &Record, fields: &FieldList, namer: &CodeNamer) -> Checked<ItemImpl> {
    let name = &record.name;
    let mut generics = record.generics.clone();
    let bounds = field_bounds(record, fields, namer);
    if !bounds.is_empty() {
        generics.make_where_clause().predicates.extend(bounds);
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let serialize_trait = namer.trait_serialize();
    let archive_trait = namer.trait_archive();
    let fn_serialize = namer.fn_serialize();
    let fn_archive = namer.fn_archive();
    let const_names = namer.const_field_names();
    let archive_param = namer.type_archive_param();
    let archive_arg = namer.arg_archive();

    let keys = fields.keys();
    let bindings = binding_list(fields, namer);

    quote! {
        impl #impl_generics #serialize_trait for #name #ty_generics #where_clause {
            const #const_names: &'static [&'static str] = &[#(#keys),*];

            fn #fn_serialize<#archive_param: #archive_trait>(
                &mut self,
                #archive_arg: &mut #archive_param,
            ) -> ::core::result::Result<(), #archive_param::Error> {
                #archive_arg.#fn_archive(#bindings)
            }
        }
    }
    .into()
}
