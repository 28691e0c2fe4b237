use proc_macro2::Span;
use quote::quote;
use syn::{Ident, Path};

use crate::tokens::Checked;

/// Names used in generated code that do not come from the caller.
pub struct CodeNamer {
    krate: Path,
}

impl CodeNamer {
    pub fn new(krate: Path) -> Self {
        Self { krate }
    }

    pub fn trait_serialize(&self) -> Checked<Path> {
        let krate = &self.krate;
        quote! { #krate::Serialize }.into()
    }

    pub fn trait_archive(&self) -> Checked<Path> {
        let krate = &self.krate;
        quote! { #krate::Archive }.into()
    }

    pub fn fn_make_nvp(&self) -> Checked<Path> {
        let krate = &self.krate;
        quote! { #krate::make_nvp }.into()
    }

    pub fn fn_serialize(&self) -> Ident {
        Ident::new("serialize", Span::call_site())
    }

    pub fn fn_archive(&self) -> Ident {
        Ident::new("archive", Span::call_site())
    }

    pub fn const_field_names(&self) -> Ident {
        Ident::new("FIELD_NAMES", Span::call_site())
    }

    /// Distinct from any generic parameter a caller is likely to declare.
    pub fn type_archive_param(&self) -> Ident {
        Ident::new("__Archive", Span::call_site())
    }

    pub fn arg_archive(&self) -> Ident {
        Ident::new("archive", Span::call_site())
    }
}
