//! The record the declarations are spliced into.
//! ```text
//! #[serializable(..)]     <- options, consumed
//! #[derive(Debug)]        <- passed through
//! pub struct Car<T> where T: Clone {
//!     (String) name,      <- field list, left as tokens for the zipper
//!     (T) extra,
//! }
//! ```

use crate::options::is_options_attr;
use proc_macro2::{Span, TokenStream};
use syn::{
    braced,
    parse::{Parse, ParseStream},
    Attribute, Generics, Ident, Token, Visibility,
};

pub struct Record {
    pub attrs: Vec<Attribute>,
    pub options: Vec<Attribute>,
    pub vis: Visibility,
    pub struct_token: Token![struct],
    pub name: Ident,
    pub generics: Generics,
    pub fields: TokenStream,
    pub fields_span: Span,
}

impl Parse for Record {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let (options, attrs) = input
            .call(Attribute::parse_outer)?
            .into_iter()
            .partition(is_options_attr);
        let vis = input.parse()?;
        let struct_token = input.parse()?;
        let name = input.parse()?;
        let mut generics: Generics = input.parse()?;
        generics.where_clause = input.parse()?;
        let content;
        let brace = braced!(content in input);
        let fields = content.parse()?;
        Ok(Self {
            attrs,
            options,
            vis,
            struct_token,
            name,
            generics,
            fields,
            fields_span: brace.span.open(),
        })
    }
}
