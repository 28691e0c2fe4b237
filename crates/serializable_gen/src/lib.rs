#![doc = include_str!("../README.md")]

pub mod bind;
pub mod declare;
pub mod errors;
pub mod fields;
pub mod generate;
mod iter;
pub mod limit;
pub mod namer;
pub mod options;
pub mod record;
pub mod tokens;
pub mod zipper;

use proc_macro2::TokenStream;
use proc_macro_error2::Diagnostic;
use quote::ToTokens;
use std::collections::LinkedList;

/// The whole `serializable!` expansion: the record struct and its `Serialize`
/// implementation, or the diagnostics explaining why there is none.
pub fn serializable(input: TokenStream) -> Result<TokenStream, LinkedList<Diagnostic>> {
    generate::compile(input)
        .map(|generated| generated.into_token_stream())
        .map_err(errors::into_diagnostics)
}
