//! Token streams tagged with the syntax they stand for.
//! - Caller-written fragments (field types) go through [`Checked::parse`],
//!   which checks them in every build and keeps the caller's tokens.
//! - Generated fragments are converted with [`From`], re-parsed only in debug
//!   builds, so a generation bug panics here rather than surfacing as an
//!   error in the caller's crate.

use proc_macro2::TokenStream;
use quote::ToTokens;
use std::{
    any::type_name,
    fmt::{self, Debug},
    marker::PhantomData,
    ops::Deref,
};
use syn::{parse::Parse, parse2};

pub struct Checked<T: Parse + ToTokens> {
    tks: TokenStream,
    phantom: PhantomData<T>,
}

impl<T: Parse + ToTokens> Checked<T> {
    /// Accept `tks` only if they parse as `T`. The tokens kept are `tks`, not
    /// syn's re-printing of them, so spans and spelling stay the caller's.
    pub fn parse(tks: TokenStream) -> syn::Result<Self> {
        parse2::<T>(tks.clone())?;
        Ok(Self {
            tks,
            phantom: PhantomData,
        })
    }

    /// Parse the tokens back into the syntax tree they are tagged as.
    pub fn to_syn(&self) -> syn::Result<T> {
        parse2(self.tks.clone())
    }
}

impl<T: Parse + ToTokens> From<TokenStream> for Checked<T> {
    fn from(value: TokenStream) -> Self {
        #[cfg(debug_assertions)]
        if let Err(err) = parse2::<T>(value.clone()) {
            panic!(
                "serializable generated `{value}`, which is not a `{}`: {err}",
                type_name::<T>()
            )
        }
        Self {
            tks: value,
            phantom: PhantomData,
        }
    }
}

impl<T: Parse + ToTokens> Clone for Checked<T> {
    fn clone(&self) -> Self {
        Self {
            tks: self.tks.clone(),
            phantom: PhantomData,
        }
    }
}

impl<T: Parse + ToTokens> Debug for Checked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checked<{}>({})", type_name::<T>(), self.tks)
    }
}

impl<T: Parse + ToTokens> Deref for Checked<T> {
    type Target = TokenStream;

    fn deref(&self) -> &Self::Target {
        &self.tks
    }
}

impl<T: Parse + ToTokens> ToTokens for Checked<T> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.tks.to_tokens(tokens)
    }
}
