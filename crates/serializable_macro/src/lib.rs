#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;

#[proc_macro_error]
#[proc_macro]
pub fn serializable(tokens: TokenStream) -> TokenStream {
    match serializable_gen::serializable(tokens.into()) {
        Ok(ts) => ts.into(),
        Err(es) => {
            for e in es {
                e.emit();
            }
            TokenStream::new()
        }
    }
}
