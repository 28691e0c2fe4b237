//! # Invocation Options
//! Parsed from `#[serializable(key = value, ...)]` attributes on the record.
//! ```text
//! #[serializable(crate = ::serializable, limit = 64, pub_fields = on, debug_file = "out.rs")]
//! ```
//! Each key may appear once (across all such attributes), unknown keys are
//! rejected.

use crate::{
    errors::{ErrorKind, GenError, GenErrors},
    iter::{describe_tokentree, TokenIter},
    limit::FieldLimit,
};
use proc_macro2::{Ident, Span, TokenStream, TokenTree};
use std::collections::{HashMap, LinkedList};
use syn::{parse2, parse_quote, Attribute, LitInt, LitStr, Path};

pub const ATTRIBUTE: &str = "serializable";

const AVAILABLE: [&str; 4] = ["crate", "limit", "pub_fields", "debug_file"];

pub struct Options {
    /// Path to the crate defining `Serialize`, `Archive` and `make_nvp`.
    pub krate: Path,
    pub limit: FieldLimit,
    /// Fields take the struct's visibility when on, are private otherwise.
    pub pub_fields: bool,
    /// Write the rendered expansion here.
    pub debug_file: Option<LitStr>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            krate: parse_quote!(::serializable),
            limit: FieldLimit::default(),
            pub_fields: true,
            debug_file: None,
        }
    }
}

pub fn is_options_attr(attr: &Attribute) -> bool {
    attr.path().is_ident(ATTRIBUTE)
}

pub fn parse_options(attrs: &[Attribute]) -> Result<Options, GenErrors> {
    let mut errors = LinkedList::new();
    let mut entries = Vec::new();
    for attr in attrs.iter().filter(|a| is_options_attr(a)) {
        match attr.meta.require_list() {
            Ok(list) => split_entries(
                list.tokens.clone(),
                list.delimiter.span().open(),
                &mut entries,
                &mut errors,
            ),
            Err(e) => errors.push_back(GenError::from(e)),
        }
    }

    let mut seen: HashMap<String, Span> = HashMap::new();
    let mut options = Options::default();
    for (key, value) in entries {
        let key_str = key.to_string();
        if let Some(original) = seen.get(&key_str) {
            errors.push_back(
                GenError::new(key.span(), ErrorKind::DuplicateOption { key: key_str })
                    .with_note(*original, "Originally defined here"),
            );
            continue;
        }
        seen.insert(key_str, key.span());
        if let Err(e) = apply_option(&mut options, &key, value) {
            errors.push_back(e);
        }
    }

    if errors.is_empty() {
        Ok(options)
    } else {
        Err(errors)
    }
}

/// Split `key = value, ...` keeping each value as raw tokens.
fn split_entries(
    tks: TokenStream,
    start: Span,
    entries: &mut Vec<(Ident, TokenStream)>,
    errors: &mut GenErrors,
) {
    let mut iter = TokenIter::from(tks, start);
    while !iter.is_empty() {
        match iter.next() {
            Some(TokenTree::Ident(key)) if iter.peek_punct('=') => {
                iter.next();
                entries.push((key, iter.collect_until(',')));
            }
            Some(tt) => {
                errors.push_back(GenError::new(
                    tt.span(),
                    ErrorKind::Syntax(format!(
                        "Expected `key = value`, found `{}`",
                        describe_tokentree(&tt)
                    )),
                ));
                iter.collect_until(',');
            }
            None => (),
        }
        iter.next();
    }
}

fn apply_option(options: &mut Options, key: &Ident, value: TokenStream) -> Result<(), GenError> {
    let invalid = |reason: String| {
        GenError::new(
            key.span(),
            ErrorKind::InvalidOption {
                key: key.to_string(),
                reason,
            },
        )
    };

    match key.to_string().as_str() {
        "crate" => {
            options.krate = parse2::<Path>(value).map_err(|e| invalid(e.to_string()))?;
        }
        "limit" => {
            let lit = parse2::<LitInt>(value).map_err(|e| invalid(e.to_string()))?;
            options.limit = FieldLimit {
                value: lit.base10_parse().map_err(|e| invalid(e.to_string()))?,
                span: Some(lit.span()),
            };
        }
        "pub_fields" => {
            options.pub_fields = on_off(value).map_err(invalid)?;
        }
        "debug_file" => {
            options.debug_file =
                Some(parse2::<LitStr>(value).map_err(|e| invalid(e.to_string()))?);
        }
        other => {
            return Err(GenError::new(
                key.span(),
                ErrorKind::UnknownOption {
                    key: other.to_owned(),
                    available: AVAILABLE.join(", "),
                },
            ))
        }
    }
    Ok(())
}

fn on_off(value: TokenStream) -> Result<bool, String> {
    match parse2::<Ident>(value) {
        Ok(i) if i == "on" => Ok(true),
        Ok(i) if i == "off" => Ok(false),
        _ => Err(String::from("Expected `on` or `off`")),
    }
}
