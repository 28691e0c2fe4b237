//! # Zipper
//! Splits the flat `(T) a, (U) b, ...` token stream into ordered (type, name)
//! pairs.
//! - A type is the content of one parenthesized group, so commas inside it
//!   (generic arguments, tuples) are never seen at the top level.
//! - Only top-level `,` punctuation separates entries. A trailing comma is
//!   allowed.
//! - A malformed entry is reported and skipped up to the next `,`, so every
//!   broken entry is reported in one go. Any error means no [`FieldList`].

use crate::{
    errors::{ErrorKind, GenError, GenErrors},
    fields::{FieldList, FieldSpec},
    iter::{describe_tokentree, TokenIter},
    tokens::Checked,
};
use proc_macro2::{Delimiter, Group, Ident, Span, TokenStream, TokenTree};
use std::collections::LinkedList;
use syn::{parse2, Type};

pub fn zip_fields(input: TokenStream, start: Span) -> Result<FieldList, GenErrors> {
    let mut iter = TokenIter::from(input, start);
    let mut fields = Vec::new();
    let mut errors = LinkedList::new();

    while !iter.is_empty() {
        match zip_entry(&mut iter) {
            Ok(field) => match iter.peek_next() {
                None => fields.push(field),
                Some(TokenTree::Punct(p)) if p.as_char() == ',' => fields.push(field),
                Some(tt) => {
                    errors.push_back(GenError::new(
                        tt.span(),
                        ErrorKind::ExpectedSeparator {
                            name: field.name.to_string(),
                            found: describe_tokentree(tt),
                        },
                    ));
                    iter.collect_until(',');
                }
            },
            Err(e) => {
                errors.push_back(e);
                iter.collect_until(',');
            }
        }
        // the separator (or nothing at the end)
        iter.next();
    }

    if errors.is_empty() {
        Ok(FieldList::new(fields))
    } else {
        Err(errors)
    }
}

/// Never consumes a top-level `,`, so the caller can always recover to it.
fn zip_entry(iter: &mut TokenIter) -> Result<FieldSpec, GenError> {
    let ty = match iter.peek_next() {
        Some(TokenTree::Group(g)) if g.delimiter() == Delimiter::Parenthesis => {
            let group = g.clone();
            iter.next();
            zip_type(&group)?
        }
        Some(tt) => {
            return Err(GenError::new(
                tt.span(),
                ErrorKind::MissingTypeDelimiter {
                    found: describe_tokentree(tt),
                },
            ))
        }
        None => {
            return Err(GenError::new(
                iter.end_span(),
                ErrorKind::MissingTypeDelimiter {
                    found: String::from("nothing"),
                },
            ))
        }
    };

    let name = match iter.peek_next() {
        Some(TokenTree::Ident(i)) => {
            let ident = i.clone();
            iter.next();
            zip_name(ident)?
        }
        Some(tt) => {
            return Err(GenError::new(
                tt.span(),
                ErrorKind::MissingName {
                    found: format!("`{}`", describe_tokentree(tt)),
                },
            ))
        }
        None => {
            return Err(GenError::new(
                iter.end_span(),
                ErrorKind::MissingName {
                    found: String::from("nothing"),
                },
            ))
        }
    };

    Ok(FieldSpec { ty, name })
}

fn zip_type(group: &Group) -> Result<Checked<Type>, GenError> {
    let tks = group.stream();
    if tks.is_empty() {
        return Err(GenError::new(group.span(), ErrorKind::EmptyType));
    }
    Checked::parse(tks).map_err(|e| {
        GenError::new(
            e.span(),
            ErrorKind::InvalidType {
                reason: e.to_string(),
            },
        )
    })
}

/// Keywords are valid [`TokenTree::Ident`]s but not valid field names. The
/// caller's edition is not visible here, so keywords of any edition (`async`,
/// `dyn`, `try`) are rejected and need the `r#` form.
fn zip_name(ident: Ident) -> Result<Ident, GenError> {
    match parse2::<syn::Ident>(TokenTree::Ident(ident.clone()).into()) {
        Ok(_) => Ok(ident),
        Err(_) => Err(GenError::new(
            ident.span(),
            ErrorKind::MissingName {
                found: format!("keyword `{ident}`"),
            },
        )),
    }
}
