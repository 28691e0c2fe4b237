use crate::{
    errors::{ErrorKind, GenError},
    fields::FieldList,
};
use proc_macro2::Span;

/// Bindings are passed to the archive as a right-nested tuple, and resolving
/// `Bindings` for it recurses once per field. rustc's default
/// `recursion_limit` is 128, this stays well below it.
pub const DEFAULT_FIELD_LIMIT: usize = 64;

pub struct FieldLimit {
    pub value: usize,
    /// Where the limit was configured, if it was not the default.
    pub span: Option<Span>,
}

impl Default for FieldLimit {
    fn default() -> Self {
        Self {
            value: DEFAULT_FIELD_LIMIT,
            span: None,
        }
    }
}

impl FieldLimit {
    pub fn check(&self, fields: &FieldList) -> Result<(), GenError> {
        match fields.get(self.value) {
            None => Ok(()),
            Some(first_over) => {
                let err = GenError::new(
                    first_over.name.span(),
                    ErrorKind::LimitExceeded {
                        limit: self.value,
                        count: fields.len(),
                    },
                );
                Err(match self.span {
                    Some(span) => err.with_note(span, "Limit configured here"),
                    None => err,
                })
            }
        }
    }
}
