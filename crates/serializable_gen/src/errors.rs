//! # Generation Errors
//! Every failure the field-list compiler can report.
//! - Each error has a code identifier (for easy communication/bug reports)
//! - Errors are collected, then converted to [`Diagnostic`]s at the macro boundary

use proc_macro2::Span;
use proc_macro_error2::{Diagnostic, Level};
use std::collections::LinkedList;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("[SER-0] Expected a parenthesized type `(Type)` before the field name, found `{found}`")]
    MissingTypeDelimiter { found: String },
    #[error("[SER-1] Expected a type inside `( .. )`, found nothing")]
    EmptyType,
    #[error("[SER-2] Could not parse the field type: {reason}")]
    InvalidType { reason: String },
    #[error("[SER-3] Expected a field name after the type, found {found}")]
    MissingName { found: String },
    #[error("[SER-4] Expected `,` or the end of the fields after `{name}`, found `{found}`")]
    ExpectedSeparator { name: String, found: String },
    #[error("[SER-5] {count} fields declared, but at most {limit} are supported")]
    LimitExceeded { limit: usize, count: usize },
    #[error("[SER-6] {0}")]
    Syntax(String),
    #[error("[SER-7] `{key}` is not an option, must be one of: {available}")]
    UnknownOption { key: String, available: String },
    #[error("[SER-8] Duplicate option `{key}`")]
    DuplicateOption { key: String },
    #[error("[SER-9] Invalid value for option `{key}`: {reason}")]
    InvalidOption { key: String, reason: String },
    #[error("[SER-10] {0}")]
    DebugOutput(String),
}

#[derive(Debug, Clone)]
pub struct GenError {
    pub span: Span,
    pub kind: ErrorKind,
    pub note: Option<(Span, String)>,
}

impl GenError {
    pub fn new(span: Span, kind: ErrorKind) -> Self {
        Self {
            span,
            kind,
            note: None,
        }
    }

    pub fn with_note(mut self, span: Span, note: impl Into<String>) -> Self {
        self.note = Some((span, note.into()));
        self
    }

    fn help(&self) -> Option<String> {
        match &self.kind {
            ErrorKind::MissingTypeDelimiter { .. } | ErrorKind::EmptyType => {
                Some(String::from("Each field is written as `(Type) name`"))
            }
            ErrorKind::LimitExceeded { .. } => Some(String::from(
                "Raise the ceiling with `#[serializable(limit = N)]`, or split the record",
            )),
            _ => None,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let help = self.help();
        let mut diag = Diagnostic::spanned(self.span, Level::Error, self.kind.to_string());
        if let Some((span, note)) = self.note {
            diag = diag.span_note(span, note);
        }
        if let Some(help) = help {
            diag = diag.help(help);
        }
        diag
    }
}

impl From<syn::Error> for GenError {
    fn from(err: syn::Error) -> Self {
        GenError::new(err.span(), ErrorKind::Syntax(err.to_string()))
    }
}

pub type GenErrors = LinkedList<GenError>;

pub(crate) fn singlelist<T>(item: T) -> LinkedList<T> {
    let mut list = LinkedList::new();
    list.push_back(item);
    list
}

pub fn into_diagnostics(errors: GenErrors) -> LinkedList<Diagnostic> {
    errors.into_iter().map(GenError::into_diagnostic).collect()
}
