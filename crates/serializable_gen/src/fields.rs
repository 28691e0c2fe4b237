//! The ordered field list every later stage is generated from.

use crate::tokens::Checked;
use syn::{Ident, LitStr, Type};

pub struct FieldSpec {
    pub ty: Checked<Type>,
    pub name: Ident,
}

impl FieldSpec {
    /// The serialization key: the identifier exactly as the caller wrote it.
    pub fn key(&self) -> LitStr {
        LitStr::new(&self.name.to_string(), self.name.span())
    }
}

/// Built once per invocation and never reordered, so declaration order and
/// binding order are both just iteration order.
#[derive(Default)]
pub struct FieldList {
    fields: Vec<FieldSpec>,
}

impl FieldList {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FieldSpec> {
        self.fields.get(index)
    }

    pub fn names(&self) -> impl Iterator<Item = &Ident> {
        self.fields.iter().map(|f| &f.name)
    }

    pub fn keys(&self) -> Vec<LitStr> {
        self.fields.iter().map(FieldSpec::key).collect()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
