//! Named values, and lists of them.

use crate::archive::{Archive, Serialize};

/// A field's value paired with the field's own name.
pub struct Nvp<'a, T> {
    name: &'static str,
    value: &'a mut T,
}

impl<'a, T> Nvp<'a, T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&mut self) -> &mut T {
        &mut *self.value
    }

    pub fn into_parts(self) -> (&'static str, &'a mut T) {
        (self.name, self.value)
    }
}

/// The helper every generated binding is built with.
pub fn make_nvp<'a, T>(name: &'static str, value: &'a mut T) -> Nvp<'a, T> {
    Nvp { name, value }
}

/// An ordered list of [`Nvp`]s, written as a right-nested tuple closed by `()`:
/// ```text
/// (make_nvp("a", &mut a), (make_nvp("b", &mut b), ()))
/// ```
pub trait Bindings {
    const LEN: usize;

    /// Hand every binding to [`Archive::named`], front to back.
    fn bind<A: Archive>(self, archive: &mut A) -> Result<(), A::Error>;
}

impl Bindings for () {
    const LEN: usize = 0;

    #[inline]
    fn bind<A: Archive>(self, _archive: &mut A) -> Result<(), A::Error> {
        Ok(())
    }
}

impl<'a, T: Serialize, R: Bindings> Bindings for (Nvp<'a, T>, R) {
    const LEN: usize = 1 + R::LEN;

    #[inline]
    fn bind<A: Archive>(self, archive: &mut A) -> Result<(), A::Error> {
        let (head, rest) = self;
        archive.named(head)?;
        rest.bind(archive)
    }
}
