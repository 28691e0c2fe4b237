//! The contract between generated records and whatever encodes them.
//!
//! The same [`Serialize::serialize`] routine is used to save and to load: a
//! saving archive reads through the `&mut` references it is given, a loading
//! archive writes through them.

use crate::{leaf::Leaf, nvp::{Bindings, Nvp}};

pub trait Archive: Sized {
    type Error;

    /// Accept a list of named values, in order. An empty list (`()`) is
    /// valid and does nothing by default.
    fn archive<B: Bindings>(&mut self, bindings: B) -> Result<(), Self::Error> {
        bindings.bind(self)
    }

    /// Called once per binding, typically records the name and then calls
    /// `value.serialize(self)`.
    fn named<T: Serialize>(&mut self, nvp: Nvp<'_, T>) -> Result<(), Self::Error>;

    /// Called for every primitive value reached.
    fn leaf(&mut self, leaf: Leaf<'_>) -> Result<(), Self::Error>;
}

pub trait Serialize {
    /// Serialization keys in binding order (empty for primitives).
    const FIELD_NAMES: &'static [&'static str] = &[];

    fn serialize<A: Archive>(&mut self, archive: &mut A) -> Result<(), A::Error>;
}

impl<T: Serialize> Serialize for Box<T> {
    const FIELD_NAMES: &'static [&'static str] = T::FIELD_NAMES;

    fn serialize<A: Archive>(&mut self, archive: &mut A) -> Result<(), A::Error> {
        (**self).serialize(archive)
    }
}
