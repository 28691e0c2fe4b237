use crate::archive::{Archive, Serialize};

/// A mutable reference to one primitive value.
#[derive(Debug)]
pub enum Leaf<'a> {
    Bool(&'a mut bool),
    Char(&'a mut char),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    I128(&'a mut i128),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    U128(&'a mut u128),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    String(&'a mut String),
}

macro_rules! leaf_impls {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl Serialize for $t {
                #[inline]
                fn serialize<A: Archive>(&mut self, archive: &mut A) -> Result<(), A::Error> {
                    archive.leaf(Leaf::$variant(self))
                }
            }
        )*
    };
}

leaf_impls!(
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
);
