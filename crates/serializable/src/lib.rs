#![doc = include_str!("../README.md")]

mod archive;
mod leaf;
mod nvp;

pub use archive::{Archive, Serialize};
pub use leaf::Leaf;
pub use nvp::{make_nvp, Bindings, Nvp};

pub use serializable_macro::serializable;
