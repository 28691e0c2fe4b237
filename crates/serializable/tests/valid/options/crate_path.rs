use crate::common::{recorded_names, LoadArchive, SaveArchive};
use serializable::serializable;

mod reexport {
    pub use serializable::{make_nvp, Archive, Serialize};
}

use reexport::Serialize;

serializable! {
    #[serializable(crate = self::reexport)]
    #[derive(Debug, Default, PartialEq)]
    pub struct Routed {
        (u8) a,
        (u8) b,
    }
}

pub fn test() {
    let mut routed = Routed { a: 1, b: 2 };
    assert_eq!(Routed::FIELD_NAMES, &["a", "b"]);
    assert_eq!(recorded_names(&mut routed), vec!["a", "b"]);

    let mut loaded = Routed::default();
    LoadArchive::load(&mut loaded, SaveArchive::save(&mut routed)).unwrap();
    assert_eq!(loaded, routed);
}
