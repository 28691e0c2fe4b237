use crate::common::{ArchiveError, LoadArchive, SaveArchive, Value};
use serializable::{serializable, Serialize};

serializable! {
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Everything {
        (bool) flag,
        (char) letter,
        (i8) tiny,
        (i16) small,
        (i32) medium,
        (i64) large,
        (i128) huge,
        (isize) native,
        (u8) utiny,
        (u16) usmall,
        (u32) umedium,
        (u64) ularge,
        (u128) uhuge,
        (usize) unative,
        (f32) single,
        (f64) double,
        (String) text,
    }
}

serializable! {
    #[derive(Debug, Default)]
    pub struct Signed { (i32) value }
}

serializable! {
    #[derive(Debug, Default)]
    pub struct Unsigned { (u32) value }
}

pub fn test() {
    let mut everything = Everything {
        flag: true,
        letter: 'q',
        tiny: i8::MIN,
        small: -300,
        medium: 70_000,
        large: -(1 << 40),
        huge: i128::MAX,
        native: -1,
        utiny: u8::MAX,
        usmall: 300,
        umedium: 70_000,
        ularge: 1 << 40,
        uhuge: u128::MAX,
        unative: 1,
        single: 0.5,
        double: -0.25,
        text: String::from("all of them"),
    };
    assert_eq!(Everything::FIELD_NAMES.len(), 17);

    let saved = SaveArchive::save(&mut everything);
    assert_eq!(
        saved.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
        Everything::FIELD_NAMES
    );

    let mut loaded = Everything::default();
    LoadArchive::load(&mut loaded, saved).unwrap();
    assert_eq!(loaded, everything);

    let saved = SaveArchive::save(&mut Signed { value: -1 });
    assert_eq!(
        LoadArchive::load(&mut Unsigned::default(), saved),
        Err(ArchiveError::TypeMismatch {
            key: String::from("value"),
            found: Value::I32(-1),
        })
    );
}
