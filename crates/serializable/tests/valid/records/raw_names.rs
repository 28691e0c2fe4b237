use crate::common::{recorded_names, LoadArchive, SaveArchive};
use serializable::{serializable, Serialize};

serializable! {
    #[derive(Debug, Default, PartialEq)]
    pub struct Keywords {
        (u8) r#type,
        (u8) r#match,
        (String) plain,
    }
}

pub fn test() {
    assert_eq!(Keywords::FIELD_NAMES, &["r#type", "r#match", "plain"]);

    let mut keywords = Keywords {
        r#type: 1,
        r#match: 2,
        plain: String::from("three"),
    };
    assert_eq!(recorded_names(&mut keywords), Keywords::FIELD_NAMES);

    let mut loaded = Keywords::default();
    LoadArchive::load(&mut loaded, SaveArchive::save(&mut keywords)).unwrap();
    assert_eq!(loaded, keywords);
}
