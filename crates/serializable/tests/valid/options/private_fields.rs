use crate::common::{LoadArchive, SaveArchive, Value};
use serializable::Serialize;

mod vault {
    use serializable::serializable;

    serializable! {
        #[serializable(pub_fields = off)]
        #[derive(Debug, Default, PartialEq)]
        pub struct Secret {
            (String) pin,
            (u32) attempts,
        }
    }

    impl Secret {
        pub fn new(pin: &str) -> Self {
            Self {
                pin: pin.to_owned(),
                attempts: 3,
            }
        }

        pub fn pin(&self) -> &str {
            &self.pin
        }
    }
}

pub fn test() {
    let mut secret = vault::Secret::new("1234");
    assert_eq!(vault::Secret::FIELD_NAMES, &["pin", "attempts"]);

    let saved = SaveArchive::save(&mut secret);
    assert_eq!(saved[1], (String::from("attempts"), Value::U32(3)));

    let mut loaded = vault::Secret::default();
    LoadArchive::load(&mut loaded, saved).unwrap();
    assert_eq!(loaded.pin(), "1234");
    assert_eq!(loaded, secret);
}
