use crate::common::{recorded_names, ArchiveError, LoadArchive, SaveArchive, Value};
use serializable::{serializable, Serialize};

serializable! {
    #[derive(Debug, Clone, PartialEq, Default)]
    #[allow(non_snake_case)]
    pub struct Car {
        (String) name,
        (i32) age,
        (bool) isBest,
    }
}

pub fn test() {
    let mut car = Car {
        name: String::from("Herbie"),
        age: 53,
        isBest: true,
    };

    assert_eq!(Car::FIELD_NAMES, &["name", "age", "isBest"]);
    assert_eq!(recorded_names(&mut car), Car::FIELD_NAMES);

    let saved = SaveArchive::save(&mut car);
    assert_eq!(
        saved,
        vec![
            (String::from("name"), Value::String(String::from("Herbie"))),
            (String::from("age"), Value::I32(53)),
            (String::from("isBest"), Value::Bool(true)),
        ]
    );

    let mut loaded = Car::default();
    LoadArchive::load(&mut loaded, saved.clone()).unwrap();
    assert_eq!(loaded, car);

    let mut renamed = saved.clone();
    renamed[1].0 = String::from("years");
    assert_eq!(
        LoadArchive::load(&mut Car::default(), renamed),
        Err(ArchiveError::KeyMismatch {
            expected: String::from("age"),
            found: String::from("years"),
        })
    );

    let mut truncated = saved;
    truncated.pop();
    assert_eq!(
        LoadArchive::load(&mut Car::default(), truncated),
        Err(ArchiveError::MissingEntry {
            key: String::from("isBest")
        })
    );
}
