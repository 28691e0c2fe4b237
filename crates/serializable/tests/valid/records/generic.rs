use crate::common::{LoadArchive, SaveArchive, Value};
use serializable::{serializable, Serialize};

serializable! {
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Pair<A, B> where A: Clone {
        (A) first,
        (B) second,
    }
}

serializable! {
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Labelled {
        (Pair<u8, String>) pair,
        (Pair<Pair<bool, char>, i64>) deep,
    }
}

pub fn test() {
    assert_eq!(Pair::<u8, u8>::FIELD_NAMES, &["first", "second"]);
    assert_eq!(Labelled::FIELD_NAMES, &["pair", "deep"]);

    let mut labelled = Labelled {
        pair: Pair {
            first: 7,
            second: String::from("seven"),
        },
        deep: Pair {
            first: Pair {
                first: true,
                second: 'x',
            },
            second: -3,
        },
    };

    let saved = SaveArchive::save(&mut labelled);
    assert_eq!(
        saved,
        vec![
            (String::from("pair.first"), Value::U8(7)),
            (String::from("pair.second"), Value::String(String::from("seven"))),
            (String::from("deep.first.first"), Value::Bool(true)),
            (String::from("deep.first.second"), Value::Char('x')),
            (String::from("deep.second"), Value::I64(-3)),
        ]
    );

    let mut loaded = Labelled::default();
    LoadArchive::load(&mut loaded, saved).unwrap();
    assert_eq!(loaded, labelled);
}
