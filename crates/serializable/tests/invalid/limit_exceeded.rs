use serializable::serializable;

serializable! {
    #[serializable(limit = 1)]
    pub struct Pair {
        (u8) a,
        (u8) b,
    }
}

fn main() {}
