use ordinal_switch::Ordinal;

#[derive(Clone, Copy, Ordinal)]
enum Slot<T> {
    Empty,
    Full(T),
}

fn main() {
    let _empty = Slot::<u8>::Empty;

    if let Slot::Full(value) = Slot::Full(7_u8) {
        assert_eq!(value, 7);
    }
}
