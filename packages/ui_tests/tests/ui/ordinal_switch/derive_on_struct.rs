use ordinal_switch::Ordinal;

#[derive(Clone, Copy, Ordinal)]
struct Volume {
    level: u8,
}

fn main() {
    let volume = Volume { level: 3 };
    assert_eq!(volume.level, 3);
}
