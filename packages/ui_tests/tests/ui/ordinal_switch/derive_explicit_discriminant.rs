use ordinal_switch::Ordinal;

#[derive(Clone, Copy, Ordinal)]
enum Priority {
    Low,
    High = 10,
}

fn main() {
    let _levels = [Priority::Low, Priority::High];
}
