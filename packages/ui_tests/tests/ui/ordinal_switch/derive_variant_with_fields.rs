use ordinal_switch::Ordinal;

#[derive(Clone, Copy, Ordinal)]
enum Shape {
    Point,
    Circle(u32),
}

fn main() {
    let _point = Shape::Point;

    if let Shape::Circle(radius) = Shape::Circle(1) {
        assert_eq!(radius, 1);
    }
}
