use crate::Cost;

/// A position in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    #[allow(missing_docs)]
    pub x: f32,
    #[allow(missing_docs)]
    pub y: f32,
    #[allow(missing_docs)]
    pub z: f32,
}

impl Point {
    /// Creates a new Point.
    pub const fn new(x: f32, y: f32, z: f32) -> Point {
        Point { x, y, z }
    }

    /// The Euclidean distance between two Points.
    pub fn distance(self, other: Point) -> Cost {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<(f32, f32, f32)> for Point {
    fn from((x, y, z): (f32, f32, f32)) -> Point {
        Point { x, y, z }
    }
}

impl From<[f32; 3]> for Point {
    fn from([x, y, z]: [f32; 3]) -> Point {
        Point { x, y, z }
    }
}

impl From<Point> for [f32; 3] {
    fn from(p: Point) -> [f32; 3] {
        [p.x, p.y, p.z]
    }
}

#[test]
fn distance() {
    let a = Point::new(1.0, 2.0, 3.0);
    let b = Point::new(4.0, 6.0, 3.0);
    assert_eq!(a.distance(b), 5.0);
    assert_eq!(b.distance(a), 5.0);
    assert_eq!(a.distance(a), 0.0);
    assert_eq!(Point::from((4.0, 6.0, 3.0)), b);
    assert_eq!(<[f32; 3]>::from(Point::from([1.0, 2.0, 3.0])), [1.0, 2.0, 3.0]);
}
