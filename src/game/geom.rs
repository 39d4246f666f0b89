/// A location in arena space.
///
/// Arena coordinates are measured in pixels with the origin at the top-left
/// corner, x growing rightwards and y growing downwards.  Headings are in
/// radians; 0 points east (+x) and π/2 points south (+y).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl Point {
    pub(crate) fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    /// Euclidean distance between `self` and `other`
    pub(crate) fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The point `dist` pixels away from `self` in the direction `heading`
    pub(crate) fn step(self, heading: f32, dist: f32) -> Point {
        Point {
            x: heading.cos().mul_add(dist, self.x),
            y: heading.sin().mul_add(dist, self.y),
        }
    }
}
