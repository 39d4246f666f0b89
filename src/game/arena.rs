use super::geom::Point;
use std::ops::Range;

/// The playing field: a `width` × `height` rectangle with a wall band of
/// thickness `wall` along each edge.  A head is safe while it stays inside
/// `[wall, width − wall] × [wall, height − wall]`, endpoints included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Arena {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) wall: f32,
}

impl Arena {
    /// Is `p` inside the head-safe zone?
    pub(crate) fn contains(self, p: Point) -> bool {
        (self.wall..=self.width - self.wall).contains(&p.x)
            && (self.wall..=self.height - self.wall).contains(&p.y)
    }

    /// The coordinate ranges food may spawn in: the interior inset by twice
    /// the wall thickness on each side.
    pub(crate) fn spawn_region(self) -> (Range<f32>, Range<f32>) {
        let margin = self.wall * 2.0;
        (
            margin..self.width - margin,
            margin..self.height - margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ARENA: Arena = Arena {
        width: 800.0,
        height: 600.0,
        wall: 10.0,
    };

    #[rstest]
    #[case(Point::new(400.0, 300.0), true)]
    #[case(Point::new(10.0, 300.0), true)]
    #[case(Point::new(790.0, 300.0), true)]
    #[case(Point::new(9.9, 300.0), false)]
    #[case(Point::new(790.5, 300.0), false)]
    #[case(Point::new(400.0, 9.0), false)]
    #[case(Point::new(400.0, 591.0), false)]
    #[case(Point::new(-5.0, -5.0), false)]
    fn test_contains(#[case] p: Point, #[case] inside: bool) {
        assert_eq!(ARENA.contains(p), inside);
    }

    #[test]
    fn spawn_region_margins() {
        let (xs, ys) = ARENA.spawn_region();
        assert!((xs.start - 20.0).abs() < 1e-5);
        assert!((xs.end - 780.0).abs() < 1e-5);
        assert!((ys.start - 20.0).abs() < 1e-5);
        assert!((ys.end - 580.0).abs() < 1e-5);
    }
}
