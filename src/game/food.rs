use super::arena::Arena;
use super::geom::Point;
use rand::Rng;

/// The single food pellet on the field.
///
/// Exactly one pellet exists at a time; eating it moves it rather than
/// destroying it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Food {
    pub(crate) position: Point,
    pub(crate) radius: f32,
}

impl Food {
    /// Create a pellet at a random spot inside `arena`'s spawn region.
    pub(crate) fn new<R: Rng>(radius: f32, arena: Arena, rng: &mut R) -> Food {
        let mut food = Food {
            position: Point::default(),
            radius,
        };
        food.respawn(arena, rng);
        food
    }

    /// Move the pellet to a fresh uniformly random position inside the
    /// spawn region.  The new spot is drawn independently of the old one
    /// and may coincide with it.
    pub(crate) fn respawn<R: Rng>(&mut self, arena: Arena, rng: &mut R) {
        let (xs, ys) = arena.spawn_region();
        self.position = Point::new(rng.random_range(xs), rng.random_range(ys));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    const ARENA: Arena = Arena {
        width: 800.0,
        height: 600.0,
        wall: 10.0,
    };

    #[test]
    fn spawns_inside_margins() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut food = Food::new(5.0, ARENA, &mut rng);
        for _ in 0..200 {
            food.respawn(ARENA, &mut rng);
            let p = food.position;
            assert!(p.x >= 20.0 && p.x < 780.0, "x out of spawn region: {p:?}");
            assert!(p.y >= 20.0 && p.y < 580.0, "y out of spawn region: {p:?}");
        }
    }

    #[test]
    fn respawn_moves_the_pellet() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut food = Food::new(5.0, ARENA, &mut rng);
        let before = food.position;
        food.respawn(ARENA, &mut rng);
        assert!(food.position.distance(before) > f32::EPSILON);
    }
}
