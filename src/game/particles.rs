use super::duel::Player;
use super::geom::Point;
use crate::consts;
use rand::Rng;
use std::f32::consts::TAU;

/// One fragment of the explosion shown where a snake died.  Purely visual;
/// the match outcome is already decided when these exist.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Particle {
    pub(crate) position: Point,
    velocity: (f32, f32),
    life: u32,

    /// Whose wreckage this is, for tinting
    pub(crate) player: Player,
}

impl Particle {
    /// Advance one tick.  Returns `false` once the particle has expired.
    fn tick(&mut self) -> bool {
        self.position.x += self.velocity.0;
        self.position.y += self.velocity.1;
        self.life -= 1;
        self.life > 0
    }
}

/// Spawn a burst of [`consts::PARTICLE_COUNT`] particles flying out of
/// `origin` in uniformly random directions.
pub(crate) fn explosion<R: Rng>(origin: Point, player: Player, rng: &mut R) -> Vec<Particle> {
    (0..consts::PARTICLE_COUNT)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(1.0..1.0 + consts::PARTICLE_SPEED);
            Particle {
                position: origin,
                velocity: (angle.cos() * speed, angle.sin() * speed),
                life: consts::PARTICLE_LIFESPAN,
                player,
            }
        })
        .collect()
}

/// Advance all particles one tick, discarding the expired.
pub(crate) fn advance(particles: &mut Vec<Particle>) {
    particles.retain_mut(Particle::tick);
}
