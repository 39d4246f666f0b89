use super::collision::{self, Terminal};
use super::food::Food;
use super::geom::Point;
use super::particles::{self, Particle};
use super::snake::{Snake, Turn};
use crate::consts;
use crate::options::{Options, OptionsError};
use enum_map::Enum;
use rand::Rng;
use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// Identifier for one of the two fixed players.
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Player {
    One,
    Two,
}

impl Player {
    pub(crate) fn display_name(self) -> &'static str {
        match self {
            Player::One => "PLAYER 1",
            Player::Two => "PLAYER 2",
        }
    }
}

/// Steering inputs latched for one tick.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Steering {
    pub(crate) p1: Turn,
    pub(crate) p2: Turn,
}

/// Where the match is in its lifecycle.  Every transition is driven by the
/// `now` passed into [`Duel::tick`] against a deadline stored in the phase
/// itself; there are no background timers to cancel or to fire stale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// The get-ready beat between both players readying up and the first
    /// simulated tick.  Snakes are posed but frozen.
    Countdown { start_at: Instant },

    /// Live simulation
    Running,

    /// A terminal collision happened; snakes are frozen while the
    /// explosion plays out
    Ending {
        until: Instant,
        winner: Option<Player>,
    },

    /// The verdict is on screen; rematch/menu choices unlock at `unlock_at`
    Cooldown {
        unlock_at: Instant,
        winner: Option<Player>,
    },
}

/// Externally visible happenings of a tick, for the score/status surfaces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MatchEvent {
    /// A snake ate and its score changed
    Scored { player: Player, score: u32 },

    /// The match is over; `winner` is `None` on a draw
    Ended { winner: Option<Player> },
}

/// The match aggregate: both snakes, the food, the explosion particles, and
/// the phase machine.  Everything a tick mutates lives here, and only
/// [`Duel::tick`] (plus an accepted [`Duel::rematch`]) mutates it; the
/// presentation layer gets read-only views.
#[derive(Clone, Debug)]
pub(crate) struct Duel<R = rand::rngs::ThreadRng> {
    rng: R,
    options: Options,
    pub(super) phase: Phase,
    player1: Snake,
    player2: Snake,
    pub(super) food: Food,
    particles: Vec<Particle>,
}

impl Duel<rand::rngs::ThreadRng> {
    /// Arm a match with the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `options` describes an unplayable game; see
    /// [`Options::validate`].
    pub(crate) fn new(options: Options, now: Instant) -> Result<Self, OptionsError> {
        Duel::new_with_rng(options, rand::rng(), now)
    }
}

impl<R: Rng> Duel<R> {
    /// Arm a match: validate the rules, pose both snakes, place the first
    /// food, and enter the countdown beat.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `options` describes an unplayable game; see
    /// [`Options::validate`].
    pub(crate) fn new_with_rng(
        options: Options,
        mut rng: R,
        now: Instant,
    ) -> Result<Duel<R>, OptionsError> {
        options.validate()?;
        let food = Food::new(options.food_radius, options.arena(), &mut rng);
        Ok(Duel {
            rng,
            phase: Phase::Countdown {
                start_at: now + Duration::from_secs_f32(options.start_delay),
            },
            player1: spawn_snake(&options, Player::One),
            player2: spawn_snake(&options, Player::Two),
            food,
            particles: Vec::new(),
            options,
        })
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn snake(&self, player: Player) -> &Snake {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    pub(crate) fn food(&self) -> Food {
        self.food
    }

    pub(crate) fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Run one tick of the frame pipeline: consume the latched steering,
    /// advance the phase machine against `now`, simulate and collide while
    /// running, and advance the explosion while ending.  Returns the
    /// tick's events.
    pub(crate) fn tick(&mut self, now: Instant, steering: Steering) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        match self.phase {
            Phase::Countdown { start_at } => {
                if now >= start_at {
                    self.phase = Phase::Running;
                }
            }
            Phase::Running => self.simulate(now, steering, &mut events),
            Phase::Ending { until, winner } => {
                particles::advance(&mut self.particles);
                if now >= until {
                    self.phase = Phase::Cooldown {
                        unlock_at: now + Duration::from_secs_f32(self.options.cooldown_lockout),
                        winner,
                    };
                    events.push(MatchEvent::Ended { winner });
                }
            }
            Phase::Cooldown { .. } => (),
        }
        events
    }

    fn simulate(&mut self, now: Instant, steering: Steering, events: &mut Vec<MatchEvent>) {
        self.player1.steer(steering.p1);
        self.player2.steer(steering.p2);
        self.player1.advance(self.options.speed, self.options.turn_rate);
        self.player2.advance(self.options.speed, self.options.turn_rate);
        let outcome = collision::resolve(
            &self.player1,
            &self.player2,
            self.food,
            self.options.arena(),
            self.options.snake_radius,
            self.options.tie_break,
        );
        if let Some(terminal) = outcome.terminal {
            let winner = self.explode(terminal);
            self.phase = Phase::Ending {
                until: now + Duration::from_secs_f32(self.options.ending_delay),
                winner,
            };
            return;
        }
        let mut eaten = false;
        for (player, ate) in outcome.ate {
            if ate {
                let snake = match player {
                    Player::One => &mut self.player1,
                    Player::Two => &mut self.player2,
                };
                snake.eat(self.options.growth_factor);
                events.push(MatchEvent::Scored {
                    player,
                    score: snake.score(),
                });
                eaten = true;
            }
        }
        if eaten {
            self.food.respawn(self.options.arena(), &mut self.rng);
        }
    }

    /// Burst particles out of every losing head and name the winner, if
    /// there is one.
    fn explode(&mut self, terminal: Terminal) -> Option<Player> {
        match terminal {
            Terminal::Win { winner, loser } => {
                let at = self.snake(loser).head();
                self.particles = particles::explosion(at, loser, &mut self.rng);
                Some(winner)
            }
            Terminal::Draw => {
                let mut burst =
                    particles::explosion(self.player1.head(), Player::One, &mut self.rng);
                burst.extend(particles::explosion(
                    self.player2.head(),
                    Player::Two,
                    &mut self.rng,
                ));
                self.particles = burst;
                None
            }
        }
    }

    /// May the rematch / main-menu choices be taken yet?
    pub(crate) fn choices_unlocked(&self, now: Instant) -> bool {
        matches!(self.phase, Phase::Cooldown { unlock_at, .. } if now >= unlock_at)
    }

    /// Start a fresh match under the same rules: new snakes, fresh food, no
    /// particles, scores reset, countdown re-armed.  Only permitted from an
    /// unlocked cooldown; returns whether the rematch was accepted.
    pub(crate) fn rematch(&mut self, now: Instant) -> bool {
        if !self.choices_unlocked(now) {
            return false;
        }
        self.player1 = spawn_snake(&self.options, Player::One);
        self.player2 = spawn_snake(&self.options, Player::Two);
        self.food.respawn(self.options.arena(), &mut self.rng);
        self.particles.clear();
        self.phase = Phase::Countdown {
            start_at: now + Duration::from_secs_f32(self.options.start_delay),
        };
        true
    }
}

/// Pose a snake in its starting spot: inset from its own wall at mid
/// height, facing the opponent, with the tail trailing towards the wall
/// behind it.
fn spawn_snake(options: &Options, player: Player) -> Snake {
    let y = options.arena_height / 2.0;
    let (x, heading) = match player {
        Player::One => (consts::SPAWN_INSET, 0.0),
        Player::Two => (options.arena_width - consts::SPAWN_INSET, PI),
    };
    Snake::new(
        Point::new(x, y),
        heading,
        options.initial_length,
        options.speed,
    )
}
