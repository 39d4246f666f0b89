use crate::consts;
use crate::game::arena::Arena;
use crate::game::collision::TieBreak;
use serde::Deserialize;
use thiserror::Error;

/// Every gameplay rule of a match, as read from the `[options]` table of
/// the configuration file.  All fields have playable defaults; a partial
/// table overrides only what it names.
///
/// Values are never clamped: a nonsensical rule is rejected outright by
/// [`Options::validate`] before any match is armed.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Options {
    /// Forward speed in pixels per tick
    pub(crate) speed: f32,

    /// Heading change in radians per tick while steering
    pub(crate) turn_rate: f32,

    /// Segments in a freshly spawned snake
    pub(crate) initial_length: usize,

    /// Collision radius of a snake segment in pixels
    pub(crate) snake_radius: f32,

    /// Radius of the food pellet in pixels
    pub(crate) food_radius: f32,

    /// Segments owed per food pellet eaten
    pub(crate) growth_factor: u32,

    /// Arena width in pixels
    pub(crate) arena_width: f32,

    /// Arena height in pixels
    pub(crate) arena_height: f32,

    /// Thickness of the wall band along each arena edge
    pub(crate) wall_thickness: f32,

    /// Seconds between both players readying up and the first tick
    pub(crate) start_delay: f32,

    /// Seconds the end-of-match explosion plays before the verdict
    pub(crate) ending_delay: f32,

    /// Seconds the rematch/menu choices stay locked after a match
    pub(crate) cooldown_lockout: f32,

    /// Resolution policy when both snakes lose on the same tick
    pub(crate) tie_break: TieBreak,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            speed: consts::SNAKE_SPEED,
            turn_rate: consts::TURN_RATE,
            initial_length: consts::INITIAL_SNAKE_LENGTH,
            snake_radius: consts::SNAKE_RADIUS,
            food_radius: consts::FOOD_RADIUS,
            growth_factor: consts::GROWTH_FACTOR,
            arena_width: consts::ARENA_WIDTH,
            arena_height: consts::ARENA_HEIGHT,
            wall_thickness: consts::WALL_THICKNESS,
            start_delay: consts::START_DELAY,
            ending_delay: consts::ENDING_DELAY,
            cooldown_lockout: consts::COOLDOWN_LOCKOUT,
            tie_break: TieBreak::Draw,
        }
    }
}

impl Options {
    /// Check that these rules describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, with enough detail to fix the
    /// configuration file.
    pub(crate) fn validate(&self) -> Result<(), OptionsError> {
        positive(self.speed, "speed")?;
        positive(self.turn_rate, "turn-rate")?;
        positive(self.snake_radius, "snake-radius")?;
        positive(self.food_radius, "food-radius")?;
        positive(self.arena_width, "arena-width")?;
        positive(self.arena_height, "arena-height")?;
        positive(self.wall_thickness, "wall-thickness")?;
        non_negative(self.start_delay, "start-delay")?;
        non_negative(self.ending_delay, "ending-delay")?;
        non_negative(self.cooldown_lockout, "cooldown-lockout")?;
        if self.initial_length == 0 {
            return Err(OptionsError::ZeroLength);
        }
        if self.arena_width <= self.wall_thickness * 4.0
            || self.arena_height <= self.wall_thickness * 4.0
        {
            return Err(OptionsError::WallsSwallowArena);
        }
        if self.arena_width <= consts::SPAWN_INSET * 2.0 {
            return Err(OptionsError::TooNarrow(consts::SPAWN_INSET * 2.0));
        }
        Ok(())
    }

    /// The playing field these rules describe
    pub(crate) fn arena(&self) -> Arena {
        Arena {
            width: self.arena_width,
            height: self.arena_height,
            wall: self.wall_thickness,
        }
    }
}

fn positive(value: f32, what: &'static str) -> Result<(), OptionsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OptionsError::NotPositive { what, value })
    }
}

fn non_negative(value: f32, what: &'static str) -> Result<(), OptionsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(OptionsError::Negative { what, value })
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub(crate) enum OptionsError {
    #[error("{what} must be a positive number, got {value}")]
    NotPositive { what: &'static str, value: f32 },
    #[error("{what} must be a non-negative number, got {value}")]
    Negative { what: &'static str, value: f32 },
    #[error("initial-length must be at least 1")]
    ZeroLength,
    #[error("the wall band leaves no room to spawn food; the arena must exceed four wall thicknesses in each dimension")]
    WallsSwallowArena,
    #[error("the arena is too narrow for the spawn poses; arena-width must exceed {0} pixels")]
    TooNarrow(f32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Options::default().validate(), Ok(()));
    }

    #[rstest]
    #[case(Options { speed: 0.0, ..Options::default() })]
    #[case(Options { speed: -2.0, ..Options::default() })]
    #[case(Options { speed: f32::NAN, ..Options::default() })]
    #[case(Options { turn_rate: -0.06, ..Options::default() })]
    #[case(Options { snake_radius: 0.0, ..Options::default() })]
    #[case(Options { food_radius: -5.0, ..Options::default() })]
    #[case(Options { arena_width: 0.0, ..Options::default() })]
    #[case(Options { arena_height: f32::INFINITY, ..Options::default() })]
    #[case(Options { wall_thickness: -1.0, ..Options::default() })]
    #[case(Options { start_delay: -1.0, ..Options::default() })]
    #[case(Options { cooldown_lockout: f32::NAN, ..Options::default() })]
    #[case(Options { initial_length: 0, ..Options::default() })]
    #[case(Options { wall_thickness: 200.0, ..Options::default() })]
    #[case(Options { arena_width: 250.0, wall_thickness: 2.0, ..Options::default() })]
    fn invalid_options_are_rejected(#[case] options: Options) {
        assert!(options.validate().is_err(), "{options:?}");
    }

    #[test]
    fn zero_delays_are_allowed() {
        let options = Options {
            start_delay: 0.0,
            ending_delay: 0.0,
            cooldown_lockout: 0.0,
            ..Options::default()
        };
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn arena_matches_fields() {
        let arena = Options::default().arena();
        assert!((arena.width - 800.0).abs() < f32::EPSILON);
        assert!((arena.height - 600.0).abs() < f32::EPSILON);
        assert!((arena.wall - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn deserializes_partial_tables() {
        let options: Options =
            toml::from_str("speed = 3.5\ntie-break = \"first-checked\"").unwrap();
        assert!((options.speed - 3.5).abs() < f32::EPSILON);
        assert_eq!(options.tie_break, TieBreak::FirstChecked);
        assert_eq!(options.initial_length, 15);
    }
}
