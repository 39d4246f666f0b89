use super::arena::Arena;
use super::duel::Player;
use super::food::Food;
use super::snake::Snake;
use crate::consts;
use enum_map::EnumMap;
use serde::Deserialize;

/// Resolution policy for a tick on which both snakes violate a losing
/// condition at once (e.g. simultaneous wall hits).
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum TieBreak {
    /// Both snakes lose and nobody wins
    #[default]
    Draw,

    /// Player 1's violation resolves first, so player 2 is declared the
    /// winner even when it also violated.  This reproduces the behavior of
    /// the game this one is modelled on, where the checks simply ran in
    /// player order.
    FirstChecked,
}

/// The end-of-match verdict produced by a single tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Terminal {
    /// One snake lost; the other wins
    Win { winner: Player, loser: Player },

    /// Both snakes lost on the same tick
    Draw,
}

/// Everything the collision pass decided for one tick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TickOutcome {
    pub(crate) terminal: Option<Terminal>,

    /// Whether each snake's head reached the food this tick.  Always all
    /// false when a terminal verdict was reached.
    pub(crate) ate: EnumMap<Player, bool>,
}

/// Run the full per-tick collision pass.  All checks are evaluated against
/// the current (post-movement, pre-respawn) state; the caller applies the
/// side effects.  The pass holds no state of its own across ticks.
///
/// Per snake, in fixed precedence: wall, then self, then opponent.  Food is
/// independent of the loss checks and is evaluated for both snakes against
/// the same food position, so a genuine simultaneous eat reports both.
pub(crate) fn resolve(
    player1: &Snake,
    player2: &Snake,
    food: Food,
    arena: Arena,
    radius: f32,
    tie_break: TieBreak,
) -> TickOutcome {
    let p1_loses = loses(player1, player2, arena, radius);
    let p2_loses = loses(player2, player1, arena, radius);
    let terminal = match (p1_loses, p2_loses) {
        (false, false) => None,
        (true, false) => Some(Terminal::Win {
            winner: Player::Two,
            loser: Player::One,
        }),
        (false, true) => Some(Terminal::Win {
            winner: Player::One,
            loser: Player::Two,
        }),
        (true, true) => Some(match tie_break {
            TieBreak::Draw => Terminal::Draw,
            TieBreak::FirstChecked => Terminal::Win {
                winner: Player::Two,
                loser: Player::One,
            },
        }),
    };
    let mut ate = EnumMap::default();
    if terminal.is_none() {
        for (player, snake) in [(Player::One, player1), (Player::Two, player2)] {
            ate[player] = snake.head().distance(food.position) < radius + food.radius;
        }
    }
    TickOutcome { terminal, ate }
}

fn loses(snake: &Snake, opponent: &Snake, arena: Arena, radius: f32) -> bool {
    hits_wall(snake, arena) || hits_self(snake, radius) || hits_opponent(snake, opponent, radius)
}

/// Has this head escaped the head-safe zone?
fn hits_wall(snake: &Snake, arena: Arena) -> bool {
    !arena.contains(snake.head())
}

/// Does this head touch its own body?  The segments nearest the head are
/// exempt; the neck always sits within a collision radius of the head and
/// must not count.
fn hits_self(snake: &Snake, radius: f32) -> bool {
    let head = snake.head();
    snake
        .body()
        .iter()
        .skip(consts::NECK_EXEMPT)
        .any(|&seg| head.distance(seg) < radius)
}

/// Does this head touch any segment of the opponent, head included?
fn hits_opponent(snake: &Snake, opponent: &Snake, radius: f32) -> bool {
    let head = snake.head();
    opponent.body().iter().any(|&seg| head.distance(seg) < radius)
}
