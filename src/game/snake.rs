use super::geom::Point;
use std::collections::VecDeque;

/// Which way a snake is steering this tick.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Turn {
    Left,
    #[default]
    Straight,
    Right,
}

impl Turn {
    /// Sign applied to the turn rate: −1 steers left, +1 steers right.
    pub(crate) fn factor(self) -> f32 {
        match self {
            Turn::Left => -1.0,
            Turn::Straight => 0.0,
            Turn::Right => 1.0,
        }
    }
}

/// One player's snake.
///
/// The body is stored head-first: `body[0]` is the head and segments run
/// newest to oldest, so `body[i]` is where the head was `i` ticks ago.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snake {
    /// Direction of travel in radians
    pub(super) heading: f32,

    /// Steering applied on the next advance
    pub(super) turn: Turn,

    /// Segments still owed from eaten food; while positive, the tail is
    /// kept on advance
    pub(super) growth_owed: u32,

    /// Food eaten this match
    pub(super) score: u32,

    pub(super) body: VecDeque<Point>,
}

impl Snake {
    /// Create a snake with its head at `head`, facing `heading`, and a
    /// straight tail of `length` segments laid opposite the heading at
    /// `spacing`-pixel intervals.
    pub(crate) fn new(head: Point, heading: f32, length: usize, spacing: f32) -> Snake {
        let mut body = VecDeque::with_capacity(length);
        let mut p = head;
        for _ in 0..length {
            body.push_back(p);
            p = p.step(heading, -spacing);
        }
        Snake {
            heading,
            turn: Turn::Straight,
            growth_owed: 0,
            score: 0,
            body,
        }
    }

    pub(crate) fn head(&self) -> Point {
        *self.body.front().expect("snake body should never be empty")
    }

    pub(crate) fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// Latch the steering input for the next advance
    pub(crate) fn steer(&mut self, turn: Turn) {
        self.turn = turn;
    }

    /// Move one tick forwards: rotate the heading by the latched turn, grow
    /// a new head in the new direction, and drop the oldest segment unless
    /// growth is owed.  No bounds checking happens here; a head escaping
    /// the arena is the collision engine's concern, not the snake's.
    pub(crate) fn advance(&mut self, speed: f32, turn_rate: f32) {
        self.heading = self.turn.factor().mul_add(turn_rate, self.heading);
        let new_head = self.head().step(self.heading, speed);
        self.body.push_front(new_head);
        if self.growth_owed > 0 {
            self.growth_owed -= 1;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Record a food consumption: one point now, `growth` extra segments
    /// spread over the following ticks.  Called exactly once per
    /// consumption event.
    pub(crate) fn eat(&mut self, growth: u32) {
        self.growth_owed += growth;
        self.score += 1;
    }
}
