//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Length of one simulation tick (~60 ticks per second).  The simulation
/// runs at this fixed cadence regardless of how fast the terminal redraws.
pub(crate) const TICK_PERIOD: Duration = Duration::from_micros(16_667);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Default forward speed in pixels per tick
pub(crate) const SNAKE_SPEED: f32 = 2.0;

/// Default heading change in radians per tick while steering
pub(crate) const TURN_RATE: f32 = 0.06;

/// Default number of segments in a freshly spawned snake
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 15;

/// Default collision radius of a snake segment, in pixels
pub(crate) const SNAKE_RADIUS: f32 = 7.0;

/// Default radius of the food pellet, in pixels
pub(crate) const FOOD_RADIUS: f32 = 5.0;

/// Default number of segments owed per food pellet eaten
pub(crate) const GROWTH_FACTOR: u32 = 5;

/// Default arena width in pixels
pub(crate) const ARENA_WIDTH: f32 = 800.0;

/// Default arena height in pixels
pub(crate) const ARENA_HEIGHT: f32 = 600.0;

/// Default thickness of the wall band along each arena edge, in pixels
pub(crate) const WALL_THICKNESS: f32 = 10.0;

/// Horizontal inset of each snake's spawn point from its own wall
pub(crate) const SPAWN_INSET: f32 = 150.0;

/// Leading body segments ignored by the self-collision check.  The neck
/// always sits within a collision radius of the head; at the default speed
/// the first exempt segment is 8 px behind the head, just outside the
/// 7 px radius even under a maximal turn.
pub(crate) const NECK_EXEMPT: usize = 4;

/// Default seconds between both players readying up and the first tick
pub(crate) const START_DELAY: f32 = 1.0;

/// Default seconds the end-of-match explosion plays before the verdict
pub(crate) const ENDING_DELAY: f32 = 2.0;

/// Default seconds the rematch/menu choices stay locked after a match
pub(crate) const COOLDOWN_LOCKOUT: f32 = 30.0;

/// Particles in one explosion burst
pub(crate) const PARTICLE_COUNT: usize = 40;

/// Upper bound on the random speed added to a particle's base 1 px/tick
pub(crate) const PARTICLE_SPEED: f32 = 3.0;

/// Ticks a particle lives for
pub(crate) const PARTICLE_LIFESPAN: u32 = 60;

/// How long a steering key counts as held after its last press event, on
/// terminals that cannot report key releases.  Terminal key repeat keeps
/// refreshing the deadline while the key is physically down.
pub(crate) const KEY_HOLD_WINDOW: Duration = Duration::from_millis(600);

/// Redraw interval while the verdict screen is counting down its lockout
pub(crate) const COOLDOWN_REFRESH: Duration = Duration::from_millis(250);

/// Maximum simulation ticks run back-to-back when the event loop falls
/// behind schedule; past this the tick schedule re-anchors to the present
/// instead of replaying the backlog.
pub(crate) const MAX_CATCHUP_TICKS: u32 = 4;

/// Style for player 1's snake, wreckage, and labels
pub(crate) const P1_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for player 2's snake, wreckage, and labels
pub(crate) const P2_STYLE: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);

/// Style for the food pellet
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Yellow);

/// Color of the arena wall band
pub(crate) const WALL_COLOR: Color = Color::Gray;

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
