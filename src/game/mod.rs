pub(crate) mod arena;
pub(crate) mod collision;
pub(crate) mod controls;
pub(crate) mod duel;
pub(crate) mod food;
pub(crate) mod geom;
pub(crate) mod particles;
pub(crate) mod snake;
use self::controls::ControlBoard;
use self::duel::{Duel, MatchEvent, Phase, Player};
use self::geom::Point;
use crate::app::{AppState, Globals};
use crate::command::Command;
use crate::consts;
use crate::menu::MainMenu;
use crate::util::get_display_area;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points, Rectangle},
        Widget,
    },
    Frame,
};
use std::io;
use std::time::Instant;

/// The game screen: drives the match at a fixed tick cadence, latches
/// steering input, and draws the arena.  It owns no game rules of its own;
/// every rule lives in [`Duel`].
#[derive(Clone, Debug)]
pub(crate) struct DuelScreen<R: Rng = rand::rngs::ThreadRng> {
    duel: Duel<R>,
    controls: ControlBoard,
    globals: Globals,

    /// Deadline of the next simulation tick; `None` whenever the
    /// simulation schedule is stopped (cooldown, or freshly entered)
    next_tick: Option<Instant>,

    /// Most recent noteworthy happening, shown under the arena
    status: Option<String>,
}

impl DuelScreen<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals, now: Instant) -> DuelScreen {
        let duel = Duel::new(globals.options, now)
            .expect("gameplay options should have been validated at startup");
        DuelScreen::with_duel(duel, globals)
    }
}

impl<R: Rng> DuelScreen<R> {
    fn with_duel(duel: Duel<R>, globals: Globals) -> DuelScreen<R> {
        DuelScreen {
            duel,
            controls: ControlBoard::new(globals.key_releases),
            globals,
            next_tick: None,
            status: None,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Wait for either input or the next deadline, whichever comes first,
    /// and act on it.  Returns the next screen when this one is done.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<AppState>> {
        let now = Instant::now();
        if let Some(deadline) = self.next_deadline(now) {
            let wait = deadline.saturating_duration_since(now);
            if wait.is_zero() || !poll(wait)? {
                self.run_due_ticks();
                Ok(None)
            } else {
                let event = read()?;
                Ok(self.handle_event(&event))
            }
        } else {
            let event = read()?;
            Ok(self.handle_event(&event))
        }
    }

    /// What the event loop should wake up for.  While the match simulates
    /// (countdown, running, ending) that is the tick schedule; during the
    /// cooldown the schedule is dropped and only a lazy redraw timer
    /// remains until the lockout expires.  A fresh match re-arms the
    /// schedule from scratch, so a stale deadline from a previous match
    /// can never fire into a new one.
    fn next_deadline(&mut self, now: Instant) -> Option<Instant> {
        match self.duel.phase() {
            Phase::Countdown { .. } | Phase::Running | Phase::Ending { .. } => {
                if self.next_tick.is_none() {
                    self.next_tick = Some(now + consts::TICK_PERIOD);
                }
                self.next_tick
            }
            Phase::Cooldown { unlock_at, .. } => {
                self.next_tick = None;
                (now < unlock_at).then(|| now + consts::COOLDOWN_REFRESH)
            }
        }
    }

    /// Run every tick whose deadline has passed, in order, each against
    /// its own scheduled instant.  If the loop fell too far behind, the
    /// schedule re-anchors to the present instead of replaying the
    /// backlog.
    fn run_due_ticks(&mut self) {
        let Some(mut due) = self.next_tick else {
            return;
        };
        let mut ran = 0;
        while Instant::now() >= due {
            let steering = self.controls.steering(due);
            for event in self.duel.tick(due, steering) {
                self.on_event(event);
            }
            due += consts::TICK_PERIOD;
            ran += 1;
            if ran >= consts::MAX_CATCHUP_TICKS {
                due = Instant::now() + consts::TICK_PERIOD;
                break;
            }
        }
        self.next_tick = Some(due);
    }

    fn on_event(&mut self, event: MatchEvent) {
        match event {
            MatchEvent::Scored { player, score } => {
                self.status = Some(format!(" {} eats ({score})", player.display_name()));
            }
            MatchEvent::Ended { .. } => self.status = None,
        }
    }

    fn handle_event(&mut self, event: &Event) -> Option<AppState> {
        let now = Instant::now();
        self.controls.handle_event(event, now);
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => Some(AppState::Quit),
            Command::Rematch => {
                if self.duel.rematch(now) {
                    self.status = None;
                    self.next_tick = None;
                }
                None
            }
            Command::MainMenu => self
                .duel
                .choices_unlocked(now)
                .then(|| AppState::Menu(MainMenu::new(self.globals))),
            Command::Q => {
                matches!(self.duel.phase(), Phase::Cooldown { .. }).then_some(AppState::Quit)
            }
            _ => None,
        }
    }
}

fn color_of(style: Style) -> Color {
    style.fg.unwrap_or(Color::Reset)
}

impl<R: Rng> Widget for &DuelScreen<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, arena_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);

        Line::styled(
            format!(
                " P1: {p1}    P2: {p2}",
                p1 = self.duel.snake(Player::One).score(),
                p2 = self.duel.snake(Player::Two).score(),
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let arena = self.globals.options.arena();
        let show_snakes = matches!(self.duel.phase(), Phase::Countdown { .. } | Phase::Running);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, f64::from(arena.width)])
            .y_bounds([0.0, f64::from(arena.height)])
            .paint(|ctx| {
                // Canvas y grows upwards while arena y grows downwards.
                let flip = |p: Point| (f64::from(p.x), f64::from(arena.height - p.y));
                ctx.draw(&Rectangle {
                    x: f64::from(arena.wall),
                    y: f64::from(arena.wall),
                    width: f64::from(arena.width - arena.wall * 2.0),
                    height: f64::from(arena.height - arena.wall * 2.0),
                    color: consts::WALL_COLOR,
                });
                if show_snakes {
                    for player in [Player::One, Player::Two] {
                        let color = color_of(self.globals.theme.snake(player));
                        let snake = self.duel.snake(player);
                        let coords = snake
                            .body()
                            .iter()
                            .map(|&p| flip(p))
                            .collect::<Vec<_>>();
                        ctx.draw(&Points {
                            coords: &coords,
                            color,
                        });
                        let (x, y) = flip(snake.head());
                        ctx.draw(&Circle {
                            x,
                            y,
                            radius: f64::from(self.globals.options.snake_radius),
                            color,
                        });
                    }
                }
                let food = self.duel.food();
                let (x, y) = flip(food.position);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: f64::from(food.radius),
                    color: color_of(self.globals.theme.food),
                });
                for player in [Player::One, Player::Two] {
                    let coords = self
                        .duel
                        .particles()
                        .iter()
                        .filter(|p| p.player == player)
                        .map(|p| flip(p.position))
                        .collect::<Vec<_>>();
                    if !coords.is_empty() {
                        ctx.draw(&Points {
                            coords: &coords,
                            color: color_of(self.globals.theme.snake(player)),
                        });
                    }
                }
            })
            .render(arena_area, buf);

        match self.duel.phase() {
            Phase::Countdown { .. } => {
                Line::from(" — GET READY —").render(msg1_area, buf);
            }
            Phase::Running | Phase::Ending { .. } => {
                if let Some(status) = &self.status {
                    Line::from(status.as_str()).render(msg1_area, buf);
                }
            }
            Phase::Cooldown { winner, .. } => {
                let verdict = match winner {
                    Some(player) => format!(" — {} WINS! —", player.display_name()),
                    None => String::from(" — DRAW —"),
                };
                Line::from(verdict).render(msg1_area, buf);
                if self.duel.choices_unlocked(Instant::now()) {
                    Line::from_iter([
                        Span::raw(" Choose One: Rematch ("),
                        Span::styled("r", consts::KEY_STYLE),
                        Span::raw(") — Main Menu ("),
                        Span::styled("m", consts::KEY_STYLE),
                        Span::raw(") — Quit ("),
                        Span::styled("q", consts::KEY_STYLE),
                        Span::raw(")"),
                    ])
                    .render(msg2_area, buf);
                } else {
                    Line::from(" The rematch and menu choices unlock shortly…")
                        .render(msg2_area, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn screen(now: Instant) -> DuelScreen<ChaCha12Rng> {
        let duel = Duel::new_with_rng(
            Options::default(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
            now,
        )
        .expect("default options should be valid");
        DuelScreen::with_duel(duel, Globals::default())
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).expect("cell in range").symbol())
            .collect()
    }

    fn rendered(screen: &DuelScreen<ChaCha12Rng>) -> Buffer {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        screen.render(area, &mut buffer);
        buffer
    }

    #[test]
    fn score_bar_shows_both_players() {
        let screen = screen(Instant::now());
        let buffer = rendered(&screen);
        assert!(row(&buffer, 0).starts_with(" P1: 0    P2: 0"));
    }

    #[test]
    fn countdown_banner_is_shown() {
        let screen = screen(Instant::now());
        let buffer = rendered(&screen);
        assert!(row(&buffer, 22).starts_with(" — GET READY —"));
    }

    #[test]
    fn locked_cooldown_hides_the_choices() {
        let now = Instant::now();
        let mut screen = screen(now);
        screen.duel.phase = Phase::Cooldown {
            unlock_at: now + Duration::from_secs(3600),
            winner: Some(Player::One),
        };
        let buffer = rendered(&screen);
        assert!(row(&buffer, 22).starts_with(" — PLAYER 1 WINS! —"));
        assert!(row(&buffer, 23).starts_with(" The rematch and menu choices unlock"));
    }

    #[test]
    fn unlocked_cooldown_offers_the_choices() {
        let now = Instant::now();
        let mut screen = screen(now);
        screen.duel.phase = Phase::Cooldown {
            unlock_at: now - Duration::from_secs(1),
            winner: None,
        };
        let buffer = rendered(&screen);
        assert!(row(&buffer, 22).starts_with(" — DRAW —"));
        assert!(row(&buffer, 23).starts_with(" Choose One: Rematch (r)"));
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut screen = screen(Instant::now());
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(
            screen.handle_event(&event),
            Some(AppState::Quit)
        ));
    }

    #[test]
    fn menu_choice_respects_the_lockout() {
        let now = Instant::now();
        let mut screen = screen(now);
        screen.duel.phase = Phase::Cooldown {
            unlock_at: now + Duration::from_secs(3600),
            winner: Some(Player::Two),
        };
        let menu_key = Event::Key(KeyCode::Char('m').into());
        assert!(screen.handle_event(&menu_key).is_none());
        screen.duel.phase = Phase::Cooldown {
            unlock_at: now - Duration::from_secs(1),
            winner: Some(Player::Two),
        };
        assert!(matches!(
            screen.handle_event(&menu_key),
            Some(AppState::Menu(_))
        ));
    }

    #[test]
    fn q_only_quits_from_the_verdict_screen() {
        let now = Instant::now();
        let mut screen = screen(now);
        let q = Event::Key(KeyCode::Char('q').into());
        assert!(screen.handle_event(&q).is_none());
        screen.duel.phase = Phase::Cooldown {
            unlock_at: now,
            winner: Some(Player::One),
        };
        assert!(matches!(screen.handle_event(&q), Some(AppState::Quit)));
    }

    #[test]
    fn overdue_ticks_are_capped_and_reanchored() {
        let now = Instant::now();
        let mut screen = screen(now - Duration::from_secs(2));
        // Pretend the loop stalled for a whole second of ticks.
        screen.next_tick = Some(now - Duration::from_secs(1));
        screen.run_due_ticks();
        let next = screen.next_tick.expect("schedule should be re-armed");
        assert!(next > now);
    }
}
