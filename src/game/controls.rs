use super::duel::Steering;
use super::snake::Turn;
use crate::consts;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use enum_map::{Enum, EnumMap};
use std::time::Instant;

/// The four logical steering controls.
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Control {
    P1Left,
    P1Right,
    P2Left,
    P2Right,
}

impl Control {
    fn from_key(code: KeyCode) -> Option<Control> {
        match code {
            KeyCode::Left => Some(Control::P1Left),
            KeyCode::Right => Some(Control::P1Right),
            KeyCode::Char('a' | 'A') => Some(Control::P2Left),
            KeyCode::Char('d' | 'D') => Some(Control::P2Right),
            _ => None,
        }
    }
}

/// Latched down/up state of one control.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum KeyState {
    #[default]
    Up,

    /// Down until a release event arrives (terminals that report releases)
    Held,

    /// Down until the hold window lapses; terminal key repeat keeps
    /// pushing the deadline out while the key is physically held
    HeldUntil(Instant),
}

/// Latched state of the steering controls, sampled once per tick.
///
/// The simulation never sees raw terminal events; it reads a [`Steering`]
/// snapshot off this board.  Terminals that support the keyboard
/// enhancement protocol report real key releases; everywhere else a
/// control stays down for a hold window after its last press.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ControlBoard {
    keys: EnumMap<Control, KeyState>,
    releases_reported: bool,
}

impl ControlBoard {
    pub(crate) fn new(releases_reported: bool) -> ControlBoard {
        ControlBoard {
            keys: EnumMap::default(),
            releases_reported,
        }
    }

    /// Feed a terminal event into the latch.  Events that are not steering
    /// keys are ignored.
    pub(crate) fn handle_event(&mut self, event: &Event, now: Instant) {
        let Event::Key(key) = event else {
            return;
        };
        let Some(control) = Control::from_key(key.code) else {
            return;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.keys[control] = if self.releases_reported {
                    KeyState::Held
                } else {
                    KeyState::HeldUntil(now + consts::KEY_HOLD_WINDOW)
                };
            }
            KeyEventKind::Release => self.keys[control] = KeyState::Up,
        }
    }

    /// Snapshot the latched state as per-player steering.  Left is checked
    /// before right, so holding both keys steers left.
    pub(crate) fn steering(&self, now: Instant) -> Steering {
        Steering {
            p1: self.turn(Control::P1Left, Control::P1Right, now),
            p2: self.turn(Control::P2Left, Control::P2Right, now),
        }
    }

    fn turn(&self, left: Control, right: Control, now: Instant) -> Turn {
        if self.is_down(left, now) {
            Turn::Left
        } else if self.is_down(right, now) {
            Turn::Right
        } else {
            Turn::Straight
        }
    }

    fn is_down(&self, control: Control, now: Instant) -> bool {
        match self.keys[control] {
            KeyState::Up => false,
            KeyState::Held => true,
            KeyState::HeldUntil(until) => now < until,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::time::Duration;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn release(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ))
    }

    #[test]
    fn idle_board_steers_straight() {
        let board = ControlBoard::new(false);
        let now = Instant::now();
        assert_eq!(board.steering(now), Steering::default());
    }

    #[test]
    fn arrows_steer_player_one() {
        let mut board = ControlBoard::new(false);
        let now = Instant::now();
        board.handle_event(&press(KeyCode::Left), now);
        let steering = board.steering(now);
        assert_eq!(steering.p1, Turn::Left);
        assert_eq!(steering.p2, Turn::Straight);
    }

    #[test]
    fn letters_steer_player_two() {
        let mut board = ControlBoard::new(false);
        let now = Instant::now();
        board.handle_event(&press(KeyCode::Char('d')), now);
        let steering = board.steering(now);
        assert_eq!(steering.p1, Turn::Straight);
        assert_eq!(steering.p2, Turn::Right);
    }

    #[test]
    fn both_keys_held_steers_left() {
        let mut board = ControlBoard::new(false);
        let now = Instant::now();
        board.handle_event(&press(KeyCode::Left), now);
        board.handle_event(&press(KeyCode::Right), now);
        assert_eq!(board.steering(now).p1, Turn::Left);
    }

    #[test]
    fn hold_window_lapses_without_releases() {
        let mut board = ControlBoard::new(false);
        let now = Instant::now();
        board.handle_event(&press(KeyCode::Char('a')), now);
        assert_eq!(board.steering(now).p2, Turn::Left);
        let later = now + consts::KEY_HOLD_WINDOW - Duration::from_millis(1);
        assert_eq!(board.steering(later).p2, Turn::Left);
        assert_eq!(board.steering(now + consts::KEY_HOLD_WINDOW).p2, Turn::Straight);
    }

    #[test]
    fn repeat_refreshes_the_hold_window() {
        let mut board = ControlBoard::new(false);
        let now = Instant::now();
        board.handle_event(&press(KeyCode::Char('a')), now);
        let repeat_at = now + Duration::from_millis(500);
        board.handle_event(&press(KeyCode::Char('a')), repeat_at);
        let past_first_window = now + consts::KEY_HOLD_WINDOW + Duration::from_millis(100);
        assert_eq!(board.steering(past_first_window).p2, Turn::Left);
    }

    #[test]
    fn release_clears_immediately_when_reported() {
        let mut board = ControlBoard::new(true);
        let now = Instant::now();
        board.handle_event(&press(KeyCode::Right), now);
        assert_eq!(board.steering(now + consts::KEY_HOLD_WINDOW * 4).p1, Turn::Right);
        board.handle_event(&release(KeyCode::Right), now);
        assert_eq!(board.steering(now).p1, Turn::Straight);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut board = ControlBoard::new(false);
        let now = Instant::now();
        board.handle_event(&press(KeyCode::Char('x')), now);
        board.handle_event(&press(KeyCode::Enter), now);
        assert_eq!(board.steering(now), Steering::default());
    }
}
