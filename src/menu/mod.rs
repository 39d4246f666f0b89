mod widgets;
use self::widgets::{Instructions, Logo};
use crate::app::{AppState, Globals};
use crate::command::Command;
use crate::consts;
use crate::game::duel::Player;
use crate::game::DuelScreen;
use crate::util::{get_display_area, EnumExt};
use crossterm::event::{read, Event};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};
use std::time::Instant;

/// The main menu, doubling as the idle state of the match cycle: both
/// players toggle their readiness here, and the moment both are ready an
/// armed duel replaces the menu.  Returning to the menu always resets both
/// readiness flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct MainMenu {
    globals: Globals,
    selection: Selection,
    p1_ready: bool,
    p2_ready: bool,
}

impl MainMenu {
    pub(crate) fn new(globals: Globals) -> MainMenu {
        MainMenu {
            globals,
            selection: Selection::default(),
            p1_ready: false,
            p2_ready: false,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<AppState>> {
        let event = read()?;
        Ok(self.handle_event(&event))
    }

    fn handle_event(&mut self, event: &Event) -> Option<AppState> {
        match (
            self.selection,
            Command::from_key_event(event.as_key_press_event()?)?,
        ) {
            (_, Command::Quit | Command::Q) => return Some(AppState::Quit),
            (_, Command::ReadyP1) => return self.toggle(Player::One),
            (_, Command::ReadyP2) => return self.toggle(Player::Two),
            (_, Command::Home) => self.selection = Selection::min(),
            (_, Command::End) => self.selection = Selection::max(),
            (sel, Command::Up) => self.selection = sel.prev().unwrap_or(sel),
            (sel, Command::Down) => self.selection = sel.next().unwrap_or(sel),
            (sel, Command::Next) => self.selection = sel.next().unwrap_or_else(Selection::min),
            (sel, Command::Prev) => self.selection = sel.prev().unwrap_or_else(Selection::max),
            (Selection::P1Ready, Command::Enter | Command::Space) => {
                return self.toggle(Player::One)
            }
            (Selection::P2Ready, Command::Enter | Command::Space) => {
                return self.toggle(Player::Two)
            }
            (Selection::QuitButton, Command::Enter) => return Some(AppState::Quit),
            _ => (),
        }
        None
    }

    /// Flip one player's readiness.  When this arms the second player, the
    /// match starts: an armed duel (in its countdown beat) takes over the
    /// screen.
    fn toggle(&mut self, player: Player) -> Option<AppState> {
        match player {
            Player::One => self.p1_ready = !self.p1_ready,
            Player::Two => self.p2_ready = !self.p2_ready,
        }
        (self.p1_ready && self.p2_ready).then(|| {
            AppState::Duel(Box::new(DuelScreen::new(self.globals, Instant::now())))
        })
    }

    fn ready_line(&self, player: Player, ready: bool, selection: Selection) -> Line<'static> {
        let style = if self.selection == selection {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        let (label, key) = match player {
            Player::One => ("Player 1 (", "1"),
            Player::Two => ("Player 2 (", "2"),
        };
        let mark = if ready { "✓" } else { " " };
        Line::from_iter([
            Span::styled(label, style),
            Span::styled(key, consts::KEY_STYLE.patch(style)),
            Span::styled(format!(") [{mark}]"), style),
        ])
        .centered()
    }
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, p1_area, p2_area, quit_area] =
            Layout::vertical([Logo::HEIGHT, Instructions::HEIGHT, 1, 1, 1])
                .flex(Flex::Start)
                .spacing(1)
                .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo {
            theme: self.globals.theme,
        }
        .render(logo_area, buf);

        let [instructions_area] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions_area);
        Instructions.render(instructions_area, buf);

        self.ready_line(Player::One, self.p1_ready, Selection::P1Ready)
            .render(p1_area, buf);
        self.ready_line(Player::Two, self.p2_ready, Selection::P2Ready)
            .render(p2_area, buf);

        let qstyle = if self.selection == Selection::QuitButton {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from_iter([
            Span::styled("[Quit (", qstyle),
            Span::styled("q", consts::KEY_STYLE.patch(qstyle)),
            Span::styled(")]", qstyle),
        ])
        .centered()
        .render(quit_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Default, Enum, Eq, PartialEq)]
enum Selection {
    #[default]
    P1Ready,
    P2Ready,
    QuitButton,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    fn padded<const N: usize>(lines: [&str; N]) -> Buffer {
        Buffer::with_lines(lines.map(|ln| format!("{ln:<80}")))
    }

    #[rustfmt::skip]
    fn expected_menu(p1_mark: &str, p2_mark: &str) -> Buffer {
        let p1_line = format!("                                Player 1 (1) [{p1_mark}]");
        let p2_line = format!("                                Player 2 (2) [{p2_mark}]");
        padded([
             "               ____                _   ____              _",
            r"              |  _ \  _   _   ___ | | / ___| _ __   __ _| | _____",
            r"              | | | || | | | / _ \| | \___ \| '_ \ / _` | |/ / _ \",
             "              | |_| || |_| ||  __/| |  ___) | | | | (_| |   <  __/",
            r"              |____/  \__,_| \___||_| |____/|_| |_|\__,_|_|\_\___|",
             "",
             "                              ⚬⚬⚬⚬⚬⚬⚬>  ●  <⚬⚬⚬⚬⚬⚬",
             "",
             "                            Player 1 steers with ← →",
             "                            Player 2 steers with a d",
             "                            Ready up with 1 and 2!",
             "",
             p1_line.as_str(),
             "",
             p2_line.as_str(),
             "",
             "                                   [Quit (q)]",
             "",
             "",
             "",
             "",
             "",
             "",
             "",
        ])
    }

    fn base_styles(expected: &mut Buffer) {
        expected.set_style(Rect::new(14, 0, 24, 5), consts::P1_STYLE);
        expected.set_style(Rect::new(38, 0, 28, 5), consts::P2_STYLE);
        expected.set_style(Rect::new(30, 6, 8, 1), consts::P1_STYLE);
        expected.set_style(Rect::new(40, 6, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(43, 6, 7, 1), consts::P2_STYLE);
        expected.set_style(Rect::new(49, 8, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(51, 8, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(49, 9, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(51, 9, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(42, 10, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(48, 10, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(42, 12, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(42, 14, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(42, 16, 1, 1), consts::KEY_STYLE);
    }

    #[test]
    fn draw_initial() {
        let menu = MainMenu::new(Globals::default());
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        menu.render(area, &mut buffer);
        let mut expected = expected_menu(" ", " ");
        base_styles(&mut expected);
        expected.set_style(Rect::new(32, 12, 16, 1), consts::MENU_SELECTION_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn toggling_readiness_shows_a_mark() {
        let mut menu = MainMenu::new(Globals::default());
        assert!(menu.handle_event(&key(KeyCode::Char('1'))).is_none());
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        menu.render(area, &mut buffer);
        let mut expected = expected_menu("✓", " ");
        base_styles(&mut expected);
        expected.set_style(Rect::new(32, 12, 16, 1), consts::MENU_SELECTION_STYLE);
        assert_eq!(buffer, expected);

        // Toggling again clears it.
        assert!(menu.handle_event(&key(KeyCode::Char('1'))).is_none());
        assert!(!menu.p1_ready);
    }

    #[test]
    fn both_ready_starts_the_duel() {
        let mut menu = MainMenu::new(Globals::default());
        assert!(menu.handle_event(&key(KeyCode::Char('2'))).is_none());
        let state = menu.handle_event(&key(KeyCode::Char('1')));
        assert!(matches!(state, Some(AppState::Duel(_))));
    }

    #[test]
    fn enter_toggles_the_selected_player() {
        let mut menu = MainMenu::new(Globals::default());
        assert!(menu.handle_event(&key(KeyCode::Down)).is_none());
        assert!(menu.handle_event(&key(KeyCode::Enter)).is_none());
        assert!(!menu.p1_ready);
        assert!(menu.p2_ready);
    }

    #[test]
    fn quit_button_quits() {
        let mut menu = MainMenu::new(Globals::default());
        assert!(menu.handle_event(&key(KeyCode::End)).is_none());
        assert!(matches!(
            menu.handle_event(&key(KeyCode::Enter)),
            Some(AppState::Quit)
        ));
        assert!(matches!(
            menu.handle_event(&key(KeyCode::Char('q'))),
            Some(AppState::Quit)
        ));
    }

    #[test]
    fn tab_wraps_around() {
        let mut menu = MainMenu::new(Globals::default());
        assert_eq!(menu.selection, Selection::P1Ready);
        for _ in 0..Selection::LENGTH {
            assert!(menu.handle_event(&key(KeyCode::Tab)).is_none());
        }
        assert_eq!(menu.selection, Selection::P1Ready);
    }

    #[test]
    fn fresh_menu_has_no_readiness() {
        let menu = MainMenu::new(Globals::default());
        assert!(!menu.p1_ready);
        assert!(!menu.p2_ready);
    }
}
