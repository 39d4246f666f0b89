use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press translated into an application action.
///
/// Steering does not pass through here: the duel screen latches the arrow
/// and letter keys separately so that held keys keep steering between
/// events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Enter,
    Space,
    Home,
    End,
    Next,
    Prev,
    ReadyP1,
    ReadyP2,
    Rematch,
    MainMenu,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Space),
            (_, KeyCode::Home) => Some(Command::Home),
            (_, KeyCode::End) => Some(Command::End),
            (_, KeyCode::Tab) => Some(Command::Next),
            (_, KeyCode::BackTab) => Some(Command::Prev),
            (KeyModifiers::NONE, KeyCode::Char('1')) => Some(Command::ReadyP1),
            (KeyModifiers::NONE, KeyCode::Char('2')) => Some(Command::ReadyP2),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Rematch),
            (KeyModifiers::NONE, KeyCode::Char('m')) => Some(Command::MainMenu),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            _ => None,
        }
    }
}
