use crate::config::Theme;
use crate::game::DuelScreen;
use crate::menu::MainMenu;
use crate::options::Options;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Cross-screen state: the validated gameplay rules, the color theme, and
/// whether the terminal reports key releases.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Globals {
    pub(crate) options: Options,
    pub(crate) theme: Theme,
    pub(crate) key_releases: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct App {
    state: AppState,
}

impl App {
    pub(crate) fn new(globals: Globals) -> App {
        let state = AppState::Menu(MainMenu::new(globals));
        App { state }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.state {
            AppState::Menu(ref menu) => {
                terminal.draw(|frame| menu.draw(frame))?;
            }
            AppState::Duel(ref duel) => {
                terminal.draw(|frame| duel.draw(frame))?;
            }
            AppState::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        match self.state {
            AppState::Menu(ref mut menu) => {
                if let Some(state) = menu.process_input()? {
                    self.state = state;
                }
            }
            AppState::Duel(ref mut duel) => {
                if let Some(state) = duel.process_input()? {
                    self.state = state;
                }
            }
            AppState::Quit => (),
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.state, AppState::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum AppState {
    Menu(MainMenu),
    Duel(Box<DuelScreen>),
    Quit,
}
