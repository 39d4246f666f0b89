mod app;
mod command;
mod config;
mod consts;
mod game;
mod menu;
mod options;
mod util;
use crate::app::{App, Globals};
use crate::config::Config;
use anyhow::Context;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Arguments::from_env() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("duelsnake: {e}");
            return ExitCode::from(2);
        }
    };
    let mut globals = match startup(args) {
        Ok(globals) => globals,
        Err(e) => {
            eprintln!("duelsnake: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    globals.key_releases = enable_key_releases();
    let r = App::new(globals).run(terminal);
    disable_key_releases(globals.key_releases);
    ratatui::restore();
    io_exit(r)
}

/// Locate, load, and validate the configuration before any terminal state
/// is touched, so that a bad config is a plain error message rather than a
/// garbled screen.
fn startup(args: Arguments) -> anyhow::Result<Globals> {
    let (path, allow_missing) = match args.config {
        Some(path) => (path, false),
        None => (
            Config::default_path().context("could not locate the configuration file")?,
            true,
        ),
    };
    let config = Config::load(&path, allow_missing)
        .with_context(|| format!("failed to load {}", path.display()))?;
    config
        .options
        .validate()
        .context("invalid gameplay configuration")?;
    Ok(Globals {
        options: config.options,
        theme: config.theme,
        key_releases: false,
    })
}

/// Ask the terminal to report key release events, so that steering keys
/// can be latched precisely instead of through the hold-window heuristic.
fn enable_key_releases() -> bool {
    matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    ) && crossterm::execute!(
        io::stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )
    .is_ok()
}

fn disable_key_releases(enabled: bool) {
    if enabled {
        let _ = crossterm::execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
}

impl Arguments {
    /// Parse the command line.  Returns `None` when the invocation was
    /// fully handled here (`--help`/`--version`).
    fn from_env() -> Result<Option<Arguments>, lexopt::Error> {
        let mut config = None;
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                lexopt::Arg::Short('c') | lexopt::Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                lexopt::Arg::Short('h') | lexopt::Arg::Long("help") => {
                    println!("Usage: duelsnake [-c|--config <PATH>]");
                    println!();
                    println!("Two-player snake duel for the terminal");
                    println!();
                    println!("Options:");
                    println!("  -c, --config <PATH>  Read configuration from <PATH>");
                    println!("  -h, --help           Show this help and exit");
                    println!("  -V, --version        Show the version and exit");
                    return Ok(None);
                }
                lexopt::Arg::Short('V') | lexopt::Arg::Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(Arguments { config }))
    }
}
