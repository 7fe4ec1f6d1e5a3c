//! TUI rendering and terminal management (impure shell).
//!
//! Everything under this module either draws ratatui widgets from a
//! [`ViewerState`] or owns the terminal lifecycle. The single impure piece
//! is [`TuiApp`]: raw mode, alternate screen, and the blocking event loop.
//! One event is processed to completion and followed by one full redraw;
//! there are no timers and no partial updates.

pub mod constants;
mod footer;
mod header;
mod help;
mod list;
pub mod styles;

pub use list::build_list_lines;

use crate::config::KeyBindings;
use crate::state::{Outcome, ViewerState};
use constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use tracing::info;

/// Render one full frame from the viewer state.
///
/// Pure function of the state: header, list pane, footer, and the help
/// overlay on top when open.
pub fn render(frame: &mut Frame, state: &ViewerState) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(frame.area());

    header::render(frame, chunks[0], state);
    list::render(frame, chunks[1], state);
    footer::render(frame, chunks[2], state);

    if state.show_help() {
        help::render(frame);
    }
}

/// The running TUI application.
///
/// Generic over the backend so tests can drive it against
/// `ratatui::backend::TestBackend`.
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    state: ViewerState,
    bindings: KeyBindings,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Enter raw mode and the alternate screen, and size the state to the
    /// real terminal.
    pub fn new(mut state: ViewerState) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        if let Ok(size) = terminal.size() {
            state.resize(size.width, size.height);
        }

        Ok(Self {
            terminal,
            state,
            bindings: KeyBindings::default(),
        })
    }

    /// Run the blocking event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = self.bindings.get(key) {
                        if self.state.apply(action, Instant::now()) == Outcome::Quit {
                            info!("quit requested");
                            return Ok(());
                        }
                        self.draw()?;
                    }
                }
                Event::Resize(width, height) => {
                    self.state.resize(width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build an app over an arbitrary backend (used with `TestBackend`).
    pub fn with_backend(backend: B, state: ViewerState) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            state,
            bindings: KeyBindings::default(),
        })
    }

    /// Draw one frame.
    pub fn draw(&mut self) -> io::Result<()> {
        let Self {
            terminal, state, ..
        } = self;
        terminal.draw(|frame| render(frame, state))?;
        Ok(())
    }

    /// Read access to the viewer state.
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Mutable access to the viewer state.
    pub fn state_mut(&mut self) -> &mut ViewerState {
        &mut self.state
    }

    /// The terminal, for buffer inspection in tests.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Run the viewer to completion, restoring the terminal on the way out.
pub fn run(state: ViewerState) -> io::Result<()> {
    let mut app = match TuiApp::new(state) {
        Ok(app) => app,
        Err(err) => {
            restore_terminal();
            return Err(err);
        }
    };
    let result = app.run();
    restore_terminal();
    result
}

/// Leave the alternate screen and raw mode. Best effort: failures here are
/// ignored because the process is exiting anyway.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}
