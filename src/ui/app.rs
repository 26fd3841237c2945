//! Main TUI application state and logic

use crate::animation::ShapeAnimation;
use crate::config::Config;
use crate::form::{format_measure, is_numeric_input, ShapeForm};
use crate::geometry::{Field, ShapeKind};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Run `body`, then `restore` whether or not `body` failed.
///
/// An error from `body` is returned in preference to one from `restore`.
pub fn run_restoring<T, E: From<io::Error>>(
    body: impl FnOnce() -> Result<T, E>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T, E> {
    let res = body();
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

/// Which form control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Selector,
    /// Index into the current kind's fields
    Input(usize),
    Button,
}

impl Focus {
    /// Move focus down the form: selector -> inputs -> button -> selector
    pub fn next(self, field_count: usize) -> Self {
        match self {
            Focus::Selector if field_count > 0 => Focus::Input(0),
            Focus::Selector => Focus::Button,
            Focus::Input(i) if i + 1 < field_count => Focus::Input(i + 1),
            Focus::Input(_) => Focus::Button,
            Focus::Button => Focus::Selector,
        }
    }

    /// Move focus up the form
    pub fn prev(self, field_count: usize) -> Self {
        match self {
            Focus::Selector => Focus::Button,
            Focus::Input(0) => Focus::Selector,
            Focus::Input(i) => Focus::Input(i - 1),
            Focus::Button if field_count > 0 => Focus::Input(field_count - 1),
            Focus::Button => Focus::Selector,
        }
    }
}

/// The main application state
pub struct App {
    /// Entered dimensions and last result
    pub form: ShapeForm,

    /// Visual representation of the current shape
    pub animation: ShapeAnimation,

    pub focus: Focus,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    tick_rate: Duration,
    last_tick: Instant,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let kind = config.initial_shape;
        App {
            form: ShapeForm::new(kind),
            animation: ShapeAnimation::new(kind),
            focus: Focus::Selector,
            should_quit: false,
            status_message: String::from("Ready!"),
            tick_rate: config.tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(shape = %self.form.kind(), "starting interactive session");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Wake up at least once per tick so the animation keeps moving
            let timeout = self.tick_rate.saturating_sub(self.last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            let elapsed = self.last_tick.elapsed();
            if elapsed >= self.tick_rate {
                self.animation.tick(elapsed);
                self.last_tick = Instant::now();
            }
        }
        info!("interactive session ended");

        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Title on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[1]);

        // Right column: Visualization (top) | Results (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(columns[1]);

        super::panes::render_title(frame, main_chunks[0]);
        super::panes::render_form_pane(frame, columns[0], &self.form, self.focus);
        super::panes::render_visual_pane(frame, right_rows[0], &self.animation);
        super::panes::render_results_pane(frame, right_rows[1], self.form.result());
        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.form.kind(),
            self.form.is_calculated(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let field_count = self.form.kind().fields().len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next(field_count);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev(field_count);
            }
            KeyCode::Left if self.focus == Focus::Selector => {
                self.select_kind(self.form.kind().prev());
            }
            KeyCode::Right if self.focus == Focus::Selector => {
                self.select_kind(self.form.kind().next());
            }
            KeyCode::Enter => self.calculate(),
            KeyCode::Char(' ') if self.focus == Focus::Button => self.calculate(),
            KeyCode::Char(c) if is_numeric_input(c) => {
                if let Some(field) = self.focused_field() {
                    self.form.push_char(field, c);
                    self.sync_animation();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field() {
                    self.form.pop_char(field);
                    self.sync_animation();
                }
            }
            _ => {}
        }
    }

    /// Field under the cursor, if an input is focused
    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Input(i) => self.form.kind().fields().get(i).copied(),
            _ => None,
        }
    }

    fn select_kind(&mut self, kind: ShapeKind) {
        self.form.select_kind(kind);
        self.sync_animation();
        self.status_message = format!("Selected {}", kind);
    }

    fn calculate(&mut self) {
        let result = self.form.calculate();
        self.sync_animation();
        self.status_message = format!(
            "Area {} | Perimeter {}",
            format_measure(result.area),
            format_measure(result.perimeter)
        );
    }

    fn sync_animation(&mut self) {
        self.animation.retarget(
            self.form.kind(),
            self.form.dimensions(),
            self.form.is_calculated(),
        );
    }
}
