use crate::app::{App, AppEvent, AppMode};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::{
    input_scroll, render_annotations, render_command_deck, render_header, render_help,
    render_input, render_toggle,
};
use crossterm::event::{self, Event};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Margin},
    widgets::{Block, Borders, Clear},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Rows given to the input box, borders included.
const MIN_INPUT_HEIGHT: u16 = 3;
const MAX_INPUT_HEIGHT: u16 = 10;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Redraw after every input event until the app quits.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let poll_timeout = Duration::from_millis(250);

        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if !event::poll(poll_timeout)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Paste(text) if app.mode() == AppMode::Editing => {
                    app.handle_event(AppEvent::Paste(text))
                }
                Event::Resize(_, _) => {}
                _ => continue,
            }

            self.render_frame(app)?;
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let input_height = (state.input.split('\n').count() as u16 + 2)
                .clamp(MIN_INPUT_HEIGHT, MAX_INPUT_HEIGHT);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5),
                    Constraint::Length(input_height),
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(area.inner(Margin::new(1, 0)));

            frame.render_widget(render_header(), chunks[0]);

            frame.render_widget(
                render_input(&state, chunks[1].width, chunks[1].height),
                chunks[1],
            );

            frame.render_widget(render_toggle(state.layout_mode), chunks[2]);

            let output_block = Block::default().borders(Borders::TOP).title(" Stress ");
            let output_area = output_block.inner(chunks[3]);
            frame.render_widget(output_block, chunks[3]);
            frame.render_widget(
                render_annotations(&state, output_area.width, output_area.height),
                output_area,
            );

            render_command_deck(frame, chunks[4], &state);

            match state.mode {
                AppMode::Editing => {
                    let inner = chunks[1].inner(Margin::new(1, 1));
                    let (row, column) = state.cursor;
                    let (row_offset, column_offset) =
                        input_scroll(state.cursor, inner.width, inner.height);
                    frame.set_cursor_position((
                        inner.x.saturating_add(to_cell(column - column_offset)),
                        inner.y.saturating_add(to_cell(row - row_offset)),
                    ));
                }
                AppMode::Command => {
                    let column = state.mode.label().width() + 1 + state.command_line.width();
                    let right_edge = chunks[4].right().saturating_sub(1);
                    let x = chunks[4].x.saturating_add(1).saturating_add(to_cell(column));
                    frame.set_cursor_position((x.min(right_edge), chunks[4].y));
                }
                AppMode::Help => {
                    let help_area = area.inner(Margin::new(area.width / 4, area.height / 6));
                    frame.render_widget(Clear, help_area);
                    frame.render_widget(render_help(), help_area);
                }
                AppMode::Quit => {}
            }
        })?;

        Ok(())
    }
}

fn to_cell(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
