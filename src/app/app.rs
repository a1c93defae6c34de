use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{RenderState, StatusMessage};
use super::state::InputBuffer;
use crate::annotate::{annotate, AnnotatedLine, LayoutMode};
use crate::input::{clipboard, file, LoadError, LoadedText};
use crate::stress::StressTable;
use crate::ui::command::{command_to_app_event, parse_command};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub struct App {
    mode: AppMode,
    input: InputBuffer,
    table: StressTable,
    layout_mode: LayoutMode,
    command_line: String,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(table: StressTable, layout_mode: LayoutMode) -> Self {
        Self {
            mode: AppMode::Editing,
            input: InputBuffer::new(),
            table,
            layout_mode,
            command_line: String::new(),
            status: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Resolve the current input from scratch.
    pub fn annotations(&self) -> Vec<AnnotatedLine> {
        annotate(self.input.text(), &self.table)
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => {
                let result = file::load_text(&path);
                self.apply_loaded(result);
            }
            AppEvent::LoadClipboard => {
                let result = clipboard::load();
                self.apply_loaded(result);
            }
            AppEvent::Paste(text) => {
                self.input.insert_str(&normalize_newlines(&text));
                self.status = None;
            }
            AppEvent::ToggleAlignment => {
                self.layout_mode = self.layout_mode.toggled();
                log::debug!("layout mode now {:?}", self.layout_mode);
            }
            AppEvent::ClearInput => {
                self.input.clear();
                self.status = None;
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => {
                self.mode = AppMode::Help;
            }
            AppEvent::Warning(message) => {
                log::warn!("{}", message);
                self.status = Some(StatusMessage::Warning(message));
            }
            AppEvent::InvalidCommand(input) => {
                self.handle_event(AppEvent::Warning(format!("Unknown command: {}", input)));
            }
            AppEvent::None => {}
        }
    }

    fn apply_loaded(&mut self, result: Result<LoadedText, LoadError>) {
        match result {
            Ok(loaded) => {
                self.input = InputBuffer::from_text(&normalize_newlines(&loaded.text));
                self.status = Some(StatusMessage::Info(format!("Loaded {}", loaded.source)));
            }
            Err(e) => self.handle_event(AppEvent::Warning(e.to_string())),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if is_ctrl(&key) && key.code == KeyCode::Char('c') {
            self.handle_event(AppEvent::Quit);
            return;
        }

        match self.mode {
            AppMode::Editing => self.handle_editing_key(key),
            AppMode::Command => self.handle_command_key(key),
            AppMode::Help => self.mode = AppMode::Editing,
            AppMode::Quit => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        if is_ctrl(&key) {
            match key.code {
                KeyCode::Char('t') => self.handle_event(AppEvent::ToggleAlignment),
                KeyCode::Char('v') => match clipboard::load() {
                    Ok(loaded) => self.handle_event(AppEvent::Paste(loaded.text)),
                    Err(e) => self.handle_event(AppEvent::Warning(e.to_string())),
                },
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.input.insert_char(c);
                self.status = None;
            }
            KeyCode::Enter => self.input.insert_char('\n'),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Up => self.input.move_up(),
            KeyCode::Down => self.input.move_down(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Esc => {
                self.command_line.clear();
                self.mode = AppMode::Command;
            }
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.command_line.push(c),
            KeyCode::Backspace => {
                self.command_line.pop();
            }
            KeyCode::Esc => {
                self.command_line.clear();
                self.mode = AppMode::Editing;
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.command_line);
                self.mode = AppMode::Editing;
                let event = command_to_app_event(parse_command(&line));
                self.handle_event(event);
            }
            _ => {}
        }
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            layout_mode: self.layout_mode,
            lines: self.annotations(),
            input: self.input.text().to_string(),
            cursor: self.input.cursor_position(),
            command_line: self.command_line.clone(),
            status: self.status.clone(),
        }
    }
}

/// Terminals send `\r` for newlines inside bracketed paste, and Windows
/// files carry `\r\n`; the buffer only ever holds `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Ctrl without Alt; AltGr arrives as Ctrl+Alt on some platforms and must
/// still type characters such as a backslash.
fn is_ctrl(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}
