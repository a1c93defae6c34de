//! Command parsing for the TUI command deck
//!
//! The deck opens with Esc while editing and supports:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:a` or `:align` → toggle word/line alignment
//! - `:c` or `:clear` → empty the input buffer
//! - `@path` → replace the input with a text file
//! - `@@` → replace the input with the clipboard

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    ToggleAlignment,
    Clear,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd.trim() {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "a" | "align" => Command::ToggleAlignment,
            "c" | "clear" => Command::Clear,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::ToggleAlignment => AppEvent::ToggleAlignment,
        Command::Clear => AppEvent::ClearInput,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
