/// Top-level interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Typing into the input buffer.
    #[default]
    Editing,
    /// Typing into the command deck.
    Command,
    Help,
    Quit,
}

impl AppMode {
    pub fn label(self) -> &'static str {
        match self {
            AppMode::Editing => " EDIT ",
            AppMode::Command => " COMMAND ",
            AppMode::Help => " HELP ",
            AppMode::Quit => " QUIT ",
        }
    }
}
