/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    /// Text pasted into the terminal, inserted at the cursor.
    Paste(String),
    ToggleAlignment,
    ClearInput,
    Quit,
    Help,
    Warning(String),
    InvalidCommand(String),
    None,
}
