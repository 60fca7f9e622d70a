/// Actions that the TUI can process, mapped from keyboard input or internal events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Enter: start, open, choose, analyze.
    Confirm,
    /// Esc: close the picker or the newest notification.
    Back,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoTop,
    GoBottom,
    OpenPicker,
    RemoveFile,
    /// Text pasted into the terminal, which is how a dragged file arrives.
    Paste(String),
    ShowExample,
    Restart,
    DownloadReport,
    ToggleHelp,
    Tick,
    Resize(u16, u16),
    None,
}
