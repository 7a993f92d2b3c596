/// Backend-neutral key event; the binary converts crossterm events into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppKeyEvent {
    pub code: AppKeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKeyCode {
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Delete,
    Home,
    End,
    Esc,
    Other,
}

impl AppKeyEvent {
    pub fn plain(code: AppKeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn char(c: char) -> Self {
        Self::plain(AppKeyCode::Char(c))
    }

    pub fn is_ctrl_c(&self) -> bool {
        self.ctrl && matches!(self.code, AppKeyCode::Char('c') | AppKeyCode::Char('C'))
    }
}
