use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use pullreveal_core::Direction;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    /// Reveal a region programmatically
    StartLoading(Direction),
    /// End the episode (animated or instant)
    StopLoading { animate: bool },
    /// Open or close a region's gate by hand
    ToggleGate(Direction),
    /// Scroll the inner list by rows without a gesture
    ScrollRows(i32),
    PointerDown(u16),
    PointerDrag(u16),
    PointerUp,
    /// Wheel notch; positive moves content toward the bottom
    Wheel(i32),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::StartLoading(Direction::Top),
        (KeyCode::Char('b'), KeyModifiers::NONE) => Action::StartLoading(Direction::Bottom),
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::StopLoading { animate: true },
        (KeyCode::Char('S'), _) => Action::StopLoading { animate: false },

        (KeyCode::Char('T'), _) => Action::ToggleGate(Direction::Top),
        (KeyCode::Char('B'), _) => Action::ToggleGate(Direction::Bottom),

        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollRows(1),
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollRows(-1),

        _ => Action::None,
    }
}

/// Map mouse input to pointer and wheel actions
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown(mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerDrag(mouse.row),
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp,
        MouseEventKind::ScrollDown => Action::Wheel(1),
        MouseEventKind::ScrollUp => Action::Wheel(-1),
        _ => Action::None,
    }
}
