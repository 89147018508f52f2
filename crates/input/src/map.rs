//! Key mapping from terminal events to moves.

use crate::types::Direction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the host loop should do with a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Move(Direction),
    Quit,
    /// Terminal size changed; force a full redraw.
    Resize,
}

/// Map a key to a move (arrows, WASD, hjkl).
pub fn direction_for_key(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Direction::Down),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Translate a raw terminal event. Unmapped keys yield `None`.
pub fn translate_event(event: &Event) -> Option<HostEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(*key) {
                Some(HostEvent::Quit)
            } else {
                direction_for_key(*key).map(HostEvent::Move)
            }
        }
        Event::Resize(_, _) => Some(HostEvent::Resize),
        _ => None,
    }
}
