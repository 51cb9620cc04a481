use crate::app::Message;
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Left clicks become [`Message::Click`]; wheel scrolls the open code view.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollDown => Some(Message::ScrollCode(3)),
        MouseEventKind::ScrollUp => Some(Message::ScrollCode(-3)),
        _ => None,
    }
}
