//! Terminal event translation

use crossterm::event::{Event, KeyEventKind};
use pipes_engine::PipeEvent;

/// Map a crossterm event onto the engine's event set
///
/// Only key presses count; release and repeat events (reported by terminals
/// with keyboard enhancement) are ignored so one keystroke quits exactly once.
pub fn translate(event: &Event) -> PipeEvent {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => PipeEvent::KeyPress,
        Event::Resize(width, height) => PipeEvent::Resize {
            width: *width,
            height: *height,
        },
        _ => PipeEvent::Other,
    }
}
