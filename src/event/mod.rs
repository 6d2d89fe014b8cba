//! Application events

pub mod input;

/// Events the main loop reacts to
///
/// The autoload tick is not an event; it is the timeout arm of the main
/// loop's select.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(crossterm::event::KeyEvent),
    /// Mouse input (backdrop clicks close dialogs)
    Mouse(crossterm::event::MouseEvent),
}
