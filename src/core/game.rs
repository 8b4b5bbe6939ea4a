/// Core game interface driven by the terminal engine
use crossterm::event::KeyEvent;

/// What the engine should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Main game trait: a game owns its state, reacts to keys, and draws itself
pub trait Game {
    /// Apply one key press
    fn handle_input(&mut self, event: KeyEvent) -> Control;

    /// Render the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);
}
