use crossterm::event::MouseEvent;

/// Everything that flows through the host's event loop: ticks, user input,
/// and transitions emitted by components for the host to act upon.
#[derive(Debug, Clone)]
pub enum Message<I, T> {
    Tick,
    Input(I),
    Mouse(MouseEvent),
    Transition(T),
}

/// Whether a component handled an input, or whether it should bubble up
/// to its parent.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum MessageResponse {
    Consumed,
    NotConsumed,
}

impl MessageResponse {
    pub fn is_consumed(&self) -> bool {
        *self == Self::Consumed
    }
}
