use std::fmt::Debug;

use ratatui::{layout::Rect, Frame};

/// Anything which knows how to draw itself into a region of the frame.
///
/// Components own their state between frames; drawing may update
/// render-only bookkeeping (scroll offsets and the like) hence `&mut self`.
pub trait Component: Debug {
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect);
}
