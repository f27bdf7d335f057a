use std::fmt::Debug;

use async_trait::async_trait;
use color_eyre::eyre::Result;
use crossterm::event::MouseEvent;
use tuggest::{
    events::{Key, MessageResponse},
    traits::Component,
};

use super::transition::Transition;

/// One demonstration of the autocomplete, shown as a tab in the storybook.
#[async_trait]
pub trait Story: Component + Debug + Send {
    /// Identifier used on the command line (`--story <name>`)
    fn name(&self) -> &'static str;
    fn title(&self) -> &'static str;
    async fn update(&mut self, message: Key) -> Result<MessageResponse>;
    async fn mouse(&mut self, _event: MouseEvent) -> Result<MessageResponse> {
        Ok(MessageResponse::NotConsumed)
    }
    async fn transition(&mut self, _transition: Transition) -> Result<MessageResponse> {
        Ok(MessageResponse::NotConsumed)
    }
    async fn set_visible(&mut self) -> Result<()>;
    async fn set_invisible(&mut self) -> Result<()>;
}
