use std::sync::Arc;

use color_eyre::eyre::{bail, Context, Result};
use crossterm::event::MouseEvent;
use itertools::Itertools;
use ratatui::{
    layout::{Margin, Rect},
    widgets::{Block, BorderType},
    Frame,
};
use tokio::sync::mpsc::Sender;
use tracing::info;
use tuggest::{
    events::{Key, MessageResponse},
    traits::Component,
};

use super::{
    config::Config,
    stories,
    story::Story,
    transition::{StorybookMessage, Transition},
};

/// Owns every story and tracks which one is on screen.
#[derive(Debug)]
pub struct StoryManager {
    stories: Vec<Box<dyn Story>>,
    current: usize,
}

impl StoryManager {
    pub async fn new(
        config: Arc<Config>,
        tx: Sender<StorybookMessage>,
        initial: Option<&str>,
    ) -> Result<Self> {
        let stories = stories::all(config, tx).context("unable to create stories")?;
        Self::with_stories(stories, initial).await
    }

    pub async fn with_stories(stories: Vec<Box<dyn Story>>, initial: Option<&str>) -> Result<Self> {
        if stories.is_empty() {
            bail!("storybook has no stories");
        }

        let current = match initial {
            None => 0,
            Some(name) => match stories.iter().position(|s| s.name() == name) {
                Some(idx) => idx,
                None => bail!(
                    "unknown story {name:?}, expected one of: {}",
                    stories.iter().map(|s| s.name()).join(", ")
                ),
            },
        };

        let mut manager = Self { stories, current };
        manager
            .current_story()
            .set_visible()
            .await
            .context("unable to show first story")?;
        Ok(manager)
    }

    fn current_story(&mut self) -> &mut Box<dyn Story> {
        &mut self.stories[self.current]
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.stories.iter().map(|s| s.title()).collect()
    }

    pub async fn update(&mut self, message: Key) -> Result<MessageResponse> {
        self.current_story().update(message).await
    }

    pub async fn mouse(&mut self, event: MouseEvent) -> Result<MessageResponse> {
        self.current_story().mouse(event).await
    }

    pub async fn transition(&mut self, transition: Transition) -> Result<MessageResponse> {
        let n_stories = self.stories.len();
        match transition {
            Transition::NextStory => self.show((self.current + 1) % n_stories).await?,
            Transition::PreviousStory => self.show((self.current + n_stories - 1) % n_stories).await?,
            // Fetched options only concern the story waiting on them, which
            // may no longer be on screen
            Transition::OptionsLoaded(_) => {
                for story in self.stories.iter_mut() {
                    if story.transition(transition.clone()).await?.is_consumed() {
                        return Ok(MessageResponse::Consumed);
                    }
                }
                return Ok(MessageResponse::NotConsumed);
            }
            Transition::Quit => return Ok(MessageResponse::NotConsumed),
        }
        Ok(MessageResponse::Consumed)
    }

    async fn show(&mut self, idx: usize) -> Result<()> {
        self.current_story()
            .set_invisible()
            .await
            .context("unable to hide story")?;
        self.current = idx;
        info!(story = self.current_story().name(), "switched story");
        self.current_story()
            .set_visible()
            .await
            .context("unable to show story")
    }
}

impl Component for StoryManager {
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::bordered().border_type(BorderType::Rounded);
        f.render_widget(block, area);

        let body_inner = area.inner(Margin::new(2, 1));
        self.current_story().draw(f, body_inner);
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    async fn manager(initial: Option<&str>) -> Result<StoryManager> {
        let (tx, _rx) = mpsc::channel(8);
        StoryManager::new(Arc::new(Config::default()), tx, initial).await
    }

    #[tokio::test]
    async fn test_starts_on_requested_story() {
        let manager = manager(Some("rich-options")).await.unwrap();
        assert_eq!(manager.titles()[manager.current()], "Rich options");
    }

    #[tokio::test]
    async fn test_unknown_story_is_an_error() {
        let err = manager(Some("nope")).await.unwrap_err();
        assert!(format!("{err}").contains("basic"));
    }

    #[tokio::test]
    async fn test_next_and_previous_wrap() {
        let mut manager = manager(None).await.unwrap();
        let n = manager.titles().len();

        manager.transition(Transition::PreviousStory).await.unwrap();
        assert_eq!(manager.current(), n - 1);
        manager.transition(Transition::NextStory).await.unwrap();
        assert_eq!(manager.current(), 0);
    }

    #[tokio::test]
    async fn test_only_visible_story_has_focus() {
        let mut manager = manager(None).await.unwrap();
        assert!(manager.update(Key::Char('a')).await.unwrap().is_consumed());

        manager.transition(Transition::NextStory).await.unwrap();
        manager.transition(Transition::PreviousStory).await.unwrap();
        // Focus came back along with the story
        assert!(manager.update(Key::Char('b')).await.unwrap().is_consumed());
    }
}
