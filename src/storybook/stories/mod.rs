use std::sync::Arc;

use async_trait::async_trait;
use color_eyre::eyre::{Context, Result};
use crossterm::event::MouseEvent;
use ratatui::{
    layout::{Layout, Rect},
    style::{Modifier, Style},
    text::Text,
    widgets::{Paragraph, Wrap},
    Frame,
};
use ratatui_macros::constraints;
use tokio::sync::mpsc::Sender;
use tracing::info;
use tuggest::{
    autocomplete::{Autocomplete, AutocompleteBuilder, AutocompleteOption},
    events::{Key, MessageResponse},
    traits::Component,
};

use super::{components::ActionLog, config::Config, story::Story, transition::StorybookMessage};

mod async_options;
mod basic;
mod catalogue;
mod clear_on_select;
mod custom_filter;
mod default_input;
mod initial_selected;
mod rich_options;

pub use async_options::AsyncOptionsStory;

/// Every story, in the order the tabs show them
pub fn all(config: Arc<Config>, tx: Sender<StorybookMessage>) -> Result<Vec<Box<dyn Story>>> {
    let stories: Vec<Box<dyn Story>> = vec![
        Box::new(basic::story(&config).context("unable to build basic story")?),
        Box::new(clear_on_select::story(&config).context("unable to build clear-on-select story")?),
        Box::new(default_input::story(&config).context("unable to build default-input story")?),
        Box::new(
            initial_selected::story(&config).context("unable to build initial-selected story")?,
        ),
        Box::new(rich_options::story(&config).context("unable to build rich-options story")?),
        Box::new(custom_filter::story(&config).context("unable to build custom-filter story")?),
        Box::new(AsyncOptionsStory::new(&config, tx).context("unable to build async story")?),
    ];
    Ok(stories)
}

/// Builder preloaded with what every story shares: the configured
/// prompt and colours, and `onChange` wired to the actions panel
fn builder(config: &Config, options: Vec<AutocompleteOption>, actions: &ActionLog) -> AutocompleteBuilder {
    Autocomplete::builder(options, actions.recorder("onChange"))
        .prompt(config.prompt.clone())
        .highlight_colour(config.theme.highlight())
}

/// A story made of one autocomplete and the actions panel listing the
/// callbacks it fires.
#[derive(Debug)]
pub struct AutocompleteStory {
    name: &'static str,
    title: &'static str,
    description: &'static str,
    autocomplete: Autocomplete,
    actions: ActionLog,
}

impl AutocompleteStory {
    pub fn new(
        name: &'static str,
        title: &'static str,
        description: &'static str,
        autocomplete: Autocomplete,
        actions: ActionLog,
    ) -> Self {
        Self {
            name,
            title,
            description,
            autocomplete,
            actions,
        }
    }

    pub fn autocomplete(&self) -> &Autocomplete {
        &self.autocomplete
    }

    pub fn autocomplete_mut(&mut self) -> &mut Autocomplete {
        &mut self.autocomplete
    }

    pub fn actions(&self) -> &ActionLog {
        &self.actions
    }
}

#[async_trait]
impl Story for AutocompleteStory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn title(&self) -> &'static str {
        self.title
    }

    async fn update(&mut self, message: Key) -> Result<MessageResponse> {
        self.autocomplete.update(message)
    }

    async fn mouse(&mut self, event: MouseEvent) -> Result<MessageResponse> {
        Ok(self.autocomplete.handle_mouse(event))
    }

    async fn set_visible(&mut self) -> Result<()> {
        info!(story = self.name, "showing story");
        self.autocomplete.focus();
        Ok(())
    }

    async fn set_invisible(&mut self) -> Result<()> {
        self.autocomplete.blur();
        Ok(())
    }
}

impl Component for AutocompleteStory {
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) {
        let [description, body] = Layout::vertical(constraints![==3, *=1]).areas(area);
        let [component, actions] = Layout::horizontal(constraints![==60%, ==40%])
            .spacing(2)
            .areas(body);

        let text = Paragraph::new(Text::styled(
            self.description,
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .wrap(Wrap { trim: true });
        f.render_widget(text, description);

        self.autocomplete.draw(f, component);
        self.actions.draw(f, actions);
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    #[test]
    fn test_story_names_are_unique() {
        let (tx, _rx) = mpsc::channel(1);
        let stories = all(Arc::new(Config::default()), tx).unwrap();
        let mut names: Vec<_> = stories.iter().map(|s| s.name()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[tokio::test]
    async fn test_typing_into_a_story_records_actions() {
        let mut story = basic::story(&Config::default()).unwrap();
        story.set_visible().await.unwrap();
        for c in "an".chars() {
            story.update(Key::Char(c)).await.unwrap();
        }
        story.update(Key::Down).await.unwrap();
        story.update(Key::Enter).await.unwrap();

        let actions = story.actions().actions();
        assert_eq!(actions[0].name, "onChange");
        assert_eq!(actions[0].detail.as_deref(), Some("Banana"));
        assert_eq!(story.autocomplete().input_value(), "Banana");
    }
}
