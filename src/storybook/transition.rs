use color_eyre::eyre::{Context, Result};
use tokio::sync::mpsc::Sender;
use tuggest::{
    autocomplete::AutocompleteOption,
    events::{Key, Message},
};

/// A transition is a type of event that flows "in reverse" when compared
/// with input events.  A transition can be emitted from a component or a
/// background task, and is then handled at a higher level (the app or the
/// story manager)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Quit,
    NextStory,
    PreviousStory,
    OptionsLoaded(LoadedOptions),
}

/// Suggestions "fetched" for one keystroke; `generation` lets the story
/// drop answers to questions it has stopped asking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedOptions {
    pub generation: u64,
    pub query: String,
    pub options: Vec<AutocompleteOption>,
}

pub type StorybookMessage = Message<Key, Transition>;

pub async fn send_transition(tx: Sender<StorybookMessage>, transition: Transition) -> Result<()> {
    tx.send(Message::Transition(transition))
        .await
        .context("unable to send transition")?;
    Ok(())
}
