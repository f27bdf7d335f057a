use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use color_eyre::eyre::{Context, Result};
use crossterm::event::MouseEvent;
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc::Sender;
use tracing::{debug, warn};
use tuggest::{
    autocomplete::{AutocompleteOption, MINIMUM_FILTER_LENGTH},
    events::{Key, MessageResponse},
    traits::Component,
};

use super::{builder, catalogue::COUNTRIES, AutocompleteStory};
use crate::storybook::{
    components::ActionLog,
    config::Config,
    story::Story,
    transition::{send_transition, LoadedOptions, StorybookMessage, Transition},
};

const DESCRIPTION: &str = "The host owns fetching: onInputValueChange kicks off a debounced \
    lookup and the answer arrives later as a fresh options list. Answers to stale queries \
    are dropped.";

/// Stands in for a remote search endpoint
fn search_countries(query: &str) -> Vec<AutocompleteOption> {
    if query.chars().count() < MINIMUM_FILTER_LENGTH {
        return vec![];
    }
    let needle = query.to_lowercase();
    COUNTRIES
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .map(|c| AutocompleteOption::from(*c))
        .collect()
}

/// Debounces queries: each keystroke bumps the generation, and a lookup
/// only reports back if no newer keystroke arrived while it slept
fn fetcher(
    tx: Sender<StorybookMessage>,
    latest: Arc<AtomicU64>,
    delay: Duration,
) -> impl FnMut(&str) + Send + 'static {
    move |query| {
        let generation = latest.fetch_add(1, Ordering::SeqCst) + 1;
        let query = query.to_string();
        let tx = tx.clone();
        let latest = latest.clone();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if latest.load(Ordering::SeqCst) != generation {
                debug!(generation, %query, "dropping superseded lookup");
                return;
            }

            let options = search_countries(&query);
            let loaded = LoadedOptions {
                generation,
                query,
                options,
            };
            if let Err(e) = send_transition(tx, Transition::OptionsLoaded(loaded)).await {
                warn!(error = %e, "unable to deliver fetched options");
            }
        });
    }
}

#[derive(Debug)]
pub struct AsyncOptionsStory {
    inner: AutocompleteStory,
    latest: Arc<AtomicU64>,
}

impl AsyncOptionsStory {
    pub fn new(config: &Config, tx: Sender<StorybookMessage>) -> Result<Self> {
        let actions = ActionLog::new(config.theme.footer());
        let latest = Arc::new(AtomicU64::new(0));
        let delay = Duration::from_millis(config.fetch_delay_ms);

        let mut on_input_value_change = fetcher(tx, latest.clone(), delay);
        let mut record_input = actions.recorder("onInputValueChange");

        let autocomplete = builder(config, vec![], &actions)
            .on_input_value_change(move |query| {
                record_input(query);
                on_input_value_change(query);
            })
            // The "server" has already filtered
            .filter_options(|options, _| options.to_vec())
            .max_number_of_options(config.max_number_of_options)
            .attribute("id", "country")
            .attribute("label", "Country")
            .attribute("placeholder", "Search countries…")
            .build()?;

        Ok(Self {
            inner: AutocompleteStory::new(
                "async-options",
                "Async options",
                DESCRIPTION,
                autocomplete,
                actions,
            ),
            latest,
        })
    }

    fn load(&mut self, loaded: LoadedOptions) -> Result<()> {
        if loaded.generation != self.latest.load(Ordering::SeqCst) {
            debug!(generation = loaded.generation, "ignoring stale options");
            return Ok(());
        }

        self.inner.actions().record(
            "optionsLoaded",
            Some(format!("{} for {:?}", loaded.options.len(), loaded.query)),
        );
        self.inner
            .autocomplete_mut()
            .set_options(loaded.options)
            .context("fetched options were invalid")
    }
}

#[async_trait]
impl Story for AsyncOptionsStory {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn title(&self) -> &'static str {
        self.inner.title()
    }

    async fn update(&mut self, message: Key) -> Result<MessageResponse> {
        self.inner.update(message).await
    }

    async fn mouse(&mut self, event: MouseEvent) -> Result<MessageResponse> {
        self.inner.mouse(event).await
    }

    async fn transition(&mut self, transition: Transition) -> Result<MessageResponse> {
        match transition {
            Transition::OptionsLoaded(loaded) => {
                self.load(loaded)?;
                Ok(MessageResponse::Consumed)
            }
            _ => Ok(MessageResponse::NotConsumed),
        }
    }

    async fn set_visible(&mut self) -> Result<()> {
        self.inner.set_visible().await
    }

    async fn set_invisible(&mut self) -> Result<()> {
        self.inner.set_invisible().await
    }
}

impl Component for AsyncOptionsStory {
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) {
        self.inner.draw(f, area)
    }
}
