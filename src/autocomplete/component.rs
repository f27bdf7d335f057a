use std::{collections::BTreeMap, fmt::Debug, sync::Arc};

use color_eyre::eyre::{bail, Result};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Margin, Position, Rect},
    style::Color,
    Frame,
};
use tracing::debug;

use crate::{
    events::{Key, MessageResponse},
    traits::Component,
    widgets::{suggestions, RenderedSuggestion, SuggestionList, TextInput},
};

use super::{
    coordinator::{
        AutocompleteState, Coordinator, Effect, Event, Phase, DEFAULT_MAX_NUMBER_OF_OPTIONS,
    },
    filter::{default_filter_fn, FilterFn},
    option::{normalize_options, AutocompleteOption, NormalizedOption},
};

pub type ChangeHandler = Box<dyn FnMut(&str) + Send>;
pub type InputValueChangeHandler = Box<dyn FnMut(&str) + Send>;
pub type ClearHandler = Box<dyn FnMut() + Send>;

const CLEAR_KEY: Key = Key::Ctrl('u');
const INPUT_HEIGHT: u16 = 3;

const ID_ATTRIBUTE: &str = "id";
const LABEL_ATTRIBUTE: &str = "label";
const PLACEHOLDER_ATTRIBUTE: &str = "placeholder";

/// Collects the autocomplete's configuration. `options` and `on_change`
/// are required up front; everything else has a default.
pub struct AutocompleteBuilder {
    options: Vec<AutocompleteOption>,
    on_change: ChangeHandler,
    on_input_value_change: Option<InputValueChangeHandler>,
    on_clear: Option<ClearHandler>,
    filter: FilterFn,
    max_number_of_options: usize,
    clear_on_select: bool,
    default_input_value: Option<String>,
    initial_selected_item: Option<String>,
    attributes: BTreeMap<String, String>,
    prompt: Option<String>,
    highlight_colour: Color,
}

impl AutocompleteBuilder {
    pub fn on_input_value_change(mut self, f: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_input_value_change = Some(Box::new(f));
        self
    }

    /// Also switches on the clear affordance
    pub fn on_clear(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_clear = Some(Box::new(f));
        self
    }

    pub fn filter_options(
        mut self,
        f: impl Fn(&[NormalizedOption], &str) -> Vec<NormalizedOption> + Send + Sync + 'static,
    ) -> Self {
        self.filter = Arc::new(f);
        self
    }

    pub fn max_number_of_options(mut self, max: usize) -> Self {
        self.max_number_of_options = max;
        self
    }

    pub fn clear_on_select(mut self, clear_on_select: bool) -> Self {
        self.clear_on_select = clear_on_select;
        self
    }

    pub fn default_input_value(mut self, value: impl Into<String>) -> Self {
        self.default_input_value = Some(value.into());
        self
    }

    pub fn initial_selected_item(mut self, value: impl Into<String>) -> Self {
        self.initial_selected_item = Some(value.into());
        self
    }

    /// Passed through to the text input: `id`, `label` and `placeholder`
    /// are understood, the rest are kept for the host to query
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn highlight_colour(mut self, colour: Color) -> Self {
        self.highlight_colour = colour;
        self
    }

    pub fn build(self) -> Result<Autocomplete> {
        if self.max_number_of_options == 0 {
            bail!("max_number_of_options must be at least 1");
        }

        let options = normalize_options(self.options)?;
        let state = AutocompleteState::initial(
            &options,
            self.default_input_value.as_deref(),
            self.initial_selected_item.as_deref(),
        );

        Ok(Autocomplete {
            options,
            coordinator: Coordinator::new(
                self.filter,
                self.max_number_of_options,
                self.clear_on_select,
            ),
            state,
            on_change: self.on_change,
            on_input_value_change: self.on_input_value_change,
            on_clear: self.on_clear,
            attributes: self.attributes,
            prompt: self.prompt,
            highlight_colour: self.highlight_colour,
            list_area: None,
        })
    }
}

/// A text field with a filtered list of suggestions underneath.
///
/// Keyboard input goes through [`Autocomplete::update`]; hosts which
/// drive it some other way (mouse clicks, tests) can use
/// [`Autocomplete::dispatch`] directly.
pub struct Autocomplete {
    options: Vec<NormalizedOption>,
    coordinator: Coordinator,
    state: AutocompleteState,
    on_change: ChangeHandler,
    on_input_value_change: Option<InputValueChangeHandler>,
    on_clear: Option<ClearHandler>,
    attributes: BTreeMap<String, String>,
    prompt: Option<String>,
    highlight_colour: Color,
    /// Where the suggestion panel was last drawn, borders included
    list_area: Option<Rect>,
}

impl Debug for Autocomplete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autocomplete")
            .field("options", &self.options.len())
            .field("coordinator", &self.coordinator)
            .field("state", &self.state)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

impl Autocomplete {
    pub fn builder(
        options: Vec<AutocompleteOption>,
        on_change: impl FnMut(&str) + Send + 'static,
    ) -> AutocompleteBuilder {
        AutocompleteBuilder {
            options,
            on_change: Box::new(on_change),
            on_input_value_change: None,
            on_clear: None,
            filter: default_filter_fn(),
            max_number_of_options: DEFAULT_MAX_NUMBER_OF_OPTIONS,
            clear_on_select: false,
            default_input_value: None,
            initial_selected_item: None,
            attributes: BTreeMap::new(),
            prompt: None,
            highlight_colour: Color::Green,
        }
    }

    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    pub fn input_value(&self) -> &str {
        &self.state.input
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.state.selected.as_deref()
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn is_clearable(&self) -> bool {
        self.on_clear.is_some()
    }

    /// Options the list would show right now, whether or not it is open
    pub fn visible_options(&self) -> Vec<NormalizedOption> {
        self.coordinator.visible(&self.options, &self.state.input)
    }

    /// What the suggestion panel draws this frame
    pub fn rendered_suggestions(&self) -> Vec<RenderedSuggestion> {
        suggestions(&self.state, &self.visible_options())
    }

    /// Swaps in a new option list, typically after the host has fetched
    /// fresh suggestions for the current text.
    pub fn set_options(&mut self, options: Vec<AutocompleteOption>) -> Result<()> {
        self.options = normalize_options(options)?;
        self.dispatch(Event::OptionsChanged);
        Ok(())
    }

    pub fn focus(&mut self) {
        self.dispatch(Event::Focus);
    }

    pub fn blur(&mut self) {
        self.dispatch(Event::Blur);
    }

    /// Selects the visible option at `idx`, as a click would
    pub fn select(&mut self, idx: usize) {
        self.dispatch(Event::Select(idx));
    }

    pub fn clear(&mut self) {
        self.dispatch(Event::Clear);
    }

    /// A left click on a suggestion row selects it. Every other mouse
    /// event is left for the host.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> MessageResponse {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(event.column, event.row),
            _ => MessageResponse::NotConsumed,
        }
    }

    /// Selects the suggestion drawn at screen cell (`column`, `row`), if any
    pub fn click(&mut self, column: u16, row: u16) -> MessageResponse {
        let Some(list_area) = self.list_area else {
            return MessageResponse::NotConsumed;
        };
        if self.state.phase != Phase::OpenWithOptions {
            return MessageResponse::NotConsumed;
        }

        let rows = list_area.inner(Margin::new(1, 1));
        if !rows.contains(Position::new(column, row)) {
            return MessageResponse::NotConsumed;
        }

        self.select(usize::from(row - rows.y));
        MessageResponse::Consumed
    }

    /// Runs one transition and hands its effects to the host's callbacks
    pub fn dispatch(&mut self, event: Event) {
        debug!(id = self.attribute(ID_ATTRIBUTE), ?event, "autocomplete event");

        let transitioned = self
            .coordinator
            .transition(&self.state, &self.options, event);
        self.state = transitioned.state;

        for effect in transitioned.effects {
            debug!(id = self.attribute(ID_ATTRIBUTE), ?effect, "autocomplete effect");
            match effect {
                Effect::Change(value) => (self.on_change)(&value),
                Effect::InputValueChange(text) => {
                    if let Some(f) = self.on_input_value_change.as_mut() {
                        f(&text)
                    }
                }
                Effect::Clear => {
                    if let Some(f) = self.on_clear.as_mut() {
                        f()
                    }
                }
            }
        }
    }

    pub fn update(&mut self, message: Key) -> Result<MessageResponse> {
        if !self.state.focused {
            return Ok(MessageResponse::NotConsumed);
        }

        let event = match message {
            Key::Char(c) => {
                let mut input = self.state.input.clone();
                input.push(c);
                Event::InputChanged(input)
            }
            Key::Backspace => {
                let mut input = self.state.input.clone();
                if input.pop().is_none() {
                    return Ok(MessageResponse::Consumed);
                }
                Event::InputChanged(input)
            }
            Key::Down => Event::HighlightNext,
            Key::Up => Event::HighlightPrevious,
            Key::Enter | Key::Tab if self.state.phase.is_open() => Event::Confirm,
            Key::Esc if self.state.phase.is_open() => Event::Close,
            CLEAR_KEY if self.is_clearable() => Event::Clear,
            _ => return Ok(MessageResponse::NotConsumed),
        };

        self.dispatch(event);
        Ok(MessageResponse::Consumed)
    }
}

impl Component for Autocomplete {
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) {
        self.list_area = None;

        let input_area = Rect {
            height: area.height.min(INPUT_HEIGHT),
            ..area
        };

        let text_input = TextInput::new(&self.state.input)
            .prompt(self.prompt.as_deref())
            .label(self.attribute(LABEL_ATTRIBUTE))
            .placeholder(self.attribute(PLACEHOLDER_ATTRIBUTE))
            .focused(self.state.focused)
            .clearable(self.is_clearable());
        f.render_widget(text_input, input_area);

        let rows = self.rendered_suggestions();
        if rows.is_empty() || area.height <= INPUT_HEIGHT {
            return;
        }

        let list = SuggestionList::new(&rows).highlight_colour(self.highlight_colour);
        let list_area = Rect {
            y: area.y + INPUT_HEIGHT,
            height: (area.height - INPUT_HEIGHT).min(list.height()),
            ..area
        };
        f.render_widget(list, list_area);
        self.list_area = Some(list_area);
    }
}
