//! The state machine behind the autocomplete.
//!
//! Nothing in here touches the terminal: every transition is a pure
//! function of the coordinator's configuration, the current state, the
//! option list and an [`Event`]. Side effects the host should observe are
//! handed back as [`Effect`]s for the caller to dispatch.

use std::fmt::Debug;

use super::{
    filter::{default_filter_fn, FilterFn},
    option::NormalizedOption,
};

pub const DEFAULT_MAX_NUMBER_OF_OPTIONS: usize = 7;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    /// Open, but nothing matches the input
    OpenEmpty,
    OpenWithOptions,
}

impl Phase {
    pub fn is_open(&self) -> bool {
        *self != Self::Closed
    }

    fn open_for(visible: &[NormalizedOption]) -> Self {
        if visible.is_empty() {
            Self::OpenEmpty
        } else {
            Self::OpenWithOptions
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AutocompleteState {
    pub input: String,
    pub phase: Phase,
    /// Index into the visible (filtered and truncated) options
    pub highlighted: Option<usize>,
    /// Value of the selected option
    pub selected: Option<String>,
    pub focused: bool,
}

impl AutocompleteState {
    /// Builds the state a freshly mounted component starts from. A
    /// pre-selected item wins over default text.
    pub fn initial(
        options: &[NormalizedOption],
        default_input_value: Option<&str>,
        initial_selected_item: Option<&str>,
    ) -> Self {
        if let Some(value) = initial_selected_item {
            let input = options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.display.clone())
                .unwrap_or_else(|| value.to_string());
            return Self {
                input,
                selected: Some(value.to_string()),
                ..Default::default()
            };
        }

        Self {
            input: default_input_value.unwrap_or_default().to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    InputChanged(String),
    Focus,
    Blur,
    Open,
    Close,
    HighlightNext,
    HighlightPrevious,
    /// Pick the visible option at this index (a click)
    Select(usize),
    /// Pick the highlighted option (Enter)
    Confirm,
    Clear,
    /// The host swapped the option list out from under us
    OptionsChanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Change(String),
    InputValueChange(String),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transitioned {
    pub state: AutocompleteState,
    pub effects: Vec<Effect>,
}

impl Transitioned {
    fn quiet(state: AutocompleteState) -> Self {
        Self {
            state,
            effects: vec![],
        }
    }
}

#[derive(Clone)]
pub struct Coordinator {
    filter: FilterFn,
    max_number_of_options: usize,
    clear_on_select: bool,
}

impl Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("max_number_of_options", &self.max_number_of_options)
            .field("clear_on_select", &self.clear_on_select)
            .finish_non_exhaustive()
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(default_filter_fn(), DEFAULT_MAX_NUMBER_OF_OPTIONS, false)
    }
}

impl Coordinator {
    pub fn new(filter: FilterFn, max_number_of_options: usize, clear_on_select: bool) -> Self {
        Self {
            filter,
            max_number_of_options,
            clear_on_select,
        }
    }

    pub fn max_number_of_options(&self) -> usize {
        self.max_number_of_options
    }

    /// Filtered view before truncation
    pub fn filtered(&self, options: &[NormalizedOption], input: &str) -> Vec<NormalizedOption> {
        (self.filter)(options, input)
    }

    /// What the suggestion list shows: the filtered view cut down to the
    /// first `max_number_of_options` entries.
    pub fn visible(&self, options: &[NormalizedOption], input: &str) -> Vec<NormalizedOption> {
        let mut visible = self.filtered(options, input);
        visible.truncate(self.max_number_of_options);
        visible
    }

    pub fn transition(
        &self,
        state: &AutocompleteState,
        options: &[NormalizedOption],
        event: Event,
    ) -> Transitioned {
        let mut next = state.clone();

        match event {
            Event::InputChanged(input) => {
                let visible = self.visible(options, &input);
                next.phase = Phase::open_for(&visible);
                next.highlighted = None;
                next.input = input.clone();
                Transitioned {
                    state: next,
                    effects: vec![Effect::InputValueChange(input)],
                }
            }
            Event::Focus => {
                next.focused = true;
                Transitioned::quiet(next)
            }
            Event::Blur => {
                next.focused = false;
                close(&mut next);
                Transitioned::quiet(next)
            }
            Event::Open => {
                let visible = self.visible(options, &next.input);
                next.phase = Phase::open_for(&visible);
                Transitioned::quiet(next)
            }
            Event::Close => {
                close(&mut next);
                Transitioned::quiet(next)
            }
            Event::HighlightNext => {
                let visible = self.visible(options, &next.input);
                if !next.phase.is_open() {
                    next.phase = Phase::open_for(&visible);
                    next.highlighted = (!visible.is_empty()).then_some(0);
                } else if !visible.is_empty() {
                    next.highlighted = Some(match next.highlighted {
                        Some(idx) => (idx + 1) % visible.len(),
                        None => 0,
                    });
                }
                Transitioned::quiet(next)
            }
            Event::HighlightPrevious => {
                if !next.phase.is_open() {
                    let visible = self.visible(options, &next.input);
                    next.phase = Phase::open_for(&visible);
                } else {
                    next.highlighted = next.highlighted.map(|idx| idx.saturating_sub(1));
                }
                Transitioned::quiet(next)
            }
            Event::Select(idx) => self.select(next, options, idx),
            Event::Confirm => match next.highlighted {
                Some(idx) => self.select(next, options, idx),
                None => Transitioned::quiet(next),
            },
            Event::Clear => {
                next.input = String::new();
                next.selected = None;
                close(&mut next);
                Transitioned {
                    state: next,
                    effects: vec![Effect::Clear],
                }
            }
            Event::OptionsChanged => {
                if next.phase.is_open() {
                    let visible = self.visible(options, &next.input);
                    next.phase = Phase::open_for(&visible);
                    next.highlighted = next.highlighted.filter(|idx| *idx < visible.len());
                }
                Transitioned::quiet(next)
            }
        }
    }

    fn select(
        &self,
        mut next: AutocompleteState,
        options: &[NormalizedOption],
        idx: usize,
    ) -> Transitioned {
        if next.phase != Phase::OpenWithOptions {
            return Transitioned::quiet(next);
        }

        let visible = self.visible(options, &next.input);
        let Some(option) = visible.get(idx) else {
            return Transitioned::quiet(next);
        };

        if self.clear_on_select {
            next.input = String::new();
            next.selected = None;
        } else {
            next.input.clone_from(&option.display);
            next.selected = Some(option.value.clone());
        }
        close(&mut next);

        Transitioned {
            state: next,
            effects: vec![Effect::Change(option.value.clone())],
        }
    }
}

fn close(state: &mut AutocompleteState) {
    state.phase = Phase::Closed;
    state.highlighted = None;
}
