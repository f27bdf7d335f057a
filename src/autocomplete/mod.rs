//! An autocomplete text input: a text field, a filtered list of
//! suggestions and the state machine tying the two together.

pub mod component;
pub mod coordinator;
pub mod filter;
pub mod option;

pub use component::{Autocomplete, AutocompleteBuilder};
pub use coordinator::{AutocompleteState, Coordinator, Effect, Event, Phase};
pub use filter::{default_filter, prefix_filter, FilterFn, MINIMUM_FILTER_LENGTH};
pub use option::{normalize_options, AutocompleteOption, NormalizedOption, OptionRecord};
