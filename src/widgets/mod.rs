pub mod suggestion_list;
pub mod text_input;

pub use suggestion_list::{suggestions, RenderedSuggestion, SuggestionList};
pub use text_input::TextInput;
