use std::{collections::BTreeMap, str::FromStr};

use itertools::Itertools;
use ratatui::{
    layout::Rect,
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, Widget},
};

use crate::autocomplete::{AutocompleteState, NormalizedOption, Phase};

/// Attributes the list knows how to draw; anything else rides along untouched
const FG_ATTRIBUTE: &str = "fg";
const BG_ATTRIBUTE: &str = "bg";
const DESCRIPTION_ATTRIBUTE: &str = "description";

/// One row of the suggestion panel, as it will be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSuggestion {
    /// The option's value, unique within the list
    pub key: String,
    pub text: String,
    pub highlighted: bool,
    pub attributes: BTreeMap<String, String>,
}

/// Projects the current state and visible options onto the rows of the
/// panel. Empty unless the list is open and has something to show.
pub fn suggestions(state: &AutocompleteState, visible: &[NormalizedOption]) -> Vec<RenderedSuggestion> {
    if state.phase != Phase::OpenWithOptions {
        return vec![];
    }

    visible
        .iter()
        .enumerate()
        .map(|(idx, option)| RenderedSuggestion {
            key: option.value.clone(),
            text: option.display.clone(),
            highlighted: state.highlighted == Some(idx),
            attributes: option.attributes.clone(),
        })
        .collect_vec()
}

/// The floating panel drawn under the text input.
#[derive(Debug)]
pub struct SuggestionList<'a> {
    suggestions: &'a [RenderedSuggestion],
    highlight_colour: Color,
}

impl<'a> SuggestionList<'a> {
    pub fn new(suggestions: &'a [RenderedSuggestion]) -> Self {
        Self {
            suggestions,
            highlight_colour: Color::Green,
        }
    }

    pub fn highlight_colour(mut self, colour: Color) -> Self {
        self.highlight_colour = colour;
        self
    }

    /// Rows needed to draw every suggestion, borders included
    pub fn height(&self) -> u16 {
        if self.suggestions.is_empty() {
            0
        } else {
            u16::try_from(self.suggestions.len())
                .unwrap_or(u16::MAX)
                .saturating_add(2)
        }
    }

    fn item(&self, suggestion: &'a RenderedSuggestion) -> ListItem<'a> {
        let mut style = Style::default();
        if let Some(fg) = colour_attribute(&suggestion.attributes, FG_ATTRIBUTE) {
            style = style.fg(fg);
        }
        if let Some(bg) = colour_attribute(&suggestion.attributes, BG_ATTRIBUTE) {
            style = style.bg(bg);
        }

        let marker = if suggestion.highlighted { "▶ " } else { "  " };
        let mut spans = vec![
            Span::raw(marker),
            Span::styled(suggestion.text.as_str(), style),
        ];
        if let Some(description) = suggestion.attributes.get(DESCRIPTION_ATTRIBUTE) {
            spans.push(Span::styled(
                format!("  {description}"),
                Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
            ));
        }

        let item = ListItem::new(Line::from(spans));
        if suggestion.highlighted {
            item.style(
                Style::default()
                    .fg(self.highlight_colour)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else {
            item
        }
    }
}

fn colour_attribute(attributes: &BTreeMap<String, String>, key: &str) -> Option<Color> {
    attributes.get(key).and_then(|v| Color::from_str(v).ok())
}

impl<'a> Widget for SuggestionList<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.suggestions.is_empty() {
            return;
        }

        let area = Rect {
            height: area.height.min(self.height()),
            ..area
        };

        let items = self
            .suggestions
            .iter()
            .map(|s| self.item(s))
            .collect_vec();

        Clear.render(area, buf);
        Widget::render(List::new(items).block(Block::bordered()), area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_state(highlighted: Option<usize>) -> AutocompleteState {
        AutocompleteState {
            phase: Phase::OpenWithOptions,
            highlighted,
            ..Default::default()
        }
    }

    fn visible(values: &[&str]) -> Vec<NormalizedOption> {
        values.iter().map(|v| NormalizedOption::from(*v)).collect()
    }

    fn rendered_text(suggestions: &[RenderedSuggestion], area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        SuggestionList::new(suggestions).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_closed_renders_nothing() {
        let state = AutocompleteState::default();
        assert!(suggestions(&state, &visible(&["Apple"])).is_empty());
    }

    #[test]
    fn test_open_empty_renders_nothing() {
        let state = AutocompleteState {
            phase: Phase::OpenEmpty,
            ..Default::default()
        };
        assert!(suggestions(&state, &[]).is_empty());
    }

    #[test]
    fn test_keys_and_highlight() {
        let rows = suggestions(&open_state(Some(1)), &visible(&["Banana", "Mango"]));
        let keys = rows.iter().map(|r| r.key.as_str()).collect_vec();
        assert_eq!(keys, vec!["Banana", "Mango"]);
        assert!(!rows[0].highlighted);
        assert!(rows[1].highlighted);
    }

    #[test]
    fn test_attributes_pass_through() {
        let option = NormalizedOption {
            value: "kiwi".into(),
            display: "Kiwi".into(),
            attributes: BTreeMap::from([
                ("fg".to_string(), "green".to_string()),
                ("data-origin".to_string(), "nz".to_string()),
            ]),
        };
        let rows = suggestions(&open_state(None), &[option]);
        assert_eq!(rows[0].text, "Kiwi");
        assert_eq!(rows[0].attributes.get("data-origin").map(String::as_str), Some("nz"));
    }

    #[test]
    fn test_render_draws_rows_and_description() {
        let mut rows = suggestions(&open_state(Some(0)), &visible(&["Banana", "Mango"]));
        rows[1]
            .attributes
            .insert("description".into(), "stone fruit".into());
        let text = rendered_text(&rows, Rect::new(0, 0, 40, 6));
        assert!(text.contains("▶ Banana"));
        assert!(text.contains("  Mango  stone fruit"));
    }

    #[test]
    fn test_render_only_uses_needed_height() {
        let rows = suggestions(&open_state(None), &visible(&["Banana"]));
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        SuggestionList::new(&rows).render(area, &mut buf);
        // Border ends on the third row; everything below is untouched
        assert_eq!(buf[(0, 2)].symbol(), "└");
        assert_eq!(buf[(0, 3)].symbol(), " ");
    }

    #[test]
    fn test_height() {
        let rows = suggestions(&open_state(None), &visible(&["Banana", "Mango"]));
        assert_eq!(SuggestionList::new(&rows).height(), 4);
        assert_eq!(SuggestionList::new(&[]).height(), 0);
    }

    #[test]
    fn test_height_saturates() {
        let row = RenderedSuggestion {
            key: "x".into(),
            text: "x".into(),
            highlighted: false,
            attributes: BTreeMap::new(),
        };
        let rows = vec![row; usize::from(u16::MAX) + 10];
        assert_eq!(SuggestionList::new(&rows).height(), u16::MAX);
    }
}
