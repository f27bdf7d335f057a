use ratatui::{
    layout::Margin,
    prelude::*,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use ratatui::widgets::Widget;

pub const CLEAR_AFFORDANCE: &str = "✕";

/// The bordered single line text field the autocomplete is built around.
///
/// Stateless: the owning component hands in everything it needs per frame.
#[derive(Debug, Default)]
pub struct TextInput<'a> {
    value: &'a str,
    prompt: Option<&'a str>,
    label: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    clearable: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    pub fn prompt(mut self, prompt: Option<&'a str>) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn label(mut self, label: Option<&'a str>) -> Self {
        self.label = label;
        self
    }

    pub fn placeholder(mut self, placeholder: Option<&'a str>) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Shows the clear affordance on the right hand side while there is
    /// text to clear
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }
}

impl<'a> Widget for TextInput<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::new().green()
        } else {
            Style::new()
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Plain)
            .border_style(border_style);

        if let Some(label) = self.label {
            block = block.title(Line::from(format!(" {label} ")).left_aligned());
        }

        if self.clearable && !self.value.is_empty() {
            block = block.title(
                Line::from(Span::styled(
                    format!(" {CLEAR_AFFORDANCE} "),
                    Style::new().red(),
                ))
                .right_aligned(),
            );
        }

        block.render(area, buf);

        let body_inner = area.inner(Margin::new(2, 1));

        let mut input_text = vec![];
        if let Some(prompt) = self.prompt {
            input_text.push(Span::styled(format!("{prompt} "), Style::new().green()));
        }

        match self.placeholder {
            Some(placeholder) if self.value.is_empty() => {
                input_text.push(Span::raw(placeholder).style(Style::default().add_modifier(Modifier::DIM)))
            }
            _ => input_text.push(Span::raw(self.value)),
        }

        if self.focused {
            input_text.push(Span::raw("█").style(Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }

        Paragraph::new(Line::from(input_text)).render(body_inner, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(widget: TextInput<'_>) -> String {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_prompt_and_value() {
        let text = rendered(TextInput::new("Mango").prompt(Some(">")));
        assert!(text.contains("> Mango"));
    }

    #[test]
    fn test_placeholder_only_when_empty() {
        let text = rendered(TextInput::new("").placeholder(Some("Pick a fruit")));
        assert!(text.contains("Pick a fruit"));

        let text = rendered(TextInput::new("Kiwi").placeholder(Some("Pick a fruit")));
        assert!(!text.contains("Pick a fruit"));
    }

    #[test]
    fn test_clear_affordance_needs_text() {
        let text = rendered(TextInput::new("").clearable(true));
        assert!(!text.contains(CLEAR_AFFORDANCE));

        let text = rendered(TextInput::new("Kiwi").clearable(true));
        assert!(text.contains(CLEAR_AFFORDANCE));

        let text = rendered(TextInput::new("Kiwi").clearable(false));
        assert!(!text.contains(CLEAR_AFFORDANCE));
    }

    #[test]
    fn test_label_in_border() {
        let text = rendered(TextInput::new("").label(Some("Fruit")));
        assert!(text.contains(" Fruit "));
    }
}
