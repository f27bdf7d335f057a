use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

const TITLE: &str = "tuggest storybook";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Title block on the left, one tab per story on the right.
#[derive(Debug)]
pub struct Header {
    colour: Color,
}

impl Header {
    pub fn new(colour: Color) -> Self {
        Self { colour }
    }

    pub fn draw(&mut self, f: &mut Frame<'_>, area: Rect, titles: &[&'static str], selected: usize) {
        let [left, right] =
            Layout::horizontal(vec![Constraint::Length(26), Constraint::Min(0)]).areas(area);

        let title = Paragraph::new(Text::styled(
            format!("{TITLE} v{VERSION}"),
            Style::default().fg(self.colour),
        ))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, left);

        let tabs = Tabs::new(titles.to_vec())
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(self.colour)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .block(Block::default().borders(Borders::ALL).title(" Stories "));
        f.render_widget(tabs, right);
    }
}
