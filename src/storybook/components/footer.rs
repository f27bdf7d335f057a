use itertools::Itertools;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use tuggest::traits::Component;

const KEYS: [(&str, &str); 7] = [
    ("↑/↓", "Highlight"),
    ("Enter/Tab", "Select"),
    ("Esc", "Close"),
    ("C-u", "Clear"),
    ("C-n", "Next story"),
    ("C-p", "Previous story"),
    ("C-c", "Quit"),
];

#[derive(Debug)]
pub struct Footer {
    colour: Color,
}

impl Footer {
    pub fn new(colour: Color) -> Self {
        Self { colour }
    }
}

impl Component for Footer {
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) {
        let style = Style::new().fg(self.colour).add_modifier(Modifier::ITALIC);
        let spans = KEYS
            .iter()
            .flat_map(|(key, desc)| {
                [
                    Span::styled(format!(" <{key}> = "), style),
                    Span::styled(format!("{desc} "), style),
                ]
            })
            .collect_vec();

        let footer = Line::from(spans).centered().style(Style::new());

        f.render_widget(footer, area)
    }
}
