use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use itertools::Itertools;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem},
    Frame,
};
use tracing::info;
use tuggest::traits::Component;

const MAX_ACTIONS: usize = 100;

/// One callback invocation, e.g. `onChange("Mango")`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub name: &'static str,
    pub detail: Option<String>,
}

impl Action {
    fn display(&self) -> String {
        match &self.detail {
            Some(d) => format!("{}({d:?})", self.name),
            None => format!("{}()", self.name),
        }
    }
}

/// The storybook's actions panel: records every callback the component
/// under demonstration fires, newest first.
///
/// Cloning shares the underlying log, so recorders can be moved into the
/// component's callbacks while the story keeps a handle for drawing.
#[derive(Debug, Clone)]
pub struct ActionLog {
    actions: Arc<Mutex<VecDeque<Action>>>,
    colour: Color,
}

impl ActionLog {
    pub fn new(colour: Color) -> Self {
        Self {
            actions: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_ACTIONS))),
            colour,
        }
    }

    pub fn record(&self, name: &'static str, detail: Option<String>) {
        let action = Action { name, detail };
        info!(action = %action.display(), "storybook action");

        let Ok(mut actions) = self.actions.lock() else {
            return;
        };
        if actions.len() == MAX_ACTIONS {
            actions.pop_back();
        }
        actions.push_front(action);
    }

    /// A callback which logs its argument under `name`
    pub fn recorder(&self, name: &'static str) -> impl FnMut(&str) + Send + 'static {
        let log = self.clone();
        move |detail| log.record(name, Some(detail.to_string()))
    }

    /// A callback without arguments which logs under `name`
    pub fn bare_recorder(&self, name: &'static str) -> impl FnMut() + Send + 'static {
        let log = self.clone();
        move || log.record(name, None)
    }

    pub fn actions(&self) -> Vec<Action> {
        match self.actions.lock() {
            Ok(actions) => actions.iter().cloned().collect(),
            Err(_) => vec![],
        }
    }
}

impl Component for ActionLog {
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) {
        let items = self
            .actions()
            .iter()
            .map(|a| {
                ListItem::new(Line::from(vec![
                    Span::styled(a.name, Style::new().fg(self.colour)),
                    Span::raw(a.display()[a.name.len()..].to_string()),
                ]))
            })
            .collect_vec();

        let block = Block::bordered()
            .title(Line::from(" Actions ").centered())
            .title_style(Style::new().add_modifier(Modifier::BOLD));

        f.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorders_share_the_log() {
        let log = ActionLog::new(Color::Cyan);
        let mut on_change = log.recorder("onChange");
        let mut on_clear = log.bare_recorder("onClear");
        on_change("Mango");
        on_clear();

        let actions = log.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].name, "onClear");
        assert_eq!(actions[1].display(), "onChange(\"Mango\")");
    }

    #[test]
    fn test_log_is_capped() {
        let log = ActionLog::new(Color::Cyan);
        for i in 0..MAX_ACTIONS + 5 {
            log.record("onInputValueChange", Some(i.to_string()));
        }
        let actions = log.actions();
        assert_eq!(actions.len(), MAX_ACTIONS);
        assert_eq!(actions[0].detail.as_deref(), Some("104"));
    }
}
