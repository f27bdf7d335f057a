use std::sync::Arc;

use color_eyre::eyre::{Context, Result};
use crossterm::event::MouseEvent;
use ratatui::{
    layout::{Layout, Rect},
    style::{Color, Style},
    text::Line,
    Frame,
};
use ratatui_macros::constraints;
use tokio::sync::mpsc::Sender;
use tracing::error;
use tuggest::{
    events::{Key, MessageResponse},
    traits::Component,
};

use super::{
    components::{Footer, Header},
    config::Config,
    state,
    story_manager::StoryManager,
    transition::{StorybookMessage, Transition},
};

#[derive(Debug)]
pub struct App {
    pub running: state::Running,
    header: Header,
    story_manager: StoryManager,
    footer: Footer,
    error_colour: Color,
    last_error: Option<String>,
}

impl App {
    pub async fn new(
        tx: Sender<StorybookMessage>,
        config: Arc<Config>,
        initial_story: Option<&str>,
    ) -> Result<Self> {
        let theme = config.theme.clone();
        let story_manager = StoryManager::new(config, tx, initial_story)
            .await
            .context("unable to create story manager")?;

        Ok(Self {
            running: state::Running::default(),
            header: Header::new(theme.title()),
            story_manager,
            footer: Footer::new(theme.footer()),
            error_colour: theme.error(),
            last_error: None,
        })
    }

    /// Story first, then the storybook's own keys. Errors are logged and
    /// shown in place of the footer rather than tearing down the terminal.
    /// `C-c` and `C-d` quit when the story leaves them alone.
    pub async fn update(&mut self, message: Key) -> MessageResponse {
        if message != Key::Null {
            self.last_error = None;
        }

        match self.story_manager.update(message).await {
            Ok(MessageResponse::Consumed) => return MessageResponse::Consumed,
            Ok(MessageResponse::NotConsumed) => {}
            Err(e) => {
                self.report(e);
                return MessageResponse::Consumed;
            }
        }

        let transition = match message {
            Key::Ctrl('n') => Transition::NextStory,
            Key::Ctrl('p') => Transition::PreviousStory,
            Key::Ctrl('c') | Key::Ctrl('d') => Transition::Quit,
            _ => return MessageResponse::NotConsumed,
        };
        self.transition(transition).await
    }

    pub async fn mouse(&mut self, event: MouseEvent) -> MessageResponse {
        self.last_error = None;
        match self.story_manager.mouse(event).await {
            Ok(res) => res,
            Err(e) => {
                self.report(e);
                MessageResponse::Consumed
            }
        }
    }

    pub async fn transition(&mut self, transition: Transition) -> MessageResponse {
        if let Transition::Quit = transition {
            self.running = state::Running::Done;
            return MessageResponse::Consumed;
        }

        match self.story_manager.transition(transition).await {
            Ok(res) => res,
            Err(e) => {
                self.report(e);
                MessageResponse::Consumed
            }
        }
    }

    fn report(&mut self, e: color_eyre::eyre::Report) {
        error!(error = ?e, "story failed");
        self.last_error = Some(format!("{e:#}"));
    }

    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let [header, body, footer] =
            Layout::vertical(constraints![==3, *=1, ==1]).areas(f.area());

        let titles = self.story_manager.titles();
        self.header
            .draw(f, header, &titles, self.story_manager.current());
        self.story_manager.draw(f, body);

        self.draw_footer(f, footer);
    }

    fn draw_footer(&mut self, f: &mut Frame<'_>, area: Rect) {
        match &self.last_error {
            Some(msg) => {
                let line = Line::styled(msg.as_str(), Style::new().fg(self.error_colour)).centered();
                f.render_widget(line, area);
            }
            None => self.footer.draw(f, area),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    use super::*;

    async fn app() -> App {
        let (tx, _rx) = mpsc::channel(8);
        App::new(tx, Arc::new(Config::default()), None).await.unwrap()
    }

    #[tokio::test]
    async fn test_quit_stops_the_app() {
        let mut app = app().await;
        assert_eq!(app.running, state::Running::Running);
        app.transition(Transition::Quit).await;
        assert_eq!(app.running, state::Running::Done);
    }

    #[tokio::test]
    async fn test_ctrl_n_moves_to_next_story() {
        let mut app = app().await;
        assert!(app.update(Key::Ctrl('n')).await.is_consumed());
        assert_eq!(app.story_manager.current(), 1);
        assert!(app.update(Key::Ctrl('p')).await.is_consumed());
        assert_eq!(app.story_manager.current(), 0);
    }

    #[tokio::test]
    async fn test_quit_keys_stop_the_app() {
        let mut app = app().await;
        assert!(app.update(Key::Ctrl('c')).await.is_consumed());
        assert_eq!(app.running, state::Running::Done);
    }

    #[tokio::test]
    async fn test_click_reaches_the_story() {
        let mut app = app().await;
        for c in "an".chars() {
            app.update(Key::Char(c)).await;
        }
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        // Header takes rows 0..3, the story frame border row 3, the
        // description rows 4..7 and the input rows 7..10; the panel border
        // sits on row 10 so Mango, the second match, is on row 12
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 6,
            row: 12,
            modifiers: KeyModifiers::NONE,
        };
        assert!(app.mouse(click).await.is_consumed());

        terminal.draw(|f| app.draw(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let input_row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 8)].symbol().to_string())
            .collect();
        assert!(input_row.contains("Mango"));
    }

    #[tokio::test]
    async fn test_draws_header_and_story() {
        let mut app = app().await;
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let top: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(top.contains("tuggest storybook"));
        assert!(top.contains("Basic"));
    }
}
