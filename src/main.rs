use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use color_eyre::eyre::Context;
use tuggest::events::{Key, Message};

use storybook::{
    app::App, config::Config, event_loop::EventLoop, state, terminal, tracing::initialize_logging,
};

mod storybook;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Export default config to default config directory
    /// (usually ~/.config/tuggest/config.yaml)
    #[clap(long, short, action)]
    export_default_config: bool,

    /// Story to open first, e.g. `async-options`
    #[clap(long, short)]
    story: Option<String>,

    /// File to write logs to, instead of the default data directory
    #[clap(long, short)]
    log_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let config = Arc::new(Config::new(&args.export_default_config)?);

    initialize_logging(&args.log_path).context("failed to initialise logging")?;

    terminal::init_panic_hook();

    let mut events = EventLoop::new();
    let events_tx = events.get_tx();
    let app = App::new(events_tx, config, args.story.as_deref()).await;
    // Story names are validated before the terminal is taken over so that
    // a typo prints a readable error
    let mut app = app.context("failed to create storybook")?;

    let mut terminal = terminal::init().context("failed to initialise terminal")?;

    events.start().context("failed to start event loop")?;

    while app.running != state::Running::Done {
        terminal
            .draw(|f| {
                app.draw(f);
            })
            .context("failed to update view")?;

        match events
            .next()
            .await
            .context("unable to receive next event")?
        {
            Message::Input(k) => {
                app.update(k).await;
            }
            Message::Mouse(m) => {
                app.mouse(m).await;
            }
            Message::Transition(t) => {
                app.transition(t).await;
            }
            Message::Tick => {
                app.update(Key::Null).await;
            }
        }
    }

    terminal::restore().context("failed to restore terminal")?;

    Ok(())
}
