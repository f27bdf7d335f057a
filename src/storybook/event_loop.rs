use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{ContextCompat, Result};
use crossterm::event::{Event as CrossTermEvent, MouseEventKind};
use futures::lock::Mutex;
use futures::{FutureExt, StreamExt};
use tokio::{
    sync::mpsc::{self, Receiver, Sender},
    task::JoinHandle,
    time::interval,
};
use tracing::debug;
use tuggest::events::{Key, Message};

use super::transition::StorybookMessage;

const TICK_RATE: Duration = Duration::from_millis(250);
const CHANNEL_SIZE: usize = 32;

/// Merges ticks, terminal input (keys and clicks) and messages sent from
/// inside the app (transitions, background fetches) into one ordered stream.
pub struct EventLoop {
    /// Outbound sender; used to send internal messages to outbound receiver
    outbound_tx: Sender<StorybookMessage>,
    /// Outbound receiver; used to pass messages out of the event loop
    outbound_rx: Receiver<StorybookMessage>,

    /// Inbound sender; used to send messages into the event loop from outside
    inbound_tx: Sender<StorybookMessage>,
    /// Inbound receiver; proxies external messages to the outbound side
    inbound_rx: Arc<Mutex<Receiver<StorybookMessage>>>,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub fn new() -> Self {
        let (outbound_tx, outbound_rx) = mpsc::channel::<StorybookMessage>(CHANNEL_SIZE);
        let (inbound_tx, inbound_rx) = mpsc::channel::<StorybookMessage>(CHANNEL_SIZE);
        Self {
            outbound_tx,
            outbound_rx,
            inbound_tx,
            inbound_rx: Arc::new(Mutex::new(inbound_rx)),
        }
    }

    pub fn start(&mut self) -> Result<()> {
        self.spawn_tick_task();
        self.spawn_io_task();
        self.spawn_inbound_task();
        Ok(())
    }

    pub async fn next(&mut self) -> Result<StorybookMessage> {
        let event = self
            .outbound_rx
            .recv()
            .await
            .context("unable to receive event")?;
        Ok(event)
    }

    pub fn get_tx(&self) -> Sender<StorybookMessage> {
        self.inbound_tx.clone()
    }

    fn spawn_tick_task(&self) -> JoinHandle<()> {
        let tx = self.outbound_tx.clone();
        let mut interval = interval(TICK_RATE);
        tokio::spawn(async move {
            loop {
                let delay = interval.tick();
                tokio::select! {
                    _ = tx.closed() => {
                        break;
                    }
                    _ = delay => {
                        if tx.send(Message::Tick).await.is_err() {
                            break;
                        }
                    }
                }
            }
        })
    }

    fn spawn_io_task(&self) -> JoinHandle<()> {
        let tx = self.outbound_tx.clone();
        tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut tick = interval(TICK_RATE);
            loop {
                let delay = tick.tick();
                let crossterm_event = reader.next().fuse();
                tokio::select! {
                    _ = tx.closed() => {
                        break;
                    }
                    _ = delay => {}
                    Some(Ok(event)) = crossterm_event => {
                        let message = match event {
                            CrossTermEvent::Key(key) => match Key::from(key) {
                                Key::Null => continue,
                                key => Message::Input(key),
                            },
                            // Moves and drags would only trigger redraws
                            CrossTermEvent::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                                Message::Mouse(mouse)
                            }
                            _ => continue,
                        };
                        if tx.send(message).await.is_err() {
                            break;
                        }
                    }
                }
            }
            debug!("terminal input task finished");
        })
    }

    fn spawn_inbound_task(&self) -> JoinHandle<()> {
        let tx = self.outbound_tx.clone();
        let rx = self.inbound_rx.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = tx.closed() => {
                        break;
                    }
                    mut locked_rx = rx.lock() => {
                        match locked_rx.recv().await {
                            Some(event) => {
                                if tx.send(event).await.is_err() {
                                    break;
                                }
                            }
                            None => break,
                        }
                    }
                }
            }
        })
    }
}
