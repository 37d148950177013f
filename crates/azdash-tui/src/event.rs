use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use azdash_core::model::{InventorySnapshot, VmAction};

/// Results reported back by background request tasks.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    AuthFailed {
        reason: String,
    },
    SnapshotLoaded(InventorySnapshot),
    SnapshotFailed {
        reason: String,
    },
    ActionSucceeded {
        action: VmAction,
        vm_name: String,
    },
    ActionFailed {
        action: VmAction,
        vm_name: String,
        reason: String,
    },
}

impl ApiEvent {
    /// True for the last event a request task emits.
    pub fn ends_request(&self) -> bool {
        !matches!(self, Self::ActionSucceeded { .. })
    }
}

pub enum TuiEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Api(ApiEvent),
}

/// Handle given to request tasks so their results join the terminal event stream.
#[derive(Clone)]
pub struct ApiSink {
    tx: UnboundedSender<TuiEvent>,
}

impl ApiSink {
    pub fn channel() -> (Self, UnboundedReceiver<TuiEvent>) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, event: ApiEvent) {
        if self.tx.send(TuiEvent::Api(event)).is_err() {
            tracing::debug!("event loop gone, dropping api event");
        }
    }
}

/// Single stream of key presses, ticks, resizes and request results.
pub struct EventHandler {
    tx: UnboundedSender<TuiEvent>,
    rx: UnboundedReceiver<TuiEvent>,
    _thread: std::thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let input_tx = tx.clone();
        let thread = std::thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        input_tx.send(TuiEvent::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => input_tx.send(TuiEvent::Resize(w, h)),
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    break;
                }
            } else if input_tx.send(TuiEvent::Tick).is_err() {
                break;
            }
        });
        Self {
            tx,
            rx,
            _thread: thread,
        }
    }

    pub fn api_sink(&self) -> ApiSink {
        ApiSink {
            tx: self.tx.clone(),
        }
    }

    pub async fn next(&mut self) -> Option<TuiEvent> {
        self.rx.recv().await
    }
}
