//! Terminal input polling on a background task

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::event::EventKind;

/// Input as read from the terminal, before [`process_raw_event`]
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Timing for [`spawn_event_poller`]
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// How long one `crossterm::event::poll` may block
    pub poll_timeout: Duration,
    /// Pause between batches; roughly one frame
    pub loop_sleep: Duration,
    /// Upper bound on events forwarded per batch
    pub max_batch: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
            max_batch: 20,
        }
    }
}

/// Read terminal input on a tokio task and send it down `tx`
///
/// Stops when `cancel_token` fires or the receiver is dropped. On
/// cancellation any input still queued in the terminal is discarded so it
/// does not end up in the shell after exit.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    config: PollerConfig,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    discard_pending_input();
                    info!("Event poller stopped");
                    return;
                }
                _ = tokio::time::sleep(config.loop_sleep) => {
                    if !forward_batch(&tx, &config) {
                        debug!("Event receiver dropped, poller exiting");
                        return;
                    }
                }
            }
        }
    })
}

/// Forward whatever input is ready. Returns `false` once nobody listens.
fn forward_batch(tx: &mpsc::UnboundedSender<RawEvent>, config: &PollerConfig) -> bool {
    for _ in 0..config.max_batch {
        if !event::poll(config.poll_timeout).unwrap_or(false) {
            break;
        }
        let Some(raw) = event::read().ok().and_then(to_raw_event) else {
            continue;
        };
        if tx.send(raw).is_err() {
            return false;
        }
    }
    true
}

fn discard_pending_input() {
    while event::poll(Duration::ZERO).unwrap_or(false) {
        if event::read().is_err() {
            break;
        }
    }
}

/// Keep key presses, mouse and resize; drop releases, repeats, focus and paste
fn to_raw_event(evt: Event) -> Option<RawEvent> {
    match evt {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(RawEvent::Key(key)),
        Event::Mouse(mouse) => Some(RawEvent::Mouse(mouse)),
        Event::Resize(width, height) => Some(RawEvent::Resize(width, height)),
        _ => None,
    }
}

/// Turn a raw event into what components see; wheel motion becomes `Scroll`
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    let mouse = match raw {
        RawEvent::Key(key) => return EventKind::Key(key),
        RawEvent::Resize(width, height) => return EventKind::Resize(width, height),
        RawEvent::Mouse(mouse) => mouse,
    };

    let delta = match mouse.kind {
        MouseEventKind::ScrollUp => -1,
        MouseEventKind::ScrollDown => 1,
        _ => return EventKind::Mouse(mouse),
    };
    EventKind::Scroll {
        column: mouse.column,
        row: mouse.row,
        delta,
    }
}
