//! Input listener thread and the queue it feeds.
//!
//! Key events arrive at arbitrary times while the game advances on a fixed
//! tick. A dedicated thread owns the blocking read and forwards decoded
//! commands through a bounded channel; the game loop drains that channel
//! without ever blocking on it. The listener never touches game state.

use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use arrayvec::ArrayVec;
use crossterm::event::{self, Event};
use log::{debug, info, warn};

use crate::map::map_key_event;
use crate::types::{GameAction, INPUT_QUEUE_DEPTH};

/// A blocking producer of raw terminal events.
pub trait EventSource: Send + 'static {
    /// Block until the next event is available.
    ///
    /// `Ok(None)` means the source is exhausted and the listener should stop.
    fn next_event(&mut self) -> Result<Option<Event>>;
}

/// Reads events from the real terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> Result<Option<Event>> {
        let event = event::read().context("reading terminal event")?;
        Ok(Some(event))
    }
}

/// A fixed script of events, for tests and replays.
impl EventSource for std::vec::IntoIter<Event> {
    fn next_event(&mut self) -> Result<Option<Event>> {
        Ok(self.next())
    }
}

/// Producer half of the input queue.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: SyncSender<GameAction>,
}

impl InputSender {
    /// Enqueue a command, waiting if the queue is full.
    ///
    /// Returns `false` once the game loop has dropped its queue.
    pub fn send(&self, action: GameAction) -> bool {
        self.tx.send(action).is_ok()
    }
}

/// Consumer half of the input queue, polled once per tick.
#[derive(Debug)]
pub struct InputQueue {
    rx: Receiver<GameAction>,
    disconnected: bool,
}

impl InputQueue {
    /// Create a connected sender/queue pair.
    pub fn channel() -> (InputSender, InputQueue) {
        let (tx, rx) = mpsc::sync_channel(INPUT_QUEUE_DEPTH);
        (
            InputSender { tx },
            InputQueue {
                rx,
                disconnected: false,
            },
        )
    }

    /// Take every command that is waiting right now, oldest first.
    ///
    /// Never blocks. Stack-only; at most one queue's worth is taken.
    pub fn drain_pending(&mut self) -> ArrayVec<GameAction, INPUT_QUEUE_DEPTH> {
        let mut pending = ArrayVec::new();
        while !pending.is_full() {
            match self.rx.try_recv() {
                Ok(action) => pending.push(action),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.disconnected = true;
                    break;
                }
            }
        }
        pending
    }

    /// The one command to apply this tick.
    ///
    /// Drains the queue: a pending `Quit` always wins, otherwise the most
    /// recent command does and the rest are dropped. `None` when nothing is
    /// waiting.
    pub fn try_next(&mut self) -> Option<GameAction> {
        let pending = self.drain_pending();
        if pending.contains(&GameAction::Quit) {
            return Some(GameAction::Quit);
        }
        pending.last().copied()
    }

    /// True once the producer side is gone and the queue has been emptied.
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

/// Handle to the running listener thread.
#[derive(Debug)]
pub struct InputListener {
    handle: JoinHandle<()>,
}

impl InputListener {
    /// Start a listener thread reading from `source`.
    pub fn spawn<S: EventSource>(source: S) -> Result<(Self, InputQueue)> {
        let (sender, queue) = InputQueue::channel();
        let handle = thread::Builder::new()
            .name("snake-input".to_string())
            .spawn(move || listen(source, sender))
            .context("spawning input listener thread")?;
        Ok((Self { handle }, queue))
    }

    /// Wait for the listener to stop. Only returns once the source ends.
    pub fn join(self) -> thread::Result<()> {
        self.handle.join()
    }
}

fn listen<S: EventSource>(mut source: S, sender: InputSender) {
    info!("input listener started");

    loop {
        let event = match source.next_event() {
            Ok(Some(event)) => event,
            Ok(None) => {
                debug!("input source exhausted");
                break;
            }
            Err(err) => {
                warn!("input source failed: {:#}", err);
                break;
            }
        };

        let Event::Key(key) = event else {
            continue;
        };
        let Some(action) = map_key_event(key) else {
            continue;
        };

        debug!("input: {}", action.as_str());
        if !sender.send(action) {
            break;
        }
    }

    info!("input listener stopped");
}
