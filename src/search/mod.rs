//! Debounced, cancellable search.
//!
//! [`QueryOrchestrator`] is an actor that owns all search state. Keystrokes
//! arrive through a [`SearchHandle`]; once input has been quiet for the
//! debounce window the latest text is fetched. Starting a new fetch aborts
//! the previous one, and results of an aborted fetch are never published.
//!
//! State is published on a `watch` channel so the presentation layer can
//! observe it from whatever context it renders on. Finished queries are
//! also announced as [`SearchEvent`]s on a broadcast channel.

pub mod state;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::app::Result;
use crate::client::{FeedClient, FeedEndpoint};
use crate::domain::FeedResponse;

pub use state::{Phase, SearchEvent, SearchState};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

const EVENT_CAPACITY: usize = 16;

#[derive(Debug)]
enum Command {
    QueryChanged(String),
    Shutdown,
}

struct Completion {
    generation: u64,
    query: String,
    outcome: Result<FeedResponse>,
}

struct InFlight {
    generation: u64,
    handle: JoinHandle<()>,
}

/// The presentation layer's view of a running [`QueryOrchestrator`].
#[derive(Clone)]
pub struct SearchHandle {
    tx: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<SearchState>,
    events: broadcast::Sender<SearchEvent>,
}

impl SearchHandle {
    /// Feed raw search text. Only the last text in a burst reaches the network.
    pub fn on_query_changed(&self, text: impl Into<String>) {
        if self.tx.send(Command::QueryChanged(text.into())).is_err() {
            warn!("Search orchestrator has stopped, dropping query");
        }
    }

    pub fn current_items(&self) -> Arc<FeedResponse> {
        self.state.borrow().response.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.clone()
    }

    pub fn events(&self) -> broadcast::Receiver<SearchEvent> {
        self.events.subscribe()
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(Command::Shutdown);
    }
}

pub struct QueryOrchestrator {
    client: Arc<FeedClient>,
    endpoint: FeedEndpoint,
    debounce: Duration,
    rx: mpsc::UnboundedReceiver<Command>,
    done_tx: mpsc::UnboundedSender<Completion>,
    done_rx: mpsc::UnboundedReceiver<Completion>,
    state: watch::Sender<SearchState>,
    events: broadcast::Sender<SearchEvent>,
    generation: u64,
}

impl QueryOrchestrator {
    pub fn new(
        client: Arc<FeedClient>,
        endpoint: FeedEndpoint,
        debounce: Duration,
    ) -> (Self, SearchHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SearchState::default());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        let handle = SearchHandle {
            tx,
            state: state_rx,
            events: events.clone(),
        };

        let orchestrator = Self {
            client,
            endpoint,
            debounce,
            rx,
            done_tx,
            done_rx,
            state: state_tx,
            events,
            generation: 0,
        };

        (orchestrator, handle)
    }

    /// Start the orchestrator on the current tokio runtime.
    pub fn spawn(client: Arc<FeedClient>, endpoint: FeedEndpoint, debounce: Duration) -> SearchHandle {
        let (orchestrator, handle) = Self::new(client, endpoint, debounce);
        tokio::spawn(orchestrator.run());
        handle
    }

    /// Runs until [`SearchHandle::shutdown`] is called or every handle is dropped.
    pub async fn run(mut self) {
        let timer = sleep(self.debounce);
        tokio::pin!(timer);

        let mut pending: Option<String> = None;
        let mut active: Option<InFlight> = None;

        loop {
            tokio::select! {
                command = self.rx.recv() => match command {
                    Some(Command::QueryChanged(text)) => {
                        debug!("Query changed to {:?}, waiting for input to settle", text);
                        timer.as_mut().reset(Instant::now() + self.debounce);
                        pending = Some(text);
                    }
                    Some(Command::Shutdown) | None => break,
                },
                () = &mut timer, if pending.is_some() => {
                    if let Some(text) = pending.take() {
                        self.run_query(text, &mut active);
                    }
                }
                Some(done) = self.done_rx.recv() => {
                    let current = active.as_ref().map(|in_flight| in_flight.generation);
                    if current == Some(done.generation) {
                        active = None;
                        self.finish(done.query, done.outcome);
                    } else {
                        debug!("Discarding result for superseded query {:?}", done.query);
                    }
                }
            }

            let phase = match (&active, &pending) {
                (Some(_), _) => Phase::Fetching,
                (None, Some(_)) => Phase::Debouncing,
                (None, None) => Phase::Idle,
            };
            self.state.send_if_modified(|state| {
                let changed = state.phase != phase;
                state.phase = phase;
                changed
            });
        }

        if let Some(in_flight) = active.take() {
            in_flight.handle.abort();
        }
        debug!("Search orchestrator stopped");
    }

    fn run_query(&mut self, text: String, active: &mut Option<InFlight>) {
        if let Some(previous) = active.take() {
            debug!("Cancelling superseded fetch");
            previous.handle.abort();
        }

        self.generation += 1;
        let generation = self.generation;
        let url = self.endpoint.url_for(&text);

        self.state.send_modify(|state| {
            state.query = Some(text.clone());
            state.is_loading = true;
            state.phase = Phase::Fetching;
        });

        let client = self.client.clone();
        let done_tx = self.done_tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = client.fetch(&url).await;
            let _ = done_tx.send(Completion {
                generation,
                query: text,
                outcome,
            });
        });

        *active = Some(InFlight { generation, handle });
    }

    fn finish(&mut self, query: String, outcome: Result<FeedResponse>) {
        match outcome {
            Ok(response) => {
                let count = response.len();
                info!("Loaded {} items for {:?}", count, query);
                self.state.send_modify(|state| {
                    state.response = Arc::new(response);
                    state.is_loading = false;
                    state.last_error = None;
                });
                let _ = self.events.send(SearchEvent::Loaded { query, count });
            }
            Err(e) if e.is_cancelled() => {
                debug!("Query {:?} was cancelled", query);
            }
            Err(e) => {
                warn!("Query {:?} failed: {}", query, e);
                let error = e.to_string();
                self.state.send_modify(|state| {
                    state.is_loading = false;
                    state.last_error = Some(error.clone());
                });
                let _ = self.events.send(SearchEvent::Failed { query, error });
            }
        }
    }
}
