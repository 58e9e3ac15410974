
use crate::config::GameConfig;
use crate::detector::{self, WinEvent};
use crate::error::GameError;
use crate::event::{AnnouncementKind, ClientRequest, Event, StateReport};
use crate::gateway::Gateway;
use crate::registry::Registry;
use crate::session::Session;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// One bingo game shared by every connection.
///
/// All mutation (connection lifecycle, ticket grants, phase transitions
/// and the periodic tick itself) runs under a single lock, so ticks never
/// overlap and every operation sees a consistent registry and session.
/// Cloning yields another handle to the same game.
pub struct BingoServer<G> {
    shared: Arc<Shared<G>>,
}

impl<G> Clone for BingoServer<G> {
    fn clone(&self) -> Self {
        BingoServer {
            shared: Arc::clone(&self.shared),
        }
    }
}

struct Shared<G> {
    config: GameConfig,
    gateway: G,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    registry: Registry,
    session: Session,
}

impl<G: Gateway + 'static> BingoServer<G> {
    /// Validates the configuration and wires the server to its gateway.
    pub fn new(config: GameConfig, gateway: G) -> Result<Self, GameError> {
        config.validate()?;
        Ok(BingoServer {
            shared: Arc::new(Shared {
                config,
                gateway,
                state: Mutex::new(State::default()),
            }),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.shared.config
    }

    pub fn gateway(&self) -> &G {
        &self.shared.gateway
    }

    /// Admits a connection and pushes its initial state report.
    pub async fn handle_connect(&self, client_id: u64) {
        let mut state = self.shared.state.lock().await;
        if let Err(err) = state.registry.register(client_id) {
            warn!(%err, "connect rejected");
            return;
        }
        info!(client = client_id, players = state.registry.len(), "connected");
        let report = Self::report(&state);
        self.shared
            .gateway
            .send_to(client_id, Event::InitialState(report))
            .await;
    }

    /// Forgets a connection and everything it owned. Idempotent.
    pub async fn handle_disconnect(&self, client_id: u64) {
        let mut state = self.shared.state.lock().await;
        state.registry.remove(client_id);
        info!(client = client_id, players = state.registry.len(), "disconnected");
    }

    /// Routes one parsed client message.
    pub async fn handle_request(&self, client_id: u64, request: ClientRequest) {
        match request {
            ClientRequest::RequestTickets { count } => self.grant_tickets(client_id, count).await,
            ClientRequest::StartGame => {
                self.start_game(client_id).await;
            }
            ClientRequest::QueryState => self.send_state(client_id).await,
        }
    }

    /// Attempts the Idle → Running transition on behalf of `client_id`.
    ///
    /// The requester always gets an `iniciar-ack`; asking while a game is
    /// running acknowledges negatively and changes nothing.
    pub async fn start_game(&self, client_id: u64) -> bool {
        let mut state = self.shared.state.lock().await;
        let started = state.session.begin(self.shared.config.range_size);
        if started {
            let remaining = state.session.pool().remaining_count();
            info!(remaining, "game started");
            let ticker = self.spawn_ticker();
            state.session.attach_ticker(ticker);
            self.shared
                .gateway
                .send_to_all(Event::GameStarted { remaining })
                .await;
        }
        self.shared
            .gateway
            .send_to(client_id, Event::StartAck { started })
            .await;
        started
    }

    /// Ends the session and announces why.
    ///
    /// Callable from any phase; an already-idle stop still broadcasts.
    pub async fn stop_game(&self, reason: impl Into<String>) {
        let mut state = self.shared.state.lock().await;
        Self::finish(&self.shared, &mut state, reason.into()).await;
    }

    pub async fn is_running(&self) -> bool {
        self.shared.state.lock().await.session.is_running()
    }

    pub async fn player_count(&self) -> usize {
        self.shared.state.lock().await.registry.len()
    }

    async fn grant_tickets(&self, client_id: u64, requested: i64) {
        let count = self.shared.config.clamp_ticket_count(requested);
        let mut state = self.shared.state.lock().await;
        let Some(tickets) = state
            .registry
            .add_tickets(client_id, count, &self.shared.config)
        else {
            // unknown connection, nothing to grant
            return;
        };
        let tickets = tickets.to_vec();
        self.shared
            .gateway
            .send_to(client_id, Event::Tickets { tickets })
            .await;
    }

    async fn send_state(&self, client_id: u64) {
        let state = self.shared.state.lock().await;
        let report = Self::report(&state);
        self.shared
            .gateway
            .send_to(client_id, Event::CurrentState(report))
            .await;
    }

    fn report(state: &State) -> StateReport {
        StateReport {
            running: state.session.is_running(),
            remaining: state.session.pool().remaining_count(),
            drawn_history: state.session.pool().drawn().to_vec(),
        }
    }

    fn spawn_ticker(&self) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let period = self.shared.config.draw_interval;
        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(period);
            // the interval fires immediately; the first draw belongs one
            // period after the start
            ticks.tick().await;
            loop {
                ticks.tick().await;
                Self::run_tick(&shared).await;
            }
        })
    }

    /// One draw-and-evaluate cycle.
    async fn run_tick(shared: &Arc<Shared<G>>) {
        let mut state = shared.state.lock().await;
        if !state.session.is_running() {
            return;
        }

        let Some(number) = state.session.pool_mut().draw() else {
            Self::finish(shared, &mut state, "numbers exhausted".to_string()).await;
            return;
        };
        debug!(number, remaining = state.session.pool().remaining_count(), "drawn");
        shared
            .gateway
            .send_to_all(Event::NumberDrawn {
                number,
                drawn_history: state.session.pool().drawn().to_vec(),
                remaining: state.session.pool().remaining_count(),
            })
            .await;

        let snapshot = state.registry.snapshot();
        let drawn = state.session.pool().drawn_set();
        let events = detector::scan(&mut state.registry, &snapshot, &drawn);

        for event in events {
            match event {
                WinEvent::Line { client, ticket, row } => {
                    shared
                        .gateway
                        .send_to(
                            client,
                            Event::Line {
                                ticket_index: ticket,
                                row_index: row,
                            },
                        )
                        .await;
                    shared
                        .gateway
                        .send_to_all(Event::Announcement {
                            kind: AnnouncementKind::Line,
                            client_id: client,
                            ticket_index: ticket,
                        })
                        .await;
                }
                WinEvent::Bingo { client, ticket } => {
                    shared
                        .gateway
                        .send_to(client, Event::Bingo { ticket_index: ticket })
                        .await;
                    shared
                        .gateway
                        .send_to_all(Event::Announcement {
                            kind: AnnouncementKind::Bingo,
                            client_id: client,
                            ticket_index: ticket,
                        })
                        .await;
                    let name = state
                        .registry
                        .player(client)
                        .map(|player| player.name().to_string())
                        .unwrap_or_else(|| format!("player-{client}"));
                    // first bingo in scan order wins; the rest of this
                    // tick's batch is dropped
                    Self::finish(
                        shared,
                        &mut state,
                        format!("bingo by {name} (ticket {})", ticket + 1),
                    )
                    .await;
                    return;
                }
            }
        }
    }

    async fn finish(shared: &Shared<G>, state: &mut State, reason: String) {
        state.session.end();
        info!(reason = %reason, "game ended");
        shared
            .gateway
            .send_to_all(Event::GameEnded {
                reason,
                drawn_history: state.session.pool().drawn().to_vec(),
                remaining: state.session.pool().remaining_count(),
            })
            .await;
    }
}
