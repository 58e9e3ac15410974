
use crate::ticket::Ticket;
use serde::{Deserialize, Serialize};

/// Kind discriminator carried by the shared `anuncio` broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementKind {
    Line,
    Bingo,
}

/// Phase and history summary, pushed on connect and returned on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateReport {
    pub running: bool,
    pub remaining: usize,
    pub drawn_history: Vec<u32>,
}

/// Outbound events, adjacently tagged for the wire:
/// `{ "event": "...", "data": { ... } }`.
///
/// Event names keep the protocol's original Spanish; payload fields are
/// camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all_fields = "camelCase")]
pub enum Event {
    /// Pushed to a connection right after it is admitted.
    #[serde(rename = "estado-inicial")]
    InitialState(StateReport),
    /// Answer to a state poll.
    #[serde(rename = "estado-actual")]
    CurrentState(StateReport),
    /// Targeted answer to a start request.
    #[serde(rename = "iniciar-ack")]
    StartAck { started: bool },
    /// Targeted: the requesting player's full ticket collection.
    #[serde(rename = "cartones")]
    Tickets { tickets: Vec<Ticket> },
    #[serde(rename = "juego-iniciado")]
    GameStarted { remaining: usize },
    #[serde(rename = "numero")]
    NumberDrawn {
        number: u32,
        drawn_history: Vec<u32>,
        remaining: usize,
    },
    /// Targeted: one of the player's rows is complete.
    #[serde(rename = "linea")]
    Line { ticket_index: usize, row_index: usize },
    /// Targeted: one of the player's tickets is fully complete.
    #[serde(rename = "bingo")]
    Bingo { ticket_index: usize },
    /// Broadcast companion to `linea`/`bingo` so everyone sees who scored.
    #[serde(rename = "anuncio")]
    Announcement {
        kind: AnnouncementKind,
        client_id: u64,
        ticket_index: usize,
    },
    #[serde(rename = "juego-terminado")]
    GameEnded {
        reason: String,
        drawn_history: Vec<u32>,
        remaining: usize,
    },
}

/// Inbound requests, mirroring the outbound tagging:
/// `{ "type": "...", "data": { ... } }`.
///
/// Connect and disconnect are not messages; transports call the server's
/// lifecycle handlers directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientRequest {
    /// Ask for more tickets. Any count is accepted on the wire; the
    /// server clamps it to a sane window.
    #[serde(rename = "request-cartones")]
    RequestTickets {
        #[serde(default = "default_ticket_count")]
        count: i64,
    },
    /// Ask to start the session. Anyone may ask.
    #[serde(rename = "iniciar-juego")]
    StartGame,
    /// Poll the current phase and history.
    #[serde(rename = "estado")]
    QueryState,
}

fn default_ticket_count() -> i64 {
    1
}
