use thiserror::Error;

/// Errors surfaced by the game core.
///
/// Normal terminations (pool exhaustion, a win) are not errors; they are
/// routed through the session stop path and announced to every player.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The ticket layout asks for more distinct numbers than the range holds.
    #[error("ticket layout needs {cells} distinct numbers but the range only holds {range_size}")]
    InvalidTicketLayout { cells: usize, range_size: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The transport handed out a connection id twice.
    #[error("connection {0} is already registered")]
    AlreadyRegistered(u64),
}
